//! Text renderings of the order: the chat tally and the e-mail export.

use crate::model::Order;
use chrono::Local;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Path-segment escaping, plus the characters that would break the `mailto` query.
const MAILTO_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b':')
    .remove(b'@');

/// Who the order goes to and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub company: String,
    pub recipients: Vec<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            company: "Develer".to_string(),
            recipients: vec![
                "info@tuttobene-bar.it".to_string(),
                "sara@tuttobene-bar.it".to_string(),
            ],
        }
    }
}

/// `Ecco l'ordine:` followed by `{count} {dish} [ {users} ]` per dish.
pub fn tally_text(order: &Order) -> String {
    let mut text = String::from("Ecco l'ordine:\n");
    for line in order.summarize() {
        text.push_str(&format!(
            "{} {} [ {} ]\n",
            line.count,
            line.dish,
            line.users.join(",")
        ));
    }
    text
}

/// Subject line for the e-mail, dated with the day the order was opened.
pub fn export_subject(order: &Order, settings: &ExportSettings) -> String {
    format!(
        "Ordine {} del giorno {}",
        settings.company,
        order.timestamp.with_timezone(&Local).format("%d/%m/%Y")
    )
}

/// Subject, body and a clickable `mailto:` link carrying both.
pub fn export_text(order: &Order, settings: &ExportSettings) -> String {
    let subject = export_subject(order, settings);
    let body: String = order
        .summarize()
        .into_iter()
        .map(|line| format!("{} {}\n", line.count, line.dish))
        .collect();

    format!(
        "{subject}\n{body}\n\n<mailto:{}?subject={}&body={}|Link `mailto` clickabile>",
        settings.recipients.join(","),
        utf8_percent_encode(&subject, MAILTO_VALUE),
        utf8_percent_encode(&body, MAILTO_VALUE),
    )
}

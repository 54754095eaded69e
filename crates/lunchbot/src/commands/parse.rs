//! Recognizes bot commands in chat text.
//!
//! Keywords are case-insensitive; arguments keep the case they were typed in.

/// A chat message the bot answers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `per me <dish>`; the dish may be empty when the user typed only `per me`.
    Pick(String),
    /// `ordine`
    Tally,
    /// `email`
    Export,
    /// `menu` shows the menu, `menu <text>` replaces it.
    Menu(Option<String>),
    /// `set <key> <value>`
    Set { key: String, value: Option<String> },
    /// `get <key>`
    Get(String),
}

impl Command {
    /// Returns `None` for ordinary chatter.
    pub fn parse(text: &str) -> Option<Command> {
        let (keyword, rest) = split_word(text.trim());
        let command = match keyword.to_lowercase().as_str() {
            "per" => {
                let (me, dish) = split_word(rest);
                if !me.eq_ignore_ascii_case("me") {
                    return None;
                }
                Command::Pick(dish.to_string())
            }
            "ordine" if rest.is_empty() => Command::Tally,
            "email" if rest.is_empty() => Command::Export,
            "menu" => Command::Menu(Some(rest.to_string()).filter(|m| !m.is_empty())),
            "set" if !rest.is_empty() => {
                let (key, value) = split_word(rest);
                Command::Set {
                    key: key.to_string(),
                    value: Some(value.to_string()).filter(|v| !v.is_empty()),
                }
            }
            "get" if !rest.is_empty() => Command::Get(rest.to_string()),
            _ => return None,
        };
        Some(command)
    }
}

/// Splits off the first word; the remainder is trimmed.
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick() {
        assert_eq!(
            Command::parse("per me pollo arrosto"),
            Some(Command::Pick("pollo arrosto".into()))
        );
        assert_eq!(
            Command::parse("  Per ME   Riso  "),
            Some(Command::Pick("Riso".into()))
        );
    }

    #[test]
    fn test_pick_without_dish() {
        assert_eq!(Command::parse("per me"), Some(Command::Pick(String::new())));
    }

    #[test]
    fn test_per_without_me_is_chatter() {
        assert_eq!(Command::parse("per te niente"), None);
        assert_eq!(Command::parse("permesso"), None);
    }

    #[test]
    fn test_keywords_without_arguments() {
        assert_eq!(Command::parse("ordine"), Some(Command::Tally));
        assert_eq!(Command::parse("ORDINE"), Some(Command::Tally));
        assert_eq!(Command::parse("email"), Some(Command::Export));
        assert_eq!(Command::parse("ordine per tutti"), None);
    }

    #[test]
    fn test_menu_keeps_lines() {
        assert_eq!(Command::parse("menu"), Some(Command::Menu(None)));
        assert_eq!(
            Command::parse("menu\nPasta al pomodoro\nRiso\n"),
            Some(Command::Menu(Some("Pasta al pomodoro\nRiso".into())))
        );
    }

    #[test]
    fn test_set_takes_rest_as_value() {
        assert_eq!(
            Command::parse("set saluto buon appetito"),
            Some(Command::Set {
                key: "saluto".into(),
                value: Some("buon appetito".into()),
            })
        );
        assert_eq!(
            Command::parse("set saluto"),
            Some(Command::Set {
                key: "saluto".into(),
                value: None,
            })
        );
        assert_eq!(Command::parse("set"), None);
    }

    #[test]
    fn test_get() {
        assert_eq!(Command::parse("get menu"), Some(Command::Get("menu".into())));
        assert_eq!(Command::parse("get"), None);
    }

    #[test]
    fn test_chatter() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("ciao a tutti"), None);
    }
}

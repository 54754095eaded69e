//! # Command Handlers
//!
//! [`CommandRouter`] turns one chat message into at most one reply. It resolves dishes against
//! the stored menu, sends order changes to the Order actor, and reads or writes the menu and
//! raw keys through the persistence port.
//!
//! Replies are in Italian, as the bot's users are.

pub mod parse;
pub mod report;

pub use parse::Command;
pub use report::ExportSettings;

use crate::clients::OrderClient;
use crate::order_actor::OrderError;
use crate::resolver::resolve;
use crate::store::{Persistence, StoreError, MENU_KEY};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Dish name that clears the user's selection instead of picking one.
pub const CLEAR_SENTINEL: &str = "niente";

const PICK_HINT: &str =
    "Cosa vuoi? Scrivi 'per me <piatto>', oppure 'per me niente' per cancellare";

/// Failures that end up in the reply as `Error: ...`.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Dispatches parsed commands to the order actor and the persistence port.
#[derive(Clone)]
pub struct CommandRouter {
    orders: OrderClient,
    persistence: Persistence,
    export: ExportSettings,
}

impl CommandRouter {
    pub fn new(orders: OrderClient, persistence: Persistence, export: ExportSettings) -> Self {
        Self {
            orders,
            persistence,
            export,
        }
    }

    /// Handles one message from `user`.
    ///
    /// Returns `None` when the message is not a command. Failures are turned into a reply.
    #[instrument(skip(self, text))]
    pub async fn handle(&self, user: &str, text: &str) -> Option<String> {
        let command = Command::parse(text)?;
        debug!(?command, "Command");
        let reply = match self.execute(user, command).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Command failed");
                format!("Error: {e}")
            }
        };
        Some(reply)
    }

    async fn execute(&self, user: &str, command: Command) -> Result<String, CommandError> {
        match command {
            Command::Pick(dish) => self.pick(user, &dish).await,
            Command::Tally => {
                let order = self.orders.current_order().await?;
                Ok(report::tally_text(&order))
            }
            Command::Export => {
                let order = self.orders.current_order().await?;
                Ok(report::export_text(&order, &self.export))
            }
            Command::Menu(None) => match self.persistence.get::<String>(MENU_KEY).await {
                Ok(menu) => Ok(format!("Il menu è:\n{menu}")),
                Err(StoreError::NotFound(_)) => Ok("Non c'è nessun menu impostato!".to_string()),
                Err(e) => Err(e.into()),
            },
            Command::Menu(Some(menu)) => {
                self.persistence.set(MENU_KEY, &menu).await?;
                Ok(format!("Ok, il menu è:\n{menu}"))
            }
            Command::Set { key, value: None } => {
                debug!(%key, "set without a value");
                Ok("Uso: set <chiave> <valore>".to_string())
            }
            Command::Set {
                key,
                value: Some(value),
            } => {
                self.persistence.set(&key, &value).await?;
                Ok("Ok".to_string())
            }
            Command::Get(key) => {
                let value = self.persistence.get::<String>(&key).await?;
                Ok(format!("{key}: {value}"))
            }
        }
    }

    async fn pick(&self, user: &str, dish: &str) -> Result<String, CommandError> {
        if dish.is_empty() {
            return Ok(PICK_HINT.to_string());
        }
        if dish.eq_ignore_ascii_case(CLEAR_SENTINEL) {
            let previous = self.orders.clear_selection(user).await?;
            return Ok(format!("Ok, cancello ordine {previous}"));
        }

        let menu = match self.persistence.get::<String>(MENU_KEY).await {
            Ok(menu) => menu,
            Err(StoreError::NotFound(_) | StoreError::Decode { .. }) => {
                return Ok("Nessun menu impostato!".to_string())
            }
            Err(e) => return Err(e.into()),
        };

        let mut matches = resolve(dish, &menu);
        match matches.len() {
            0 => Ok(format!(
                "Non ho trovato nulla nel menu che corrisponda a '{dish}'"
            )),
            1 => {
                let chosen = matches.remove(0);
                let recorded = self.orders.select_dish(user, &chosen).await?;
                Ok(format!("Ok, {recorded} per {user}"))
            }
            _ => Ok(format!(
                "Ho trovato i seguenti piatti:\n{}\n----\nSii più preciso cribbio!",
                matches.join("\n")
            )),
        }
    }
}

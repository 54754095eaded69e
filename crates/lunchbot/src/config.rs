//! Process configuration: command-line flags with environment fallbacks.

use crate::commands::ExportSettings;
use crate::lifecycle::WakeWindow;
use chrono::NaiveTime;
use clap::Parser;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid time of day '{0}', expected H:MM")]
    InvalidTime(String),
}

/// Lunchbot - takes the lunch order in chat
#[derive(Parser, Debug, Clone)]
#[command(name = "lunchbot", version, about)]
pub struct Args {
    /// Redis connection URL; without it the order lives in memory only
    #[arg(long, env = "REDIS_URL")]
    pub redis_url: Option<String>,

    /// Port of the keepalive HTTP server
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Public base URL the keepalive pinger calls (default: http://localhost:<port>)
    #[arg(long, env = "HTTPURL")]
    pub http_url: Option<String>,

    /// Start of the keepalive window
    #[arg(long, env = "WAKEUP_TIME", default_value = "6:00", value_parser = parse_clock)]
    pub wakeup_time: NaiveTime,

    /// End of the keepalive window
    #[arg(long, env = "SLEEP_TIME", default_value = "21:00", value_parser = parse_clock)]
    pub sleep_time: NaiveTime,

    /// Company name in the e-mail subject
    #[arg(long, env = "ORDER_COMPANY", default_value = "Develer")]
    pub company: String,

    /// Comma-separated recipients of the e-mail export
    #[arg(
        long,
        env = "ORDER_RECIPIENTS",
        value_delimiter = ',',
        default_value = "info@tuttobene-bar.it,sara@tuttobene-bar.it"
    )]
    pub recipients: Vec<String>,

    /// Name used for console lines without a `user:` prefix
    #[arg(long, env = "CHAT_USER", default_value = "ospite")]
    pub chat_user: String,
}

impl Args {
    pub fn keepalive_url(&self) -> String {
        match &self.http_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        }
    }

    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            company: self.company.clone(),
            recipients: self.recipients.clone(),
        }
    }

    pub fn wake_window(&self) -> WakeWindow {
        WakeWindow::new(self.wakeup_time, self.sleep_time)
    }
}

/// Parses `H:MM` or `HH:MM`.
pub fn parse_clock(value: &str) -> Result<NaiveTime, ConfigError> {
    let invalid = || ConfigError::InvalidTime(value.to_string());
    let (hour, minute) = value.trim().split_once(':').ok_or_else(invalid)?;
    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

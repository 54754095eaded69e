//! Keepalive pinger.
//!
//! Hosting platforms that idle a process after a quiet period would also drop the chat
//! connection, so while people may be ordering the bot calls its own `/keepalive`
//! endpoint every [`PING_INTERVAL`]. Outside the wake window it lets itself sleep.

use chrono::{Local, NaiveTime, Timelike};
use std::time::Duration;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info, warn};

pub const PING_INTERVAL: Duration = Duration::from_secs(10 * 60);

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Daily span between wake-up and sleep time. May wrap past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeWindow {
    wake_offset: u32,
    awake_minutes: u32,
}

impl WakeWindow {
    pub fn new(wake: NaiveTime, sleep: NaiveTime) -> Self {
        let wake_offset = minute_of_day(wake) % MINUTES_PER_DAY;
        let awake_minutes =
            (minute_of_day(sleep) + MINUTES_PER_DAY - wake_offset) % MINUTES_PER_DAY;
        Self {
            wake_offset,
            awake_minutes,
        }
    }

    /// Minutes since the last wake-up at `now`.
    pub fn elapsed(&self, now: NaiveTime) -> u32 {
        (minute_of_day(now) + MINUTES_PER_DAY - self.wake_offset) % MINUTES_PER_DAY
    }

    pub fn is_awake(&self, now: NaiveTime) -> bool {
        self.elapsed(now) < self.awake_minutes
    }
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Periodically requests `{base_url}/keepalive` while inside the wake window.
pub struct Keepalive {
    http: reqwest::Client,
    url: String,
    window: WakeWindow,
}

impl Keepalive {
    pub fn new(base_url: &str, window: WakeWindow) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: format!("{}/keepalive", base_url.trim_end_matches('/')),
            window,
        }
    }

    pub async fn ping(&self) -> Result<reqwest::StatusCode, reqwest::Error> {
        let response = self.http.get(&self.url).send().await?;
        Ok(response.status())
    }

    /// Runs forever. The first ping happens one interval after start.
    pub async fn run(self) {
        info!(url = %self.url, interval_secs = PING_INTERVAL.as_secs(), "Keepalive started");
        let mut ticker = interval_at(Instant::now() + PING_INTERVAL, PING_INTERVAL);
        loop {
            ticker.tick().await;
            let now = Local::now().time();
            let elapsed = self.window.elapsed(now);
            if !self.window.is_awake(now) {
                debug!(elapsed, "Outside wake window, skipping keepalive");
                continue;
            }
            match self.ping().await {
                Ok(status) => debug!(elapsed, %status, "Keepalive ping"),
                Err(e) => warn!(url = %self.url, error = %e, "Keepalive ping failed"),
            }
        }
    }
}

//! # Lunchbot
//!
//! Starts the Order actor over Redis (or memory), the keepalive HTTP server and pinger, and
//! a console chat channel on stdin/stdout.

use actor_framework::tracing::setup_tracing;
use anyhow::Context;
use clap::Parser;
use lunchbot::channel::{spawn_stdin_reader, ConsoleChannel};
use lunchbot::config::Args;
use lunchbot::http;
use lunchbot::lifecycle::{Keepalive, LunchSystem};
use lunchbot::store::{Persistence, RedisStore};
use std::net::SocketAddr;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_tracing();

    info!("Lunchbot v{} starting", env!("CARGO_PKG_VERSION"));

    let persistence = match &args.redis_url {
        Some(url) => {
            let store = RedisStore::new(url).context("invalid Redis URL")?;
            store.ping().await.context("Redis is not reachable")?;
            Persistence::new(store)
        }
        None => {
            warn!("No Redis URL configured, the order is kept in memory only");
            Persistence::in_memory()
        }
    };

    let system = LunchSystem::new(persistence);
    let router = system.router(args.export_settings());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let server = tokio::spawn(http::serve(addr));
    let keepalive = tokio::spawn(Keepalive::new(&args.keepalive_url(), args.wake_window()).run());

    let lines = spawn_stdin_reader().context("cannot start the stdin reader")?;
    let channel = ConsoleChannel::new(lines, tokio::io::stdout(), router, args.chat_user.clone());
    let chat = tokio::spawn(async move {
        if let Err(e) = channel.run().await {
            error!(error = %e, "Chat channel failed");
        }
    });

    // A closed stdin ends the chat channel but not the process.
    let outcome = tokio::select! {
        result = server => result
            .context("HTTP server task panicked")
            .and_then(|served| served.context("HTTP server failed")),
        signal = tokio::signal::ctrl_c() => {
            info!("Interrupted");
            signal.context("cannot listen for Ctrl-C")
        }
    };

    keepalive.abort();
    chat.abort();
    let _ = chat.await;
    system.shutdown().await.map_err(anyhow::Error::msg)?;

    outcome
}

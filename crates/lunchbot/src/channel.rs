//! Line-based chat channel.
//!
//! Each input line is one message, written as `user: text`. Lines without a speaker are
//! attributed to the channel's default user. Replies go to the writer, one per command.
//!
//! Lines arrive on an `mpsc` channel rather than an async reader. [`spawn_stdin_reader`]
//! feeds it from a plain thread, so a pending read on the terminal never keeps the runtime
//! from shutting down.

use crate::commands::CommandRouter;
use std::io::BufRead;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Capacity of the line queue between the stdin thread and the channel.
const LINE_BUFFER: usize = 16;

pub struct ConsoleChannel<W> {
    lines: mpsc::Receiver<String>,
    writer: W,
    router: CommandRouter,
    default_user: String,
}

impl<W> ConsoleChannel<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(
        lines: mpsc::Receiver<String>,
        writer: W,
        router: CommandRouter,
        default_user: impl Into<String>,
    ) -> Self {
        Self {
            lines,
            writer,
            router,
            default_user: default_user.into(),
        }
    }

    /// Serves messages until every sender of the line queue is dropped.
    pub async fn run(mut self) -> std::io::Result<()> {
        info!(default_user = %self.default_user, "Chat channel open");
        let mut handled: u64 = 0;
        while let Some(line) = self.lines.recv().await {
            let Some((user, text)) = split_speaker(&line, &self.default_user) else {
                continue;
            };
            debug!(user, "Message");
            if let Some(reply) = self.router.handle(user, &text).await {
                handled += 1;
                self.writer.write_all(reply.as_bytes()).await?;
                if !reply.ends_with('\n') {
                    self.writer.write_all(b"\n").await?;
                }
                self.writer.flush().await?;
            }
        }
        info!(handled, "Chat channel closed");
        Ok(())
    }
}

/// Reads stdin on a dedicated thread and forwards each line.
///
/// The thread is detached: it ends at EOF, when the receiver is gone, or with the process.
pub fn spawn_stdin_reader() -> std::io::Result<mpsc::Receiver<String>> {
    let (sender, receiver) = mpsc::channel(LINE_BUFFER);
    std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        warn!(error = %e, "Cannot read stdin");
                        break;
                    }
                };
                if sender.blocking_send(line).is_err() {
                    break;
                }
            }
            debug!("stdin reader finished");
        })?;
    Ok(receiver)
}

/// Splits `user: text`. Blank lines yield `None`.
///
/// A literal `\n` in the text stands for a line break, so a whole menu fits on one line.
fn split_speaker<'a>(line: &'a str, default_user: &'a str) -> Option<(&'a str, String)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (user, text) = match line.split_once(':') {
        Some((user, text)) if is_user_name(user) => (user, text.trim()),
        _ => (default_user, line),
    };
    Some((user, text.replace("\\n", "\n")))
}

fn is_user_name(candidate: &str) -> bool {
    !candidate.is_empty() && !candidate.contains(char::is_whitespace)
}

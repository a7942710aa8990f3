use std::io::Write;

use anyhow::Context;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Asks the operator whether monitoring should go on.
#[async_trait]
pub trait OperatorPrompt: Send {
    /// `Ok(true)` to keep monitoring, `Ok(false)` to stop.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator's answer cannot be read.
    async fn confirm_continue(&mut self) -> anyhow::Result<bool>;
}

/// Only an answer of `1` continues.
#[must_use]
pub fn is_continue_answer(input: &str) -> bool {
    input.trim() == "1"
}

/// Reads answers from stdin and asks on stderr, leaving stdout to the
/// reports. End of input counts as "stop".
pub struct StdinPrompt {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OperatorPrompt for StdinPrompt {
    async fn confirm_continue(&mut self) -> anyhow::Result<bool> {
        eprint!("\nIf you want to continue monitoring press 1 else any key: ");
        std::io::stderr().flush().context("Failed to flush prompt")?;
        let line = self
            .lines
            .next_line()
            .await
            .context("Failed to read operator input")?;
        Ok(line.is_some_and(|answer| is_continue_answer(&answer)))
    }
}

//! Operator trait abstraction for the interactive surface

use anyhow::Result;
use async_trait::async_trait;

/// The person at the console
#[async_trait]
pub trait Operator: Send {
    /// Show one line of text
    async fn say(&mut self, text: &str) -> Result<()>;

    /// Show a prompt and read one line of input.
    ///
    /// Fails with [`super::InputClosed`] once input is exhausted.
    async fn ask(&mut self, prompt: &str) -> Result<String>;
}

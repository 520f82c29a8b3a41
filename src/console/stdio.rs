//! Operator backed by the process's stdin/stdout

use super::{InputClosed, Operator};
use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

pub struct StdConsole {
    lines: Lines<BufReader<Stdin>>,
    stdout: Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(io::stdin()).lines(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Operator for StdConsole {
    async fn say(&mut self, text: &str) -> Result<()> {
        self.stdout.write_all(text.as_bytes()).await?;
        self.stdout.write_all(b"\n").await?;
        self.stdout.flush().await?;
        Ok(())
    }

    async fn ask(&mut self, prompt: &str) -> Result<String> {
        self.stdout.write_all(prompt.as_bytes()).await?;
        self.stdout.write_all(b" >> ").await?;
        self.stdout.flush().await?;

        match self.lines.next_line().await? {
            Some(line) => Ok(line),
            None => Err(InputClosed.into()),
        }
    }
}

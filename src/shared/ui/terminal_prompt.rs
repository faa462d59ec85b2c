use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

use super::UserPrompt;

/// `UserPrompt` for the terminal front-end: alerts go to stderr,
/// confirmations read a `y`/`yes` answer from stdin.
pub struct TerminalPrompt<R = BufReader<tokio::io::Stdin>, W = tokio::io::Stderr> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl TerminalPrompt {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stderr())
    }
}

impl<R, W> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[async_trait]
impl<R, W> UserPrompt for TerminalPrompt<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn alert(&self, message: &str) {
        let mut out = self.output.lock().await;
        if let Err(e) = out.write_all(format!("{}\n", message).as_bytes()).await {
            tracing::warn!(error = %e, "Failed to write alert to terminal");
        }
        let _ = out.flush().await;
    }

    async fn confirm(&self, question: &str) -> bool {
        {
            let mut out = self.output.lock().await;
            let _ = out.write_all(format!("{} [y/N] ", question).as_bytes()).await;
            let _ = out.flush().await;
        }

        let mut answer = String::new();
        let mut input = self.input.lock().await;
        match input.read_line(&mut answer).await {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation from terminal");
                false
            }
        }
    }
}

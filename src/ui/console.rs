use crate::error::StockroomError;
use crate::ui::render::Notice;
use std::io::IsTerminal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

/// Line-oriented terminal: prompts on the writer, answers from the reader.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    mask_secrets: bool,
}

pub type StdConsole = Console<BufReader<Stdin>, Stdout>;

/// Stdin/stdout console. Secrets are read without echo when stdin is a terminal.
pub fn stdio() -> StdConsole {
    Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .with_masked_secrets(std::io::stdin().is_terminal())
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            mask_secrets: false,
        }
    }

    pub fn with_masked_secrets(mut self, mask: bool) -> Self {
        self.mask_secrets = mask;
        self
    }

    pub fn masks_secrets(&self) -> bool {
        self.mask_secrets
    }

    /// Print `label: ` and read one line. `None` means the input was closed.
    pub async fn prompt(&mut self, label: &str) -> Result<Option<String>, StockroomError> {
        self.writer.write_all(format!("{label}: ").as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Like `prompt`, but without echo on a real terminal. Scripted consoles
    /// read the answer as a plain line.
    pub async fn prompt_secret(&mut self, label: &str) -> Result<Option<String>, StockroomError> {
        if !self.mask_secrets {
            return self.prompt(label).await;
        }
        self.writer.flush().await?;
        let prompt = format!("{label}: ");
        let secret = tokio::task::spawn_blocking(move || rpassword::prompt_password(prompt))
            .await
            .map_err(std::io::Error::other)??;
        Ok(Some(secret))
    }

    pub async fn write_block(&mut self, text: &str) -> Result<(), StockroomError> {
        self.writer.write_all(text.as_bytes()).await?;
        if !text.ends_with('\n') {
            self.writer.write_all(b"\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    pub async fn notice(&mut self, notice: &Notice) -> Result<(), StockroomError> {
        self.write_block(&notice.to_string()).await
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

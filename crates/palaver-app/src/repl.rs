//! Read-submit-render loop over a line-based input.

use std::io::Write;

use palaver_ai::{CompletionClient, Conversation};
use palaver_common::PalaverError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::terminal::TerminalPresenter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(String),
    Clear,
    Exit,
}

/// Splits raw input into commands. A line ending in `\` continues onto the
/// next line, so multi-line messages can be entered.
pub struct InputReader<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> InputReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
        }
    }

    /// `None` at end of input.
    pub async fn next_command(&mut self) -> std::io::Result<Option<Command>> {
        let mut entry = String::new();
        loop {
            let Some(line) = self.lines.next_line().await? else {
                if entry.is_empty() {
                    return Ok(None);
                }
                break;
            };
            match line.strip_suffix('\\') {
                Some(head) => {
                    entry.push_str(head);
                    entry.push('\n');
                }
                None => {
                    entry.push_str(&line);
                    break;
                }
            }
        }

        Ok(Some(match entry.trim() {
            "/clear" => Command::Clear,
            "/exit" | "/quit" => Command::Exit,
            _ => Command::Send(entry),
        }))
    }
}

/// Drive the conversation until `/exit` or end of input.
pub async fn run<R, C, W>(
    conversation: &mut Conversation<C>,
    input: R,
    presenter: &mut TerminalPresenter<W>,
) -> Result<(), PalaverError>
where
    R: AsyncBufRead + Unpin,
    C: CompletionClient,
    W: Write,
{
    let mut reader = InputReader::new(input);

    loop {
        presenter.prompt();
        let command = match reader.next_command().await? {
            Some(command) => command,
            None => break,
        };

        match command {
            Command::Exit => break,
            Command::Clear => {
                conversation.reset();
                presenter.notice("History cleared.");
            }
            Command::Send(text) => {
                conversation
                    .submit(&text, presenter)
                    .await
                    .map_err(|e| PalaverError::Ai(e.to_string()))?;
            }
        }
    }

    tracing::debug!(turns = conversation.session().len(), "Input closed");
    Ok(())
}

//! Line-oriented terminal rendering of the conversation.

use std::io::Write;

use palaver_ai::Presenter;

const PENDING_TEXT: &str = "AI is typing...";
/// Carriage return + ANSI "erase entire line".
const CLEAR_LINE: &str = "\r\x1b[2K";

pub struct TerminalPresenter<W: Write> {
    out: W,
    /// Echo the user's own text. Off for an interactive tty, which already
    /// shows what was typed.
    echo_user: bool,
    pending: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, echo_user: bool) -> Self {
        Self {
            out,
            echo_user,
            pending: false,
        }
    }

    pub fn prompt(&mut self) {
        self.emit("> ");
    }

    /// Out-of-band status line, e.g. after `/clear`.
    pub fn notice(&mut self, text: &str) {
        self.emit(&format!("-- {text}\n"));
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
        {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn add_message(&mut self, text: &str, is_user: bool) {
        if is_user && !self.echo_user {
            return;
        }
        let label = if is_user { "You" } else { "AI" };
        self.emit(&format!("{label}: {text}\n"));
    }

    fn show_pending(&mut self) {
        self.pending = true;
        self.emit(PENDING_TEXT);
    }

    fn hide_pending(&mut self) {
        if std::mem::take(&mut self.pending) {
            self.emit(CLEAR_LINE);
        }
    }
}

//! # Terminal Input Implementations
//!
//! Production implementations of [`LineSource`]. All crossterm dependencies
//! are isolated to this module.

use super::{InputEvent, LineSource};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{execute, style::Print, terminal};
use std::io::{self, BufRead, Write};

/// Restores cooked mode when dropped, even on early return
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {}", e);
        }
    }
}

/// Result of feeding one key into the line editor
#[derive(Debug, PartialEq)]
enum KeyOutcome {
    Continue,
    Echo(char),
    Erase,
    Done(InputEvent),
}

/// Line editor state for raw-mode input
#[derive(Debug, Default)]
struct LineEditor {
    buffer: String,
}

impl LineEditor {
    fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind != KeyEventKind::Press {
            return KeyOutcome::Continue;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => KeyOutcome::Done(InputEvent::Interrupted),
            KeyCode::Char('d') if ctrl && self.buffer.is_empty() => {
                KeyOutcome::Done(InputEvent::EndOfInput)
            }
            KeyCode::Char(_) if ctrl => KeyOutcome::Continue,
            KeyCode::Char(ch) => {
                self.buffer.push(ch);
                KeyOutcome::Echo(ch)
            }
            KeyCode::Backspace => match self.buffer.pop() {
                Some(_) => KeyOutcome::Erase,
                None => KeyOutcome::Continue,
            },
            KeyCode::Enter => KeyOutcome::Done(InputEvent::Line(std::mem::take(&mut self.buffer))),
            _ => KeyOutcome::Continue,
        }
    }
}

/// Terminal-based line source using crossterm
///
/// Reads key events in raw mode so Ctrl+C arrives as an event instead of a
/// signal. Raw mode is only active while a line is being read.
pub struct TerminalLineSource {
    writer: io::Stdout,
}

impl TerminalLineSource {
    /// Create a new terminal line source echoing to stdout
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl Default for TerminalLineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TerminalLineSource {
    fn read_line(&mut self) -> Result<InputEvent> {
        let _raw = RawModeGuard::enable()?;
        let mut editor = LineEditor::default();

        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            match editor.handle_key(key) {
                KeyOutcome::Continue => {}
                KeyOutcome::Echo(ch) => execute!(self.writer, Print(ch))?,
                KeyOutcome::Erase => execute!(self.writer, Print("\x08 \x08"))?,
                KeyOutcome::Done(input) => {
                    execute!(self.writer, Print("\r\n"))?;
                    self.writer.flush()?;
                    return Ok(input);
                }
            }
        }
    }
}

/// Buffered reader for piped or redirected input
pub struct StdinLineSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> StdinLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for StdinLineSource<R> {
    fn read_line(&mut self) -> Result<InputEvent> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(InputEvent::EndOfInput);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(InputEvent::Line(trimmed.to_string()))
    }
}

//! # Input Abstraction Layer
//!
//! Provides a trait abstraction for reading user commands so the controller
//! can be driven by a real terminal, piped stdin or a scripted test source.
//!
//! ## Architecture
//!
//! ```text
//! Production:  ReplController ──▶ TerminalLineSource ──▶ crossterm::event::read()
//!                             ──▶ StdinLineSource    ──▶ BufRead::read_line()
//!
//! Testing:     ReplController ──▶ MockLineSource     ──▶ VecDeque<InputEvent>
//! ```
//!
//! Ctrl+C outside the prompt is SIGINT and is handled by [`interrupt`].

use anyhow::Result;

pub mod interrupt;
pub mod mock;
pub mod terminal;

pub use interrupt::install_interrupt_handler;
pub use mock::MockLineSource;
pub use terminal::{StdinLineSource, TerminalLineSource};

/// What a single read produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A submitted line, without its terminator
    Line(String),
    /// The user pressed Ctrl+C
    Interrupted,
    /// Input is closed (Ctrl+D or end of a pipe)
    EndOfInput,
}

/// Line-oriented input source
pub trait LineSource {
    /// Block until the user submits a line or input ends
    fn read_line(&mut self) -> Result<InputEvent>;
}

impl<L: LineSource + ?Sized> LineSource for Box<L> {
    fn read_line(&mut self) -> Result<InputEvent> {
        (**self).read_line()
    }
}

/// Pick the raw-mode reader for terminals and a buffered reader otherwise
pub fn stdin_line_source() -> Box<dyn LineSource> {
    if atty::is(atty::Stream::Stdin) {
        tracing::debug!("stdin is a terminal, reading keys in raw mode");
        Box::new(TerminalLineSource::new())
    } else {
        tracing::debug!("stdin is not a terminal, reading buffered lines");
        Box::new(StdinLineSource::new(std::io::stdin().lock()))
    }
}

//! # REPL Module
//!
//! The interactive side of countryline:
//!
//! - **models**: code catalog, country details, bounded search history
//! - **views**: console screens, color strategy, history export
//! - **io**: line sources (raw terminal, piped stdin, scripted mock)
//! - **command**: mapping input lines onto the command set
//! - **controller**: the session state machine tying it together

pub mod command;
pub mod controller;
pub mod io;
pub mod models;
pub mod views;

// Re-export main types for convenience
pub use command::Command;
pub use controller::{ReplController, SessionExit, MAX_CONSECUTIVE_FAILURES};
pub use io::{install_interrupt_handler, stdin_line_source, InputEvent, LineSource, MockLineSource};
pub use models::{CountryCatalog, CountryCode, CountryInfo, HistoryEntry, HistoryStore};
pub use views::{styler_for, ConsoleView, Styler};

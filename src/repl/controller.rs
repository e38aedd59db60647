//! # REPL Controller
//!
//! Drives the session as a small state machine:
//!
//! ```text
//! Startup ──▶ AwaitingInput ──▶ Dispatching ──┐
//!    │              ▲                          │
//!    │              └──────────────────────────┘
//!    └────────────────────────────▶ Terminated
//! ```
//!
//! Startup fetches the code catalog; failing that is the only fatal error.
//! Every later failure is reported on screen and the prompt comes back.

use crate::repl::command::Command;
use crate::repl::io::{InputEvent, LineSource};
use crate::repl::models::{CountryCatalog, HistoryStore};
use crate::repl::views::{export_history, ConsoleView};
use crate::soap::CountryService;
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Consecutive unexpected failures tolerated before the session gives up
pub const MAX_CONSECUTIVE_FAILURES: usize = 5;

/// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    /// `salir` or end of input
    Normal,
    /// Ctrl+C at the prompt
    Interrupted,
    /// The code catalog could not be fetched
    StartupFailed,
}

impl SessionExit {
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionExit::Normal | SessionExit::Interrupted => 0,
            SessionExit::StartupFailed => 1,
        }
    }
}

#[derive(Debug)]
enum LoopState {
    Startup,
    AwaitingInput,
    Dispatching(String),
    Terminated(SessionExit),
}

/// Whether the loop keeps going after a command
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

pub struct ReplController<S: CountryService, L: LineSource, W: Write> {
    service: S,
    input: L,
    view: ConsoleView<W>,
    catalog: CountryCatalog,
    history: HistoryStore,
    export_path: PathBuf,
    consecutive_failures: usize,
}

impl<S: CountryService, L: LineSource, W: Write> ReplController<S, L, W> {
    pub fn new(service: S, input: L, view: ConsoleView<W>, export_path: impl Into<PathBuf>) -> Self {
        Self {
            service,
            input,
            view,
            catalog: CountryCatalog::default(),
            history: HistoryStore::new(),
            export_path: export_path.into(),
            consecutive_failures: 0,
        }
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn input(&self) -> &L {
        &self.input
    }

    pub fn view(&self) -> &ConsoleView<W> {
        &self.view
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// Run the session until it terminates
    pub fn run(&mut self) -> SessionExit {
        let mut state = LoopState::Startup;
        loop {
            tracing::trace!("REPL state: {:?}", state);
            state = match state {
                LoopState::Startup => self.startup(),
                LoopState::AwaitingInput => self.await_input(),
                LoopState::Dispatching(line) => self.dispatch(&line),
                LoopState::Terminated(exit) => {
                    tracing::debug!("Session terminated: {:?}", exit);
                    return exit;
                }
            };
        }
    }

    fn startup(&mut self) -> LoopState {
        match self.try_startup() {
            Ok(true) => LoopState::AwaitingInput,
            Ok(false) => LoopState::Terminated(SessionExit::StartupFailed),
            Err(e) => {
                tracing::error!("Startup failed: {:#}", e);
                LoopState::Terminated(SessionExit::StartupFailed)
            }
        }
    }

    fn try_startup(&mut self) -> Result<bool> {
        self.view.banner()?;

        let codes = match self.service.country_codes() {
            Ok(codes) => codes,
            Err(e) => {
                tracing::warn!("Could not fetch country codes: {}", e);
                Vec::new()
            }
        };
        if codes.is_empty() {
            self.view.startup_failed()?;
            return Ok(false);
        }

        self.catalog = CountryCatalog::new(codes);
        tracing::info!("Loaded {} country codes", self.catalog.len());
        self.view.connected()?;
        self.view.country_list(&self.catalog)?;
        Ok(true)
    }

    fn await_input(&mut self) -> LoopState {
        let read = self.view.prompt().and_then(|_| self.input.read_line());
        match read {
            Ok(InputEvent::Line(line)) => LoopState::Dispatching(line),
            Ok(InputEvent::Interrupted) => {
                self.say_goodbye(true);
                LoopState::Terminated(SessionExit::Interrupted)
            }
            Ok(InputEvent::EndOfInput) => {
                self.say_goodbye(false);
                LoopState::Terminated(SessionExit::Normal)
            }
            Err(e) => self.recover(e),
        }
    }

    fn dispatch(&mut self, line: &str) -> LoopState {
        let command = Command::parse(line);
        tracing::debug!("Dispatching {} command", command.name());
        match self.execute(command) {
            Ok(Flow::Continue) => {
                self.consecutive_failures = 0;
                LoopState::AwaitingInput
            }
            Ok(Flow::Exit) => LoopState::Terminated(SessionExit::Normal),
            Err(e) => self.recover(e),
        }
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Exit => {
                self.view.farewell()?;
                return Ok(Flow::Exit);
            }
            Command::Help => self.view.help()?,
            Command::List => self.view.country_list(&self.catalog)?,
            Command::History => self.view.history(self.history.entries())?,
            Command::Export => self.export()?,
            Command::Empty => self.view.empty_input()?,
            Command::Lookup(raw) => self.lookup(&raw)?,
        }
        Ok(Flow::Continue)
    }

    fn lookup(&mut self, raw: &str) -> Result<()> {
        let Some(code) = self.catalog.find(raw).cloned() else {
            tracing::debug!("Rejected unknown code {:?}", raw);
            return self.view.unknown_code(raw);
        };

        self.view.searching(&code)?;
        match self.service.country_info(&code) {
            Ok(info) => {
                self.view.country_details(&code, &info)?;
                self.history.record(code, info);
            }
            Err(e) => {
                tracing::warn!("Lookup for {} failed: {}", code, e);
                self.view.lookup_failed(&code, &e.to_string())?;
            }
        }
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        match export_history(self.history.entries(), &self.export_path) {
            Ok(count) => self.view.exported(&self.export_path, count),
            Err(e) => {
                tracing::warn!("Export failed: {:#}", e);
                self.view.export_failed(&self.export_path, &format!("{:#}", e))
            }
        }
    }

    fn say_goodbye(&mut self, interrupted: bool) {
        let result = if interrupted {
            self.view.interrupted()
        } else {
            self.view.farewell()
        };
        if let Err(e) = result {
            tracing::warn!("Could not print farewell: {}", e);
        }
    }

    /// Last-resort guard: log, tell the user, keep the prompt alive
    fn recover(&mut self, error: anyhow::Error) -> LoopState {
        self.consecutive_failures += 1;
        tracing::error!(
            "Unexpected error ({} in a row): {:#}",
            self.consecutive_failures,
            error
        );
        if let Err(e) = self.view.unexpected_error(&format!("{:#}", error)) {
            tracing::error!("Could not report error: {}", e);
        }
        if self.consecutive_failures >= MAX_CONSECUTIVE_FAILURES {
            tracing::error!("Too many consecutive failures, ending session");
            return LoopState::Terminated(SessionExit::Normal);
        }
        LoopState::AwaitingInput
    }
}

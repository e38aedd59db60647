//! # REPL Commands
//!
//! Maps a submitted line onto the fixed command set. Anything that is not a
//! command word is treated as a candidate country code.

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `salir`, `exit`, `quit`
    Exit,
    /// `ayuda`, `help`
    Help,
    /// `lista`, `list`
    List,
    /// `historial`, `history`
    History,
    /// `exportar`, `export`
    Export,
    /// Blank line
    Empty,
    /// Anything else, trimmed but with its original case
    Lookup(String),
}

impl Command {
    /// Parse a raw input line (case-insensitive command words)
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Command::Empty,
            "salir" | "exit" | "quit" => Command::Exit,
            "ayuda" | "help" => Command::Help,
            "lista" | "list" => Command::List,
            "historial" | "history" => Command::History,
            "exportar" | "export" => Command::Export,
            _ => Command::Lookup(trimmed.to_string()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Exit => "Exit",
            Command::Help => "Help",
            Command::List => "List",
            Command::History => "History",
            Command::Export => "Export",
            Command::Empty => "Empty",
            Command::Lookup(_) => "Lookup",
        }
    }
}

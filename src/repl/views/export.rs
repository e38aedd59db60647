//! # History Export
//!
//! Writes the session history to a UTF-8 text file, one block per entry.

use super::console::detail_fields;
use crate::repl::models::{HistoryEntry, TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;

const RULE: &str = "----------------------------------------";

/// Render the export document for `entries`
pub fn format_history<'a>(entries: impl IntoIterator<Item = &'a HistoryEntry>) -> String {
    let mut out = String::new();
    out.push_str("Historial de búsquedas de países\n");
    out.push_str(&format!(
        "Generado: {}\n",
        Local::now().format(TIMESTAMP_FORMAT)
    ));
    out.push_str(RULE);
    out.push('\n');

    for entry in entries {
        out.push_str(&format!("Código: {}\n", entry.code));
        out.push_str(&format!("Fecha: {}\n", entry.timestamp_display()));
        for field in detail_fields(&entry.info) {
            out.push_str(&format!("{}: {}\n", field.label, field.value));
        }
        out.push_str(RULE);
        out.push('\n');
    }
    out
}

/// Overwrite `path` with the history; returns the number of entries written
pub fn export_history<'a, I>(entries: I, path: &Path) -> Result<usize>
where
    I: IntoIterator<Item = &'a HistoryEntry>,
{
    let entries: Vec<&HistoryEntry> = entries.into_iter().collect();
    let document = format_history(entries.iter().copied());
    fs::write(path, document)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!("Exported {} history entries to {}", entries.len(), path.display());
    Ok(entries.len())
}

//! # Views Module
//!
//! Contains all view-related components: the console screens, the color
//! strategy and the history export file.

pub mod console;
pub mod export;
pub mod styler;

// Re-export main types for convenience
pub use console::{country_rows, detail_fields, ConsoleView, DetailField};
pub use export::{export_history, format_history};
pub use styler::{styler_for, ColoredStyler, PlainStyler, Styler};

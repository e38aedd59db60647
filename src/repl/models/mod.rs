//! # Models
//!
//! Session data: the fetched code catalog, country details and the history.

pub mod country;
pub mod history;

pub use country::{CountryCatalog, CountryCode, CountryInfo, NOT_AVAILABLE};
pub use history::{HistoryEntry, HistoryStore, HISTORY_CAPACITY, TIMESTAMP_FORMAT};

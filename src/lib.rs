//! # Countryline - Terminal Client for the CountryInfo SOAP Service
//!
//! An interactive prompt that fetches the ISO country codes published by the
//! public CountryInfo SOAP service, shows details for a chosen code and keeps
//! a short session history that can be exported to a text file.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   lines    ┌──────────────┐   calls    ┌─────────────┐
//! │  LineSource │───────────▶│  Controller  │───────────▶│ SoapClient  │
//! │             │            │              │            │             │
//! │ - Terminal  │            │ - Commands   │            │ - Envelope  │
//! │ - Stdin     │            │ - History    │            │ - Transport │
//! └─────────────┘            └──────────────┘            │ - Parser    │
//!                                   │                    └─────────────┘
//!                                   ▼ renders
//!                            ┌──────────────┐
//!                            │ ConsoleView  │
//!                            │ - Styler     │
//!                            │ - Export     │
//!                            └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod error;
pub mod repl;
pub mod soap;

// Re-export main types for easy access
pub use error::SoapError;
pub use repl::*;
pub use soap::{CountryService, HttpTransport, RetryPolicy, SoapClient, Transport};

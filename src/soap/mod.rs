//! # SOAP Layer
//!
//! Everything needed to talk to the CountryInfo service:
//!
//! - **envelope**: request documents and headers
//! - **transport**: blocking HTTP with retry and backoff
//! - **parser**: response documents into domain models
//! - **client**: the [`CountryService`] the REPL depends on

pub mod client;
pub mod envelope;
pub mod parser;
pub mod transport;

pub use client::{CountryService, SoapClient};
pub use envelope::{build_envelope, SoapMethod, SERVICE_NAMESPACE};
pub use parser::{parse_country_list, try_parse_country_info, try_parse_country_list};
pub use transport::{HttpTransport, RetryPolicy, Transport, RETRYABLE_STATUSES};

//! Configuration constants and utilities for countryline
//!
//! Every setting is resolved in the same order: command-line flag first,
//! then environment variable, then the built-in default.

use std::path::PathBuf;
use std::time::Duration;

use crate::cmd_args::CommandLineArgs;

/// Public CountryInfo SOAP endpoint
pub const DEFAULT_SERVICE_URL: &str =
    "http://webservices.oorsprong.org/websamples.countryinfo/CountryInfoService.wso";

/// Default file written by the `exportar` command
pub const DEFAULT_EXPORT_PATH: &str = "resultados_paises.txt";

/// Timeout applied to each HTTP attempt
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable name for overriding the service endpoint
pub const SERVICE_URL_ENV_VAR: &str = "COUNTRYLINE_SERVICE_URL";

/// Environment variable name for overriding the export file path
pub const EXPORT_PATH_ENV_VAR: &str = "COUNTRYLINE_EXPORT_PATH";

/// Environment variable holding a tracing filter directive (e.g. `debug`)
pub const LOG_LEVEL_ENV_VAR: &str = "COUNTRYLINE_LOG_LEVEL";

fn env_string(name: &str) -> Option<String> {
    std::env::var_os(name)
        .and_then(|val| val.into_string().ok())
        .filter(|val| !val.trim().is_empty())
}

/// Get the service URL, checking environment variable first, then falling back to default
pub fn get_service_url() -> String {
    env_string(SERVICE_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string())
}

/// Get the export path, checking environment variable first, then falling back to default
pub fn get_export_path() -> PathBuf {
    env_string(EXPORT_PATH_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH))
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub service_url: String,
    pub export_path: PathBuf,
    pub timeout: Duration,
    pub color: bool,
    pub verbose: bool,
}

impl Settings {
    /// Merge command-line arguments over environment and defaults.
    ///
    /// Color output additionally requires stdout to be a terminal.
    pub fn resolve(args: &CommandLineArgs) -> Self {
        let service_url = args
            .url()
            .map(str::to_string)
            .unwrap_or_else(get_service_url);
        let export_path = args.export_file().cloned().unwrap_or_else(get_export_path);
        let color = !args.no_color() && atty::is(atty::Stream::Stdout);

        Self {
            service_url,
            export_path,
            timeout: Duration::from_secs(args.timeout()),
            color,
            verbose: args.verbose(),
        }
    }
}

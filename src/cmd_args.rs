use std::ffi::OsString;
use std::path::PathBuf;

pub use clap::Parser;

use crate::config::DEFAULT_TIMEOUT_SECS;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Service endpoint
    /// Optional. Overrides COUNTRYLINE_SERVICE_URL and the public endpoint.
    #[clap(short = 'u', long, help = "CountryInfo service URL")]
    url: Option<String>,

    /// Export file
    /// Optional. Where `exportar` writes the session history.
    #[clap(short = 'o', long, help = "history export file")]
    export_file: Option<PathBuf>,

    /// Request timeout in seconds, applied to every attempt
    #[clap(
        short = 't',
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        help = "timeout per attempt in seconds"
    )]
    timeout: u64,

    /// Disable ANSI colors even when stdout is a terminal
    #[clap(long, help = "Disable colored output")]
    no_color: bool,

    /// Verbose mode
    /// Optional. Print debug logs to stderr.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    url: Option<String>,
    export_file: Option<PathBuf>,
    timeout: u64,
    no_color: bool,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            url: args.url,
            export_file: args.export_file,
            timeout: args.timeout,
            no_color: args.no_color,
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn export_file(&self) -> Option<&PathBuf> {
        self.export_file.as_ref()
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn no_color(&self) -> bool {
        self.no_color
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

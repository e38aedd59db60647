//! # Countryline Main Entry Point
//!
//! Interactive client for the CountryInfo SOAP service.

use countryline::cmd_args::CommandLineArgs;
use countryline::config::{Settings, LOG_LEVEL_ENV_VAR};
use countryline::{
    install_interrupt_handler, stdin_line_source, styler_for, ConsoleView, HttpTransport,
    ReplController, RetryPolicy, SessionExit, SoapClient,
};
use std::process::ExitCode;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never mix with the prompt
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}

/// Ctrl+C outside the prompt ends the session like Ctrl+C at the prompt
fn on_interrupt(color: bool) {
    if let Err(e) = crossterm::terminal::disable_raw_mode() {
        tracing::warn!("Could not restore terminal mode: {}", e);
    }
    let mut view = ConsoleView::new(std::io::stdout(), styler_for(color));
    if let Err(e) = view.interrupted() {
        tracing::warn!("Could not print farewell: {}", e);
    }
    std::process::exit(i32::from(SessionExit::Interrupted.exit_code()));
}

fn main() -> ExitCode {
    let args = CommandLineArgs::parse();
    init_tracing(args.verbose());

    let settings = Settings::resolve(&args);
    tracing::debug!("Resolved settings: {:?}", settings);

    let color = settings.color;
    if let Err(e) = install_interrupt_handler(move || on_interrupt(color)) {
        tracing::warn!("Ctrl+C will use the default handler: {:#}", e);
    }

    let transport = match HttpTransport::new(settings.timeout, RetryPolicy::default()) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::from(1);
        }
    };
    let client = SoapClient::new(transport, settings.service_url.clone());
    let view = ConsoleView::new(std::io::stdout(), styler_for(settings.color));

    let mut controller =
        ReplController::new(client, stdin_line_source(), view, settings.export_path);
    let exit = controller.run();

    ExitCode::from(exit.exit_code())
}

//! itdesk CLI entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use itdesk::cli::{resolve_data_dir, AppContext, Cli, CommandDispatcher};
use itdesk::config::{self, Settings};
use itdesk::store::FileStore;
use itdesk::ui::{create_ui, OutputMode};
use itdesk::ItdeskError;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so `--json` output stays machine-readable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("itdesk=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("itdesk=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn is_ci() -> bool {
    std::env::var_os("CI").is_some()
}

fn load_config(cli: &Cli) -> itdesk::Result<Settings> {
    let settings = match &cli.config {
        Some(path) => config::load_settings_file(path)?,
        None => config::load_settings(&std::env::current_dir()?)?,
    };
    config::validate(&settings)?;
    Ok(settings)
}

fn exit_code(err: &ItdeskError) -> ExitCode {
    if err.is_user_error() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("itdesk starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let settings = load_config(&cli);

    // Flags win over the configured output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        settings
            .as_ref()
            .ok()
            .and_then(|s| s.output)
            .map(OutputMode::from)
            .unwrap_or_default()
    };

    let is_interactive = std::io::stdin().is_terminal() && !is_ci();
    let mut ui = create_ui(is_interactive, output_mode);

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return exit_code(&e);
        }
    };

    let data_dir = resolve_data_dir(cli.data_dir.as_deref(), &settings);
    tracing::debug!("Using data directory {}", data_dir.display());

    let ctx = AppContext::new(settings, Box::new(FileStore::new(data_dir)));
    let dispatcher = CommandDispatcher::new(ctx);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            exit_code(&e)
        }
    }
}

//! envswitch CLI entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use envswitch::cli::{Cli, CommandDispatcher, ProvidersContext};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("envswitch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envswitch=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("envswitch starting with args: {:?}", cli);

    let context =
        ProvidersContext::new(cli.providers.clone()).with_environ_trump(cli.environ_trump);
    let dispatcher = CommandDispatcher::new(context);

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match dispatcher.dispatch(&cli.command, &mut out, &mut err) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            ExitCode::from(2)
        }
    }
}

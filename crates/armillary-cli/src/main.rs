//! Command-line entry point of the Armillary artifact generator.

use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};

use armillary::ArmillaryError;
use armillary_cli::{Args, error_adapter::to_reportables};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args);
    debug!(args:?; "Parsed arguments");

    match armillary_cli::run(&args) {
        Ok(()) => {
            info!("All artifacts written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Installs `env_logger`, filtered by `--log-level` or `warn` when the level
/// is not recognized.
fn init_logging(args: &Args) {
    let filter = args.log_filter();

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter.unwrap_or(LevelFilter::Warn))
        .init();

    if filter.is_none() {
        warn!(log_level = args.log_level; "Unknown log level, falling back to warn");
    }
}

/// Logs every diagnostic carried by `err` as its own report.
fn report(err: &ArmillaryError) {
    let handler = miette::GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut rendered = String::new();
        match handler.render_report(&mut rendered, &reportable) {
            Ok(()) => error!("{rendered}"),
            Err(_) => error!("{reportable}"),
        }
    }
}

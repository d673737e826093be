//! confmeter: rank network-device configuration files by code-line
//! complexity.
//!
//! The binary is a thin shell around `confmeter_core`:
//! 1. Parse CLI arguments.
//! 2. Load a TOML config file (explicit `--config` path, or discovery in the
//!    working directory) and merge it with the CLI (CLI wins).
//! 3. Run the complexity rule: count, compare, print, persist CSV.
//!
//! A missing configuration directory or an empty file set is reported as a
//! notice, not a failure: there is nothing to measure, but nothing broke.

use clap::Parser;
use color_eyre::eyre;

use confmeter_core::complexity_rule::ComplexityRule;
use confmeter_core::config::{load_config, merge_args, ConfmeterConfig};
use confmeter_core::Cli;

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "confmeter=debug,confmeter_core=debug"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file_config = match load_config(cli.config.as_deref())? {
        Some((path, config)) => {
            tracing::debug!(path = %path.display(), "Using configuration file");
            config
        }
        None => ConfmeterConfig::default(),
    };
    let settings = merge_args(&cli, &file_config);

    match ComplexityRule::new().run(&settings) {
        Ok(()) => Ok(()),
        Err(e) if e.is_empty_input() => {
            // Nothing to measure is a notice, not a crash.
            eprintln!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

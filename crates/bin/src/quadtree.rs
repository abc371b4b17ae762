//! Quadtree - run a command file against a spatial index.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{ArgAction, arg, command, value_parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let matches = command!()
        .next_line_help(true)
        .arg(
            arg!(<COMMAND_FILE> "Path to the command file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-c --config <FILE> "Configuration file (defaults to ./quadtree.toml if present)")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--loglevel <LEVEL>)
                .required(false)
                .default_value("warn")
                .value_parser(["trace", "debug", "info", "warn", "error", "off"])
                .action(ArgAction::Set)
                .help("Log level used when RUST_LOG is not set"),
        )
        .get_matches();

    // Initialize logging; stdout carries command results.
    let loglevel = matches
        .get_one::<String>("loglevel")
        .map(String::as_str)
        .unwrap_or("warn");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(loglevel)),
        )
        .with_writer(io::stderr)
        .init();

    info!("Quadtree v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = matches.get_one::<PathBuf>("config");
    let config = processor::Config::load(config_path.map(PathBuf::as_path))?;
    info!("  Universe: {}", config.index.bounds());
    info!("  Root: {:?}", config.index.root);

    let path = matches
        .get_one::<PathBuf>("COMMAND_FILE")
        .ok_or_else(|| anyhow::anyhow!("missing command file"))?;

    let stdout = io::stdout();
    let mut processor =
        processor::CommandProcessor::with_config(&config, BufWriter::new(stdout.lock()));
    let summary = processor.run_file(path)?;

    info!(
        "Processed {} lines ({} commands, {} ignored), {} rectangles stored",
        summary.lines,
        summary.executed,
        summary.ignored,
        processor.tree().len()
    );

    Ok(())
}

//! attrgen Code Generator
//!
//! Generates attribute schemas and holder types for every bundled
//! generation unit.

use std::path::Path;

use attrgen_gen::errors::GeneratorError;
use attrgen_gen::output::generate_and_write;
use clap::Parser;
use colored::Colorize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// attrgen code generator - turns type descriptors into schemas and holders
#[derive(Parser, Debug)]
#[command(name = "attrgen-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory for generated code
    #[arg(short, long, default_value = "attrgen/schema/src")]
    output: String,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Print the descriptor tables as JSON and exit
    #[arg(long)]
    describe: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

/// Initialize tracing from RUST_LOG, falling back to the verbosity flags.
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,attrgen_gen=info".to_string(),
            2 => "info,attrgen_gen=debug".to_string(),
            _ => "debug,attrgen_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn run(cli: &Cli) -> Result<(), GeneratorError> {
    let units = attrgen_definitions::units();

    if cli.describe {
        let json = serde_json::to_string_pretty(&units)
            .map_err(|e| GeneratorError::ConfigError(format!("cannot describe units: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    for unit in &units {
        debug!(
            unit = %unit.name,
            object = %unit.object.name,
            dependencies = unit.depends_on.len(),
            "loaded unit"
        );
    }

    let output_dir = Path::new(&cli.output);
    info!(dir = %output_dir.display(), dry_run = cli.dry_run, "generating");
    let artifacts = generate_and_write(&units, output_dir, cli.dry_run)?;

    if !cli.dry_run {
        eprintln!(
            "{} {} files to {}",
            "Generated".green().bold(),
            artifacts.len(),
            output_dir.display()
        );
    }
    Ok(())
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json);

    run(&cli).inspect_err(|e| {
        eprintln!("{} {e}", "Generation failed:".red().bold());
    })
}

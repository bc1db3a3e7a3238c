//! Fabbrica Code Generator
//!
//! Generates a typed test-data factory module from a schema document.

use std::path::PathBuf;

use clap::Parser;
use fabbrica_gen::config::GeneratorConfig;
use fabbrica_gen::errors::GeneratorError;
use fabbrica_gen::output::generate_and_write;
use fabbrica_gen::schema::load_document;
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Fabbrica code generator - transforms schema documents into typed factories
#[derive(Parser, Debug)]
#[command(name = "fabbrica-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Schema document (JSON) to generate factories for
    #[arg(short, long)]
    schema: PathBuf,

    /// Output file for the generated module
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Module the `Prisma` namespace is imported from
    #[arg(long)]
    client_module: Option<String>,

    /// Runtime package the helpers are imported from
    #[arg(long)]
    runtime_module: Option<String>,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Output logs as JSON
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Initializes tracing from `RUST_LOG`, falling back to the `-v` count.
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,fabbrica_gen=info".to_string(),
            2 => "info,fabbrica_gen=debug".to_string(),
            _ => "debug,fabbrica_gen=trace".to_string(),
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

fn resolve_config(cli: &Cli) -> Result<GeneratorConfig, GeneratorError> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(module) = &cli.client_module {
        config = config.with_client_module(module);
    }
    if let Some(module) = &cli.runtime_module {
        config = config.with_runtime_module(module);
    }
    if let Some(output) = &cli.output {
        config = config.with_output(output);
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json);

    let config = resolve_config(&cli)?;
    debug!(?config, "Resolved configuration");

    let document = load_document(&cli.schema)?;
    info!(
        schema = %cli.schema.display(),
        models = document.models().len(),
        dry_run = cli.dry_run,
        "Generating factories"
    );

    generate_and_write(&document, &config, cli.dry_run)?;

    if !cli.dry_run {
        info!(output = %config.output.display(), "Successfully generated factories");
    }

    Ok(())
}

//! `json-tb`: bind JSON configurations to HDL test-bench generics.
//!
//! Usage:
//!   json-tb plan <config.toml>
//!   json-tb run <config.toml> -- <engine> [args...]
//!   json-tb stringify <document.json> [--annotate] [--b16]
//!   json-tb encode <string>
//!   json-tb decode <hex>

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use json_tb_bench::{load_json, setup, CommandEngine, Engine, Setup, SetupConfig};
use json_tb_value::stringify;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "json-tb")]
#[command(about = "Bind JSON configurations to HDL test-bench generics")]
#[command(version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run setup and print the resulting test plan as JSON
    Plan {
        /// Setup configuration (TOML)
        config: PathBuf,
    },

    /// Run setup and hand the plan to an engine on its stdin
    Run {
        /// Setup configuration (TOML)
        config: PathBuf,

        /// Engine program and its arguments
        #[arg(last = true, required = true)]
        engine: Vec<String>,
    },

    /// Print the canonical serialization of a JSON document
    Stringify {
        document: PathBuf,

        /// Length-prefix integer arrays first
        #[arg(long)]
        annotate: bool,

        /// Base16-encode the result
        #[arg(long)]
        b16: bool,
    },

    /// Base16-encode a string
    Encode { value: String },

    /// Decode a base16 string
    Decode { value: String },
}

type CliResult = Result<ExitCode, Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Plan { config } => cmd_plan(&config),
        Commands::Run { config, engine } => cmd_run(&config, &engine),
        Commands::Stringify {
            document,
            annotate,
            b16,
        } => cmd_stringify(&document, annotate, b16),
        Commands::Encode { value } => {
            println!("{}", json_tb_base16::encode_str(&value));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Decode { value } => cmd_decode(&value),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_setup(config: &Path) -> Result<Setup, json_tb_bench::Error> {
    let config = SetupConfig::load(config)?;
    let setup = setup(&config)?;
    if let Some(discovery) = &setup.discovery {
        for skipped in &discovery.skipped {
            error!(entry = %skipped.entry.name, error = %skipped.error, "corpus entry not bound");
        }
    }
    Ok(setup)
}

fn cmd_plan(config: &Path) -> CliResult {
    let setup = load_setup(config)?;
    println!("{}", setup.plan().to_json()?);
    setup.ensure_complete()?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_run(config: &Path, engine: &[String]) -> CliResult {
    let setup = load_setup(config)?;
    setup.ensure_complete()?;

    let Some((program, args)) = engine.split_first() else {
        return Err("an engine program is required".into());
    };
    let outcome = CommandEngine::new(program.as_str(), args.iter().cloned()).run(&setup.plan())?;
    Ok(match outcome.code {
        Some(0) => ExitCode::SUCCESS,
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::FAILURE,
    })
}

fn cmd_stringify(document: &Path, annotate: bool, b16: bool) -> CliResult {
    let mut value = load_json(document)?;
    if annotate {
        value = value.into_annotated();
    }
    let text = stringify(&value)?;
    if b16 {
        println!("{}", json_tb_base16::encode_str(&text));
    } else {
        println!("{text}");
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_decode(value: &str) -> CliResult {
    println!("{}", json_tb_base16::decode_str(value)?);
    Ok(ExitCode::SUCCESS)
}

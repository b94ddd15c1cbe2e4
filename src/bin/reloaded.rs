//! Command-line interface for reloaded
//! This binary reads a text file, cleans it up according to its inline directives and
//! writes the result to another file.
//!
//! Usage:
//!   reloaded `<input>` `<output>`                         - Transform input into output
//!   reloaded `<input>` `<output>` --format tokens-json    - Dump the token stream instead
//!   reloaded `<input>` `<output>` --config `<file>`       - Layer a TOML config over the defaults

use clap::{Arg, ArgAction, ArgMatches, Command};
use reloaded::error::{ReloadedError, Result};
use reloaded::settings::{Loader, LoggingSettings, OutputFormat, Settings};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("reloaded")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clean up loosely formatted text using inline directives")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the text file to transform")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path the transformed text is written to")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (overrides output.format)")
                .value_parser(["text", "tokens-json"]),
        )
        .arg(
            Arg::new("trailing-newline")
                .long("trailing-newline")
                .help("End the output with a newline (overrides output.trailing_newline)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log at debug level unless RUST_LOG is set")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let settings = load_settings(&matches).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    init_logging(&settings.logging);

    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    let output = matches
        .get_one::<String>("output")
        .expect("output is a required argument");

    if let Err(e) = handle_transform_command(Path::new(input), Path::new(output), &settings) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Success: {} -> {}", input, output);
}

/// Build settings from the defaults, the optional config file and the command-line flags.
fn load_settings(matches: &ArgMatches) -> Result<Settings> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.output_format(format)?;
    }
    if matches.get_flag("trailing-newline") {
        loader = loader.trailing_newline(true)?;
    }
    if matches.get_flag("verbose") {
        loader = loader.verbose()?;
    }
    Ok(loader.build()?)
}

/// RUST_LOG wins over the configured level.
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the transform command
fn handle_transform_command(input: &Path, output: &Path, settings: &Settings) -> Result<()> {
    let source = fs::read_to_string(input).map_err(|source| ReloadedError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %input.display(), bytes = source.len(), "read input");

    let mut rendered = match settings.output.format {
        OutputFormat::Text => reloaded::process(&source),
        OutputFormat::TokensJson => serde_json::to_string_pretty(&reloaded::tokenize(&source))?,
    };
    if settings.output.trailing_newline {
        rendered.push('\n');
    }

    fs::write(output, &rendered).map_err(|source| ReloadedError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %output.display(), bytes = rendered.len(), "wrote output");

    Ok(())
}

//! Command-line interface for instinct files
//! This binary parses one or more instinct files and prints their records.
//!
//! Usage:
//!   instinct `<path>`... [--format `<format>`] [--config `<file>`] [--strict] [--require-id]
//!   instinct --list-formats
//!
//! A path of `-` reads from stdin. Warnings about skipped lines go to stderr; set `RUST_LOG`
//! to change the log level.

mod output;

use clap::{Arg, ArgAction, ArgMatches, Command};
use instinct_config::{InstinctConfig, Loader, OutputFormat};
use instinct_parser::instinct::{DocumentLoader, LoaderError};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = Command::new("instinct")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting instinct files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("paths")
                .help("Instinct files to parse ('-' reads stdin)")
                .required_unless_present("list-formats")
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (json, yaml, summary; default from config)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on malformed metadata lines and text before the first block")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("require-id")
                .long("require-id")
                .help("Leave out records without an id")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let paths: Vec<&String> = matches
        .get_many::<String>("paths")
        .map(|values| values.collect())
        .unwrap_or_default();
    handle_parse_command(&paths, &config);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Built-in defaults, then `--config`, then command-line flags
fn load_config(matches: &ArgMatches) -> Result<InstinctConfig, String> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("strict") {
        loader = loader
            .set_override("parser.strict", true)
            .map_err(|e| e.to_string())?;
    }
    if matches.get_flag("require-id") {
        loader = loader
            .set_override("parser.require_id", true)
            .map_err(|e| e.to_string())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        let format: OutputFormat = format.parse()?;
        loader = loader
            .set_override("output.format", format.name())
            .map_err(|e| e.to_string())?;
    }
    loader.build().map_err(|e| e.to_string())
}

/// Handle the parse command
fn handle_parse_command(paths: &[&String], config: &InstinctConfig) {
    let options = config.parser.to_options();
    let mut documents = Vec::with_capacity(paths.len());

    for path in paths {
        let parsed = open(path).and_then(|loader| {
            let doc = loader.parse_with(&options)?;
            Ok((loader.origin().to_string(), doc.records))
        });
        match parsed {
            Ok(document) => documents.push(document),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    let formatted =
        output::format_documents(&documents, config.output.format).unwrap_or_else(|e| {
            eprintln!("Error formatting records: {}", e);
            std::process::exit(1);
        });
    print!("{}", formatted);
}

fn open(path: &str) -> Result<DocumentLoader, LoaderError> {
    if path != "-" {
        return DocumentLoader::from_path(path);
    }
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .map_err(|source| LoaderError::Io {
            path: "<stdin>".into(),
            source,
        })?;
    Ok(DocumentLoader::from_string(source).with_origin("<stdin>"))
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");

    for format in OutputFormat::ALL {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}

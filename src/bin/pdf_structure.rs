//! Command-line interface for pdf_structure.
//!
//! Reads positioned text items as JSON (one entry per page) from a file or
//! stdin and prints the reconstructed document as JSON.
//!
//! Usage:
//!   pdf-structure [INPUT] [--tables] [--profile prose|tabular] [--base-font-size N] [--pretty]

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pdf_structure::extractors::parse_pages;
use pdf_structure::{DocumentAssembler, DocumentProfile};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    /// Paragraph text, no table detection
    Prose,
    /// Columnar data, strict heuristics and table detection
    Tabular,
}

impl From<Profile> for DocumentProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Prose => DocumentProfile::Prose,
            Profile::Tabular => DocumentProfile::Tabular,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pdf-structure", version, about = "Reconstruct lines, paragraphs and tables from positioned PDF text")]
struct Cli {
    /// JSON file with one item list per page (stdin when omitted)
    input: Option<PathBuf>,

    /// Document profile
    #[arg(long, value_enum, default_value_t = Profile::Prose)]
    profile: Profile,

    /// Detect tables regardless of profile
    #[arg(long)]
    tables: bool,

    /// Body font size in points; lines cluster within half of it
    #[arg(long)]
    base_font_size: Option<f64>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print pass counters to stderr
    #[arg(long)]
    stats: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> pdf_structure::Result<()> {
    let source = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        },
    };

    let mut config = DocumentProfile::from(cli.profile).create_config();
    if cli.tables {
        config = config.with_table_detection(true);
    }
    if let Some(size) = cli.base_font_size {
        config = config.with_base_font_size(size);
    }

    let assembler = DocumentAssembler::with_config(config)?;
    let result = assembler.assemble(parse_pages(&source)?)?;

    let output = if cli.pretty {
        result.document.to_json_pretty()?
    } else {
        result.document.to_json()?
    };
    println!("{}", output);

    if cli.stats {
        eprintln!("{}", serde_json::to_string_pretty(&result.stats)?);
    }
    Ok(())
}

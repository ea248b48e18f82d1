use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use misere::{
    analyze,
    report::{write_jsonl, write_text},
    BuildOptions, PileLimits, DEFAULT_MAX_STATES,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Jsonl,
}

#[derive(Debug, Parser)]
#[command(name = "misere", about = "P-positions of bounded misère Nim")]
struct Args {
    /// Pile limits, also the starting position (each 1..=255)
    #[arg(required = true, num_args = 1..)]
    piles: Vec<u8>,

    /// Output format: text cheat sheet or one JSON object per P-position
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Refuse to enumerate more raw encodings than this
    #[arg(long, default_value_t = DEFAULT_MAX_STATES)]
    max_states: u64,

    /// Disable the enumeration spinner
    #[arg(long)]
    no_progress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let limits = PileLimits::new(args.piles.clone())?;
    let options = BuildOptions {
        max_states: Some(args.max_states),
        progress: !args.no_progress,
        verbose: true,
    };
    let graph = analyze(&limits, &options)?;

    let mut out: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(|e| format!("cannot create {}: {e}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match args.format {
        Format::Text => write_text(&graph, out.as_mut())?,
        Format::Jsonl => {
            let outcome = write_jsonl(&graph, out.as_mut())?;
            eprintln!(
                "[misere] jsonl lines written: {} sha256={}",
                outcome.lines, outcome.sha256_hex
            );
        }
    }

    Ok(())
}

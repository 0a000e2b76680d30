//! Command-line interface for pathnest.
//!
//! Reads newline-separated absolute paths (pre-sorted in depth-first lexical
//! order) from a file or stdin and writes the bracketed tree rendering to a
//! file or stdout.

use clap::Parser;
use pathnest::{RenderSummary, render};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

/// pathnest — streaming bracketed tree renderer for sorted path listings
#[derive(Parser)]
#[command(name = "pathnest", version, about, long_about = None)]
struct Cli {
    /// Input file with one absolute path per line (default stdin)
    input: Option<PathBuf>,

    /// Write the rendered tree to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a JSON render summary to stderr when done
    #[arg(long)]
    summary: bool,

    /// Pretty-print the summary JSON
    #[arg(short, long)]
    pretty: bool,
}

fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
        None => Box::new(io::stdin().lock()),
    })
}

fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(BufWriter::new(File::create(p)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn main() {
    let cli = Cli::parse();

    let input = match open_input(cli.input.as_deref()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: cannot open input: {}", e);
            exit(1);
        }
    };
    let output = match open_output(cli.output.as_deref()) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: cannot open output: {}", e);
            exit(1);
        }
    };

    match render(input, output) {
        Ok(summary) => {
            if cli.summary {
                print_summary(&summary, cli.pretty);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn print_summary(summary: &RenderSummary, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(summary)
    } else {
        serde_json::to_string(summary)
    }
    .unwrap_or_else(|e| {
        eprintln!("JSON serialization error: {}", e);
        exit(1);
    });
    eprintln!("{}", json);
}

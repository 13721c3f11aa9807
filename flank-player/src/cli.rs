//! Command-line configuration and logging setup.

use crate::ReportOptions;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Find the Reversi move that flips the most opponent pieces, for each position read.
#[derive(Parser, Debug)]
#[command(name = "flank")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Read positions from this file instead of standard input
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Show how many pieces the best move flips in each direction
    #[arg(long)]
    pub explain: bool,

    /// List every legal move with its flip count
    #[arg(long)]
    pub all_moves: bool,

    /// Log filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_filter: String,
}

impl Cli {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            explain: self.explain,
            all_moves: self.all_moves,
        }
    }

    /// Open the configured input, defaulting to standard input.
    pub fn open_input(&self) -> Result<Box<dyn BufRead>> {
        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("cannot open {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`, or by `default_filter` if that is unset.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

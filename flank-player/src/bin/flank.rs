use anyhow::{Context, Result};
use clap::Parser;
use flank_player::cli::{init_tracing, Cli};
use flank_player::Session;
use std::io;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_filter);

    let input = cli.open_input()?;
    let stdout = io::stdout();
    let mut session = Session::new(input, stdout.lock(), cli.report_options());
    let summary = session.run().context("cannot write report")?;

    info!(
        evaluated = summary.evaluated,
        stopped_early = summary.read_error.is_some(),
        "end of processing"
    );
    Ok(())
}

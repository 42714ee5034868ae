use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use streamstats::input;
use streamstats::report;
use streamstats::statistics::Averager;

#[derive(Parser)]
#[command(name = "average")]
#[command(about = "Read real numbers and print their average")]
struct Args {
    /// Read numbers from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let args = Args::parse();
    let mut source = input::open(args.input.as_deref()).with_context(|| {
        format!(
            "failed to open {}",
            args.input.as_deref().unwrap_or(Path::new("-")).display()
        )
    })?;

    let average = Averager::run(source.as_mut()).context("failed to read input")?;

    let mut out = io::stdout().lock();
    report::write_average(&mut out, average)?;
    out.flush()?;
    Ok(())
}

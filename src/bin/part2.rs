use anyhow::{Context, Result};
use clap::Parser;
use day1::{PartCLIArgs, START_POSITION};

fn main() -> Result<()> {
    env_logger::init();
    let args = PartCLIArgs::parse();
    let turns = day1::read_turns(&args.input_path).with_context(|| {
        format!(
            "Failed to read turns from given file({}).",
            args.input_path.display()
        )
    })?;

    let crossing_n = day1::crossing_count(&turns, START_POSITION);
    println!(
        "The dial points at 0 {} time(s) during all the turns.",
        crossing_n
    );

    Ok(())
}

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

    let landing_n = day1::landing_count(&turns, START_POSITION);
    println!(
        "The dial is left pointing at 0 after {} turn(s).",
        landing_n
    );

    Ok(())
}

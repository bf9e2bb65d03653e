use std::{fmt::Display, process, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use day1::{CLIArgs, START_POSITION};

fn print_timed<T: Display>(value: T, millis: f64) {
    println!("{:>15} ({:>10.4}ms)", value, millis);
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let Some(input_path) = args.input_path else {
        println!("No input file given");
        process::exit(1);
    };

    let start_time = Instant::now();
    let turns = day1::read_turns(&input_path).with_context(|| {
        format!(
            "Failed to read turns from given file({}).",
            input_path.display()
        )
    })?;
    let parse_time = start_time.elapsed();
    if args.verbose {
        print_timed("parse", parse_time.as_secs_f64() * 1000.0);
    }

    let part1_start = Instant::now();
    let landing_n = day1::landing_count(&turns, START_POSITION);
    print_timed(landing_n, part1_start.elapsed().as_secs_f64() * 1000.0);

    let part2_start = Instant::now();
    let crossing_n = day1::crossing_count(&turns, START_POSITION);
    print_timed(crossing_n, part2_start.elapsed().as_secs_f64() * 1000.0);

    print_timed("total", start_time.elapsed().as_secs_f64() * 1000.0);

    Ok(())
}

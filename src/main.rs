use std::path::PathBuf;

use clap::Parser;

use advent2024::{input, Part, DAYS};

/// Solve one part of one puzzle and print the answer.
#[derive(Parser)]
#[command(name = "advent2024")]
struct Cli {
    /// Puzzle day
    #[arg(value_parser = clap::value_parser!(u8).range(1..=DAYS.len() as i64))]
    day: u8,

    /// Which of the day's two questions to answer
    #[arg(value_enum)]
    part: Part,

    /// Read the numbered example input `day{DAY}test{N}.in` instead of `day{DAY}.in`
    #[arg(long, value_name = "N")]
    test: Option<u32>,

    /// Read the puzzle input from this file instead
    #[arg(long, conflicts_with = "test")]
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let fname = match (&cli.input, cli.test) {
        (Some(path), _) => path.clone(),
        (None, Some(test)) => PathBuf::from(format!("day{}test{}.in", cli.day, test)),
        (None, None) => PathBuf::from(format!("day{}.in", cli.day)),
    };
    log::info!("reading {}", fname.display());
    let input = input::read_input(&fname)?;

    let time = std::time::Instant::now();
    println!("{}", DAYS[usize::from(cli.day) - 1](cli.part, &input)?);
    log::info!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}

pub mod day1;
pub mod day2;
pub mod day3;
pub mod day4;
pub mod day5;
pub mod day6;
pub mod error;
pub mod input;

pub use error::AocError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Part {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

pub type Solver = fn(Part, &str) -> Result<String, AocError>;

pub const DAYS: [Solver; 6] = [
    day1::solve, day2::solve, day3::solve, day4::solve, day5::solve, day6::solve,
];

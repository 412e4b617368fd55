use regex::Regex;

use crate::{AocError, Part};

pub fn solve(part: Part, input: &str) -> Result<String, AocError> {
    let instruction = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")?;
    let mut enabled = true;
    let total = instruction
        .captures_iter(input)
        .map(|m| match &m[0] {
            "do()" => {
                enabled = true;
                0
            }
            "don't()" => {
                if part == Part::Two {
                    enabled = false
                }
                0
            }
            // at most three digits each, so these always fit
            _ if enabled => m[1].parse::<u64>().unwrap_or(0) * m[2].parse::<u64>().unwrap_or(0),
            _ => 0,
        })
        .sum::<u64>();
    Ok(total.to_string())
}

use itertools::Itertools;

use crate::input::{lines, parse_int};
use crate::{AocError, Part};

fn is_safe(levels: impl Iterator<Item = i64>) -> bool {
    let diffs = levels.tuple_windows().map(|(x, y)| y - x).collect::<Vec<_>>();
    diffs.iter().all(|d| (1..=3).contains(d)) || diffs.iter().all(|d| (-3..=-1).contains(d))
}

// Removing any single level, including one at either end, may fix the report.
fn is_safe_dampened(levels: &[i64]) -> bool {
    is_safe(levels.iter().copied())
        || (0..levels.len()).any(|skip| {
            is_safe(levels.iter().enumerate().filter(|&(i, _)| i != skip).map(|(_, &x)| x))
        })
}

pub fn solve(part: Part, input: &str) -> Result<String, AocError> {
    let reports = lines(input)
        .map(|(ln, line)| {
            line.split_ascii_whitespace().map(|n| parse_int::<i64>(n, ln)).collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("parsed {} reports", reports.len());

    let safe = reports
        .iter()
        .filter(|levels| match part {
            Part::One => is_safe(levels.iter().copied()),
            Part::Two => is_safe_dampened(levels),
        })
        .count();
    Ok(safe.to_string())
}

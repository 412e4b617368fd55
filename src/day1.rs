use std::iter::zip;

use rustc_hash::FxHashMap;

use crate::input::{lines, parse_int};
use crate::{AocError, Part};

fn parse(input: &str) -> Result<(Vec<i64>, Vec<i64>), AocError> {
    let mut lefts = vec![];
    let mut rights = vec![];
    for (ln, line) in lines(input) {
        let strs = line.split_whitespace().collect::<Vec<_>>();
        let [left, right] = &strs[..] else {
            return Err(AocError::malformed(ln, format!("cannot parse {:?} as two numbers", line)));
        };
        lefts.push(parse_int(left, ln)?);
        rights.push(parse_int(right, ln)?);
    }
    Ok((lefts, rights))
}

pub fn solve(part: Part, input: &str) -> Result<String, AocError> {
    let (mut lefts, mut rights) = parse(input)?;
    log::debug!("parsed {} location id pairs", lefts.len());

    let answer = match part {
        Part::One => {
            lefts.sort_unstable();
            rights.sort_unstable();
            zip(lefts, rights).map(|(left, right)| (left - right).abs()).sum::<i64>()
        }
        Part::Two => {
            let mut counts = FxHashMap::default();
            for right in rights {
                *counts.entry(right).or_insert(0i64) += 1;
            }
            lefts.iter().map(|left| left * counts.get(left).copied().unwrap_or(0)).sum::<i64>()
        }
    };
    Ok(answer.to_string())
}

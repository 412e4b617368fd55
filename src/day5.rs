use rustc_hash::FxHashSet;

use crate::input::{lines, parse_int};
use crate::{AocError, Part};

/// `(x, y)` means page `x` must be printed before page `y`.
type Rules = FxHashSet<(u32, u32)>;

struct Update {
    line: usize,
    pages: Vec<u32>,
}

fn parse(input: &str) -> Result<(Rules, Vec<Update>), AocError> {
    let mut rules = Rules::default();
    let mut updates = vec![];
    for (ln, line) in lines(input) {
        if let Some((x, y)) = line.split_once('|') {
            rules.insert((parse_int(x, ln)?, parse_int(y, ln)?));
        } else {
            let pages = line.split(',').map(|s| parse_int(s, ln)).collect::<Result<Vec<_>, _>>()?;
            updates.push(Update { line: ln, pages });
        }
    }
    Ok((rules, updates))
}

fn is_ordered(rules: &Rules, pages: &[u32]) -> bool {
    (0..pages.len()).all(|x| (x + 1..pages.len()).all(|y| !rules.contains(&(pages[y], pages[x]))))
}

fn reorder(rules: &Rules, update: &Update) -> Result<Vec<u32>, AocError> {
    let mut unsorted = update.pages.clone();
    let mut sorted = Vec::with_capacity(unsorted.len());
    while !unsorted.is_empty() {
        let x_at = unsorted
            .iter()
            .position(|&x| unsorted.iter().all(|&y| !rules.contains(&(y, x))))
            .ok_or_else(|| AocError::malformed(update.line, "ordering rules are cyclic for this update"))?;
        sorted.push(unsorted.remove(x_at));
    }
    Ok(sorted)
}

fn middle(pages: &[u32]) -> u32 {
    pages[(pages.len() - 1) / 2]
}

pub fn solve(part: Part, input: &str) -> Result<String, AocError> {
    let (rules, updates) = parse(input)?;
    log::debug!("parsed {} ordering rules and {} updates", rules.len(), updates.len());

    let mut total = 0u64;
    for update in &updates {
        let ordered = is_ordered(&rules, &update.pages);
        match part {
            Part::One if ordered => total += u64::from(middle(&update.pages)),
            Part::Two if !ordered => total += u64::from(middle(&reorder(&rules, update)?)),
            _ => {}
        }
    }
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn test_example_ordered_middles() {
        assert_eq!(solve(Part::One, EXAMPLE).unwrap(), "143");
    }

    #[test]
    fn test_example_reordered_middles() {
        assert_eq!(solve(Part::Two, EXAMPLE).unwrap(), "123");
    }

    #[test]
    fn test_reorder_follows_rules() {
        let (rules, updates) = parse(EXAMPLE).unwrap();
        assert_eq!(reorder(&rules, &updates[3]).unwrap(), vec![97, 75, 47, 61, 53]);
        assert_eq!(reorder(&rules, &updates[5]).unwrap(), vec![97, 75, 47, 29, 13]);
    }

    #[test]
    fn test_cyclic_rules_are_rejected() {
        let err = solve(Part::Two, "1|2\n2|1\n\n2,1\n").unwrap_err();
        assert!(matches!(err, AocError::MalformedInput { line: 4, .. }), "{:?}", err);
    }
}

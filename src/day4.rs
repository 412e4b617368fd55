use crate::input::lines;
use crate::{AocError, Part};

const DIRECTIONS: [(isize, isize); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

struct WordSearch<'a> {
    rows: Vec<&'a [u8]>,
}

impl<'a> WordSearch<'a> {
    fn get(&self, ri: usize, ci: usize, rd: isize, cd: isize) -> Option<u8> {
        let ri = ri.checked_add_signed(rd)?;
        let ci = ci.checked_add_signed(cd)?;
        self.rows.get(ri).and_then(|row| row.get(ci)).copied()
    }

    fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(ri, row)| {
            row.iter().enumerate().map(move |(ci, &cell)| (ri, ci, cell))
        })
    }

    fn xmas_from(&self, ri: usize, ci: usize) -> usize {
        DIRECTIONS
            .iter()
            .filter(|&&(rd, cd)| {
                b"MAS".iter().zip(1..).all(|(&want, n)| self.get(ri, ci, n * rd, n * cd) == Some(want))
            })
            .count()
    }

    fn is_x_mas(&self, ri: usize, ci: usize) -> bool {
        let diagonal = |rd, cd| {
            matches!(
                (self.get(ri, ci, rd, cd), self.get(ri, ci, -rd, -cd)),
                (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
            )
        };
        diagonal(-1, -1) && diagonal(-1, 1)
    }
}

pub fn solve(part: Part, input: &str) -> Result<String, AocError> {
    let search = WordSearch { rows: lines(input).map(|(_, line)| line.as_bytes()).collect() };
    log::debug!("word search has {} rows", search.rows.len());

    let count = match part {
        Part::One => search.cells().filter(|&(_, _, c)| c == b'X').map(|(ri, ci, _)| search.xmas_from(ri, ci)).sum::<usize>(),
        Part::Two => search.cells().filter(|&(ri, ci, c)| c == b'A' && search.is_x_mas(ri, ci)).count(),
    };
    Ok(count.to_string())
}

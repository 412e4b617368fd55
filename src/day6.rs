//! Guard patrol simulation.
//!
//! A guard walks a grid of open and blocked cells, turning right in place
//! whenever the cell ahead is blocked. A patrol either leaves the grid or
//! repeats a (position, heading) state, which under the deterministic
//! transition proves it loops forever.
//!
//! Input rows are flipped on load: the first input row is the top of the
//! grid (`y = height - 1`) and North points towards larger `y`.

use bitvec::prelude::*;
use rayon::prelude::*;

use crate::input::lines;
use crate::{AocError, Part};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    fn from_token(token: u8) -> Option<Self> {
        match token {
            b'^' => Some(Heading::North),
            b'>' => Some(Heading::East),
            b'v' => Some(Heading::South),
            b'<' => Some(Heading::West),
            _ => None,
        }
    }

    pub fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// Read-only view of one grid cell. Only the start cell carries a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub blocked: bool,
    pub heading: Option<Heading>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guard {
    pub position: Position,
    pub heading: Heading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    blocked: BitVec,
    start: Guard,
}

impl Grid {
    pub fn parse(input: &str) -> Result<Self, AocError> {
        let rows = lines(input).collect::<Vec<_>>();
        let Some(&(first_ln, first)) = rows.first() else {
            return Err(AocError::malformed(0, "grid is empty"));
        };
        let width = first.len();
        let height = rows.len();

        let mut blocked = bitvec![0; width * height];
        let mut start: Option<(usize, Guard)> = None;
        for (ri, &(ln, row)) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(AocError::malformed(
                    ln,
                    format!("row has {} cells, expected {} like line {}", row.len(), width, first_ln),
                ));
            }
            let y = height - 1 - ri;
            for (x, &token) in row.as_bytes().iter().enumerate() {
                let position = Position { x, y };
                match token {
                    b'#' => blocked.set(y * width + x, true),
                    b'.' => {}
                    _ => {
                        let Some(heading) = Heading::from_token(token) else {
                            return Err(AocError::malformed(
                                ln,
                                format!("unexpected grid cell {:?} at column {}", token as char, x + 1),
                            ));
                        };
                        if let Some((start_ln, _)) = start {
                            return Err(AocError::malformed(
                                ln,
                                format!("second guard found, the first is on line {}", start_ln),
                            ));
                        }
                        start = Some((ln, Guard { position, heading }));
                    }
                }
            }
        }

        let Some((_, start)) = start else {
            return Err(AocError::malformed(first_ln, "no guard found in grid"));
        };
        log::debug!("parsed {}x{} grid, guard at {:?}", width, height, start);
        Ok(Grid { width, height, blocked, start })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Guard {
        self.start
    }

    fn index(&self, position: Position) -> Option<usize> {
        (position.x < self.width && position.y < self.height).then(|| position.y * self.width + position.x)
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        let index = self.index(position)?;
        Some(Cell {
            position,
            blocked: self.blocked[index],
            heading: (position == self.start.position).then_some(self.start.heading),
        })
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position { x, y }))
    }

    /// A copy of this grid with one more blocked cell, or `None` if `position`
    /// lies outside the grid.
    pub fn with_obstruction(&self, position: Position) -> Option<Grid> {
        let index = self.index(position)?;
        let mut grid = self.clone();
        grid.blocked.set(index, true);
        Some(grid)
    }

    fn state_index(&self, guard: Guard) -> Option<usize> {
        self.index(guard.position).map(|index| index * 4 + guard.heading.index())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next(Guard),
    Exited,
}

pub fn step(grid: &Grid, guard: Guard) -> Step {
    let (dx, dy) = guard.heading.delta();
    let ahead = guard
        .position
        .x
        .checked_add_signed(dx)
        .zip(guard.position.y.checked_add_signed(dy))
        .and_then(|(x, y)| grid.cell(Position { x, y }));

    match ahead {
        None => Step::Exited,
        Some(cell) if cell.blocked => Step::Next(Guard { heading: guard.heading.turn_right(), ..guard }),
        Some(cell) => Step::Next(Guard { position: cell.position, ..guard }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Exited,
    Looped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patrol {
    pub outcome: Outcome,
    /// Moves and in-place turns taken; leaving the grid is not a step.
    pub steps: usize,
    visited: BitVec,
}

impl Patrol {
    /// Distinct cells the guard stood on, including the start cell.
    pub fn visited_cells(&self) -> usize {
        self.visited.count_ones()
    }
}

pub fn run(grid: &Grid) -> Result<Patrol, AocError> {
    let cap = 4 * grid.width * grid.height;
    let mut seen = bitvec![0; cap];
    let mut visited = bitvec![0; grid.width * grid.height];

    let mut guard = grid.start;
    if let Some(index) = grid.index(guard.position) {
        visited.set(index, true);
    }
    let mut steps = 0;
    loop {
        let next = match step(grid, guard) {
            Step::Exited => return Ok(Patrol { outcome: Outcome::Exited, steps, visited }),
            Step::Next(next) => next,
        };
        steps += 1;

        let Some(state) = grid.state_index(next) else {
            return Err(AocError::SimulationInvariantViolation { cap });
        };
        if seen[state] {
            return Ok(Patrol { outcome: Outcome::Looped, steps, visited });
        }
        if steps > cap {
            return Err(AocError::SimulationInvariantViolation { cap });
        }
        seen.set(state, true);
        visited.set(state / 4, true);
        guard = next;
    }
}

/// Open cells where a single new obstruction could be placed. The guard's
/// start cell is never one of them.
pub fn obstruction_candidates(grid: &Grid) -> impl Iterator<Item = Position> + '_ {
    grid.positions().filter(move |&position| {
        position != grid.start.position && grid.cell(position).is_some_and(|cell| !cell.blocked)
    })
}

pub fn count_loop_obstructions(grid: &Grid) -> Result<usize, AocError> {
    let candidates = obstruction_candidates(grid).collect::<Vec<_>>();
    log::debug!("trying {} obstruction placements", candidates.len());

    let looped = candidates
        .par_iter()
        .filter_map(|&position| grid.with_obstruction(position).map(|trial| (position, trial)))
        .map(|(position, trial)| -> Result<bool, AocError> {
            let patrol = run(&trial)?;
            log::trace!("obstruction at {:?}: {:?} after {} steps", position, patrol.outcome, patrol.steps);
            Ok(patrol.outcome == Outcome::Looped)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(looped.into_iter().filter(|&l| l).count())
}

pub fn solve(part: Part, input: &str) -> Result<String, AocError> {
    let grid = Grid::parse(input)?;
    let answer = match part {
        Part::One => {
            let patrol = run(&grid)?;
            if patrol.outcome == Outcome::Looped {
                log::warn!("unmodified patrol never leaves the grid");
            }
            patrol.visited_cells()
        }
        Part::Two => count_loop_obstructions(&grid)?,
    };
    Ok(answer.to_string())
}

//! Randomized placement shared by both generators.
//!
//! A word of length `len` is placed by repeatedly drawing a direction and a
//! start cell whose whole extent stays on the grid, then asking the caller
//! whether the cells it would cover are compatible. The first compatible draw
//! wins; after `max_attempts` failures the word is given up on.

use std::ops::RangeInclusive;

use lexigrid_core::{Direction, GridSize, Position};
use rand::Rng;

/// A candidate position for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement<D> {
    pub(crate) start: Position,
    pub(crate) direction: D,
    pub(crate) len: usize,
}

impl<D> Placement<D>
where
    D: Copy + Into<Direction>,
{
    /// Iterates over the covered cells, yielding `None` for any cell off the grid.
    pub(crate) fn cells(self, size: GridSize) -> impl Iterator<Item = Option<Position>> {
        let direction = self.direction.into();
        (0..self.len).map(move |i| self.start.step(direction, i, size))
    }

    /// Returns the last covered cell.
    pub(crate) fn end(self, size: GridSize) -> Option<Position> {
        let last = self.len.checked_sub(1)?;
        self.start.step(self.direction.into(), last, size)
    }
}

/// Range of start coordinates along one axis that keeps a word of `len`
/// letters inside a grid of `size` cells when it advances by `delta` per letter.
fn start_range(delta: isize, len: usize, size: usize) -> RangeInclusive<usize> {
    match delta {
        0 => 0..=size - 1,
        d if d > 0 => 0..=size - len,
        _ => len - 1..=size - 1,
    }
}

/// Draws one random placement for a word of `len` letters.
///
/// `len` must fit on the grid.
fn random_placement<R, D>(rng: &mut R, choices: &[D], len: usize, size: GridSize) -> Placement<D>
where
    R: Rng + ?Sized,
    D: Copy + Into<Direction>,
{
    debug_assert!(size.fits(len));
    let direction = choices[rng.random_range(0..choices.len())];
    let (d_row, d_col) = direction.into().delta();
    let row = rng.random_range(start_range(d_row, len, size.get()));
    let col = rng.random_range(start_range(d_col, len, size.get()));
    Placement {
        start: Position::new(row, col),
        direction,
        len,
    }
}

/// Tries up to `max_attempts` random placements and returns the first one for
/// which `is_legal` holds.
///
/// Returns `None` immediately for empty words, words longer than the grid, or
/// an empty set of direction choices.
pub(crate) fn try_place<R, D, F>(
    rng: &mut R,
    choices: &[D],
    len: usize,
    size: GridSize,
    max_attempts: usize,
    mut is_legal: F,
) -> Option<Placement<D>>
where
    R: Rng + ?Sized,
    D: Copy + Into<Direction>,
    F: FnMut(Placement<D>) -> bool,
{
    if !size.fits(len) || choices.is_empty() {
        return None;
    }
    for attempt in 1..=max_attempts {
        let placement = random_placement(rng, choices, len, size);
        if is_legal(placement) {
            return Some(placement);
        }
        log::trace!(
            "attempt {attempt}/{max_attempts} rejected at {} going {}",
            placement.start,
            Into::<Direction>::into(placement.direction)
        );
    }
    None
}

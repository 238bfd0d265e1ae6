/*
direction.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordfind.

Wordfind is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordfind is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordfind. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Directions in which words are written in the board.

use rand::Rng;
use std::fmt;
use strum_macros::FromRepr;

/// Number of [`Direction`] variants.
const NUM_DIRECTIONS: u8 = 3;

/// Direction of a word in the board.
///
/// Words are always read from left to right and from top to bottom.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Default)]
#[repr(u8)]
pub enum Direction {
    /// Left to right along a row.
    #[default]
    Horizontal,

    /// Top to bottom along a column.
    Vertical,

    /// Down and to the right.
    Diagonal,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
            Direction::Diagonal => write!(f, "diagonal"),
        }
    }
}

impl Direction {
    /// All the directions.
    pub const ALL: [Direction; NUM_DIRECTIONS as usize] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
    ];

    /// Return a direction picked uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::from_repr(rng.random_range(0..NUM_DIRECTIONS)).unwrap_or_default()
    }

    /// Return the row and column offsets between two consecutive letters.
    pub fn step(&self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
        }
    }

    /// Return the position of the letter at `index` for a word starting at `(row, col)`.
    pub fn position(&self, row: usize, col: usize, index: usize) -> (usize, usize) {
        let (dr, dc) = self.step();
        (row + dr * index, col + dc * index)
    }

    /// Whether a word of `len` letters starting at `(row, col)` stays inside a board of `size`
    /// rows and columns.
    pub fn fits(&self, row: usize, col: usize, len: usize, size: usize) -> bool {
        let (dr, dc) = self.step();
        row < size
            && col < size
            && (dr == 0 || row + len <= size)
            && (dc == 0 || col + len <= size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_fits_boundaries() {
        assert!(Direction::Horizontal.fits(3, 0, 8, 8));
        assert!(!Direction::Horizontal.fits(3, 1, 8, 8));
        assert!(Direction::Vertical.fits(0, 7, 8, 8));
        assert!(!Direction::Vertical.fits(1, 7, 8, 8));
        assert!(Direction::Diagonal.fits(0, 0, 8, 8));
        assert!(!Direction::Diagonal.fits(0, 1, 8, 8));
        assert!(!Direction::Diagonal.fits(1, 0, 8, 8));
    }

    #[test]
    fn test_position() {
        assert_eq!(Direction::Horizontal.position(2, 3, 2), (2, 5));
        assert_eq!(Direction::Vertical.position(2, 3, 2), (4, 3));
        assert_eq!(Direction::Diagonal.position(2, 3, 2), (4, 5));
    }

    #[test]
    fn test_random_covers_all_directions() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<Direction> = (0..200).map(|_| Direction::random(&mut rng)).collect();
        assert_eq!(seen.len(), Direction::ALL.len());
    }
}

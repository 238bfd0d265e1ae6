/*
placement.rs

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

//! Place words in the grid.
//!
//! Each word gets a limited number of attempts. An attempt picks a random starting cell and
//! writes the word if it fits.
//!
//! * Short words get a new random direction for every attempt.
//! * Long words get one random direction, which is kept for all their attempts.

use log::debug;
use rand::Rng;

use super::direction::Direction;
use super::grid::Grid;

/// How the direction is chosen for the placement attempts of a word.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DirectionPolicy {
    /// Pick a new direction for each attempt.
    PerAttempt,

    /// Use the same direction for all the attempts.
    Fixed(Direction),
}

/// Where a word has been written.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// Attempts made for a word.
#[derive(Debug, Clone, PartialEq)]
pub struct WordAttempts {
    pub word: String,

    /// Direction of each attempt, in order.
    pub directions: Vec<Direction>,

    /// Whether the last attempt succeeded.
    pub placed: bool,
}

/// Placement engine. Owns the grid while the words are written.
pub struct PlacementEngine {
    grid: Grid,

    /// Number of attempts for each word.
    max_attempts: usize,

    /// Attempts for each word given to [`PlacementEngine::place_word`], in order.
    history: Vec<WordAttempts>,
}

impl PlacementEngine {
    /// Create a [`PlacementEngine`] object with an empty grid.
    pub fn new(size: usize, max_attempts: usize) -> Self {
        Self {
            grid: Grid::new(size),
            max_attempts,
            history: Vec::new(),
        }
    }

    /// Return a reference to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the attempts made so far, one entry per word.
    pub fn history(&self) -> &[WordAttempts] {
        &self.history
    }

    /// Give up the ownership of the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Try to write the word in the grid.
    ///
    /// Return the position of the word, or None if no attempt succeeded. The grid is not
    /// modified when the word cannot be placed.
    pub fn place_word<R: Rng>(
        &mut self,
        word: &str,
        policy: DirectionPolicy,
        rng: &mut R,
    ) -> Option<Placement> {
        let letters: Vec<char> = word.chars().collect();
        let size: usize = self.grid.size();
        let mut directions: Vec<Direction> = Vec::with_capacity(self.max_attempts);

        for _ in 0..self.max_attempts {
            let row: usize = rng.random_range(0..size);
            let col: usize = rng.random_range(0..size);
            let direction: Direction = match policy {
                DirectionPolicy::PerAttempt => Direction::random(rng),
                DirectionPolicy::Fixed(d) => d,
            };
            directions.push(direction);

            if self.grid.can_place(&letters, row, col, direction) {
                self.grid.place(&letters, row, col, direction);
                debug!("Placed {word} at ({row}, {col}) {direction}");
                self.history.push(WordAttempts {
                    word: word.to_string(),
                    directions,
                    placed: true,
                });
                return Some(Placement {
                    row,
                    col,
                    direction,
                });
            }
        }
        debug!("Cannot place {word} after {} attempts", self.max_attempts);
        self.history.push(WordAttempts {
            word: word.to_string(),
            directions,
            placed: false,
        });
        None
    }
}

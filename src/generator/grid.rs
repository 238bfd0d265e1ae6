/*
grid.rs

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

//! Letter grid under construction.

use rand::Rng;

use super::direction::Direction;

/// Square grid of letters.
///
/// Cells are stored row by row. A cell is `None` until a word letter or a filler letter is
/// written to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cells, indexed by `row * size + col`.
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty [`Grid`] object.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Number of rows and columns.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Return the letter at the given position, or None if the cell is still empty or outside
    /// the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[self.index(row, col)]
    }

    /// Whether the word can be written starting at `(row, col)` in the given direction.
    ///
    /// The word must stay inside the grid, and every cell it covers must be either empty or
    /// already hold the same letter.
    pub fn can_place(&self, word: &[char], row: usize, col: usize, direction: Direction) -> bool {
        if !direction.fits(row, col, word.len(), self.size) {
            return false;
        }
        word.iter().enumerate().all(|(i, letter)| {
            let (r, c) = direction.position(row, col, i);
            match self.cells[self.index(r, c)] {
                Some(existing) => existing == *letter,
                None => true,
            }
        })
    }

    /// Write the word starting at `(row, col)`.
    ///
    /// The caller must have checked the position with [`Grid::can_place`].
    pub fn place(&mut self, word: &[char], row: usize, col: usize, direction: Direction) {
        for (i, letter) in word.iter().enumerate() {
            let (r, c) = direction.position(row, col, i);
            let idx: usize = self.index(r, c);
            self.cells[idx] = Some(*letter);
        }
    }

    /// Number of cells that are still empty.
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Fill the empty cells with random uppercase letters.
    pub fn fill_empty<R: Rng>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = Some(char::from(b'A' + rng.random_range(0..26u8)));
        }
    }

    /// Iterate over the cells in row-major order as `(row, col, letter)` tuples.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<char>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, letter)| (i / self.size, i % self.size, *letter))
    }
}

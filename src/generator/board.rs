/*
board.rs

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

//! Generated board, as saved to disk.
//!
//! The JSON representation is:
//!
//! ```json
//! {
//!   "Board": [ { "Letter": "C", "Row": 0, "Col": 0 }, ... ],
//!   "Words": [ "CAT", "DOG", ... ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::grid::Grid;

/// One cell of the board.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BoardCell {
    pub letter: char,
    pub row: usize,
    pub col: usize,
}

/// Completed board and the list of the words it contains.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BoardRecord {
    /// Cells in row-major order.
    board: Vec<BoardCell>,

    /// Placed words, in placement order.
    words: Vec<String>,
}

impl BoardRecord {
    /// Build the record from a completed grid.
    ///
    /// Cells that are still empty in the grid are not part of the record, so the grid must
    /// have been filled first.
    pub fn new(grid: &Grid, words: Vec<String>) -> Self {
        let board: Vec<BoardCell> = grid
            .cells()
            .filter_map(|(row, col, letter)| letter.map(|letter| BoardCell { letter, row, col }))
            .collect();
        Self { board, words }
    }

    /// Return the cells.
    pub fn cells(&self) -> &[BoardCell] {
        &self.board
    }

    /// Return the placed words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of rows and columns.
    pub fn size(&self) -> usize {
        self.board
            .iter()
            .map(|c| c.row.max(c.col) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Return the letter at the given position.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.board
            .iter()
            .find(|c| c.row == row && c.col == col)
            .map(|c| c.letter)
    }

    /// Rebuild the rows of letters. Missing cells are returned as spaces.
    pub fn rows(&self) -> Vec<Vec<char>> {
        let size: usize = self.size();
        let mut rows: Vec<Vec<char>> = vec![vec![' '; size]; size];
        for cell in &self.board {
            rows[cell.row][cell.col] = cell.letter;
        }
        rows
    }

    /// Find the word in the board.
    ///
    /// Return the starting position and the direction of the first occurrence, scanning the
    /// cells in row-major order.
    pub fn locate_word(&self, word: &str) -> Option<(usize, usize, Direction)> {
        let rows: Vec<Vec<char>> = self.rows();
        let size: usize = rows.len();
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return None;
        }

        for row in 0..size {
            for col in 0..size {
                for direction in Direction::ALL {
                    if !direction.fits(row, col, letters.len(), size) {
                        continue;
                    }
                    let found: bool = letters.iter().enumerate().all(|(i, letter)| {
                        let (r, c) = direction.position(row, col, i);
                        rows[r][c] == *letter
                    });
                    if found {
                        return Some((row, col, direction));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoardRecord {
        let mut grid = Grid::new(3);
        grid.place(&['C', 'A', 'T'], 0, 0, Direction::Horizontal);
        grid.place(&['C', 'O', 'W'], 0, 0, Direction::Vertical);
        grid.place(&['C', 'U', 'B'], 0, 0, Direction::Diagonal);
        grid.place(&['X'], 1, 2, Direction::Vertical);
        grid.place(&['Z'], 2, 1, Direction::Horizontal);
        BoardRecord::new(&grid, vec!["CAT".into(), "COW".into(), "CUB".into()])
    }

    #[test]
    fn test_record_layout() {
        let record = sample();
        assert_eq!(record.size(), 3);
        assert_eq!(record.cells().len(), 9);
        assert_eq!(
            record.cells()[5],
            BoardCell {
                letter: 'X',
                row: 1,
                col: 2
            }
        );
        assert_eq!(record.letter_at(2, 2), Some('B'));
        assert_eq!(record.letter_at(3, 0), None);
        assert_eq!(
            record.rows(),
            vec![
                vec!['C', 'A', 'T'],
                vec!['O', 'U', 'X'],
                vec!['W', 'Z', 'B']
            ]
        );
    }

    #[test]
    fn test_locate_word() {
        let record = sample();
        assert_eq!(record.locate_word("CAT"), Some((0, 0, Direction::Horizontal)));
        assert_eq!(record.locate_word("COW"), Some((0, 0, Direction::Vertical)));
        assert_eq!(record.locate_word("CUB"), Some((0, 0, Direction::Diagonal)));
        assert_eq!(record.locate_word("XB"), Some((1, 2, Direction::Vertical)));
        // Reversed and anti-diagonal words are not supported
        assert_eq!(record.locate_word("TAC"), None);
        assert_eq!(record.locate_word("TUW"), None);
        assert_eq!(record.locate_word(""), None);
    }

    #[test]
    fn test_json_field_names() {
        let mut grid = Grid::new(1);
        grid.place(&['A'], 0, 0, Direction::Horizontal);
        let record = BoardRecord::new(&grid, vec![]);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"Board":[{"Letter":"A","Row":0,"Col":0}],"Words":[]}"#);

        let parsed: BoardRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}

/*
board_generator.rs

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

//! Build one board.

use log::debug;
use rand::Rng;
use std::error::Error;
use std::fmt;

use super::board::BoardRecord;
use super::direction::Direction;
use super::placement::{DirectionPolicy, PlacementEngine};
use super::words::WordSelection;
use crate::config::GeneratorConfig;

/// A short word could not be placed, and the board has been discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementFailure {
    /// Word that could not be placed.
    pub word: String,

    /// Number of attempts made for that word.
    pub attempts: usize,
}

impl fmt::Display for PlacementFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "cannot place {} after {} attempts",
            self.word, self.attempts
        )
    }
}

impl Error for PlacementFailure {}

/// [`BoardGenerator`] object.
pub struct BoardGenerator<'a> {
    /// Normalized word list.
    words: &'a [String],

    config: GeneratorConfig,
}

impl<'a> BoardGenerator<'a> {
    /// Create the object.
    pub fn new(words: &'a [String], config: GeneratorConfig) -> Self {
        Self { words, config }
    }

    /// Return the generation parameters.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a board.
    ///
    /// # Errors
    ///
    /// The method returns an error if one of the selected short words cannot be placed. Nothing
    /// is kept from the failed board; the method can be called again to try a new selection.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<BoardRecord, PlacementFailure> {
        let selection: WordSelection = WordSelection::select(self.words, &self.config, rng);
        let mut engine: PlacementEngine =
            PlacementEngine::new(self.config.size, self.config.max_attempts);
        let placed: Vec<String> = self.place_words(selection, &mut engine, rng)?;

        let mut grid = engine.into_grid();
        debug!("Filling {} empty cells", grid.empty_cells());
        grid.fill_empty(rng);
        Ok(BoardRecord::new(&grid, placed))
    }

    /// Place the selected words and return the words that have been placed.
    ///
    /// Short words get a new direction for each attempt and must all be placed. Long words get
    /// one direction each and are skipped when they do not fit.
    fn place_words<R: Rng>(
        &self,
        selection: WordSelection,
        engine: &mut PlacementEngine,
        rng: &mut R,
    ) -> Result<Vec<String>, PlacementFailure> {
        let mut placed: Vec<String> = Vec::with_capacity(selection.short.len());

        for word in selection.short {
            if engine
                .place_word(&word, DirectionPolicy::PerAttempt, rng)
                .is_none()
            {
                debug!("Discarding the board: short word {word} does not fit");
                return Err(PlacementFailure {
                    word,
                    attempts: self.config.max_attempts,
                });
            }
            placed.push(word);
        }

        for word in selection.long {
            if placed.contains(&word) {
                continue;
            }
            let direction: Direction = Direction::random(rng);
            match engine.place_word(&word, DirectionPolicy::Fixed(direction), rng) {
                Some(_) => placed.push(word),
                None => debug!("Skipping long word {word}"),
            }
        }
        Ok(placed)
    }
}

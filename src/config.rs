/*
config.rs

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

//! Run parameters for the board generator.

use std::error::Error;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Default number of rows and columns of a board.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Largest accepted number of rows and columns.
pub const MAX_BOARD_SIZE: usize = 256;

/// Default number of boards to generate during a run.
pub const DEFAULT_BOARD_COUNT: usize = 350;

/// Default number of placement attempts for each word.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Lengths of the short words. All the selected short words must be placed.
pub const SHORT_WORD_LENGTHS: RangeInclusive<usize> = 3..=5;

/// Lengths of the long words. Long words that cannot be placed are skipped.
pub const LONG_WORD_LENGTHS: RangeInclusive<usize> = 6..=8;

/// Number of short words to select for each board.
pub const SHORT_WORD_COUNT: RangeInclusive<usize> = 5..=6;

/// Default word list file.
pub const DEFAULT_WORD_FILE: &str = "newwords.txt";

/// Default directory for the generated boards.
pub const DEFAULT_OUTPUT_DIR: &str = "Boards";

/// Invalid run parameter.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The board must have at least one row and one column.
    EmptyBoard,

    /// The board is larger than [`MAX_BOARD_SIZE`].
    BoardTooLarge(usize),

    /// Each word must get at least one placement attempt.
    NoAttempts,

    /// At least one board must be requested.
    NoBoards,

    /// The short word count range is empty.
    ShortWordCount(usize, usize),

    /// The discarded board limit must allow at least one failure.
    NoFailuresAllowed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "the board size must be at least 1"),
            ConfigError::BoardTooLarge(size) => {
                write!(f, "the board size {size} exceeds the maximum of {MAX_BOARD_SIZE}")
            }
            ConfigError::NoAttempts => {
                write!(f, "the number of placement attempts must be at least 1")
            }
            ConfigError::NoBoards => write!(f, "the number of boards must be at least 1"),
            ConfigError::ShortWordCount(min, max) => {
                write!(f, "invalid short word count range {min}..={max}")
            }
            ConfigError::NoFailuresAllowed => {
                write!(f, "the maximum number of failures must be at least 1")
            }
        }
    }
}

impl Error for ConfigError {}

/// Parameters that control the generation of a single board.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of rows and columns of the board.
    pub size: usize,

    /// Number of placement attempts before giving up on a word.
    pub max_attempts: usize,

    /// Range from which the number of short words is drawn.
    pub short_word_count: RangeInclusive<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            short_word_count: SHORT_WORD_COUNT,
        }
    }
}

impl GeneratorConfig {
    /// Verify that a board can be built with these parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(self.size));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.short_word_count.is_empty() {
            return Err(ConfigError::ShortWordCount(
                *self.short_word_count.start(),
                *self.short_word_count.end(),
            ));
        }
        Ok(())
    }
}

/// Parameters for a complete run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Board generation parameters.
    pub generator: GeneratorConfig,

    /// Number of boards to save.
    pub count: usize,

    /// Word list file.
    pub word_file: PathBuf,

    /// Directory where the boards are saved.
    pub output_dir: PathBuf,

    /// Seed for the random number generator. A random seed is used when not set.
    pub seed: Option<u64>,

    /// Give up after that many discarded boards. Retry forever when not set.
    pub max_failures: Option<usize>,

    /// Print each saved board on the console.
    pub print_boards: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            count: DEFAULT_BOARD_COUNT,
            word_file: PathBuf::from(DEFAULT_WORD_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            max_failures: None,
            print_boards: true,
        }
    }
}

impl Config {
    /// Verify the run parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::NoBoards);
        }
        if self.max_failures == Some(0) {
            return Err(ConfigError::NoFailuresAllowed);
        }
        self.generator.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.count, 350);
        assert_eq!(config.generator.size, 8);
        assert_eq!(config.generator.max_attempts, 100);
        assert_eq!(config.generator.short_word_count, 5..=6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_parameters() {
        let mut config = Config::default();
        config.generator.size = 0;
        assert_eq!(config.validate(), Err(ConfigError::EmptyBoard));

        let mut config = Config::default();
        config.generator.size = MAX_BOARD_SIZE + 1;
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardTooLarge(MAX_BOARD_SIZE + 1))
        );
        config.generator.size = MAX_BOARD_SIZE;
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.generator.max_attempts = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoAttempts));

        let mut config = Config::default();
        config.count = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoBoards));

        let mut config = Config::default();
        config.max_failures = Some(0);
        assert_eq!(config.validate(), Err(ConfigError::NoFailuresAllowed));
        config.max_failures = Some(1);
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.generator.short_word_count = RangeInclusive::new(6, 5);
        assert_eq!(config.validate(), Err(ConfigError::ShortWordCount(6, 5)));
    }
}

/*
application.rs

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

//! Run loop.
//!
//! Boards are generated one after the other until the requested number of boards is saved.
//! A board that cannot be completed is discarded and a new one is generated from scratch.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fmt;
use std::time::Instant;

use crate::config::{Config, ConfigError};
use crate::draw;
use crate::generator::board::BoardRecord;
use crate::generator::board_generator::{BoardGenerator, PlacementFailure};
use crate::saver::board::SaverBoard;
use crate::word_list::{self, WordListError};

/// Type of errors that stop a run.
#[derive(Debug)]
pub enum RunError {
    /// Invalid run parameters.
    Config(ConfigError),

    /// The word list cannot be read.
    WordList(WordListError),

    /// A board cannot be saved.
    Save(Box<dyn Error>),

    /// Too many boards have been discarded. The last failure is provided.
    TooManyFailures(usize, PlacementFailure),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunError::Config(e) => write!(f, "invalid parameters: {e}"),
            RunError::WordList(e) => write!(f, "{e}"),
            RunError::Save(e) => write!(f, "cannot save the board: {e}"),
            RunError::TooManyFailures(n, e) => {
                write!(f, "giving up after {n} discarded boards (last error: {e})")
            }
        }
    }
}

impl Error for RunError {}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        RunError::Config(e)
    }
}

impl From<WordListError> for RunError {
    fn from(e: WordListError) -> Self {
        RunError::WordList(e)
    }
}

/// Statistics for a run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunStats {
    /// Number of saved boards.
    pub saved: usize,

    /// Number of discarded boards.
    pub discarded: usize,

    /// Duration of the run in seconds.
    pub duration: f32,
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let average: f32 = if self.saved > 0 {
            self.duration / self.saved as f32
        } else {
            0.0
        };
        write!(
            f,
            "    saved boards = {}
discarded boards = {}
      total time = {}s
    average time = {}s",
            self.saved, self.discarded, self.duration, average
        )
    }
}

/// [`Application`] object.
pub struct Application {
    config: Config,
}

impl Application {
    /// Create the object.
    ///
    /// # Errors
    ///
    /// Return an error if the parameters are not valid.
    pub fn new(config: Config) -> Result<Self, RunError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Read the word list, and then generate and save the boards.
    pub fn run(&self) -> Result<RunStats, RunError> {
        let words: Vec<String> = word_list::load(&self.config.word_file)?;
        let saver: SaverBoard =
            SaverBoard::new(self.config.output_dir.clone()).map_err(RunError::Save)?;
        let mut rng: StdRng = match self.config.seed {
            Some(seed) => {
                debug!("Random seed = {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        self.generate(&words, &mut rng, |board, number| {
            saver.save_board(board, number).map(|_| ())
        })
    }

    /// Generate boards from the word list until the requested number of boards is saved.
    ///
    /// `save` receives each completed board and its number, starting at 1.
    pub fn generate<R, F>(
        &self,
        words: &[String],
        rng: &mut R,
        mut save: F,
    ) -> Result<RunStats, RunError>
    where
        R: Rng,
        F: FnMut(&BoardRecord, usize) -> Result<(), Box<dyn Error>>,
    {
        let generator: BoardGenerator = BoardGenerator::new(words, self.config.generator.clone());
        let mut stats: RunStats = RunStats::default();
        let start: Instant = Instant::now();

        debug!("Generation parameters: {:?}", generator.config());
        while stats.saved < self.config.count {
            let number: usize = stats.saved + 1;
            info!("Generating board #{number}...");

            match generator.generate(rng) {
                Ok(board) => {
                    save(&board, number).map_err(RunError::Save)?;
                    stats.saved = number;
                    if self.config.print_boards {
                        println!("{}", draw::render_board(&board, number));
                    }
                }
                Err(e) => {
                    stats.discarded += 1;
                    debug!("Skipping board #{number} due to failed generation: {e}");
                    if let Some(max) = self.config.max_failures {
                        if stats.discarded >= max {
                            return Err(RunError::TooManyFailures(stats.discarded, e));
                        }
                    }
                }
            }
        }

        stats.duration = start.elapsed().as_secs_f32();
        info!("{} boards saved, {} discarded", stats.saved, stats.discarded);
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use std::fs;
    use std::path::PathBuf;

    fn quiet_config(count: usize) -> Config {
        Config {
            count,
            seed: Some(10),
            print_boards: false,
            ..Config::default()
        }
    }

    fn word_list(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_generate_requested_count() {
        let app = Application::new(quiet_config(4)).unwrap();
        let words = word_list(&["ANT", "BEE", "COW", "DOG", "EEL", "FOX", "JAGUAR", "PANTHER"]);
        let mut rng = StdRng::seed_from_u64(10);
        let mut numbers: Vec<usize> = Vec::new();

        let stats = app
            .generate(&words, &mut rng, |board, number| {
                assert_eq!(board.cells().len(), 64);
                numbers.push(number);
                Ok(())
            })
            .unwrap();
        assert_eq!(stats.saved, 4);
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_too_many_failures() {
        let config = Config {
            generator: GeneratorConfig {
                size: 2,
                ..GeneratorConfig::default()
            },
            max_failures: Some(3),
            ..quiet_config(1)
        };
        let app = Application::new(config).unwrap();
        let words = word_list(&["CAT", "DOG"]);
        let mut rng = StdRng::seed_from_u64(1);

        let err = app.generate(&words, &mut rng, |_, _| Ok(())).unwrap_err();
        match err {
            RunError::TooManyFailures(n, _) => assert_eq!(n, 3),
            e => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_save_error_stops_run() {
        let app = Application::new(quiet_config(2)).unwrap();
        let words = word_list(&["CAT"]);
        let mut rng = StdRng::seed_from_u64(1);

        let err = app
            .generate(&words, &mut rng, |_, _| Err("disk full".into()))
            .unwrap_err();
        assert!(matches!(err, RunError::Save(_)));
    }

    #[test]
    fn test_invalid_config() {
        let err = Application::new(quiet_config(0)).err().unwrap();
        assert!(matches!(err, RunError::Config(ConfigError::NoBoards)));

        let config = Config {
            max_failures: Some(0),
            ..quiet_config(1)
        };
        let err = Application::new(config).err().unwrap();
        assert!(matches!(err, RunError::Config(ConfigError::NoFailuresAllowed)));
    }

    #[test]
    fn test_run_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let word_file = dir.path().join("words.txt");
        fs::write(&word_file, "cat\ndog\n\nowl\nemu\nfox\nbee\nelephant\n").unwrap();
        let output_dir = dir.path().join("Boards");

        let config = Config {
            word_file,
            output_dir: output_dir.clone(),
            ..quiet_config(3)
        };
        let stats = Application::new(config).unwrap().run().unwrap();
        assert_eq!(stats.saved, 3);

        let mut files: Vec<PathBuf> = fs::read_dir(&output_dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        files.sort();
        assert_eq!(files.len(), 3);
        for path in files {
            let board = SaverBoard::get_board(&path).unwrap();
            assert_eq!(board.cells().len(), 64);
            assert!(board.words().len() >= 5);
        }
    }

    #[test]
    fn test_missing_word_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            word_file: dir.path().join("none.txt"),
            output_dir: dir.path().join("Boards"),
            ..quiet_config(1)
        };
        let err = Application::new(config).unwrap().run().unwrap_err();
        assert!(matches!(err, RunError::WordList(_)));
    }
}

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

//! Save and restore generated boards.
//!
//! Each board is saved in its own file in the output directory.
//! The file name includes the generation time and the board number, for example
//! `wordFind-Board_20250314_093512__12.json`.
//!
//! The saved object is a serialization of the [`BoardRecord`] object in JSON format by
//! using [`serde`].

use chrono::{DateTime, Local};
use log::debug;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::generator::board::BoardRecord;

/// Object to save and restore boards.
pub struct SaverBoard {
    /// Path to the output directory.
    output_dir: PathBuf,
}

impl SaverBoard {
    /// Create a [`SaverBoard`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the boards must be saved.
    /// The directory is created if it does not exist.
    pub fn new(output_dir: PathBuf) -> Result<Self, Box<dyn Error>> {
        fs::create_dir_all(&output_dir)?;
        debug!("Output directory: {output_dir:?}");
        Ok(Self { output_dir })
    }

    /// Return the file name for the given board number.
    pub fn file_name(number: usize, when: &DateTime<Local>) -> String {
        format!(
            "wordFind-Board_{}__{number}.json",
            when.format("%Y%m%d_%H%M%S")
        )
    }

    /// Save the provided [`BoardRecord`] object and return the path to the file.
    pub fn save_board(
        &self,
        board: &BoardRecord,
        number: usize,
    ) -> Result<PathBuf, Box<dyn Error>> {
        let path: PathBuf = self
            .output_dir
            .join(Self::file_name(number, &Local::now()));
        let file: File = File::create(&path)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, board)?;
        writer.flush()?;
        debug!("Board #{number} saved in {path:?}");
        Ok(path)
    }

    /// Read a [`BoardRecord`] object from a file.
    pub fn get_board(path: &Path) -> Result<BoardRecord, Box<dyn Error>> {
        let reader: BufReader<File> = BufReader::new(File::open(path)?);
        let board: BoardRecord = serde_json::from_reader(reader)?;
        Ok(board)
    }
}

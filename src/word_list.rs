/*
word_list.rs

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

//! Read the word list.
//!
//! The word list is a text file with one word per line.
//! Blank lines are ignored, and words are trimmed and converted to uppercase.

use log::debug;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// The word list cannot be read.
#[derive(Debug)]
pub struct WordListError {
    /// Path to the word list file.
    pub path: PathBuf,

    /// Underlying I/O error.
    pub source: io::Error,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "cannot read the word list {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl Error for WordListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Normalize a line from the word list. Return None for blank lines.
fn normalize(line: &str) -> Option<String> {
    let word: &str = line.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_uppercase())
    }
}

/// Read the words from the given reader.
pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words: Vec<String> = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Read the words from the given file.
pub fn load(path: &Path) -> Result<Vec<String>, WordListError> {
    let to_error = |source: io::Error| WordListError {
        path: path.to_path_buf(),
        source,
    };

    let file: File = File::open(path).map_err(to_error)?;
    let words: Vec<String> = read_words(BufReader::new(file)).map_err(to_error)?;
    debug!("Read {} words from {path:?}", words.len());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_read_words_normalizes() {
        let input = "cat\n\n  Dog  \n\t\nelephant\r\n";
        let words = read_words(Cursor::new(input)).unwrap();
        assert_eq!(words, vec!["CAT", "DOG", "ELEPHANT"]);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tiger").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Lion ").unwrap();

        let words = load(file.path()).unwrap();
        assert_eq!(words, vec!["TIGER", "LION"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load(&path).unwrap_err();
        assert_eq!(err.path, path);
        assert_eq!(err.source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("missing.txt"));
    }
}

/*
words.rs

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

//! Select the words to place in a board.
//!
//! The word list is split by length. A few short words are drawn at random; all of them must
//! be placed. All the long words are kept in a random order, and are placed when there is room
//! left.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use crate::config::{GeneratorConfig, LONG_WORD_LENGTHS, SHORT_WORD_LENGTHS};

/// Words selected for a board, in placement order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WordSelection {
    /// Short words. Failing to place one of them discards the board.
    pub short: Vec<String>,

    /// Long words. Failing to place one of them only skips the word.
    pub long: Vec<String>,
}

/// Return the words of the given length range, grouped by increasing length.
///
/// Repeated words are only returned once. Words with characters other than `A` to `Z` are
/// ignored.
fn bucket(words: &[String], lengths: std::ops::RangeInclusive<usize>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pool: Vec<String> = Vec::new();

    for len in lengths {
        for word in words
            .iter()
            .filter(|w| w.len() == len && w.bytes().all(|b| b.is_ascii_uppercase()))
        {
            if seen.insert(word.as_str()) {
                pool.push(word.clone());
            }
        }
    }
    pool
}

impl WordSelection {
    /// Draw the words for a new board.
    pub fn select<R: Rng>(words: &[String], config: &GeneratorConfig, rng: &mut R) -> Self {
        let count: usize = rng.random_range(config.short_word_count.clone());

        let mut short: Vec<String> = bucket(words, SHORT_WORD_LENGTHS);
        short.shuffle(rng);
        short.truncate(count);

        let mut long: Vec<String> = bucket(words, LONG_WORD_LENGTHS);
        long.shuffle(rng);

        debug!(
            "Selected {} short words (target {count}) and {} long words",
            short.len(),
            long.len()
        );
        Self { short, long }
    }
}

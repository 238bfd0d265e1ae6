/*
generator.rs

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

//! Generate word search boards.
//!
//! A board is built in three steps:
//!
//! * [`words::WordSelection`] draws the words from the word list.
//!   Short words (three to five letters) are drawn at random, long words (six to eight
//!   letters) are all kept in a random order.
//! * [`placement::PlacementEngine`] writes the words in a [`grid::Grid`] at random positions.
//!   If a short word cannot be placed, then the board is discarded.
//!   Long words that cannot be placed are skipped.
//! * The remaining cells are filled with random letters, and the grid is converted into a
//!   [`board::BoardRecord`] object, which can be saved.
//!
//! [`board_generator::BoardGenerator::generate`] runs these steps once.
//! The caller retries when it returns an error.

pub mod board;
pub mod board_generator;
pub mod direction;
pub mod grid;
pub mod placement;
pub mod words;

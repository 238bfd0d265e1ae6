/*
lib.rs

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

//! Word search board generator.
//!
//! Boards are square grids of letters that hide words from a word list.
//! See the [`generator`] module for the generation algorithm, and [`application::Application`]
//! for the run loop that saves the boards.

pub mod application;
pub mod config;
pub mod draw;
pub mod generator;
pub mod saver;
pub mod word_list;

/*
draw.rs

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

//! Render boards as text for the console.

use crate::generator::board::BoardRecord;

/// Return the board as lines of letters separated by spaces, preceded by a header line.
pub fn render_board(board: &BoardRecord, number: usize) -> String {
    let mut out: String = format!("Board #{number}:\n");
    for row in board.rows() {
        for letter in row {
            out.push(letter);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

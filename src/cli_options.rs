/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate 350 boards from the `newwords.txt` file into the `Boards` directory:
//!
//! ```
//! $ wordfind
//! ```
//!
//! Generate ten 10x10 boards with a fixed seed, and print some statistics:
//!
//! ```
//! $ wordfind -w animals.txt -o /tmp/boards -c 10 -s 10 --seed 42 --quiet --summary
//! ```

use clap::Parser;
use std::env;
use std::path::PathBuf;

use wordfind::config::{
    Config, DEFAULT_BOARD_COUNT, DEFAULT_BOARD_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_DIR,
    DEFAULT_WORD_FILE, GeneratorConfig, SHORT_WORD_COUNT,
};

/// Generate word search boards from a word list.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Word list file, with one word per line
    #[arg(short, long, default_value = DEFAULT_WORD_FILE)]
    words: PathBuf,

    /// Directory where the boards are saved
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Number of boards to generate
    #[arg(short, long, default_value_t = DEFAULT_BOARD_COUNT)]
    count: usize,

    /// Number of rows and columns of the boards
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Number of placement attempts for each word
    #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after that many discarded boards (at least 1)
    #[arg(long)]
    max_failures: Option<usize>,

    /// Do not print the boards
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Print some statistics after generating the boards
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Options that are not part of the run parameters.
pub struct Options {
    /// Run parameters.
    pub config: Config,

    /// Print the run statistics.
    pub summary: bool,
}

/// Parse the command-line options and initialize the logger.
pub fn parse() -> Options {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    Options {
        config: Config {
            generator: GeneratorConfig {
                size: args.size,
                max_attempts: args.max_attempts,
                short_word_count: SHORT_WORD_COUNT,
            },
            count: args.count,
            word_file: args.words,
            output_dir: args.output,
            seed: args.seed,
            max_failures: args.max_failures,
            print_boards: !args.quiet,
        },
        summary: args.summary,
    }
}

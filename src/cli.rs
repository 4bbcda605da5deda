// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Argument parsing for the `halva` binary.
//!
//! This module only describes the command surface; all byte-level work is
//! delegated to the library (`Encoder` / `Lexicon`) from `main.rs`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "halva",
    about = "Build and inspect blocked front-coded lexicons",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read words (one per line) from standard input and write a lexicon.
    Create {
        /// Path the serialized lexicon is written to.
        path: String,
    },

    /// Read a lexicon and write its words, one per line, to standard output.
    Dump {
        /// Path of the serialized lexicon to read.
        path: String,
    },

    /// Print word count, block count, body size, and bytes/word.
    Stats {
        /// Path of the serialized lexicon to read.
        path: String,
    },
}

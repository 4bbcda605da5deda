// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `halva` CLI: build, dump, and inspect blocked front-coded lexicons.
//!
//! ```bash
//! # Build a lexicon from newline-delimited, sorted, unique words
//! sort -u wordlist.txt | halva create wordlist.halva
//!
//! # Dump it back out, one word per line
//! halva dump wordlist.halva
//!
//! # Inspect its shape without a full dump
//! halva stats wordlist.halva
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use halva::{Encoder, Lexicon};

mod cli;
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Create { path } => create(&path),
        Commands::Dump { path } => dump(&path),
        Commands::Stats { path } => stats(&path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("halva: {msg}");
            ExitCode::FAILURE
        }
    }
}

/// Reads words, one per line, from standard input and writes a lexicon to
/// `path`. Blank lines are skipped; every other line becomes one word, so
/// input must already be sorted and free of duplicates (the encoder
/// enforces strict ordering and reports which line violated it).
fn create(path: &str) -> Result<(), String> {
    let stdin = io::stdin();
    let mut enc = Encoder::new();

    for (lineno, line) in stdin.lock().lines().enumerate() {
        let lineno = lineno + 1;
        let line = line.map_err(|e| format!("create: line {lineno}: {e}"))?;
        if line.is_empty() {
            continue;
        }
        enc.add(line.as_bytes())
            .map_err(|e| format!("create: line {lineno} {line:?}: {e}"))?;
    }

    enc.dump_to_file(path)
        .map_err(|e| format!("create: writing {path:?}: {e}"))
}

/// Reads a lexicon from `path` and writes its words, one per line, to
/// standard output.
fn dump(path: &str) -> Result<(), String> {
    let lex = Lexicon::load_from_file(path).map_err(|e| format!("dump: reading {path:?}: {e}"))?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in &lex {
        out.write_all(&word)
            .and_then(|()| out.write_all(b"\n"))
            .map_err(|e| format!("dump: writing output: {e}"))?;
    }
    out.flush().map_err(|e| format!("dump: writing output: {e}"))
}

/// Reads a lexicon from `path` and prints word count, block count, body
/// size, and average bytes per word.
fn stats(path: &str) -> Result<(), String> {
    let lex = Lexicon::load_from_file(path).map_err(|e| format!("stats: reading {path:?}: {e}"))?;

    let count = lex.len();
    let body_size = lex.body_size();
    let avg = if count == 0 {
        0.0
    } else {
        f64::from(body_size) / f64::from(count)
    };

    println!("words:       {count}");
    println!("blocks:      {}", lex.block_count());
    println!("body bytes:  {body_size}");
    println!("bytes/word:  {avg:.2}");
    Ok(())
}

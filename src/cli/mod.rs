// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the dynseq demonstration program.
//!
//! Two subcommands exercise the store API against sample data: `ints` walks
//! the growth, insert and pop paths on a store of integers, and `people`
//! runs sort, remove, extend, reverse and range copies over fixed-size
//! records.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dynseq",
    about = "Growable sequence store demonstration",
    version
)]
pub struct Cli {
    /// Log store internals (capacity growth, sorts) at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file with store settings, e.g. {"initialCapacity": 4}
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Initial capacity (overrides --config)
    #[arg(long, global = true)]
    pub capacity: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append integers, then exercise insert and pop
    Ints {
        /// Number of integers to append
        #[arg(short = 'n', long, default_value = "10")]
        count: i32,
    },

    /// Sort, filter and slice a store of sample people
    People {
        /// Print the final store as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

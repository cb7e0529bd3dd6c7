// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dynseq::testing::{int_comparator, people_store, person_by_id, sample_people, Person};
use dynseq::{SequenceStore, StoreConfig};

mod cli;
use cli::display::{self, field, number, outcome, pad_left, row, section_bot, section_top};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Install the subscriber. `DYNSEQ_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("DYNSEQ_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<StoreConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path))?;
            serde_json::from_str(&text).with_context(|| format!("invalid config {}", path))?
        }
        None => StoreConfig::default(),
    };
    if let Some(capacity) = cli.capacity {
        config.initial_capacity = capacity;
    }
    info!(initial_capacity = config.initial_capacity, "store config loaded");
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Commands::Ints { count } => run_ints(&config, count),
        Commands::People { json } => run_people(&config, json),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INTEGERS
// ═══════════════════════════════════════════════════════════════════════════

fn run_ints(config: &StoreConfig, count: i32) -> Result<()> {
    let mut store = config.build(Some(int_comparator()))?;

    section_top("APPEND");
    field("empty", &store.is_empty().to_string());
    for i in 0..count {
        let before = store.capacity();
        store.append(i)?;
        if store.capacity() != before {
            row(&format!(
                "   grew {} → {} after {} elements",
                number(before),
                number(store.capacity()),
                store.len()
            ));
        }
    }
    field("empty", &store.is_empty().to_string());
    for (i, value) in store.iter().enumerate() {
        row(&format!("   [{}] = {}", pad_left(&i.to_string(), 3), value));
    }
    print_summary(&store);

    section_top("INSERT / POP");
    store.insert(0, 99)?;
    field("insert(0)", &format!("99, size {}", number(store.len())));
    let popped = store.pop(0)?;
    field("pop(0)", &format!("{}, size {}", popped, number(store.len())));
    let past_end = store.len();
    field("get(len)", &outcome(&store.get(past_end)));
    section_bot();

    dynseq::destroy(Some(store));
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// PEOPLE
// ═══════════════════════════════════════════════════════════════════════════

fn run_people(config: &StoreConfig, json: bool) -> Result<()> {
    let people = sample_people();
    let mut store: SequenceStore<Person> = config.build(Some(person_by_id()))?;
    store.extend_from_slice(&people)?;

    store.sort()?;
    let probe = Person::new(2, 0, 0.0);
    let index = store.index_of(&probe)?;
    store.remove(&probe)?;

    let extra = people_store(&[Person::new(7, 44, 1.91), Person::new(3, 12, 1.40)])?;
    store.extend(&extra)?;
    store.reverse();
    let head = store.copy_range(0, 3.min(store.len()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&store)?);
        return Ok(());
    }

    section_top("PEOPLE");
    field("index_of(2)", &format!("{:?}", index));
    field("contains(2)", &store.contains(&probe)?.to_string());
    for person in &store {
        row(&format_person(person));
    }
    print_summary(&store);

    section_top("COPY RANGE [0, 3)");
    for person in &head {
        row(&format_person(person));
    }
    print_summary(&head);
    Ok(())
}

fn format_person(p: &Person) -> String {
    format!(
        "   id {}  age {}  height {:.2} m",
        pad_left(&p.id.to_string(), 4),
        pad_left(&p.age.to_string(), 3),
        p.height
    )
}

fn print_summary<T: Copy>(store: &SequenceStore<T>) {
    field("size", &number(store.len()));
    field("capacity", &number(store.capacity()));
    field(
        "buffer",
        &display::format_size(store.capacity() * store.stride()),
    );
    section_bot();
}

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use libtangut_core::{Config, KeyedIndex, Lexicon};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::hash::Hash;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Load the vocabulary sources, print build statistics and optionally dump
/// one of the built indexes as JSON.
#[derive(Parser)]
#[command(name = "inspect_vocab")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Atomic vocabulary source (overrides config)
    #[arg(long)]
    atomic: Option<PathBuf>,

    /// Compound vocabulary source (overrides config)
    #[arg(long)]
    compound: Option<PathBuf>,

    /// Index to dump
    #[arg(long, value_enum)]
    dump: Option<IndexKind>,

    /// Only dump this key
    #[arg(long, requires = "dump")]
    key: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum IndexKind {
    Symbols,
    Words,
    Forward,
    Reverse,
}

fn dump<K, V>(index: &KeyedIndex<K, V>, key: Option<&str>) -> Result<String>
where
    K: Borrow<str> + Hash + Eq + Ord,
    V: Serialize,
{
    match key {
        Some(k) => match index.get(k) {
            Some(value) => Ok(serde_json::to_string_pretty(value)?),
            None => bail!("key '{}' not found", k),
        },
        None => {
            let all: BTreeMap<&str, &V> = index
                .sorted_entries()
                .into_iter()
                .map(|(k, v)| (<K as Borrow<str>>::borrow(k), v))
                .collect();
            Ok(serde_json::to_string_pretty(&all)?)
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => Config::load_toml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(path) = args.atomic {
        cfg.atomic_vocab = path;
    }
    if let Some(path) = args.compound {
        cfg.compound_vocab = path;
    }

    let lexicon = Lexicon::load(&cfg)?;
    let stats = lexicon.stats();
    println!("Atomic sources:   {}", cfg.atomic_vocab.display());
    println!("Compound sources: {}", cfg.compound_vocab.display());
    println!(
        "Records: {} atomic, {} compound, {} skipped, {} missing phonetics",
        stats.atomic_records, stats.compound_records, stats.skipped_records, stats.missing_phonetics
    );
    println!(
        "Indexes: {} symbols (max {} scalars), {} word keys, {} forward, {} reverse",
        stats.symbols,
        lexicon.symbols().max_key_len(),
        stats.words,
        stats.cross_script,
        lexicon.cross_script().reverse().len()
    );

    let key = args.key.as_deref();
    let out = match args.dump {
        None => return Ok(()),
        Some(IndexKind::Symbols) => dump(lexicon.symbols(), key)?,
        Some(IndexKind::Words) => dump(lexicon.words(), key)?,
        Some(IndexKind::Forward) => dump(lexicon.cross_script().forward(), key)?,
        Some(IndexKind::Reverse) => dump(lexicon.cross_script().reverse(), key)?,
    };
    println!("{}", out);
    Ok(())
}

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use vocab_drill_gen::{
    build_entries, entries_to_json, parse_items, parse_words, Config, Item, Session, Word,
};

fn read_items(path: &Path) -> Result<Vec<Item>> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_items(&data).with_context(|| format!("parsing {}", path.display()))
}

fn read_words(path: &Path) -> Result<Vec<Word>> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_words(&data).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .parse_default_env()
        .init();
    info!("configuration: {:?}", config);

    let items = read_items(&config.items)?;
    let words = read_words(&config.lexicon)?;
    info!("loaded {} items and {} words", items.len(), words.len());

    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    let entries = build_entries(&items, &words, config.count, &mut rng);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&entries_to_json(&entries))?);
        return Ok(());
    }

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());
    if config.quiz {
        session.run_quiz(&entries, &mut rng)?;
    } else {
        session.run_flashcards(&entries, &mut rng)?;
    }
    Ok(())
}

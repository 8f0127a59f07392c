//! End-to-end demo of entry generation.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Parsing**: the bundled `demos/data/items.txt` and
//!    `demos/data/lexicon.txt` are parsed into items and words.
//! 2. **Fixed seed**: two batches with the same seed are identical.
//! 3. **Missing words**: the same items against an empty lexicon show `???`.
//! 4. **Corpus store**: items and words uploaded under a corpus name, rendered
//!    as JSON and HTML, then deleted.

use rand::rngs::StdRng;
use rand::SeedableRng;

use vocab_drill_gen::{
    corpus_to_html, entries_to_json, generate_entries, parse_items, parse_words, CorpusStore,
    Entry, StudyRequest,
};

const ITEMS: &str = include_str!("data/items.txt");
const LEXICON: &str = include_str!("data/lexicon.txt");

fn print_entries(title: &str, entries: &[Entry]) {
    println!("━━ {title} ━━");
    for (i, e) in entries.iter().enumerate() {
        println!("  {:>2}. {:<30} {}", i + 1, e.question, e.answer);
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    let items = parse_items(ITEMS)?;
    let words = parse_words(LEXICON)?;
    println!("Parsed {} items and {} words.\n", items.len(), words.len());

    // ── Fixed seed ─────────────────────────────────────────────────────────
    let request = StudyRequest::new(5).with_seed(42);
    let a = generate_entries(&items, &words, request);
    let b = generate_entries(&items, &words, request);
    print_entries("Seed 42", &a);
    println!("  Same seed, same batch: {}\n", a == b);

    // ── Missing words ──────────────────────────────────────────────────────
    let bare = generate_entries(&items, &[], StudyRequest::new(items.len()).with_seed(42));
    print_entries("Empty lexicon", &bare);

    // ── Corpus store ───────────────────────────────────────────────────────
    let store = CorpusStore::new();
    store.save_items("mandarin", &items)?;
    store.save_words("mandarin", &words)?;
    let mut rng = StdRng::seed_from_u64(7);
    let entries = store.build_entries("mandarin", 3, &mut rng)?;
    println!("{}", serde_json::to_string_pretty(&entries_to_json(&entries))?);
    println!();
    println!("{}", corpus_to_html(&store.load("mandarin")?));
    println!("Deleted {} records.", store.delete("mandarin")?);
    Ok(())
}

//! # vocab_drill_gen
//!
//! Randomised question/answer drills for vocabulary study.
//!
//! The library reads two tab-separated data sources, a list of *items*
//! (prompt, answer, characters) and a *lexicon* of words tagged by part of
//! speech, and produces a random batch of flashcard or quiz entries.
//!
//! ## How it works
//!
//! 1. Parse items with [`parse_items`] and words with [`parse_words`].
//! 2. Call [`generate_entries`] (or [`build_entries`] with your own RNG). The
//!    engine picks items in random order without repeats. Items whose prompt
//!    contains placeholders such as `:noun` or `:noun2` get a random word of
//!    that part of speech, and the same choice is carried into the answer.
//! 3. Present the returned [`Entry`] values with a [`Session`], render them
//!    with [`entries_to_json`], or keep whole corpora in a [`CorpusStore`].
//!
//! ## Quick start
//!
//! ```rust
//! use vocab_drill_gen::{generate_entries, parse_items, parse_words, StudyRequest};
//!
//! let items = parse_items("Hello :pron\tNi hao :pron\t你好\n").unwrap();
//! let words = parse_words("you\tni\tpron\t你\n").unwrap();
//!
//! let entries = generate_entries(&items, &words, StudyRequest::new(10).with_seed(42));
//! assert_eq!(entries[0].question, "Hello you");
//! assert_eq!(entries[0].answer, "Ni hao ni");
//! ```
//!
//! ## Missing data
//!
//! A placeholder whose part of speech has no words becomes `???` in both
//! question and answer. An answer that names a placeholder the prompt never
//! bound makes that item unusable; it is logged and skipped.

pub mod config;
pub mod corpus;
pub mod render;
pub mod session;
pub mod study_engine;

// Convenience re-exports so callers can use `vocab_drill_gen::build_entries`
// directly without reaching into `study_engine::`.
pub use config::Config;
pub use corpus::{Corpus, CorpusStore};
pub use render::{corpus_to_html, entries_to_json};
pub use session::{QuizScore, Session, SessionError};
pub use study_engine::{
    build_entries, format_items, format_words, generate_entries, parse_items, parse_words,
    Entry, Item, Lexicon, StudyError, StudyRequest, Word,
};

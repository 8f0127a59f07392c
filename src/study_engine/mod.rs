//! Core study engine: records in, question/answer entries out.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: items, words, entries, study requests |
//! | `error`     | [`StudyError`] for parse and expansion failures |
//! | `records`   | Tab-separated parsing and formatting of items and words |
//! | `lexicon`   | Words grouped by part of speech |
//! | `template`  | Template detection, placeholder expansion, binding replay |
//! | `generator` | `build_entries()` / `generate_entries()`: random sampling of items |

pub mod error;
pub mod generator;
pub mod lexicon;
pub mod models;
pub mod records;
pub mod template;

pub use error::StudyError;
pub use generator::{build_entries, generate_entries};
pub use lexicon::Lexicon;
pub use models::{Entry, Item, StudyRequest, Word};
pub use records::{format_items, format_words, parse_items, parse_tsv, parse_words};
pub use template::{apply_bindings, choose_word, instantiate_template, lookup_key, Bindings, PromptKind};

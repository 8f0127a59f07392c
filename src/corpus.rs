//! In-memory corpus store: items and words grouped under a corpus name.
//!
//! Records are keyed within their corpus (items by prompt text, words by
//! prompt form), so uploading a record with an existing key replaces it.
//! Deleting a corpus removes everything stored under it.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::study_engine::{build_entries, Entry, Item, StudyError, Word};

/// Everything stored under one corpus name, in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub name: String,
    pub items: Vec<Item>,
    pub words: Vec<Word>,
}

#[derive(Debug, Default)]
struct Records {
    items: BTreeMap<String, Item>,
    words: BTreeMap<String, Word>,
}

/// Shared handle; clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    inner: Arc<Mutex<HashMap<String, Records>>>,
}

impl CorpusStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Records>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `items` under `corpus`, returning how many were written.
    pub fn save_items(&self, corpus: &str, items: &[Item]) -> Result<usize, StudyError> {
        require_name(corpus)?;
        let mut map = self.lock();
        let records = map.entry(corpus.to_string()).or_default();
        for item in items {
            records.items.insert(item.prompt_text.clone(), item.clone());
        }
        info!("saved {} items to corpus {corpus:?}", items.len());
        Ok(items.len())
    }

    /// Store `words` under `corpus`, returning how many were written.
    pub fn save_words(&self, corpus: &str, words: &[Word]) -> Result<usize, StudyError> {
        require_name(corpus)?;
        let mut map = self.lock();
        let records = map.entry(corpus.to_string()).or_default();
        for word in words {
            records.words.insert(word.prompt_form.clone(), word.clone());
        }
        info!("saved {} words to corpus {corpus:?}", words.len());
        Ok(words.len())
    }

    /// Load a corpus; an unknown name loads as an empty corpus.
    pub fn load(&self, corpus: &str) -> Result<Corpus, StudyError> {
        require_name(corpus)?;
        let map = self.lock();
        let (items, words) = match map.get(corpus) {
            Some(r) => (
                r.items.values().cloned().collect(),
                r.words.values().cloned().collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };
        Ok(Corpus { name: corpus.to_string(), items, words })
    }

    /// Remove every record under `corpus`, returning the number removed.
    pub fn delete(&self, corpus: &str) -> Result<usize, StudyError> {
        require_name(corpus)?;
        let removed = self
            .lock()
            .remove(corpus)
            .map(|r| r.items.len() + r.words.len())
            .unwrap_or(0);
        info!("deleted {removed} records from corpus {corpus:?}");
        Ok(removed)
    }

    /// Remove the item and the word stored under `key` in `corpus`, returning
    /// how many records went away (0, 1 or 2).
    pub fn delete_record(&self, corpus: &str, key: &str) -> Result<usize, StudyError> {
        require_name(corpus)?;
        if key.is_empty() {
            return Err(StudyError::MissingRecordKey);
        }
        let mut map = self.lock();
        let removed = match map.get_mut(corpus) {
            Some(r) => {
                usize::from(r.items.remove(key).is_some()) + usize::from(r.words.remove(key).is_some())
            }
            None => 0,
        };
        info!("deleted {removed} records under {key:?} from corpus {corpus:?}");
        Ok(removed)
    }

    /// Build up to `n` entries from the named corpus.
    pub fn build_entries<R: Rng>(&self, corpus: &str, n: usize, rng: &mut R) -> Result<Vec<Entry>, StudyError> {
        let c = self.load(corpus)?;
        Ok(build_entries(&c.items, &c.words, n, rng))
    }
}

fn require_name(corpus: &str) -> Result<(), StudyError> {
    if corpus.is_empty() {
        Err(StudyError::MissingCorpusName)
    } else {
        Ok(())
    }
}

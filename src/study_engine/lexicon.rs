use std::collections::HashMap;

use crate::study_engine::models::Word;

/// Words grouped by part-of-speech tag.
///
/// Input order is kept within each group and duplicates are not removed, so a
/// word listed twice is twice as likely to be picked.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    groups: HashMap<String, Vec<Word>>,
}

impl Lexicon {
    pub fn from_words(words: &[Word]) -> Self {
        let mut groups: HashMap<String, Vec<Word>> = HashMap::new();
        for word in words {
            groups
                .entry(word.part_of_speech.clone())
                .or_default()
                .push(word.clone());
        }
        Lexicon { groups }
    }

    /// All words tagged `part_of_speech`; empty when the tag is unknown.
    pub fn choices(&self, part_of_speech: &str) -> &[Word] {
        self.groups
            .get(part_of_speech)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct part-of-speech tags.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One drillable fact.
///
/// `prompt_text` is either literal or a template containing `:`-marked
/// placeholder tokens; `answer_text` may refer back to the same placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub prompt_text: String,
    pub answer_text: String,
    pub characters: String,
}

/// One lexicon entry used to fill template placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub prompt_form: String,
    pub answer_form: String,
    pub characters: String,
    pub part_of_speech: String,
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A finished question/answer pair ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRequest {
    /// Upper bound on the number of entries returned.
    pub count: usize,
    /// `Some(seed)` reproduces the exact same batch; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl StudyRequest {
    /// Request `count` entries from an entropy-seeded source.
    pub fn new(count: usize) -> Self {
        StudyRequest { count, rng_seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for StudyRequest {
    fn default() -> Self {
        StudyRequest::new(10)
    }
}

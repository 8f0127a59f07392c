use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::study_engine::{
    error::StudyError,
    lexicon::Lexicon,
    models::{Entry, Item, StudyRequest, Word},
    template::{apply_bindings, instantiate_template, PromptKind},
};

/// Turn one item into an entry, expanding it when it is a template.
pub fn entry<R: Rng>(item: &Item, lexicon: &Lexicon, rng: &mut R) -> Result<Entry, StudyError> {
    match PromptKind::classify(&item.prompt_text) {
        PromptKind::Literal => Ok(Entry {
            question: item.prompt_text.clone(),
            answer: item.answer_text.clone(),
        }),
        PromptKind::Template => {
            let (question, bindings) = instantiate_template(&item.prompt_text, lexicon, rng);
            let answer = apply_bindings(&item.answer_text, &bindings)?;
            Ok(Entry { question, answer })
        }
    }
}

/// Build up to `n` entries from a random selection of `items`.
///
/// Items are visited in a random permutation, each at most once. An item
/// whose answer cannot be expanded is logged and skipped without counting
/// toward `n`, so the walk continues until `n` entries exist or the items run
/// out. Entries are returned in the order they were built.
pub fn build_entries<R: Rng>(items: &[Item], words: &[Word], n: usize, rng: &mut R) -> Vec<Entry> {
    let lexicon = Lexicon::from_words(words);
    let mut perm: Vec<usize> = (0..items.len()).collect();
    perm.shuffle(rng);

    let limit = n.min(items.len());
    let mut result = Vec::with_capacity(limit);
    for idx in perm {
        if result.len() == limit {
            break;
        }
        let item = &items[idx];
        match entry(item, &lexicon, rng) {
            Ok(e) => result.push(e),
            Err(err) => warn!("skipping item {:?}: {err}", item.prompt_text),
        }
    }
    result
}

/// Entry point: seed the random source from the request and build entries.
pub fn generate_entries(items: &[Item], words: &[Word], request: StudyRequest) -> Vec<Entry> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    build_entries(items, words, request.count, &mut rng)
}

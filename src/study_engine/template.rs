//! Template detection, placeholder expansion and binding replay.
//!
//! A template is prompt text containing at least one whitespace-delimited
//! token that starts with [`MARKER`], e.g. `"Hello :pron"`. Each such token is
//! a placeholder whose variable name is the token without the marker.
//!
//! ## Variables and lookup keys
//!
//! The lexicon group for a placeholder is its variable name with any trailing
//! numeric suffix removed, so `:noun`, `:noun2` and `:noun.1` all draw from
//! `noun` while binding independently. The answer text refers to placeholders
//! by their full variable name.

use std::collections::HashMap;

use log::debug;
use rand::Rng;

use crate::study_engine::{error::StudyError, lexicon::Lexicon};

/// Prefix that marks a token as a placeholder.
pub const MARKER: char = ':';

/// Substituted for placeholders whose part of speech has no words.
pub const MISSING: &str = "???";

/// Variable name → substituted answer-language text, for one item.
pub type Bindings = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Literal,
    Template,
}

impl PromptKind {
    pub fn classify(text: &str) -> Self {
        if text.split_whitespace().any(|t| variable_name(t).is_some()) {
            PromptKind::Template
        } else {
            PromptKind::Literal
        }
    }
}

/// Variable name of a placeholder token, `None` for ordinary tokens.
///
/// A lone marker with nothing after it is ordinary text.
fn variable_name(token: &str) -> Option<&str> {
    token.strip_prefix(MARKER).filter(|v| !v.is_empty())
}

/// Part-of-speech tag a variable draws from: the name minus a trailing run of
/// digits and dots (`one2` → `one`, `noun.1` → `noun`).
pub fn lookup_key(variable: &str) -> &str {
    let stem = variable.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    if stem.is_empty() {
        variable
    } else {
        stem
    }
}

/// Expand a single prompt token.
///
/// Ordinary tokens come back unchanged. Placeholders are replaced by the
/// prompt form of a randomly chosen word, and the word's answer form is bound
/// to the variable. A later placeholder with the same variable overwrites the
/// earlier binding.
pub fn choose_word<R: Rng>(
    token: &str,
    lexicon: &Lexicon,
    bindings: &mut Bindings,
    rng: &mut R,
) -> String {
    let Some(var) = variable_name(token) else {
        return token.to_string();
    };
    let choices = lexicon.choices(lookup_key(var));
    let (shown, bound) = if choices.is_empty() {
        (MISSING.to_string(), MISSING.to_string())
    } else {
        let word = &choices[rng.gen_range(0..choices.len())];
        (word.prompt_form.clone(), word.answer_form.clone())
    };
    if let Some(previous) = bindings.insert(var.to_string(), bound) {
        debug!("variable {var:?} bound twice, dropping {previous:?}");
    }
    shown
}

/// Expand every placeholder in `template`, returning the prompt and the
/// bindings to replay into the answer.
pub fn instantiate_template<R: Rng>(
    template: &str,
    lexicon: &Lexicon,
    rng: &mut R,
) -> (String, Bindings) {
    let mut bindings = Bindings::new();
    let expanded = template
        .split_whitespace()
        .map(|t| choose_word(t, lexicon, &mut bindings, rng))
        .collect::<Vec<_>>()
        .join(" ");
    (expanded, bindings)
}

/// Replace each placeholder in `text` with its bound value.
///
/// No lexicon lookup happens here: every placeholder must name a variable
/// bound during prompt expansion, and that binding must be non-empty.
pub fn apply_bindings(text: &str, bindings: &Bindings) -> Result<String, StudyError> {
    let mut out = Vec::new();
    for token in text.split_whitespace() {
        let Some(var) = variable_name(token) else {
            out.push(token);
            continue;
        };
        match bindings.get(var) {
            None => {
                return Err(StudyError::UnboundVariable {
                    text: text.to_string(),
                    variable: var.to_string(),
                })
            }
            Some(value) if value.is_empty() => {
                return Err(StudyError::EmptyBinding { variable: var.to_string() })
            }
            Some(value) => out.push(value.as_str()),
        }
    }
    Ok(out.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study_engine::models::Word;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn oink_lexicon() -> Lexicon {
        Lexicon::from_words(&[Word {
            prompt_form: "oink".into(),
            answer_form: "OINK".into(),
            characters: String::new(),
            part_of_speech: "one".into(),
        }])
    }

    #[test]
    fn choose_word_cases() {
        let lexicon = oink_lexicon();
        let mut rng = StdRng::seed_from_u64(1);
        // (token, expected output, expected binding)
        let cases: [(&str, &str, Option<(&str, &str)>); 5] = [
            ("foo",    "foo",  None),
            (":zero",  "???",  Some(("zero", "???"))),
            (":one",   "oink", Some(("one", "OINK"))),
            (":one2",  "oink", Some(("one2", "OINK"))),
            (":one.3", "oink", Some(("one.3", "OINK"))),
        ];
        for (token, want, binding) in cases {
            let mut bs = Bindings::new();
            let got = choose_word(token, &lexicon, &mut bs, &mut rng);
            assert_eq!(got, want, "output for {token}");
            match binding {
                None => assert!(bs.is_empty(), "{token}: wanted no bindings, got {bs:?}"),
                Some((k, v)) => {
                    assert_eq!(bs.len(), 1, "{token}: {bs:?}");
                    assert_eq!(bs.get(k).map(String::as_str), Some(v), "{token}: {bs:?}");
                }
            }
        }
    }

    #[test]
    fn repeated_variable_keeps_last_choice() {
        let lexicon = Lexicon::from_words(&[
            Word {
                prompt_form: "cat".into(),
                answer_form: "māo".into(),
                characters: String::new(),
                part_of_speech: "noun".into(),
            },
            Word {
                prompt_form: "dog".into(),
                answer_form: "gǒu".into(),
                characters: String::new(),
                part_of_speech: "noun".into(),
            },
        ]);
        let answer_of = |prompt: &str| {
            lexicon
                .choices("noun")
                .iter()
                .find(|w| w.prompt_form == prompt)
                .map(|w| w.answer_form.clone())
        };
        for seed in [1u64, 42, 999, 7] {
            let mut rng = StdRng::seed_from_u64(seed);
            let (q, bs) = instantiate_template(":noun :noun", &lexicon, &mut rng);
            let shown: Vec<&str> = q.split(' ').collect();
            assert_eq!(shown.len(), 2);
            assert_eq!(bs.len(), 1, "seed={seed}: {bs:?}");
            let second = answer_of(shown[1]);
            assert_eq!(bs.get("noun").cloned(), second, "seed={seed}");
            assert_eq!(apply_bindings(":noun", &bs).ok(), second, "seed={seed}");
        }
    }

    #[test]
    fn lookup_key_strips_numeric_suffixes() {
        assert_eq!(lookup_key("noun"), "noun");
        assert_eq!(lookup_key("noun2"), "noun");
        assert_eq!(lookup_key("noun12"), "noun");
        assert_eq!(lookup_key("noun.1"), "noun");
        assert_eq!(lookup_key("noun.1.2"), "noun");
        assert_eq!(lookup_key("42"), "42");
    }

    #[test]
    fn classify_requires_a_marked_token() {
        assert_eq!(PromptKind::classify("Hello :pron"), PromptKind::Template);
        assert_eq!(PromptKind::classify(":noun"), PromptKind::Template);
        assert_eq!(PromptKind::classify("Hello there"), PromptKind::Literal);
        assert_eq!(PromptKind::classify("time: 5 o'clock"), PromptKind::Literal);
        assert_eq!(PromptKind::classify("a : b"), PromptKind::Literal);
        assert_eq!(PromptKind::classify(""), PromptKind::Literal);
    }

    #[test]
    fn instantiate_normalises_whitespace() {
        let mut rng = StdRng::seed_from_u64(7);
        let (q, bs) = instantiate_template("  say   :one\t now ", &oink_lexicon(), &mut rng);
        assert_eq!(q, "say oink now");
        assert_eq!(bs.get("one").map(String::as_str), Some("OINK"));
    }

    #[test]
    fn apply_bindings_substitutes_each_variable() {
        let bs: Bindings = [("a".to_string(), "x".to_string()), ("b2".to_string(), "y".to_string())]
            .into_iter()
            .collect();
        assert_eq!(apply_bindings(":b2 and :a :a", &bs).unwrap(), "y and x x");
        assert_eq!(apply_bindings("plain  text", &bs).unwrap(), "plain text");
    }

    #[test]
    fn apply_bindings_rejects_unbound_variable() {
        let err = apply_bindings("Ni hao :noun", &Bindings::new()).unwrap_err();
        assert_eq!(
            err,
            StudyError::UnboundVariable { text: "Ni hao :noun".into(), variable: "noun".into() }
        );
    }

    #[test]
    fn apply_bindings_rejects_empty_value() {
        let bs: Bindings = [("v".to_string(), String::new())].into_iter().collect();
        let err = apply_bindings(":v", &bs).unwrap_err();
        assert_eq!(err, StudyError::EmptyBinding { variable: "v".into() });
    }

    #[test]
    fn answer_suffix_must_match_exactly() {
        let mut rng = StdRng::seed_from_u64(3);
        let (_, bs) = instantiate_template(":one2", &oink_lexicon(), &mut rng);
        assert!(apply_bindings(":one2", &bs).is_ok());
        assert!(matches!(
            apply_bindings(":one", &bs),
            Err(StudyError::UnboundVariable { .. })
        ));
    }
}

//! Tab-separated record parsing and formatting.
//!
//! ## Format
//!
//! One record per line, fields separated by tabs. Runs of adjacent tabs count
//! as a single separator, so columns may be padded for alignment. Blank lines
//! and lines whose first non-blank character is `#` are ignored.
//!
//! | Record | Fields |
//! |--------|--------|
//! | [`Item`] | prompt_text, answer_text, characters |
//! | [`Word`] | prompt_form, answer_form, part_of_speech, characters |

use crate::study_engine::{
    error::StudyError,
    models::{Item, Word},
};

const DELIMITER: char = '\t';
const COMMENT: char = '#';

/// Split `data` into records of exactly `fields_per_line` trimmed fields.
///
/// Fails on the first line with the wrong field count; nothing is returned
/// for the lines that parsed before it.
pub fn parse_tsv(data: &str, fields_per_line: usize) -> Result<Vec<Vec<String>>, StudyError> {
    let mut records = Vec::new();
    for (idx, raw) in data.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT) {
            continue;
        }
        let fields: Vec<String> = raw
            .split(DELIMITER)
            .filter(|f| !f.is_empty())
            .map(|f| f.trim().to_string())
            .collect();
        if fields.len() != fields_per_line {
            return Err(StudyError::MalformedRecord {
                line: idx + 1,
                expected: fields_per_line,
                actual: fields.len(),
            });
        }
        records.push(fields);
    }
    Ok(records)
}

/// Parse items from three-field lines: `prompt_text  answer_text  characters`.
pub fn parse_items(data: &str) -> Result<Vec<Item>, StudyError> {
    let records = parse_tsv(data, 3)?;
    Ok(records
        .into_iter()
        .map(|fields| {
            let [prompt_text, answer_text, characters]: [String; 3] = take_fields(fields);
            Item { prompt_text, answer_text, characters }
        })
        .collect())
}

/// Parse a lexicon from four-field lines:
/// `prompt_form  answer_form  part_of_speech  characters`.
pub fn parse_words(data: &str) -> Result<Vec<Word>, StudyError> {
    let records = parse_tsv(data, 4)?;
    Ok(records
        .into_iter()
        .map(|fields| {
            let [prompt_form, answer_form, part_of_speech, characters]: [String; 4] =
                take_fields(fields);
            Word { prompt_form, answer_form, characters, part_of_speech }
        })
        .collect())
}

/// Serialize items back into the format accepted by [`parse_items`].
pub fn format_items(items: &[Item]) -> String {
    items
        .iter()
        .map(|it| format_line(&[it.prompt_text.as_str(), it.answer_text.as_str(), it.characters.as_str()]))
        .collect()
}

/// Serialize words back into the format accepted by [`parse_words`].
pub fn format_words(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| {
            format_line(&[
                w.prompt_form.as_str(),
                w.answer_form.as_str(),
                w.part_of_speech.as_str(),
                w.characters.as_str(),
            ])
        })
        .collect()
}

/// Empty fields are written as a single space so that adjacent tabs do not
/// collapse on the way back in; parsing trims the space away again.
fn format_line(fields: &[&str]) -> String {
    let mut line = fields
        .iter()
        .map(|f| if f.is_empty() { " " } else { *f })
        .collect::<Vec<_>>()
        .join("\t");
    line.push('\n');
    line
}

/// Move a field vector whose length `parse_tsv` already checked into an array.
fn take_fields<const N: usize>(fields: Vec<String>) -> [String; N] {
    let mut it = fields.into_iter();
    std::array::from_fn(|_| it.next().unwrap_or_default())
}

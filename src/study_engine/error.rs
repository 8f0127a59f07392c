use thiserror::Error;

/// Failures raised by record parsing and template expansion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StudyError {
    #[error("line {line}: need {expected} parts per line, got {actual}")]
    MalformedRecord {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("applying bindings to {text:?}: no binding for {variable:?}")]
    UnboundVariable { text: String, variable: String },

    #[error("empty string bound to {variable:?}")]
    EmptyBinding { variable: String },

    #[error("need corpus")]
    MissingCorpusName,

    #[error("need key")]
    MissingRecordKey,
}

use std::path::PathBuf;

/// Failures that stem from the content of the inputs rather than from I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("record {pmid} carries {count} DOI article identifiers, expected at most one")]
    AmbiguousDoi { pmid: String, count: usize },

    #[error("MEDLINE record #{index} is missing required field {tag}")]
    MissingField { index: usize, tag: &'static str },

    #[error("unparseable date {0:?}: expected \"YYYY Mon DD\", \"YYYY Mon\" or \"YYYY\"")]
    BadDate(String),

    #[error("preprint row {line} has {found} columns, expected at least {expected}")]
    ShortPreprintRow {
        line: u64,
        found: usize,
        expected: usize,
    },

    #[error("output directory {} does not exist", .0.display())]
    MissingOutputDir(PathBuf),
}

//! Associating papers with the people who wrote them.

use crate::{datafile::PaperRow, roster::Person};

/// How a person's NCBI id is looked for in a paper's author list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive substring search. `jk123` also hits `jk1234`.
    #[default]
    Loose,
    /// One comma-separated author name must equal the id, ignoring case.
    Strict,
}

impl MatchMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            MatchMode::Strict
        } else {
            MatchMode::Loose
        }
    }

    pub fn matches(self, ncbi_id: &str, authors: &str) -> bool {
        let authors = authors.strip_suffix('.').unwrap_or(authors).to_lowercase();
        let ncbi_id = ncbi_id.trim().to_lowercase();
        match self {
            MatchMode::Loose => authors.contains(&ncbi_id),
            MatchMode::Strict => authors
                .split(',')
                .any(|name| name.trim().trim_end_matches('.') == ncbi_id),
        }
    }
}

/// Papers in `papers` authored by `person`, in data-file order.
pub fn papers_for<'a>(
    person: &Person,
    papers: &'a [PaperRow],
    mode: MatchMode,
) -> Vec<&'a PaperRow> {
    let Some(ncbi_id) = person.ncbi_id.as_deref() else {
        log::debug!("{} has no ncbi_id; no papers listed", person.id);
        return Vec::new();
    };
    papers
        .iter()
        .filter(|p| mode.matches(ncbi_id, &p.authors))
        .collect()
}

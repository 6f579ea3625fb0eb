//! Unified publication records: what the site lists, whether it came from the
//! MEDLINE export or only from the preprint table.

use serde::{Deserialize, Serialize};

use crate::{
    date::normalize_date,
    identifier,
    medline::CitationRecord,
    preprint::{PreprintRow, PreprintTable},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Only known from the preprint table.
    Preprint,
    /// Indexed in PubMed and read from the MEDLINE export.
    Ncbi,
}

/// Secondary link to a preprint of the same work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprintLink {
    pub url: String,
    pub journal: String,
}

impl From<&PreprintRow> for PreprintLink {
    fn from(row: &PreprintRow) -> Self {
        PreprintLink {
            url: row.url.clone(),
            journal: row.journal.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub journal: String,
    /// Date as given by the source.
    pub date: String,
    pub authors: String,
    /// Primary link; empty for standalone preprints.
    pub link: String,
    pub preprint: Option<PreprintLink>,
    /// `YYYY-MM-DD` form of `date`.
    pub jekyll_date: String,
    pub kind: Kind,
}

impl Publication {
    /// A preprint with no published counterpart yet.
    pub fn from_preprint(row: &PreprintRow) -> anyhow::Result<Self> {
        Ok(Publication {
            id: identifier::scrub(&format!(
                "{}.{}",
                row.journal.replace(' ', "_"),
                row.journal_id
            )),
            title: row.title.clone(),
            journal: row.journal.clone(),
            date: row.date.clone(),
            authors: row.authors.clone(),
            link: String::new(),
            preprint: Some(PreprintLink::from(row)),
            jekyll_date: normalize_date(&row.date)?,
            kind: Kind::Preprint,
        })
    }

    /// A MEDLINE citation, cross-referenced with its preprint when the table has one.
    pub fn from_citation(
        record: &CitationRecord,
        preprints: &PreprintTable,
    ) -> anyhow::Result<Self> {
        let canonical = identifier::resolve(record)?;
        let preprint = preprints.lookup(&canonical.id).map(PreprintLink::from);
        Ok(Publication {
            id: canonical.id,
            title: record.title.trim_matches('.').to_string(),
            journal: record.journal.clone(),
            date: record.date.clone(),
            authors: record.authors.join(", "),
            link: canonical.url,
            preprint,
            jekyll_date: normalize_date(&record.date)?,
            kind: Kind::Ncbi,
        })
    }

    /// The one-line citation shown under a title.
    pub fn excerpt(&self) -> String {
        excerpt(&self.journal, &self.date, &self.authors)
    }
}

/// The one-line citation used on both the publications and the people pages.
pub fn excerpt(journal: &str, date: &str, authors: &str) -> String {
    format!("__{journal}__. {date}. {authors}.")
}

/// Standalone preprints first, then citations in export order.
///
/// The first bad date or ambiguous identifier aborts the merge.
pub fn merge(
    preprints: &PreprintTable,
    citations: &[CitationRecord],
) -> anyhow::Result<Vec<Publication>> {
    let mut publications = Vec::with_capacity(preprints.standalone.len() + citations.len());
    for row in &preprints.standalone {
        publications.push(Publication::from_preprint(row)?);
    }
    for record in citations {
        publications.push(Publication::from_citation(record, preprints)?);
    }

    log::info!("read {} medline records", citations.len());
    log::info!(
        "merged into {} publication entries (expected {})",
        publications.len(),
        preprints.standalone.len() + citations.len()
    );
    Ok(publications)
}

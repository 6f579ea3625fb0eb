//! Canonical identifiers for citations: a DOI when the record has one,
//! otherwise its PubMed id.

use crate::{error::Error, medline::CitationRecord};

pub mod doi;

use doi::Doi;

const PMID_URLBASE: &str = "https://www.ncbi.nlm.nih.gov/pubmed";

/// The identifier a publication is known by on the site, and where it links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalId {
    /// Filename-safe form of the identifier; also names the paper's image.
    pub id: String,
    pub url: String,
}

/// Put an identifier (e.g. a DOI) into a filename-compatible form.
pub fn scrub(id: &str) -> String {
    id.replace('/', ".")
}

/// Pick the canonical identifier of `record`.
///
/// More than one DOI among the article identifiers is an error: there is no
/// way to tell which one the site should link.
pub fn resolve(record: &CitationRecord) -> Result<CanonicalId, Error> {
    let dois: Vec<Doi<'_>> = record
        .article_ids
        .iter()
        .filter_map(|aid| Doi::from_article_id(aid))
        .collect();

    match dois.as_slice() {
        [] => {
            log::debug!("{}: no DOI, using pmid", record.pmid);
            Ok(CanonicalId {
                id: record.pmid.clone(),
                url: format!("{PMID_URLBASE}/{}", record.pmid),
            })
        }
        [doi] => {
            log::debug!("{}: doi {}", record.pmid, doi.as_str());
            Ok(CanonicalId {
                id: scrub(doi.as_str()),
                url: doi.to_url(),
            })
        }
        many => Err(Error::AmbiguousDoi {
            pmid: record.pmid.clone(),
            count: many.len(),
        }),
    }
}

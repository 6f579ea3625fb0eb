/// A DOI taken from a MEDLINE article identifier such as `10.1038/nature08506 [doi]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doi<'a> {
    name: &'a str,
}

const DOI_URLBASE: &str = "https://doi.org";

impl<'a> Doi<'a> {
    /// Recognise a DOI-typed article identifier.
    ///
    /// Any `AID` value mentioning "doi" counts, and the DOI itself is the first
    /// whitespace-separated token (the bracketed type tag follows it).
    pub fn from_article_id(aid: &'a str) -> Option<Self> {
        if !aid.to_ascii_lowercase().contains("doi") {
            return None;
        }
        let name = aid.split_whitespace().next()?;
        Some(Doi { name })
    }

    pub fn as_str(&self) -> &'a str {
        self.name
    }

    pub fn to_url(&self) -> String {
        format!("{DOI_URLBASE}/{}", self.name)
    }
}

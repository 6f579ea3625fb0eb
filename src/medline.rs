//! Reader for MEDLINE-format exports (the `.nbib` / "text file (MEDLINE
//! format)" download offered by PubMed and My Bibliography).
//!
//! A record is a run of `TAG - value` lines; values longer than one line
//! continue on lines indented by six spaces (blank ones included), and
//! records are separated by empty lines or a new `PMID`. Tags may repeat
//! (`AU`, `AID`, ...).

use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

/// A citation pulled out of the export, with the fields the site needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationRecord {
    pub pmid: String,
    pub title: String,
    /// Journal title abbreviation (`TA`).
    pub journal: String,
    /// Date of publication (`DP`) exactly as exported.
    pub date: String,
    pub authors: Vec<String>,
    /// Raw article identifiers (`AID`), e.g. `10.1038/nature123 [doi]`.
    pub article_ids: Vec<String>,
}

/// Tag -> values, in the order the values appeared.
#[derive(Debug, Default)]
struct RawRecord {
    fields: HashMap<String, Vec<String>>,
}

impl RawRecord {
    fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn take_all(&mut self, tag: &str) -> Vec<String> {
        self.fields.remove(tag).unwrap_or_default()
    }

    fn take_first(&mut self, index: usize, tag: &'static str) -> Result<String, Error> {
        self.take_all(tag)
            .into_iter()
            .next()
            .ok_or(Error::MissingField { index, tag })
    }
}

impl CitationRecord {
    fn from_raw(index: usize, mut raw: RawRecord) -> Result<Self, Error> {
        Ok(CitationRecord {
            pmid: raw.take_first(index, "PMID")?,
            title: raw.take_first(index, "TI")?,
            journal: raw.take_first(index, "TA")?,
            date: raw.take_first(index, "DP")?,
            authors: raw.take_all("AU"),
            article_ids: raw.take_all("AID"),
        })
    }
}

static TAG_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z][A-Z0-9]{1,3}) *- ?(.*)$").unwrap());

/// Parse every record in `text`, in file order.
pub fn parse(text: &str) -> anyhow::Result<Vec<CitationRecord>> {
    let mut raws = Vec::new();
    let mut current = RawRecord::default();
    let mut last_tag: Option<String> = None;

    for (lineno, line) in text.lines().enumerate() {
        let indented = line.starts_with(' ') || line.starts_with('\t');
        let line = line.trim_end();

        // A whitespace-only line inside a field (paragraph breaks in `AB`)
        // continues that field; only a truly empty line ends the record.
        if indented && let Some(tag) = last_tag.as_deref() {
            if !line.is_empty()
                && let Some(value) = current.fields.get_mut(tag).and_then(|v| v.last_mut())
            {
                value.push(' ');
                value.push_str(line.trim_start());
            }
            continue;
        }

        if line.is_empty() {
            if !current.is_empty() {
                raws.push(std::mem::take(&mut current));
            }
            last_tag = None;
            continue;
        }

        if indented {
            anyhow::bail!("line {}: continuation without a field", lineno + 1);
        }

        let Some(caps) = TAG_LINE_RE.captures(line) else {
            log::debug!("skipping unrecognised MEDLINE line {}: {line:?}", lineno + 1);
            continue;
        };
        let tag = caps[1].to_string();
        let value = caps[2].trim().to_string();
        if tag == "PMID" && !current.is_empty() {
            raws.push(std::mem::take(&mut current));
        }
        current.fields.entry(tag.clone()).or_default().push(value);
        last_tag = Some(tag);
    }
    if !current.is_empty() {
        raws.push(current);
    }

    let records = raws
        .into_iter()
        .enumerate()
        .map(|(i, raw)| CitationRecord::from_raw(i + 1, raw))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Read and parse the export at `path`.
pub fn load(path: &Path) -> anyhow::Result<Vec<CitationRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read MEDLINE export {}", path.display()))?;
    parse(&text).with_context(|| format!("failed to parse MEDLINE export {}", path.display()))
}

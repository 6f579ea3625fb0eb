//! CSV copy of the merged publication list.
//!
//! This is the only thing the people pages read from the publications run,
//! so the column set and order are fixed.

use std::{fs::File, io, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::publication::{Kind, PreprintLink, Publication};

pub const HEADER: [&str; 10] = [
    "id",
    "title",
    "journal",
    "date",
    "authors",
    "link",
    "preprint_url",
    "preprint_journal",
    "jekyll_date",
    "type",
];

/// One line of the data file. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRow {
    pub id: String,
    pub title: String,
    pub journal: String,
    pub date: String,
    pub authors: String,
    pub link: String,
    pub preprint_url: String,
    pub preprint_journal: String,
    pub jekyll_date: String,
    #[serde(rename = "type")]
    pub kind: Kind,
}

impl From<&Publication> for PaperRow {
    fn from(p: &Publication) -> Self {
        let (preprint_url, preprint_journal) = match &p.preprint {
            Some(link) => (link.url.clone(), link.journal.clone()),
            None => (String::new(), String::new()),
        };
        PaperRow {
            id: p.id.clone(),
            title: p.title.clone(),
            journal: p.journal.clone(),
            date: p.date.clone(),
            authors: p.authors.clone(),
            link: p.link.clone(),
            preprint_url,
            preprint_journal,
            jekyll_date: p.jekyll_date.clone(),
            kind: p.kind,
        }
    }
}

impl From<PaperRow> for Publication {
    fn from(row: PaperRow) -> Self {
        let preprint = if row.preprint_url.is_empty() && row.preprint_journal.is_empty() {
            None
        } else {
            Some(PreprintLink {
                url: row.preprint_url,
                journal: row.preprint_journal,
            })
        };
        Publication {
            id: row.id,
            title: row.title,
            journal: row.journal,
            date: row.date,
            authors: row.authors,
            link: row.link,
            preprint,
            jekyll_date: row.jekyll_date,
            kind: row.kind,
        }
    }
}

pub fn write<W: io::Write>(sink: W, publications: &[Publication]) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);
    writer.write_record(HEADER)?;
    for p in publications {
        writer.serialize(PaperRow::from(p))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read<R: io::Read>(source: R) -> anyhow::Result<Vec<PaperRow>> {
    let mut reader = csv::Reader::from_reader(source);
    let rows = reader
        .deserialize::<PaperRow>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn save(path: &Path, publications: &[Publication]) -> anyhow::Result<()> {
    log::info!("outputting structured papers to {} as well", path.display());
    let file = File::create(path)
        .with_context(|| format!("failed to create data file {}", path.display()))?;
    write(file, publications)
        .with_context(|| format!("failed to write data file {}", path.display()))
}

pub fn load(path: &Path) -> anyhow::Result<Vec<PaperRow>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open paper file {}", path.display()))?;
    let rows =
        read(file).with_context(|| format!("failed to parse paper file {}", path.display()))?;
    log::info!("read {} papers", rows.len());
    Ok(rows)
}

//! The hand-maintained preprint table.
//!
//! Columns are positional: NCBI id (DOI or PMID of the published version,
//! empty if there is none yet), journal, journal id, authors, title, date,
//! URL. The first row is a header and is skipped.

use std::{collections::HashMap, fs::File, path::Path};

use anyhow::Context;

use crate::{error::Error, identifier::scrub};

const COLUMNS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprintRow {
    pub ncbi_id: String,
    pub journal: String,
    pub journal_id: String,
    pub authors: String,
    pub title: String,
    pub date: String,
    pub url: String,
}

/// Preprint rows split by whether they already map onto a published record.
#[derive(Debug, Default)]
pub struct PreprintTable {
    /// Rows with no NCBI id, in file order.
    pub standalone: Vec<PreprintRow>,
    /// Rows keyed by their scrubbed NCBI id.
    pub by_id: HashMap<String, PreprintRow>,
}

impl PreprintTable {
    pub fn len(&self) -> usize {
        self.standalone.len() + self.by_id.len()
    }

    pub fn lookup(&self, canonical_id: &str) -> Option<&PreprintRow> {
        self.by_id.get(canonical_id)
    }

    fn insert(&mut self, row: PreprintRow) {
        let id = scrub(&row.ncbi_id);
        if id.is_empty() {
            self.standalone.push(row);
        } else if let Some(previous) = self.by_id.insert(id.clone(), row) {
            log::warn!(
                "preprint id {id} listed more than once; keeping the later row over {:?}",
                previous.title
            );
        }
    }
}

fn row_from_record(record: &csv::StringRecord) -> Result<PreprintRow, Error> {
    if record.len() < COLUMNS {
        return Err(Error::ShortPreprintRow {
            line: record.position().map(|p| p.line()).unwrap_or_default(),
            found: record.len(),
            expected: COLUMNS,
        });
    }
    let col = |i: usize| record.get(i).unwrap_or_default().to_string();
    Ok(PreprintRow {
        ncbi_id: col(0),
        journal: col(1),
        journal_id: col(2),
        authors: col(3),
        title: col(4),
        date: col(5),
        url: col(6),
    })
}

/// Read a preprint table from any CSV source.
pub fn read<R: std::io::Read>(source: R) -> anyhow::Result<PreprintTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let header = reader.headers()?.clone();
    log::debug!("preprint: skipped header: {:?}", header.iter().collect::<Vec<_>>());

    let mut table = PreprintTable::default();
    for record in reader.records() {
        table.insert(row_from_record(&record?)?);
    }
    Ok(table)
}

pub fn load(path: &Path) -> anyhow::Result<PreprintTable> {
    let file = File::open(path)
        .with_context(|| format!("failed to open preprint table {}", path.display()))?;
    let table =
        read(file).with_context(|| format!("failed to parse preprint table {}", path.display()))?;
    log::info!(
        "read {} preprint records, {} with ncbi ids",
        table.len(),
        table.by_id.len()
    );
    Ok(table)
}

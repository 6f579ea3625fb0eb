//! The lab roster (`_data/authors.yml`): person id -> biography fields.

use std::{collections::BTreeMap, fs::File, path::Path};

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct Entry {
    name: String,
    title: String,
    bio: String,
    #[serde(rename = "type")]
    kind: String,
    avatar: String,
    #[serde(default)]
    ncbi_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Roster key; also the name of the generated page.
    pub id: String,
    pub name: String,
    /// Job title.
    pub title: String,
    pub bio: String,
    pub kind: String,
    pub avatar: String,
    /// How the person appears in PubMed author lists, e.g. `Keiser MJ`.
    pub ncbi_id: Option<String>,
}

impl Person {
    fn new(id: String, entry: Entry) -> Self {
        Person {
            id,
            name: entry.name,
            title: entry.title,
            bio: entry.bio,
            kind: entry.kind,
            avatar: entry.avatar,
            ncbi_id: entry.ncbi_id.filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Parse a roster document; people come back ordered by id.
pub fn read<R: std::io::Read>(source: R) -> anyhow::Result<Vec<Person>> {
    let entries: BTreeMap<String, Entry> = serde_yaml::from_reader(source)?;
    Ok(entries
        .into_iter()
        .map(|(id, entry)| Person::new(id, entry))
        .collect())
}

pub fn load(path: &Path) -> anyhow::Result<Vec<Person>> {
    let file =
        File::open(path).with_context(|| format!("failed to open roster {}", path.display()))?;
    read(file).with_context(|| format!("failed to parse roster {}", path.display()))
}

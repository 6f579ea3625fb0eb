use std::{fs, path::Path};

use anyhow::Context;

use crate::{
    datafile,
    error::Error,
    logging,
    people::{self, MatchMode},
    render, roster,
};

/// Write one `<id>.md` page per roster entry into `outdir`.
pub fn run(
    roster_path: &Path,
    outdir: &Path,
    paperfile: Option<&Path>,
    mode: MatchMode,
) -> anyhow::Result<()> {
    if !outdir.is_dir() {
        return Err(Error::MissingOutputDir(outdir.to_path_buf()).into());
    }

    let members = roster::load(roster_path)?;
    let papers = match paperfile {
        Some(path) => datafile::load(path)?,
        None => Vec::new(),
    };

    for person in &members {
        let listed = people::papers_for(person, &papers, mode);
        log::debug!("{}: {} papers", person.id, listed.len());
        let path = outdir.join(format!("{}.md", person.id));
        fs::write(&path, render::render_person(person, &listed))
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    let outdir = fs::canonicalize(outdir).unwrap_or_else(|_| outdir.to_path_buf());
    log::info!("wrote {} people to {}", members.len(), outdir.display());
    logging::summary(members.len(), "people", &outdir.display().to_string());
    Ok(())
}

use std::{fs, num::NonZeroUsize, path::Path};

use anyhow::Context;

use crate::{datafile, logging, medline, preprint, publication, render};

/// Merge the export and the preprint table, then write the data file (when
/// asked for) and the page. Nothing is written unless every record merges.
pub fn run(
    medline_path: &Path,
    preprints_path: &Path,
    outfile: &Path,
    data_path: Option<&Path>,
    batch_size: NonZeroUsize,
) -> anyhow::Result<()> {
    let preprints = preprint::load(preprints_path)?;
    let citations = medline::load(medline_path)?;
    let publications = publication::merge(&preprints, &citations)?;

    let page = render::render_page(&publications, batch_size);

    // Written before the page, so a failing data file leaves no page behind.
    if let Some(path) = data_path {
        datafile::save(path, &publications)?;
    }
    fs::write(outfile, page)
        .with_context(|| format!("failed to write {}", outfile.display()))?;

    logging::summary(
        publications.len(),
        "publications",
        &outfile.display().to_string(),
    );
    Ok(())
}

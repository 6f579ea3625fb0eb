//! The publications page: a splash layout whose body is a series of
//! `feature_row` blocks, each holding up to `batch_size` papers.

use std::num::NonZeroUsize;

use crate::publication::{PreprintLink, Publication};

pub const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(3).unwrap();

const IMAGE_DIR: &str = "/assets/images/papers";
const IMAGE_EXT: &str = "jpg";

fn page_header(rows: &str) -> String {
    format!(
        r#"---
# this is autogenerated: do not edit
title: Publications
layout: splash
permalink: /publications/
header:
   image: /assets/images/bar-network.png
intro:
    - title: Publications
{rows}
---
{{% include feature_row id="intro" type="center" %}}
"#
    )
}

fn row_block(index: usize, items: &str) -> String {
    format!("feature_row{index}:\n{items}\n")
}

fn row_include(index: usize) -> String {
    format!("\n{{% include feature_row_paper.html id=\"feature_row{index}\" %}}\n")
}

fn preprint_button(link: &PreprintLink) -> String {
    format!(
        r#"    url2: "{url}"
    btn2_label: >-
        <i class="fas fa-file-alt"></i> {journal}
    btn2_class: "btn--info"
"#,
        url = link.url,
        journal = link.journal,
    )
}

fn paper_item(p: &Publication) -> String {
    let preprint = p.preprint.as_ref().map(preprint_button).unwrap_or_default();
    format!(
        r#"
  - image_path: {IMAGE_DIR}/{id}.{IMAGE_EXT}
    alt: "{title}"
    title: "{title}"
    excerpt: "{excerpt}"
    url: "{url}"
    btn_label: >-
        <i class="fas fa-file-alt"></i> doi
    btn_class: "btn--primary"
{preprint}"#,
        id = p.id,
        title = p.title,
        excerpt = p.excerpt(),
        url = p.link,
    )
}

/// One `feature_rowN` block per batch of papers; the last batch may be short.
pub fn row_blocks(publications: &[Publication], batch_size: NonZeroUsize) -> Vec<String> {
    publications
        .chunks(batch_size.get())
        .enumerate()
        .map(|(i, batch)| {
            let items: String = batch.iter().map(paper_item).collect();
            row_block(i, &items)
        })
        .collect()
}

/// The complete `publications.md` document.
pub fn render_page(publications: &[Publication], batch_size: NonZeroUsize) -> String {
    let blocks = row_blocks(publications, batch_size);
    let mut page = page_header(&blocks.concat());
    for i in 0..blocks.len() {
        page.push_str(&row_include(i));
    }
    page
}

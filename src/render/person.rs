//! Per-person biography pages for the `_people` collection.

use crate::{datafile::PaperRow, publication::excerpt, roster::Person};

const PAPERS_LINK: &str = "/publications/";

/// Front matter loses its escaping for `:`, so swap it for a hyphen.
pub fn yml_sanitize(text: &str) -> String {
    text.replace(':', "-")
}

fn paper_entry(paper: &PaperRow) -> String {
    let citation = excerpt(&paper.journal, &paper.date, &paper.authors);
    format!(
        r#"
    - title: {title}
      excerpt: {excerpt}
      link: "{PAPERS_LINK}"
"#,
        title = yml_sanitize(&paper.title),
        excerpt = yml_sanitize(&citation),
    )
}

pub fn render_person(person: &Person, papers: &[&PaperRow]) -> String {
    let papers: String = papers.iter().map(|p| paper_entry(p)).collect();
    format!(
        r#"---
# this is autogenerated: do not edit
title: {name}
author: {id}
layout: author-bio
jobtitle: {title}
bio: {bio}
type: {kind}
header:
  teaser: {avatar}
papers: {papers}
---"#,
        name = yml_sanitize(&person.name),
        id = person.id,
        title = yml_sanitize(&person.title),
        bio = yml_sanitize(&person.bio),
        kind = yml_sanitize(&person.kind),
        avatar = yml_sanitize(&person.avatar),
    )
}

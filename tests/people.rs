mod common;

use std::fs;

use common::{MEDLINE, PREPRINTS, ROSTER, labpages, stderr_of, write};
use predicates::prelude::*;

fn paper_file(dir: &std::path::Path) -> std::path::PathBuf {
    let medline = write(dir, "mybib.nbib", MEDLINE);
    let preprints = write(dir, "preprints.csv", PREPRINTS);
    let data = dir.join("papers.csv");
    labpages()
        .arg("publications")
        .arg(&medline)
        .arg(&preprints)
        .arg("-o")
        .arg(dir.join("publications.md"))
        .arg("-d")
        .arg(&data)
        .assert()
        .success();
    data
}

#[test]
fn writes_one_page_per_person() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let roster = write(dir.path(), "authors.yml", ROSTER);
    let papers = paper_file(dir.path());
    let out = dir.path().join("_people");
    fs::create_dir(&out)?;

    let output = labpages()
        .arg("people")
        .arg(&roster)
        .arg("-o")
        .arg(&out)
        .arg("-p")
        .arg(&papers)
        .output()?;
    assert!(output.status.success(), "stderr=\n{}", stderr_of(&output));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("read 3 papers"), "{stderr}");
    assert!(stderr.contains("wrote 3 people to"), "{stderr}");

    let keiser = fs::read_to_string(out.join("mkeiser.md"))?;
    assert!(keiser.starts_with("---\n# this is autogenerated: do not edit\ntitle: Michael Keiser\nauthor: mkeiser\n"));
    assert!(keiser.contains("bio: Interests- drugs and targets\n"));
    assert!(keiser.contains("  teaser: /assets/images/people/keiser.jpg\n"));
    assert_eq!(keiser.matches("    - title: ").count(), 2);
    assert!(keiser.contains("    - title: A standalone preprint\n"));
    assert!(keiser.contains("      excerpt: __Nature__. 2009 Nov 12. Keiser MJ, Setola V, Irwin JJ.\n"));
    assert!(keiser.ends_with("link: \"/publications/\"\n\n---"));

    // "Jk123" is a substring of "Jk1234 X".
    let jk = fs::read_to_string(out.join("jk.md"))?;
    assert_eq!(jk.matches("    - title: ").count(), 1);
    assert!(jk.contains("A record known only by its PubMed id"));

    let alum = fs::read_to_string(out.join("alum.md"))?;
    assert!(alum.contains("\npapers: \n---"));
    Ok(())
}

#[test]
fn strict_mode_drops_partial_matches() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let roster = write(dir.path(), "authors.yml", ROSTER);
    let papers = paper_file(dir.path());
    let out = dir.path().join("_people");
    fs::create_dir(&out)?;

    labpages()
        .arg("people")
        .arg(&roster)
        .arg("-o")
        .arg(&out)
        .arg("-p")
        .arg(&papers)
        .arg("--strict")
        .assert()
        .success();

    let jk = fs::read_to_string(out.join("jk.md"))?;
    assert!(jk.contains("\npapers: \n---"));
    let keiser = fs::read_to_string(out.join("mkeiser.md"))?;
    assert_eq!(keiser.matches("    - title: ").count(), 2);
    Ok(())
}

#[test]
fn without_paper_file_lists_are_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let roster = write(dir.path(), "authors.yml", ROSTER);
    fs::create_dir(dir.path().join("people_test"))?;

    labpages()
        .current_dir(dir.path())
        .arg("people")
        .arg(&roster)
        .assert()
        .success()
        .stderr(predicate::str::contains("✓ 3 people"));

    for id in ["mkeiser", "jk", "alum"] {
        let page = fs::read_to_string(dir.path().join("people_test").join(format!("{id}.md")))?;
        assert!(page.contains("\npapers: \n---"), "{id}");
    }
    Ok(())
}

#[test]
fn output_directory_must_exist() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let roster = write(dir.path(), "authors.yml", ROSTER);

    labpages()
        .current_dir(dir.path())
        .arg("people")
        .arg(&roster)
        .arg("-o")
        .arg("nowhere")
        .assert()
        .failure()
        .stderr(predicate::str::contains("output directory nowhere does not exist"));
    Ok(())
}

#[test]
fn roster_missing_a_field_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let roster = write(dir.path(), "authors.yml", "someone:\n  name: A\n");
    fs::create_dir(dir.path().join("people_test"))?;

    labpages()
        .current_dir(dir.path())
        .arg("people")
        .arg(&roster)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse roster"));
    assert!(!dir.path().join("people_test").join("someone.md").exists());
    Ok(())
}

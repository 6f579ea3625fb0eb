#![allow(dead_code)]

use std::{fs, path::Path};

use assert_cmd::Command;

pub const PREPRINTS: &str = "\
ncbi_id,journal,journal_id,authors,title,date,url
,bioRxiv,2020.03.03.975000,\"Lim H, Keiser MJ\",A standalone preprint,2020 Mar 3,https://www.biorxiv.org/content/10.1101/2020.03.03.975000
10.1038/nature08506,ChemRxiv,8506,\"Keiser MJ, Setola V\",Predicting new targets (preprint),2009 Jan,https://chemrxiv.org/8506
";

pub const MEDLINE: &str = "\
PMID- 19881490
OWN - NLM
TI  - Predicting new molecular targets for known drugs.
AU  - Keiser MJ
AU  - Setola V
AU  - Irwin JJ
AID - 10.1038/nature08506 [doi]
AID - nature08506 [pii]
DP  - 2009 Nov 12
TA  - Nature

PMID- 30000001
OWN - NLM
TI  - A record known only by its PubMed id.
AU  - Jk1234 X
DP  - 2018 Jun
TA  - J Chem Inf Model
";

pub const ROSTER: &str = "\
mkeiser:
  name: Michael Keiser
  title: Principal Investigator
  bio: \"Interests: drugs and targets\"
  type: pi
  avatar: /assets/images/people/keiser.jpg
  ncbi_id: Keiser MJ
jk:
  name: J K
  title: Student
  bio: Short id.
  type: student
  avatar: /assets/images/people/jk.jpg
  ncbi_id: Jk123
alum:
  name: No Papers
  title: Alumnus
  bio: Gone.
  type: alumni
  avatar: /assets/images/people/alum.jpg
";

pub fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

pub fn labpages() -> Command {
    let mut cmd = Command::cargo_bin("labpages").expect("binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8(strip_ansi_escapes::strip(&output.stderr)).expect("utf8 stderr")
}

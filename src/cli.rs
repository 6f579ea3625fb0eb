use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Parser, Subcommand};

use crate::render::DEFAULT_BATCH_SIZE;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log every identifier decision
    #[arg(long, global = true)]
    pub debug: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge a MEDLINE export with the preprint table into the publications page
    Publications {
        /// My Bibliography export in MEDLINE format
        #[arg(value_name = "MEDLINE")]
        medline: PathBuf,
        /// Hand-maintained preprint table (CSV)
        #[arg(value_name = "PREPRINTS")]
        preprints: PathBuf,
        /// Output page
        #[arg(short, long, value_name = "FILE", default_value = "publications.md")]
        outfile: PathBuf,
        /// Also write the merged records to FILE (CSV)
        #[arg(short, long, value_name = "FILE")]
        datafile: Option<PathBuf>,
        /// Papers per feature row
        #[arg(long, value_name = "N", default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: NonZeroUsize,
    },
    /// Regenerate the people pages from the roster
    People {
        /// Roster of lab members (YAML)
        #[arg(value_name = "ROSTER")]
        roster: PathBuf,
        /// Existing directory to write `<id>.md` pages into
        #[arg(short, long, value_name = "DIR", default_value = "people_test")]
        outdir: PathBuf,
        /// Data file written by `publications --datafile`
        #[arg(short, long, value_name = "FILE")]
        paperfile: Option<PathBuf>,
        /// Require an exact author-name match instead of a substring match
        #[arg(long)]
        strict: bool,
    },
}

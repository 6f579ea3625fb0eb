use clap::Parser;

use crate::{
    cli::{Cli, Command},
    people::MatchMode,
};

mod cli;
mod cmd;
mod datafile;
mod date;
mod error;
mod identifier;
mod logging;
mod medline;
mod people;
mod preprint;
mod publication;
mod render;
mod roster;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init_logging(args.quiet, args.debug);

    match args.command {
        Command::Publications {
            medline,
            preprints,
            outfile,
            datafile,
            batch_size,
        } => cmd::publications::run(
            &medline,
            &preprints,
            &outfile,
            datafile.as_deref(),
            batch_size,
        ),
        Command::People {
            roster,
            outdir,
            paperfile,
            strict,
        } => cmd::people::run(
            &roster,
            &outdir,
            paperfile.as_deref(),
            MatchMode::from_strict(strict),
        ),
    }
}

use std::io::Write;

use owo_colors::{OwoColorize, Stream};

/// Plain `[LEVEL] message` lines on stderr. `RUST_LOG` overrides the level
/// picked from the flags.
pub fn init_logging(quiet: bool, debug: bool) {
    let default_level = if debug {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            let label = match record.level() {
                log::Level::Error => "ERROR",
                log::Level::Warn => "WARN ",
                log::Level::Info => "INFO ",
                log::Level::Debug => "DEBUG",
                log::Level::Trace => "TRACE",
            };
            writeln!(buf, "[{label}] {}", record.args())
        })
        .init();
}

/// One-line run summary, e.g. `✓ 12 publications → publications.md`.
pub fn summary(count: usize, what: &str, destination: &str) {
    eprintln!(
        "{} {count} {what} → {destination}",
        "✓".if_supports_color(Stream::Stderr, |t| t.green())
    );
}

//! Logger setup.
//!
//! Normal output is message-only on stdout so informational lines
//! (`Writing ...`) read like plain program output. `--verbose` adds
//! timestamps, levels and module targets. `RUST_LOG` still applies on top.

use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.filter_level(level).target(Target::Stdout);

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} [{} {}] {}",
                buf.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder.parse_env("RUST_LOG");
    builder.init();
}

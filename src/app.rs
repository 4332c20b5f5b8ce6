use crate::cli::Cli;
use anyhow::Context;
use clap::Parser;
use log::debug;
use marker_splice::error::SpliceError;
use marker_splice::remove_block;
use std::io::{self, Write};

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli {
        file,
        start_marker,
        end_marker,
    } = Cli::parse();

    debug!(
        "Removing block from {} between {:?} and {:?}",
        file.display(),
        start_marker,
        end_marker
    );

    let report = match remove_block(&file, &start_marker, &end_marker) {
        Ok(removal) => removal.to_string(),
        // A missing marker is reported, not raised; the file stays untouched.
        Err(err @ SpliceError::MarkersNotFound { .. }) => err.to_string(),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to remove block from {}", file.display()))
        }
    };

    writeln!(io::stdout(), "{report}")?;
    Ok(())
}

//! Defines custom error types for the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a block removal fails.
pub enum SpliceError {
    #[error(
        "Markers not found: start={}, end={}",
        describe_search(.start),
        describe_search(.end)
    )]
    MarkersNotFound {
        /// Character offset of the start marker, if it was found.
        start: Option<usize>,
        /// Character offset of the end marker, if it was found.
        end: Option<usize>,
    },

    #[error("Failed to read input file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to file: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn describe_search(result: &Option<usize>) -> String {
    match result {
        Some(offset) => offset.to_string(),
        None => "not found".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::SpliceError;

    #[test]
    fn markers_not_found_reports_both_results() {
        let err = SpliceError::MarkersNotFound {
            start: None,
            end: Some(12),
        };
        assert_eq!(err.to_string(), "Markers not found: start=not found, end=12");
    }

    #[test]
    fn markers_not_found_when_both_missing() {
        let err = SpliceError::MarkersNotFound {
            start: None,
            end: None,
        };
        assert_eq!(
            err.to_string(),
            "Markers not found: start=not found, end=not found"
        );
    }
}

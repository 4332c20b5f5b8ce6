//! `marker-splice` removes a block of text from a file. The block starts at
//! the first occurrence of a start marker and runs up to, but not including,
//! the first occurrence of an end marker.
//!
//! The file is read whole, spliced in memory and overwritten in place. If
//! either marker is missing the file is left untouched.
//!
//! # Example
//!
//! ```rust
//! use std::str::FromStr;
//!
//! use marker_splice::TextDocument;
//!
//! # fn demo() -> Result<(), marker_splice::error::SpliceError> {
//! let mut document = TextDocument::from_str("AxxxSTARTyyyENDzzz").unwrap();
//!
//! let removal = document.remove_block("START", "END")?;
//! assert_eq!(document.as_str(), "AxxxENDzzz");
//! assert_eq!(removal.to_string(), "Successfully removed block between 4 and 12");
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! Writes are not atomic, and concurrent runs against the same file race on
//! the read-modify-write.

pub mod error;
pub mod splicer;

use crate::error::SpliceError;
use crate::splicer::{find_marker, splice, Offset};
use log::{debug, info, warn};
use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// The full text of one file, held in memory while it is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    content: String,
}

/// Offsets of the two markers in the content before the block was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub start: Offset,
    pub end: Offset,
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Successfully removed block between {} and {}",
            self.start, self.end
        )
    }
}

impl TextDocument {
    /// Reads the whole file at `path` as UTF-8.
    pub fn load(path: &Path) -> Result<Self, SpliceError> {
        let content = fs::read_to_string(path).map_err(|source| SpliceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", content.len(), path.display());

        Ok(content.into())
    }

    /// Overwrites the file at `path` with the document, truncating it first.
    pub fn save(&self, path: &Path) -> Result<(), SpliceError> {
        fs::write(path, &self.content).map_err(|source| SpliceError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote {} bytes to {}", self.content.len(), path.display());

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Removes everything from the first `start_marker` up to the first
    /// `end_marker`, keeping the end marker itself.
    ///
    /// If either marker is missing the document is left untouched and
    /// [`SpliceError::MarkersNotFound`] carries both search results. The two
    /// searches are independent: when the end marker comes first, the text
    /// between the markers ends up duplicated rather than removed.
    pub fn remove_block(
        &mut self,
        start_marker: &str,
        end_marker: &str,
    ) -> Result<Removal, SpliceError> {
        let start = find_marker(&self.content, start_marker);
        let end = find_marker(&self.content, end_marker);
        debug!("Marker search: start={start:?}, end={end:?}");

        let (Some(start), Some(end)) = (start, end) else {
            info!("Markers missing, leaving document untouched");
            return Err(SpliceError::MarkersNotFound {
                start: start.map(|offset| offset.char),
                end: end.map(|offset| offset.char),
            });
        };

        if start.byte > end.byte {
            warn!(
                "End marker at {} precedes start marker at {}; splicing without reordering",
                end, start
            );
        }

        self.content = splice(&self.content, start, end);
        Ok(Removal { start, end })
    }
}

impl FromStr for TextDocument {
    type Err = Infallible;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            content: content.to_string(),
        })
    }
}

impl From<String> for TextDocument {
    fn from(content: String) -> Self {
        Self { content }
    }
}

/// Loads `path`, removes the block delimited by the two markers and writes
/// the result back to the same path.
///
/// The file is only written when both markers are found.
pub fn remove_block(
    path: &Path,
    start_marker: &str,
    end_marker: &str,
) -> Result<Removal, SpliceError> {
    let mut document = TextDocument::load(path)?;
    let removal = document.remove_block(start_marker, end_marker)?;
    document.save(path)?;

    Ok(removal)
}

//! Contains the marker search and the splice arithmetic applied to the text.

use std::fmt;

/// Position of a marker occurrence within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    /// Byte index into the UTF-8 content, used for slicing.
    pub byte: usize,
    /// Character index into the content, used for reporting.
    pub char: usize,
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char)
    }
}

/// Finds the first occurrence of `marker` in `content`.
///
/// The marker is matched as a literal substring. Later occurrences are ignored.
pub fn find_marker(content: &str, marker: &str) -> Option<Offset> {
    content.find(marker).map(|byte| Offset {
        byte,
        char: content[..byte].chars().count(),
    })
}

/// Builds `content[..start] + content[end..]`.
///
/// No ordering check is made between the two offsets. When `start` lies after
/// `end`, the text between them is emitted twice.
pub fn splice(content: &str, start: Offset, end: Offset) -> String {
    let head = &content[..start.byte];
    let tail = &content[end.byte..];

    let mut spliced = String::with_capacity(head.len() + tail.len());
    spliced.push_str(head);
    spliced.push_str(tail);
    spliced
}

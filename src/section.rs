//! Section representation for literate source documents.
//!
//! A section pairs a run of comment prose with the run of code that follows it. Sections are
//! plain values: the parser builds a fresh list on every call and nothing holds on to them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// One block of documentation prose and the code it describes.
pub struct Section {
    /// Comment text with markers stripped, one `\n`-terminated line per comment line.
    pub comments: String,
    /// Code lines following the comments, without leading or trailing blank lines.
    pub code: String,
}

impl Section {
    #[must_use]
    /// Builds a section from its comment and code text.
    pub fn new(comments: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            comments: comments.into(),
            code: code.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Result of parsing a source document.
pub struct Parsed {
    /// Sections in the order they appear in the source.
    pub sections: Vec<Section>,
}

//! Line scanner that groups comment runs and code runs into sections.
//!
//! Every line is either a comment line (optional indentation, the marker, optional whitespace)
//! or a code line. A comment line arriving after code closes the current section. Blank lines
//! seen before any code has started are held back until the next non-blank line decides
//! whether they belong to the prose or to the code.

use crate::render::preprocess;
use crate::section::{Parsed, Section};
use std::mem;

/// Marker used when nothing else is configured.
pub const DEFAULT_MARKER: &str = "//";

#[derive(Clone, Debug, PartialEq, Eq)]
/// The line-comment convention that tells documentation apart from code.
pub struct CommentSyntax {
    marker: String,
}

impl CommentSyntax {
    #[must_use]
    /// Uses `marker` as the line-comment prefix. An empty marker matches no line.
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    #[must_use]
    /// Picks the usual line-comment marker for a file extension, defaulting to `//`.
    pub fn for_extension(extension: &str) -> Self {
        let marker = match extension.to_ascii_lowercase().as_str() {
            "py" | "rb" | "sh" | "bash" | "zsh" | "pl" | "r" | "toml" | "yaml" | "yml"
            | "coffee" | "nim" | "jl" => "#",
            "sql" | "lua" | "hs" | "elm" | "ada" => "--",
            "lisp" | "el" | "clj" | "cljs" | "scm" | "asm" => ";",
            "tex" | "erl" => "%",
            _ => DEFAULT_MARKER,
        };
        Self::new(marker)
    }

    #[must_use]
    /// The line-comment prefix.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    #[must_use]
    /// Returns the text after the marker and its trailing whitespace, if `line` is a comment.
    pub fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        if self.marker.is_empty() {
            return None;
        }
        let rest = line.trim_start().strip_prefix(self.marker.as_str())?;
        Some(rest.trim_start())
    }
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

#[derive(Clone, Debug, Default)]
/// Splits source text into sections using one comment syntax.
pub struct Parser {
    syntax: CommentSyntax,
}

impl Parser {
    #[must_use]
    /// Creates a parser recognising comment lines by `syntax`.
    pub fn new(syntax: CommentSyntax) -> Self {
        Self { syntax }
    }

    #[must_use]
    /// The comment syntax this parser recognises.
    pub fn syntax(&self) -> &CommentSyntax {
        &self.syntax
    }

    #[must_use]
    /// Groups `source` into sections. Every input is valid; empty input yields no sections.
    pub fn parse(&self, source: &str) -> Parsed {
        let mut scan = Scan::default();

        for line in source.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Some(text) = self.syntax.strip(line) {
                scan.push_comment(text);
            } else if !is_blank(line) || !scan.code.is_empty() {
                scan.push_code(line);
            } else {
                scan.pending_blanks.push('\n');
            }
        }

        let sections = scan.finish();
        tracing::debug!(
            sections = sections.len(),
            marker = self.syntax.marker(),
            "parsed source"
        );
        Parsed { sections }
    }
}

/// Parses `source` with the default `//` marker.
#[must_use]
pub fn parse(source: &str) -> Parsed {
    Parser::default().parse(source)
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Accumulators for the section currently being built.
#[derive(Default)]
struct Scan {
    sections: Vec<Section>,
    comments: String,
    code: String,
    pending_blanks: String,
}

impl Scan {
    fn push_comment(&mut self, text: &str) {
        if !self.code.is_empty() {
            self.emit();
        }
        self.comments.push_str(&self.pending_blanks);
        self.pending_blanks.clear();
        self.comments.push_str(text);
        self.comments.push('\n');
    }

    fn push_code(&mut self, line: &str) {
        self.code.push_str(&self.pending_blanks);
        self.pending_blanks.clear();
        self.code.push_str(line);
        self.code.push('\n');
    }

    fn emit(&mut self) {
        let comments = mem::take(&mut self.comments);
        let code = mem::take(&mut self.code);
        self.sections.push(Section {
            comments,
            code: preprocess(&code).to_string(),
        });
    }

    fn finish(mut self) -> Vec<Section> {
        // Blanks still pending here trail the last comment and are dropped.
        if !self.comments.is_empty() || !self.code.is_empty() {
            self.emit();
        }
        self.sections
    }
}

#[cfg(test)]
#[path = "tests/parse.rs"]
mod tests;

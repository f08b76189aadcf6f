//! lit: micro literate programming.
//!
//! Source files interleave comment prose with code. [`parse`] groups each run of comment lines
//! with the code that follows it into a [`Section`], and [`make_html`] renders the sections as
//! paired comment and code regions. Formatting of both regions is delegated to [`hooks`], so
//! Markdown and syntax highlighting are plugged in by the caller rather than built in.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod hooks;
pub mod input;
pub mod parse;
pub mod render;
pub mod section;

pub use parse::{parse, CommentSyntax, Parser};
pub use render::{make_html, preprocess, Renderer, Source};
pub use section::{Parsed, Section};

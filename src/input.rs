//! File-level entry points used by the command line front end.
//!
//! These pick a comment syntax and hooks for each path from the configuration, read the file,
//! and hand the text to the parser or renderer.

use crate::config::Config;
use crate::hooks::{Highlight, Markdown};
use crate::parse::{CommentSyntax, Parser};
use crate::render::{wrap_document, Renderer};
use crate::section::Parsed;
use std::fs;
use std::io;
use std::path::Path;

/// Comment syntax for `path`: the configured marker, otherwise the one its extension implies.
#[must_use]
pub fn comment_syntax(path: &Path, cfg: &Config) -> CommentSyntax {
    match &cfg.comment_marker {
        Some(marker) => CommentSyntax::new(marker.clone()),
        None => CommentSyntax::for_extension(
            path.extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or_default(),
        ),
    }
}

/// Renderer configured for `path`.
#[must_use]
pub fn renderer_for(path: &Path, cfg: &Config) -> Renderer {
    let mut renderer = Renderer::default().with_syntax(comment_syntax(path, cfg));
    if cfg.markdown {
        renderer = renderer.with_comment_hook(Markdown::default());
    }
    if cfg.highlight {
        renderer = renderer.with_code_hook(Highlight::for_path(path));
    }
    renderer
}

/// Read and parse one file.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text.
pub fn parse_file(path: &Path, cfg: &Config) -> io::Result<Parsed> {
    let source = fs::read_to_string(path)?;
    Ok(Parser::new(comment_syntax(path, cfg)).parse(&source))
}

/// Render every file in order and join the fragments.
///
/// With `cfg.standalone` the joined fragments become the body of a single page titled after
/// the first file, with the highlighting theme's stylesheet when highlighting is on.
///
/// # Errors
///
/// Returns an error if a file cannot be read or the configured theme does not exist.
pub fn render_files(paths: &[impl AsRef<Path>], cfg: &Config) -> io::Result<String> {
    let mut body = String::new();
    for path in paths {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), "rendering");
        body.push_str(&renderer_for(path, cfg).make_html(source.as_str()));
    }

    if !cfg.standalone {
        return Ok(body);
    }

    let css = if cfg.highlight {
        Some(Highlight::theme_css(&cfg.theme)?)
    } else {
        None
    };
    let title = paths
        .first()
        .and_then(|path| path.as_ref().file_name())
        .map_or_else(|| "lit".to_string(), |name| name.to_string_lossy().into_owned());
    Ok(wrap_document(&title, &body, css.as_deref()))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;

//! HTML rendering of parsed sections.
//!
//! Output is one `<div class="lit">` wrapper holding a `<section>` per parsed section, each
//! with a comment region and a code region. The two regions are filled by [`Hook`]s supplied by
//! the caller, so the renderer never depends on a particular Markdown or highlighting engine.

use crate::hooks::{escape_html, Escape, Hook};
use crate::parse::{is_blank, CommentSyntax, Parser};
use crate::section::{Parsed, Section};

/// Placeholder for a comment region that renders to nothing visible.
const EMPTY_COMMENT: &str = "&nbsp;";

const DOCUMENT_STYLE: &str = "\
body { margin: 0; }
.lit section { display: flex; border-bottom: 1px solid #eee; }
.lit .lit-comment { flex: 0 0 40%; box-sizing: border-box; padding: 0.5em 1.5em; font-family: sans-serif; }
.lit .lit-code { flex: 1; overflow-x: auto; padding: 0.5em 1.5em; background: #fafafa; white-space: pre; font-family: monospace; }
";

#[derive(Clone, Copy, Debug)]
/// What to render: raw source that still needs parsing, or sections parsed earlier.
pub enum Source<'a> {
    /// Source text, parsed with the renderer's comment syntax.
    Text(&'a str),
    /// Already parsed sections, rendered as given.
    Sections(&'a [Section]),
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Source::Text(text)
    }
}

impl<'a> From<&'a [Section]> for Source<'a> {
    fn from(sections: &'a [Section]) -> Self {
        Source::Sections(sections)
    }
}

impl<'a> From<&'a Vec<Section>> for Source<'a> {
    fn from(sections: &'a Vec<Section>) -> Self {
        Source::Sections(sections)
    }
}

impl<'a> From<&'a Parsed> for Source<'a> {
    fn from(parsed: &'a Parsed) -> Self {
        Source::Sections(&parsed.sections)
    }
}

/// Strips leading and trailing blank lines from a code block, keeping interior ones.
#[must_use]
pub fn preprocess(code: &str) -> &str {
    let mut rest = code;
    while let Some(newline) = rest.find('\n') {
        if !is_blank(&rest[..newline]) {
            break;
        }
        rest = &rest[newline + 1..];
    }
    while let Some(newline) = rest.rfind('\n') {
        if !is_blank(&rest[newline + 1..]) {
            break;
        }
        rest = &rest[..newline];
    }
    if is_blank(rest) {
        ""
    } else {
        rest
    }
}

/// Renders `input` with the given hooks, parsing raw text with the default `//` marker.
///
/// Hooks are called once per non-empty field, in section order.
#[must_use]
pub fn make_html<'a, C, K>(
    input: impl Into<Source<'a>>,
    render_comment: &C,
    render_code: &K,
) -> String
where
    C: Hook + ?Sized,
    K: Hook + ?Sized,
{
    match input.into() {
        Source::Text(text) => {
            let parsed = Parser::default().parse(text);
            render_sections(&parsed.sections, render_comment, render_code)
        }
        Source::Sections(sections) => render_sections(sections, render_comment, render_code),
    }
}

fn render_sections<C, K>(sections: &[Section], render_comment: &C, render_code: &K) -> String
where
    C: Hook + ?Sized,
    K: Hook + ?Sized,
{
    let mut html = String::from("<div class=\"lit\">\n");

    for section in sections {
        let mut comments = if section.comments.is_empty() {
            String::new()
        } else {
            render_comment.render(&section.comments)
        };
        if comments.trim().is_empty() {
            comments = EMPTY_COMMENT.to_string();
        }

        let code = match preprocess(&section.code) {
            "" => String::new(),
            text => render_code.render(text),
        };

        html.push_str("<section>\n<div class=\"lit-comment\">\n");
        html.push_str(&comments);
        html.push_str("\n</div>\n<code class=\"lit-code\">\n");
        html.push_str(&code);
        html.push_str("\n</code>\n</section>\n");
    }

    html.push_str("</div>\n");
    tracing::debug!(sections = sections.len(), bytes = html.len(), "rendered html");
    html
}

/// Wraps a rendered fragment in a minimal HTML5 page.
///
/// `extra_css` is appended after the built-in layout rules, typically the stylesheet from
/// [`crate::hooks::Highlight::theme_css`].
#[must_use]
pub fn wrap_document(title: &str, body: &str, extra_css: Option<&str>) -> String {
    let mut page = String::with_capacity(body.len() + 1024);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    page.push_str(&escape_html(title));
    page.push_str("</title>\n<style>\n");
    page.push_str(DOCUMENT_STYLE);
    if let Some(css) = extra_css {
        page.push_str(css);
    }
    page.push_str("</style>\n</head>\n<body>\n");
    page.push_str(body);
    page.push_str("</body>\n</html>\n");
    page
}

/// A comment syntax and a pair of hooks, chosen once and reused for many renders.
///
/// The default renderer parses `//` comments and HTML-escapes both regions.
pub struct Renderer {
    parser: Parser,
    comment: Box<dyn Hook + Send + Sync>,
    code: Box<dyn Hook + Send + Sync>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            parser: Parser::default(),
            comment: Box::new(Escape),
            code: Box::new(Escape),
        }
    }
}

impl Renderer {
    #[must_use]
    /// Parses raw text with `syntax` instead of `//`.
    pub fn with_syntax(mut self, syntax: CommentSyntax) -> Self {
        self.parser = Parser::new(syntax);
        self
    }

    #[must_use]
    /// Renders comment regions with `hook`.
    pub fn with_comment_hook(mut self, hook: impl Hook + Send + Sync + 'static) -> Self {
        self.comment = Box::new(hook);
        self
    }

    #[must_use]
    /// Renders code regions with `hook`.
    pub fn with_code_hook(mut self, hook: impl Hook + Send + Sync + 'static) -> Self {
        self.code = Box::new(hook);
        self
    }

    #[must_use]
    /// The parser used for raw text input.
    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    #[must_use]
    /// Renders `input` as an HTML fragment.
    pub fn make_html<'a>(&self, input: impl Into<Source<'a>>) -> String {
        match input.into() {
            Source::Text(text) => {
                render_sections(&self.parser.parse(text).sections, &*self.comment, &*self.code)
            }
            Source::Sections(sections) => render_sections(sections, &*self.comment, &*self.code),
        }
    }

    #[must_use]
    /// Renders `input` as a complete HTML page titled `title`.
    pub fn make_document<'a>(
        &self,
        title: &str,
        input: impl Into<Source<'a>>,
        extra_css: Option<&str>,
    ) -> String {
        wrap_document(title, &self.make_html(input), extra_css)
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;

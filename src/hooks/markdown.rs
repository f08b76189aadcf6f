//! Markdown comment formatting using pulldown-cmark.
//!
//! Raw HTML in comment prose is never passed through: pulldown-cmark's HTML events are turned
//! back into text, so a literal `<a>` stays visible instead of turning into markup. Text and
//! code spans are escaped exactly once, by the HTML writer.

use crate::hooks::Hook;
use pulldown_cmark::{html, Event, Options};

#[derive(Clone, Copy, Debug)]
/// Renders comment text as `CommonMark` with a few extensions, treating raw HTML as text.
pub struct Markdown {
    options: Options,
}

impl Markdown {
    #[must_use]
    /// Uses exactly the given pulldown-cmark extensions.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }
}

impl Default for Markdown {
    fn default() -> Self {
        Self::with_options(
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS,
        )
    }
}

impl Hook for Markdown {
    fn render(&self, text: &str) -> String {
        let parser =
            pulldown_cmark::Parser::new_ext(text, self.options).map(|event| match event {
                Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
                other => other,
            });
        let mut out = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

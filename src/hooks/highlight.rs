//! Syntax highlighting for code regions using syntect.
//!
//! Highlighted code is emitted as class-based spans so the colours live in a stylesheet
//! (see [`Highlight::theme_css`]) rather than inline in every token.

use crate::hooks::{escape_html, Hook};
use once_cell::sync::Lazy;
use std::io;
use std::path::Path;
use syntect::highlighting::ThemeSet;
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Theme used when none is configured.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

#[derive(Clone, Debug)]
/// Highlights code for one language, chosen by extension or name.
pub struct Highlight {
    token: String,
}

impl Highlight {
    #[must_use]
    /// Highlights code written in the language named by `token` (an extension such as `rs`,
    /// or a name such as `Python`). Unknown languages render as plain text.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    #[must_use]
    /// Highlights code in the language implied by `path`'s extension.
    pub fn for_path(path: &Path) -> Self {
        let token = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::new(token)
    }

    /// Stylesheet matching the spans this hook emits, for the named theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme is unknown or its CSS cannot be generated.
    pub fn theme_css(theme: &str) -> io::Result<String> {
        let theme = THEME_SET.themes.get(theme).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unknown theme: {theme}"),
            )
        })?;
        css_for_theme_with_class_style(theme, ClassStyle::Spaced).map_err(io::Error::other)
    }

    /// Names of the bundled themes.
    pub fn themes() -> impl Iterator<Item = &'static str> {
        THEME_SET.themes.keys().map(String::as_str)
    }

    fn syntax(&self) -> &'static SyntaxReference {
        SYNTAX_SET
            .find_syntax_by_token(&self.token)
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text())
    }

    fn try_render(&self, text: &str) -> Result<String, syntect::Error> {
        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            self.syntax(),
            &SYNTAX_SET,
            ClassStyle::Spaced,
        );
        for line in LinesWithEndings::from(text) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }
}

impl Hook for Highlight {
    fn render(&self, text: &str) -> String {
        match self.try_render(text) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(
                    language = %self.token,
                    error = %e,
                    "highlighting failed, escaping only"
                );
                escape_html(text).into_owned()
            }
        }
    }
}

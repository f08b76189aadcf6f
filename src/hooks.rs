//! Rendering hooks that turn section text into HTML.
//!
//! The renderer only knows the [`Hook`] call contract: text in, HTML out. Which formatter sits
//! behind it (plain escaping, Markdown, syntax highlighting, or any closure) is chosen by the
//! caller when the renderer is built.

pub mod highlight;
pub mod markdown;

use std::borrow::Cow;

pub use highlight::Highlight;
pub use markdown::Markdown;

/// Turns one section field into HTML markup.
///
/// Hooks are expected to be total over strings. The renderer does not catch panics, so a
/// misbehaving hook fails the whole render call.
pub trait Hook {
    /// Renders `text` as an HTML fragment.
    fn render(&self, text: &str) -> String;
}

impl<F> Hook for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, text: &str) -> String {
        self(text)
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Passes text through untouched.
pub struct Identity;

impl Hook for Identity {
    fn render(&self, text: &str) -> String {
        text.to_string()
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Escapes HTML special characters and nothing else.
pub struct Escape;

impl Hook for Escape {
    fn render(&self, text: &str) -> String {
        escape_html(text).into_owned()
    }
}

/// Escapes `<`, `>`, `"` and any `&` that does not already start a character reference.
///
/// Returns the input borrowed when nothing needs escaping.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for (i, c) in text.char_indices() {
        match c {
            '&' if starts_reference(&text[i + 1..]) => escaped.push('&'),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Whether `rest` (the text after an `&`) is a named, decimal or hex character reference.
fn starts_reference(rest: &str) -> bool {
    let (body, len) = if let Some(hex) = rest
        .strip_prefix("#x")
        .or_else(|| rest.strip_prefix("#X"))
    {
        (hex, leading(hex, u8::is_ascii_hexdigit))
    } else if let Some(decimal) = rest.strip_prefix('#') {
        (decimal, leading(decimal, u8::is_ascii_digit))
    } else {
        (rest, leading(rest, |b| b.is_ascii_alphanumeric() || *b == b'_'))
    };
    len > 0 && body.as_bytes().get(len) == Some(&b';')
}

fn leading(text: &str, accept: impl Fn(&u8) -> bool) -> usize {
    text.bytes().take_while(|b| accept(b)).count()
}

#[cfg(test)]
#[path = "tests/hooks.rs"]
mod tests;

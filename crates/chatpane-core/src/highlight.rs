//! Syntax highlighting for code messages
//!
//! Language tags resolve through syntect's default syntax set. A missing or
//! unknown tag falls back to JavaScript, and if that is unavailable to plain
//! text, so highlighting never fails a render.

use once_cell::sync::Lazy;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use tracing::debug;

/// Language assumed when a code message has no usable tag.
pub const FALLBACK_LANGUAGE: &str = "javascript";

/// Bundled theme used for code blocks.
pub const CODE_THEME: &str = "base16-ocean.dark";

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Highlighter output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Highlighted {
    /// Inline-styled HTML, safe to inject
    Html(String),
    /// Raw text, to be rendered escaped
    Plain(String),
}

fn find_syntax(token: &str) -> Option<&'static SyntaxReference> {
    SYNTAX_SET
        .find_syntax_by_token(token)
        .or_else(|| SYNTAX_SET.find_syntax_by_extension(token))
}

/// Resolve a language tag to a syntax definition.
pub fn resolve_syntax(language: Option<&str>) -> &'static SyntaxReference {
    language
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .and_then(find_syntax)
        .or_else(|| find_syntax(FALLBACK_LANGUAGE))
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text())
}

/// Highlight `code` written in `language`.
pub fn highlight_code(code: &str, language: Option<&str>) -> Highlighted {
    let Some(theme) = THEME_SET.themes.get(CODE_THEME) else {
        return Highlighted::Plain(code.to_string());
    };

    let syntax = resolve_syntax(language);
    match highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme) {
        Ok(html) => Highlighted::Html(html),
        Err(e) => {
            debug!(language = ?language, error = %e, "Highlighting failed, rendering plain");
            Highlighted::Plain(code.to_string())
        }
    }
}

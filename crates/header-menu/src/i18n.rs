//! Interface string lookup.
//!
//! The translation catalog lives outside this crate; menus only need a
//! `translate(source, context, language)` lookup.

/// Source of translated interface strings.
pub trait Translator: Send + Sync {
    /// Translate `source` for `language`, disambiguated by `context`
    /// (empty for none). Implementations fall back to `source`.
    fn translate(&self, source: &str, context: &str, language: &str) -> String;

    /// Translate a string with no context.
    fn l(&self, source: &str, language: &str) -> String {
        self.translate(source, "", language)
    }

    /// Translate a string within a context (e.g. "button/menu").
    fn lp(&self, source: &str, context: &str, language: &str) -> String {
        self.translate(source, context, language)
    }
}

/// Translator that returns every source string untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceText;

impl Translator for SourceText {
    fn translate(&self, source: &str, _context: &str, _language: &str) -> String {
        source.to_string()
    }
}

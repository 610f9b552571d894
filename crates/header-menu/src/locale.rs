//! Interface locales offered in the language selector.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{MenuError, MenuResult};

/// A language/region the interface can be switched to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Locale code (e.g., "en", "fr", "fr-CA"). Unique within a locale list.
    pub id: String,

    /// Language name in the language itself (e.g., "français").
    #[serde(default)]
    pub native_language: Option<String>,

    /// Territory name in the language itself (e.g., "canada").
    #[serde(default)]
    pub native_territory: Option<String>,
}

impl Locale {
    /// Create a locale with no native names.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            native_language: None,
            native_territory: None,
        }
    }

    /// Set the native language name.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.native_language = Some(language.into());
        self
    }

    /// Set the native territory name.
    pub fn with_territory(mut self, territory: impl Into<String>) -> Self {
        self.native_territory = Some(territory.into());
        self
    }

    /// Display label for the language selector.
    pub fn label(&self) -> String {
        render_locale_label(self)
    }
}

/// Find the locale whose id equals `current_id`.
pub fn select_current_locale<'a>(
    locales: &'a [Locale],
    current_id: &str,
) -> MenuResult<&'a Locale> {
    locales
        .iter()
        .find(|locale| locale.id == current_id)
        .ok_or_else(|| {
            warn!(
                locale = %current_id,
                available = locales.len(),
                "current locale missing from available locales"
            );
            MenuError::LocaleNotFound(current_id.to_string())
        })
}

/// Build the selector label for a locale.
///
/// "french" → "French", "french"/"canada" → "French (Canada)". A locale
/// without a native language name shows its bracketed id, e.g. "[de]".
pub fn render_locale_label(locale: &Locale) -> String {
    let Some(language) = non_empty(locale.native_language.as_deref()) else {
        return format!("[{}]", locale.id);
    };

    let mut label = capitalize(language);
    if let Some(territory) = non_empty(locale.native_territory.as_deref()) {
        label.push_str(" (");
        label.push_str(&capitalize(territory));
        label.push(')');
    }
    label
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

//! Header menu test utilities.
//!
//! Helpers for integration testing: locale and user fixtures, request
//! context builders, a catalog-backed translator, and assertion helpers for
//! menu trees and rendered markup.

use std::collections::HashMap;

use header_menu::{Capability, CurrentUser, Locale, MenuEntry, RequestContext, Translator};

/// Locales offered by a typical multilingual server.
pub fn test_locales() -> Vec<Locale> {
    vec![
        Locale::new("de").with_language("deutsch"),
        Locale::new("en").with_language("english"),
        Locale::new("fr").with_language("français"),
        Locale::new("fr-CA")
            .with_language("français")
            .with_territory("canada"),
        Locale::new("xx"),
    ]
}

/// Create a logged-in user with no admin flags.
pub fn test_user(name: &str) -> CurrentUser {
    CurrentUser::new(1, name)
}

/// Create an admin holding exactly the given capabilities.
pub fn admin_user(name: &str, capabilities: &[Capability]) -> CurrentUser {
    let user = CurrentUser {
        is_admin: true,
        ..CurrentUser::new(2, name)
    };
    capabilities
        .iter()
        .fold(user, |user, capability| user.with_capability(*capability))
}

/// Anonymous request in English for `path`.
pub fn anonymous_context(path: &str) -> RequestContext {
    RequestContext::new("en", test_locales(), path)
}

/// Logged-in request in English for `/`.
pub fn user_context(user: CurrentUser) -> RequestContext {
    anonymous_context("/").with_user(user)
}

/// Translator backed by an in-memory catalog.
///
/// Keys are `(language, context, source)`; lookups with a context fall
/// back to the context-free entry, then to the source string.
#[derive(Debug, Default)]
pub struct CatalogTranslator {
    entries: HashMap<(String, String, String), String>,
}

impl CatalogTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation.
    pub fn with(mut self, language: &str, context: &str, source: &str, translation: &str) -> Self {
        self.entries.insert(
            (language.to_string(), context.to_string(), source.to_string()),
            translation.to_string(),
        );
        self
    }

    fn lookup(&self, language: &str, context: &str, source: &str) -> Option<&String> {
        self.entries
            .get(&(language.to_string(), context.to_string(), source.to_string()))
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, source: &str, context: &str, language: &str) -> String {
        self.lookup(language, context, source)
            .or_else(|| {
                (!context.is_empty())
                    .then(|| self.lookup(language, "", source))
                    .flatten()
            })
            .cloned()
            .unwrap_or_else(|| source.to_string())
    }
}

/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assertion helpers for menu trees and markup.
pub mod assert {
    use header_menu::MenuEntry;

    /// Labels of a list of entries, in order.
    pub fn labels(entries: &[MenuEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Find a top-level entry by its list-item class.
    pub fn by_class<'a>(entries: &'a [MenuEntry], class: &str) -> Option<&'a MenuEntry> {
        entries.iter().find(|e| e.class.as_deref() == Some(class))
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}'\nActual: {haystack}"
        );
    }
}

/// Collect every href in a menu tree, depth first.
pub fn all_hrefs(entries: &[MenuEntry]) -> Vec<String> {
    let mut hrefs = Vec::new();
    for entry in entries {
        hrefs.push(entry.href.clone());
        hrefs.extend(all_hrefs(&entry.children));
    }
    hrefs
}

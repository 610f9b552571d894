//! "Not found" pages.

use serde::Serialize;

use crate::html::{expand_links, html_escape};
use crate::i18n::Translator;

/// Content of a "not found" page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundPage {
    pub title: String,

    /// Already-escaped paragraph markup.
    pub body_html: String,
}

impl NotFoundPage {
    /// Create a page from a title and plain-text message.
    pub fn new(title: impl Into<String>, message: &str) -> Self {
        Self {
            title: title.into(),
            body_html: html_escape(message),
        }
    }

    /// Page shown when no editor has the requested name.
    pub fn editor(translator: &dyn Translator, language: &str) -> Self {
        let message = translator.l(
            "Sorry, we could not find an editor with that name. \
             You may wish to try and {search_url|search for them} instead.",
            language,
        );

        Self {
            title: translator.l("Editor Not Found", language),
            body_html: expand_links(&message, &[("search_url", "/search")]),
        }
    }
}

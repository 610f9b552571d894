//! Request state consumed by the menu builder.
//!
//! Resolved by the session layer before the menu is built and passed
//! explicitly into every builder operation.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Admin capabilities that each unlock individual Admin menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    LocationEditor,
    RelationshipEditor,
    WikiTranscluder,
    BannerEditor,
    AccountAdmin,
}

/// The logged-in editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: u64,

    /// Editor name, used in `/user/<name>/...` links.
    pub name: String,

    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_location_editor: bool,
    #[serde(default)]
    pub is_relationship_editor: bool,
    #[serde(default)]
    pub is_wiki_transcluder: bool,
    #[serde(default)]
    pub is_banner_editor: bool,
    #[serde(default)]
    pub is_account_admin: bool,
}

impl CurrentUser {
    /// Create a user with no admin flags.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check whether the user holds a capability flag.
    pub fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::LocationEditor => self.is_location_editor,
            Capability::RelationshipEditor => self.is_relationship_editor,
            Capability::WikiTranscluder => self.is_wiki_transcluder,
            Capability::BannerEditor => self.is_banner_editor,
            Capability::AccountAdmin => self.is_account_admin,
        }
    }

    /// Set a capability flag.
    pub fn with_capability(mut self, capability: Capability) -> Self {
        let flag = match capability {
            Capability::LocationEditor => &mut self.is_location_editor,
            Capability::RelationshipEditor => &mut self.is_relationship_editor,
            Capability::WikiTranscluder => &mut self.is_wiki_transcluder,
            Capability::BannerEditor => &mut self.is_banner_editor,
            Capability::AccountAdmin => &mut self.is_account_admin,
        };
        *flag = true;
        self
    }
}

/// Per-request state for menu construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Logged-in user; `None` for anonymous visitors.
    #[serde(default)]
    pub user: Option<CurrentUser>,

    /// Id of the locale the page is rendered in.
    pub current_locale: String,

    /// Locales offered by this server, in display order.
    pub locales: Vec<Locale>,

    /// Path and query of the current request, relative to the site root.
    pub relative_uri: String,

    /// Value of the `uri` query parameter, if the request carried one.
    #[serde(default)]
    pub uri_param: Option<String>,
}

impl RequestContext {
    /// Create an anonymous context for the given path.
    pub fn new(
        current_locale: impl Into<String>,
        locales: Vec<Locale>,
        relative_uri: impl Into<String>,
    ) -> Self {
        Self {
            user: None,
            current_locale: current_locale.into(),
            locales,
            relative_uri: relative_uri.into(),
            uri_param: None,
        }
    }

    /// Attach a logged-in user.
    pub fn with_user(mut self, user: CurrentUser) -> Self {
        self.user = Some(user);
        self
    }

    /// Attach a `uri` query parameter.
    pub fn with_uri_param(mut self, uri: impl Into<String>) -> Self {
        self.uri_param = Some(uri.into());
        self
    }

    pub fn is_anonymous(&self) -> bool {
        self.user.is_none()
    }

    /// Where login/registration should send the visitor back to.
    ///
    /// An incoming `uri` parameter wins over the current path so that
    /// bouncing between login and register keeps the original target.
    pub fn return_to(&self) -> &str {
        match self.uri_param.as_deref() {
            Some(uri) if !uri.is_empty() => uri,
            _ => &self.relative_uri,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn capability_maps_to_flag() {
        let user = CurrentUser {
            is_banner_editor: true,
            ..CurrentUser::new(1, "editor")
        };
        assert!(user.has_capability(Capability::BannerEditor));
        assert!(!user.has_capability(Capability::AccountAdmin));
        assert!(!user.has_capability(Capability::LocationEditor));
    }

    #[test]
    fn with_capability_sets_only_that_flag() {
        let user = CurrentUser::new(1, "editor")
            .with_capability(Capability::RelationshipEditor)
            .with_capability(Capability::AccountAdmin);
        assert!(user.is_relationship_editor);
        assert!(user.is_account_admin);
        assert!(!user.is_admin);
        assert!(!user.has_capability(Capability::WikiTranscluder));
    }

    #[test]
    fn return_to_prefers_uri_param() {
        let ctx = RequestContext::new("en", vec![], "/login").with_uri_param("/artist/123");
        assert_eq!(ctx.return_to(), "/artist/123");
    }

    #[test]
    fn return_to_ignores_empty_uri_param() {
        let ctx = RequestContext::new("en", vec![], "/artist/123").with_uri_param("");
        assert_eq!(ctx.return_to(), "/artist/123");
    }

    #[test]
    fn context_deserializes_without_optional_fields() {
        let json = r#"{
            "current_locale": "en",
            "locales": [{"id": "en", "native_language": "english"}],
            "relative_uri": "/"
        }"#;
        let ctx: RequestContext = serde_json::from_str(json).unwrap();
        assert!(ctx.is_anonymous());
        assert_eq!(ctx.locales[0].native_territory, None);
    }
}

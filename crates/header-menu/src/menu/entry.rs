//! Menu entry tree and visibility predicates.

use serde::Serialize;

use crate::context::{Capability, RequestContext};

/// Condition under which an entry is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Always,
    /// Only for logged-in users.
    Authenticated,
    /// Only for users with the admin flag.
    Admin,
    /// Only for users holding the capability flag.
    Capability(Capability),
}

impl Visibility {
    /// Evaluate the predicate against a request.
    pub fn is_visible(self, ctx: &RequestContext) -> bool {
        match self {
            Visibility::Always => true,
            Visibility::Authenticated => ctx.user.is_some(),
            Visibility::Admin => ctx.user.as_ref().is_some_and(|u| u.is_admin),
            Visibility::Capability(capability) => ctx
                .user
                .as_ref()
                .is_some_and(|u| u.has_capability(capability)),
        }
    }
}

/// One navigable item of the header menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Localized link text.
    pub label: String,

    /// Link target.
    pub href: String,

    /// Class of the list item: the section name for top-level groups,
    /// `separator` for items that open a new visual group.
    pub class: Option<String>,

    /// Rendered in bold (the active locale).
    pub emphasized: bool,

    /// Link to a sister site rendered with the `internal` class.
    pub internal: bool,

    /// Submenu, in display order.
    pub children: Vec<MenuEntry>,

    #[serde(skip)]
    pub visibility: Visibility,
}

impl MenuEntry {
    /// Create a plain, always visible link.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            class: None,
            emphasized: false,
            internal: false,
            children: Vec::new(),
            visibility: Visibility::Always,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Start a new visual group with this item.
    pub fn separator(self) -> Self {
        self.with_class("separator")
    }

    pub fn internal(mut self) -> Self {
        self.internal = true;
        self
    }

    pub fn emphasized(mut self) -> Self {
        self.emphasized = true;
        self
    }

    pub fn visible_when(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_children(mut self, children: Vec<MenuEntry>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Find a direct child by label.
    pub fn child(&self, label: &str) -> Option<&MenuEntry> {
        self.children.iter().find(|c| c.label == label)
    }

    /// Drop this entry if hidden for the request, otherwise prune its
    /// children the same way.
    pub fn resolve(mut self, ctx: &RequestContext) -> Option<Self> {
        if !self.visibility.is_visible(ctx) {
            return None;
        }
        self.children = resolve_all(self.children, ctx);
        Some(self)
    }
}

/// Keep only the entries (and descendants) visible for the request.
pub(crate) fn resolve_all(entries: Vec<MenuEntry>, ctx: &RequestContext) -> Vec<MenuEntry> {
    entries
        .into_iter()
        .filter_map(|entry| entry.resolve(ctx))
        .collect()
}

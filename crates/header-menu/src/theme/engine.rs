//! Theme engine with the built-in menu and page templates.

use tera::{Context, Tera};
use tracing::debug;

use crate::error::MenuResult;
use crate::html::html_escape;
use crate::menu::{HeaderMenu, MenuEntry};

use super::not_found::NotFoundPage;

const MENU_LIST: &str = include_str!("../../templates/menu_list.html");
const HEADER_MENU: &str = include_str!("../../templates/header_menu.html");
const NOT_FOUND: &str = include_str!("../../templates/not_found.html");

const TEMPLATES: &[(&str, &str)] = &[
    ("menu_list.html", MENU_LIST),
    ("header_menu.html", HEADER_MENU),
    ("not_found.html", NOT_FOUND),
];

/// Renders menu trees and pages to HTML.
#[derive(Debug)]
pub struct ThemeEngine {
    tera: Tera,
}

impl ThemeEngine {
    /// Create an engine with the built-in templates.
    pub fn new() -> MenuResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        tera.set_escape_fn(html_escape);

        debug!(count = TEMPLATES.len(), "registered theme templates");
        Ok(Self { tera })
    }

    /// Replace a built-in template (e.g. a site-specific `not_found.html`).
    pub fn override_template(&mut self, name: &str, source: &str) -> MenuResult<()> {
        self.tera.add_raw_template(name, source)?;
        debug!(template = %name, "overrode theme template");
        Ok(())
    }

    /// Render one `<li>` per entry, with nested `<ul>` submenus.
    pub fn render_entries(&self, entries: &[MenuEntry]) -> MenuResult<String> {
        let mut context = Context::new();
        context.insert("entries", entries);
        Ok(self.tera.render("menu_list.html", &context)?)
    }

    /// Render the `#header-menu` block: right-hand list first, floated.
    pub fn render_header(&self, menu: &HeaderMenu) -> MenuResult<String> {
        // Lists are rendered first, then inserted into the wrapper
        let right = self.render_entries(&menu.right)?;
        let left = self.render_entries(&menu.left)?;

        let mut context = Context::new();
        context.insert("right", &right);
        context.insert("left", &left);
        Ok(self.tera.render("header_menu.html", &context)?)
    }

    pub fn render_not_found(&self, page: &NotFoundPage) -> MenuResult<String> {
        let mut context = Context::new();
        context.insert("page", page);
        Ok(self.tera.render("not_found.html", &context)?)
    }
}

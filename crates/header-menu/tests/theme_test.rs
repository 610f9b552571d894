#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Rendering tests for the header menu and not-found pages.

use header_menu::{
    Capability, MenuConfig, NavigationMenuBuilder, NotFoundPage, SourceText, ThemeEngine,
};
use header_menu_test_utils::assert::{contains, not_contains};
use header_menu_test_utils::{admin_user, anonymous_context, test_user, user_context};

fn render_for(ctx: &header_menu::RequestContext) -> String {
    let config = MenuConfig::default();
    let builder = NavigationMenuBuilder::new(&config, &SourceText);
    let header = builder.build_header(ctx).unwrap();
    ThemeEngine::new().unwrap().render_header(&header).unwrap()
}

#[test]
fn test_header_wrapper_and_list_order() {
    let html = render_for(&anonymous_context("/artist/123"));

    assert!(html.starts_with(r#"<div id="header-menu">"#));
    let right = html.find(r#"<ul class="r">"#).unwrap();
    let login = html.find("/login?uri=").unwrap();
    let about = html.find(r#"<li class="about">"#).unwrap();
    assert!(right < login);
    assert!(login < about);
}

#[test]
fn test_anonymous_header_markup() {
    let html = render_for(&anonymous_context("/artist/123"));

    let login = r#"<a href="/login?uri=%2Fartist%2F123">Log In</a>"#;
    let register = r#"<a href="/register?uri=%2Fartist%2F123">Create Account</a>"#;
    let current = r#"<strong><a href="/set-language/en">English</a></strong>"#;
    let reset = r#"<a href="/set-language/unset">(reset language)</a>"#;

    contains(&html, login);
    contains(&html, register);
    contains(&html, current);
    contains(&html, reset);
    not_contains(&html, r#"class="editing""#);
    not_contains(&html, "/search/edits");
}

#[test]
fn test_user_header_markup() {
    let html = render_for(&user_context(test_user("editor")));

    let account = r#"<li class="account"><a href="/user/editor">editor</a>"#;
    let blog = r#"<a href="http://blog.musicbrainz.org" class="internal">Blog</a>"#;

    contains(&html, account);
    contains(&html, r#"<li class="editing">"#);
    contains(&html, r#"<a href="/search/edits">Search Edits</a>"#);
    contains(&html, blog);
    not_contains(&html, "/login?uri=");
    not_contains(&html, r#"class="admin""#);
}

#[test]
fn test_admin_header_markup() {
    let user = admin_user("root", &[Capability::AccountAdmin]);
    let html = render_for(&user_context(user));

    contains(&html, r#"<li class="admin"><a href="/admin">Admin</a>"#);
    contains(&html, r#"<a href="/admin/attributes">Edit Attributes</a>"#);
    not_contains(&html, "/admin/banner/edit");
}

#[test]
fn test_admin_without_capabilities_markup() {
    let html = render_for(&user_context(admin_user("root", &[])));

    let bare = r#"<li class="admin"><a href="/admin">Admin</a></li>"#;
    contains(&html, bare);
    not_contains(&html, "/admin/attributes");
}

#[test]
fn test_user_name_is_escaped() {
    let html = render_for(&user_context(test_user("<i>x</i>")));

    let escaped = r#"<a href="/user/%3Ci%3Ex%3C%2Fi%3E">&lt;i&gt;x&lt;/i&gt;</a>"#;
    contains(&html, escaped);
    not_contains(&html, "<i>x</i>");
}

#[test]
fn test_editor_not_found_page() {
    let engine = ThemeEngine::new().unwrap();
    let page = NotFoundPage::editor(&SourceText, "en");
    let html = engine.render_not_found(&page).unwrap();

    contains(&html, "<h1>Editor Not Found</h1>");
    contains(&html, r#"<a href="/search">search for them</a>"#);
}

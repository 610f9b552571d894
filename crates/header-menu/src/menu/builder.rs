//! Builds the header menu trees for a request.

use serde::Serialize;
use tracing::debug;

use crate::config::MenuConfig;
use crate::context::{Capability, CurrentUser, RequestContext};
use crate::error::MenuResult;
use crate::i18n::Translator;
use crate::locale::{render_locale_label, select_current_locale};

use super::entry::{MenuEntry, Visibility, resolve_all};
use super::href;

/// Both halves of the header menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderMenu {
    /// Language selector and user menus (rendered floated right).
    pub right: Vec<MenuEntry>,
    /// Site sections.
    pub left: Vec<MenuEntry>,
}

/// Projects a request into header menu entries.
///
/// Every operation is a pure function of the [`RequestContext`]; the
/// builder itself only holds configuration and the string translator.
pub struct NavigationMenuBuilder<'a> {
    config: &'a MenuConfig,
    translator: &'a dyn Translator,
}

impl<'a> NavigationMenuBuilder<'a> {
    pub fn new(config: &'a MenuConfig, translator: &'a dyn Translator) -> Self {
        Self { config, translator }
    }

    fn l(&self, ctx: &RequestContext, source: &str) -> String {
        self.translator.l(source, &ctx.current_locale)
    }

    /// Translate a "button/menu" string.
    fn lp_menu(&self, ctx: &RequestContext, source: &str) -> String {
        self.translator.lp(source, "button/menu", &ctx.current_locale)
    }

    /// Build the full header: right-hand list, then left-hand list.
    pub fn build_header(&self, ctx: &RequestContext) -> MenuResult<HeaderMenu> {
        let right = self.build_right_menu(ctx)?;
        let left = self.build_left_menu(ctx);

        debug!(
            anonymous = ctx.is_anonymous(),
            locale = %ctx.current_locale,
            right = right.len(),
            left = left.len(),
            "built header menu"
        );

        Ok(HeaderMenu { right, left })
    }

    /// Language selector, then account menus or login links.
    pub fn build_right_menu(&self, ctx: &RequestContext) -> MenuResult<Vec<MenuEntry>> {
        let mut entries = Vec::new();
        if let Some(locale_menu) = self.build_locale_menu(ctx)? {
            entries.push(locale_menu);
        }
        entries.extend(self.build_user_menus(ctx));
        Ok(entries)
    }

    /// Site sections; the Editing section only appears for logged-in users.
    pub fn build_left_menu(&self, ctx: &RequestContext) -> Vec<MenuEntry> {
        let entries = vec![
            self.about_menu(ctx),
            self.blog_menu(ctx),
            self.products_menu(ctx),
            self.search_menu(ctx),
            self.editing_menu(ctx).visible_when(Visibility::Authenticated),
            self.documentation_menu(ctx),
            self.contact_menu(ctx),
        ];
        resolve_all(entries, ctx)
    }

    /// Language selector, or `None` on single-locale servers.
    ///
    /// Fails with `LocaleNotFound` if the current locale is not among the
    /// available ones.
    pub fn build_locale_menu(&self, ctx: &RequestContext) -> MenuResult<Option<MenuEntry>> {
        if ctx.locales.len() <= 1 {
            return Ok(None);
        }

        let current = select_current_locale(&ctx.locales, &ctx.current_locale)?;

        let mut children: Vec<MenuEntry> = ctx
            .locales
            .iter()
            .map(|locale| {
                let entry =
                    MenuEntry::link(render_locale_label(locale), href::set_language(&locale.id));
                if locale.id == current.id {
                    entry.emphasized()
                } else {
                    entry
                }
            })
            .collect();

        children.push(MenuEntry::link(
            self.l(ctx, "(reset language)"),
            href::set_language("unset"),
        ));
        children.push(
            MenuEntry::link(
                self.l(ctx, "Help Translate"),
                self.config.translate_url.as_str(),
            )
            .separator(),
        );

        Ok(Some(
            MenuEntry::link(
                render_locale_label(current),
                href::set_language(&current.id),
            )
            .with_class("language-selector")
            .with_children(children),
        ))
    }

    /// Account, Data and Admin groups for a user; login links otherwise.
    pub fn build_user_menus(&self, ctx: &RequestContext) -> Vec<MenuEntry> {
        let Some(user) = ctx.user.as_ref() else {
            let return_to = ctx.return_to();
            return vec![
                MenuEntry::link(
                    self.l(ctx, "Log In"),
                    href::with_return_to("/login", return_to),
                ),
                MenuEntry::link(
                    self.l(ctx, "Create Account"),
                    href::with_return_to("/register", return_to),
                ),
            ];
        };

        let entries = vec![
            self.account_menu(ctx, user),
            self.data_menu(ctx, user),
            self.admin_menu(ctx).visible_when(Visibility::Admin),
        ];
        resolve_all(entries, ctx)
    }

    fn account_menu(&self, ctx: &RequestContext, user: &CurrentUser) -> MenuEntry {
        MenuEntry::link(user.name.as_str(), href::user_path(&user.name, ""))
            .with_class("account")
            .with_children(vec![
                MenuEntry::link(self.l(ctx, "Edit Profile"), "/account/edit"),
                MenuEntry::link(self.l(ctx, "Change Password"), "/account/change-password"),
                MenuEntry::link(self.l(ctx, "Preferences"), "/account/preferences"),
                MenuEntry::link(self.l(ctx, "Applications"), "/account/applications"),
                MenuEntry::link(
                    self.l(ctx, "Subscriptions"),
                    href::user_path(&user.name, "/subscriptions/artist"),
                ),
                MenuEntry::link(self.l(ctx, "Log Out"), "/logout"),
            ])
    }

    fn data_menu(&self, ctx: &RequestContext, user: &CurrentUser) -> MenuEntry {
        let name = user.name.as_str();
        MenuEntry::link(self.l(ctx, "My Data"), href::user_path(name, "/profile"))
            .with_class("data")
            .with_children(vec![
                MenuEntry::link(
                    self.l(ctx, "My Collections"),
                    href::user_path(name, "/collections"),
                ),
                MenuEntry::link(self.l(ctx, "My Ratings"), href::user_path(name, "/ratings")),
                MenuEntry::link(self.l(ctx, "My Tags"), href::user_path(name, "/tags")),
                MenuEntry::link(
                    self.l(ctx, "My Open Edits"),
                    href::user_path(name, "/edits/open"),
                )
                .separator(),
                MenuEntry::link(
                    self.l(ctx, "All My Edits"),
                    href::user_path(name, "/edits/all"),
                ),
                MenuEntry::link(
                    self.l(ctx, "Edits for Subscribed Entities"),
                    "/edit/subscribed",
                ),
                MenuEntry::link(
                    self.l(ctx, "Edits by Subscribed Editors"),
                    "/edit/subscribed_editors",
                ),
                MenuEntry::link(
                    self.l(ctx, "Notes Left on My Edits"),
                    "/edit/notes-received",
                ),
            ])
    }

    /// Admin group; each child is gated by its own capability flag.
    fn admin_menu(&self, ctx: &RequestContext) -> MenuEntry {
        let gated = |entry: MenuEntry, capability| {
            entry.visible_when(Visibility::Capability(capability))
        };

        MenuEntry::link(self.l(ctx, "Admin"), "/admin")
            .with_class("admin")
            .with_children(vec![
                gated(
                    MenuEntry::link(self.lp_menu(ctx, "Add Area"), "/area/create"),
                    Capability::LocationEditor,
                ),
                gated(
                    MenuEntry::link(self.lp_menu(ctx, "Add Instrument"), "/instrument/create"),
                    Capability::RelationshipEditor,
                ),
                gated(
                    MenuEntry::link(self.l(ctx, "Edit Relationship Types"), "/relationships"),
                    Capability::RelationshipEditor,
                ),
                gated(
                    MenuEntry::link(self.l(ctx, "Transclude WikiDocs"), "/admin/wikidoc"),
                    Capability::WikiTranscluder,
                ),
                gated(
                    MenuEntry::link(self.l(ctx, "Edit Banner Message"), "/admin/banner/edit"),
                    Capability::BannerEditor,
                ),
                gated(
                    MenuEntry::link(self.l(ctx, "Edit Attributes"), "/admin/attributes"),
                    Capability::AccountAdmin,
                ),
            ])
    }

    fn about_menu(&self, ctx: &RequestContext) -> MenuEntry {
        MenuEntry::link(self.l(ctx, "About"), "/doc/About")
            .with_class("about")
            .with_children(vec![
                MenuEntry::link(self.l(ctx, "Sponsors"), "//metabrainz.org/doc/Sponsors"),
                MenuEntry::link(self.l(ctx, "Team"), "/doc/About/Team"),
                MenuEntry::link(self.l(ctx, "Data Licenses"), "/doc/About/Data_License")
                    .separator(),
                MenuEntry::link(self.l(ctx, "Social Contract"), "/doc/Social_Contract"),
                MenuEntry::link(self.l(ctx, "Code of Conduct"), "/doc/Code_of_Conduct"),
                MenuEntry::link(self.l(ctx, "Privacy Policy"), "/doc/About/Privacy_Policy"),
                MenuEntry::link(self.l(ctx, "Auto-editor Elections"), "/elections").separator(),
                MenuEntry::link(self.l(ctx, "Privileged User Accounts"), "/privileged"),
                MenuEntry::link(self.l(ctx, "Statistics"), "/statistics"),
                MenuEntry::link(self.l(ctx, "Timeline Graph"), "/statistics/timeline"),
            ])
    }

    fn blog_menu(&self, ctx: &RequestContext) -> MenuEntry {
        MenuEntry::link(self.l(ctx, "Blog"), self.config.blog_url.as_str())
            .with_class("blog")
            .internal()
    }

    fn products_menu(&self, ctx: &RequestContext) -> MenuEntry {
        MenuEntry::link(self.l(ctx, "Products"), "/doc/Products")
            .with_class("products")
            .with_children(vec![
                MenuEntry::link(
                    self.l(ctx, "MusicBrainz Picard"),
                    "//picard.musicbrainz.org",
                ),
                MenuEntry::link(self.l(ctx, "Magic MP3 Tagger"), "/doc/Magic_MP3_Tagger"),
                MenuEntry::link(self.l(ctx, "Yate Music Tagger"), "/doc/Yate_Music_Tagger"),
                MenuEntry::link(
                    self.l(ctx, "MusicBrainz for Android"),
                    "/doc/MusicBrainz_for_Android",
                )
                .separator(),
                MenuEntry::link(self.l(ctx, "MusicBrainz Server"), "/doc/MusicBrainz_Server")
                    .separator(),
                MenuEntry::link(
                    self.l(ctx, "MusicBrainz Database"),
                    "/doc/MusicBrainz_Database",
                ),
                MenuEntry::link(
                    self.l(ctx, "Developer Resources"),
                    "/doc/Developer_Resources",
                )
                .separator(),
                MenuEntry::link(self.l(ctx, "XML Web Service"), "/doc/XML_Web_Service"),
                MenuEntry::link(self.l(ctx, "Live Data Feed"), "/doc/Live_Data_Feed"),
                MenuEntry::link(self.l(ctx, "FreeDB Gateway"), "/doc/FreeDB_Gateway")
                    .separator(),
            ])
    }

    fn search_menu(&self, ctx: &RequestContext) -> MenuEntry {
        MenuEntry::link(self.l(ctx, "Search"), "/search")
            .with_class("search")
            .with_children(vec![
                MenuEntry::link(self.l(ctx, "Search Edits"), "/search/edits")
                    .visible_when(Visibility::Authenticated),
                MenuEntry::link(self.l(ctx, "Tags"), "/tags"),
                MenuEntry::link(self.l(ctx, "Top CD Stubs"), "/cdstub/browse"),
            ])
    }

    fn editing_menu(&self, ctx: &RequestContext) -> MenuEntry {
        MenuEntry::link(self.l(ctx, "Editing"), "/doc/How_Editing_Works")
            .with_class("editing")
            .with_children(vec![
                MenuEntry::link(self.lp_menu(ctx, "Add Artist"), "/artist/create"),
                MenuEntry::link(self.lp_menu(ctx, "Add Label"), "/label/create"),
                MenuEntry::link(
                    self.lp_menu(ctx, "Add Release Group"),
                    "/release-group/create",
                ),
                MenuEntry::link(self.lp_menu(ctx, "Add Release"), "/release/add"),
                MenuEntry::link(
                    self.l(ctx, "Add Various Artists Release"),
                    href::release_add_for_artist(&self.config.various_artists_gid),
                ),
                MenuEntry::link(
                    self.lp_menu(ctx, "Add Standalone Recording"),
                    "/recording/create",
                ),
                MenuEntry::link(self.lp_menu(ctx, "Add Work"), "/work/create"),
                MenuEntry::link(self.lp_menu(ctx, "Add Place"), "/place/create"),
                MenuEntry::link(self.lp_menu(ctx, "Add Series"), "/series/create"),
                MenuEntry::link(self.lp_menu(ctx, "Add Event"), "/event/create"),
                MenuEntry::link(self.l(ctx, "Vote on Edits"), "/edit/open").separator(),
                MenuEntry::link(self.l(ctx, "Reports"), "/reports"),
            ])
    }

    fn documentation_menu(&self, ctx: &RequestContext) -> MenuEntry {
        MenuEntry::link(
            self.l(ctx, "Documentation"),
            "/doc/MusicBrainz_Documentation",
        )
        .with_class("documentation")
        .with_children(vec![
            MenuEntry::link(self.l(ctx, "Beginners Guide"), "/doc/Beginners_Guide"),
            MenuEntry::link(self.l(ctx, "Style Guidelines"), "/doc/Style"),
            MenuEntry::link(self.l(ctx, "How Tos"), "/doc/How_To"),
            MenuEntry::link(self.l(ctx, "FAQs"), "/doc/Frequently_Asked_Questions"),
            MenuEntry::link(self.l(ctx, "Edit Types"), "/doc/Edit_Types").separator(),
            MenuEntry::link(self.l(ctx, "Relationship Types"), "/relationships"),
            MenuEntry::link(self.l(ctx, "Instrument List"), "/instruments"),
            MenuEntry::link(self.l(ctx, "Development"), "/doc/Development").separator(),
        ])
    }

    fn contact_menu(&self, ctx: &RequestContext) -> MenuEntry {
        MenuEntry::link(self.l(ctx, "Contact Us"), self.config.contact_url.as_str())
            .with_class("contact")
            .with_children(vec![
                MenuEntry::link(self.l(ctx, "Forums"), self.config.forums_url.as_str())
                    .internal(),
                MenuEntry::link(
                    self.l(ctx, "Report a Bug"),
                    self.config.tickets_url.as_str(),
                )
                .internal(),
            ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::MenuError;
    use crate::i18n::SourceText;
    use crate::locale::Locale;

    fn locales() -> Vec<Locale> {
        vec![
            Locale::new("en").with_language("english"),
            Locale::new("fr").with_language("français"),
            Locale::new("xx"),
        ]
    }

    fn labels(entries: &[MenuEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn locale_menu_lists_locales_then_fixed_items() {
        let config = MenuConfig::default();
        let builder = NavigationMenuBuilder::new(&config, &SourceText);
        let ctx = RequestContext::new("fr", locales(), "/");

        let menu = builder.build_locale_menu(&ctx).unwrap().unwrap();
        assert_eq!(menu.label, "Français");
        assert_eq!(menu.href, "/set-language/fr");
        assert_eq!(menu.class.as_deref(), Some("language-selector"));
        assert_eq!(
            labels(&menu.children),
            vec![
                "English",
                "Français",
                "[xx]",
                "(reset language)",
                "Help Translate",
            ]
        );

        let emphasized: Vec<_> = menu.children.iter().filter(|c| c.emphasized).collect();
        assert_eq!(emphasized.len(), 1);
        assert_eq!(emphasized[0].href, "/set-language/fr");

        assert_eq!(menu.children[3].href, "/set-language/unset");
        assert_eq!(menu.children[4].href, config.translate_url);
        assert_eq!(menu.children[4].class.as_deref(), Some("separator"));
    }

    #[test]
    fn locale_menu_omitted_for_single_locale() {
        let config = MenuConfig::default();
        let builder = NavigationMenuBuilder::new(&config, &SourceText);
        let ctx = RequestContext::new("en", vec![Locale::new("en")], "/");
        assert!(builder.build_locale_menu(&ctx).unwrap().is_none());
    }

    #[test]
    fn locale_menu_missing_current_is_error() {
        let config = MenuConfig::default();
        let builder = NavigationMenuBuilder::new(&config, &SourceText);
        let ctx = RequestContext::new("de", locales(), "/");
        assert!(matches!(
            builder.build_locale_menu(&ctx),
            Err(MenuError::LocaleNotFound(_))
        ));
        assert!(builder.build_right_menu(&ctx).is_err());
    }

    #[test]
    fn anonymous_user_menus_link_back() {
        let config = MenuConfig::default();
        let builder = NavigationMenuBuilder::new(&config, &SourceText);
        let ctx = RequestContext::new("en", locales(), "/artist/123");

        let entries = builder.build_user_menus(&ctx);
        assert_eq!(labels(&entries), vec!["Log In", "Create Account"]);
        assert_eq!(entries[0].href, "/login?uri=%2Fartist%2F123");
        assert_eq!(entries[1].href, "/register?uri=%2Fartist%2F123");
    }

    #[test]
    fn admin_children_follow_capability_flags() {
        let config = MenuConfig::default();
        let builder = NavigationMenuBuilder::new(&config, &SourceText);
        let user = CurrentUser {
            is_admin: true,
            is_relationship_editor: true,
            ..CurrentUser::new(1, "root")
        };
        let ctx = RequestContext::new("en", locales(), "/").with_user(user);

        let entries = builder.build_user_menus(&ctx);
        let admin = entries.last().unwrap();
        assert_eq!(admin.label, "Admin");
        assert_eq!(
            labels(&admin.children),
            vec!["Add Instrument", "Edit Relationship Types"]
        );
    }

    #[test]
    fn editing_and_search_edits_need_user() {
        let config = MenuConfig::default();
        let builder = NavigationMenuBuilder::new(&config, &SourceText);
        let anon = RequestContext::new("en", locales(), "/");
        let user = anon.clone().with_user(CurrentUser::new(2, "someone"));

        let left = builder.build_left_menu(&anon);
        assert_eq!(
            labels(&left),
            vec![
                "About",
                "Blog",
                "Products",
                "Search",
                "Documentation",
                "Contact Us",
            ]
        );
        assert!(left[3].child("Search Edits").is_none());

        let left = builder.build_left_menu(&user);
        assert_eq!(left[4].label, "Editing");
        assert!(left[3].child("Search Edits").is_some());
    }

    #[test]
    fn various_artists_release_link_uses_config() {
        let config = MenuConfig::default();
        let builder = NavigationMenuBuilder::new(&config, &SourceText);
        let ctx = RequestContext::new("en", locales(), "/").with_user(CurrentUser::new(2, "x"));

        let editing = builder.editing_menu(&ctx);
        let va = editing.child("Add Various Artists Release").unwrap();
        assert_eq!(
            va.href,
            "/release/add?artist=89ad4ac3-39f7-470e-963a-56509c546377"
        );
    }
}

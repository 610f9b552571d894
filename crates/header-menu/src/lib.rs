//! Header navigation menu for the music metadata site.
//!
//! Builds the header menu (language selector, account and admin menus,
//! site sections) from an explicit [`RequestContext`] and renders it, along
//! with "not found" pages, through Tera templates.
//!
//! ```
//! use header_menu::{Locale, MenuConfig, NavigationMenuBuilder, RequestContext, SourceText};
//!
//! let config = MenuConfig::default();
//! let builder = NavigationMenuBuilder::new(&config, &SourceText);
//! let ctx = RequestContext::new("en", vec![Locale::new("en")], "/artist/123");
//!
//! let right = builder.build_right_menu(&ctx).unwrap();
//! assert_eq!(right[0].href, "/login?uri=%2Fartist%2F123");
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod html;
pub mod i18n;
pub mod locale;
pub mod menu;
pub mod theme;

pub use config::MenuConfig;
pub use context::{Capability, CurrentUser, RequestContext};
pub use error::{MenuError, MenuResult};
pub use i18n::{SourceText, Translator};
pub use locale::{Locale, render_locale_label, select_current_locale};
pub use menu::{HeaderMenu, MenuEntry, NavigationMenuBuilder, Visibility};
pub use theme::{NotFoundPage, ThemeEngine};

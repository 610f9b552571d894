//! Header navigation menus.
//!
//! The builder projects a [`RequestContext`](crate::context::RequestContext)
//! into trees of [`MenuEntry`] values:
//! - the right-hand list (language selector, account/data/admin, login)
//! - the left-hand list (about, products, search, editing, docs, contact)
//!
//! Conditional items carry a [`Visibility`] and are filtered out before the
//! tree is returned.

mod builder;
mod entry;
pub mod href;

pub use builder::{HeaderMenu, NavigationMenuBuilder};
pub use entry::{MenuEntry, Visibility};

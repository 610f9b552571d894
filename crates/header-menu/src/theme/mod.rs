//! Tera rendering of the header menu and error pages.

mod engine;
mod not_found;

pub use engine::ThemeEngine;
pub use not_found::NotFoundPage;

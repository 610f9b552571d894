//! Menu configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result, bail};

/// MBID of the special "Various Artists" artist.
pub const VARIOUS_ARTISTS_GID: &str = "89ad4ac3-39f7-470e-963a-56509c546377";

/// External links and constants used by the header menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuConfig {
    /// Translation platform linked from "Help Translate".
    pub translate_url: String,

    /// Project blog.
    pub blog_url: String,

    /// Community forums.
    pub forums_url: String,

    /// Bug tracker.
    pub tickets_url: String,

    /// "Contact Us" page.
    pub contact_url: String,

    /// Artist preselected by "Add Various Artists Release".
    pub various_artists_gid: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            translate_url: "https://www.transifex.com/musicbrainz/musicbrainz/".to_string(),
            blog_url: "http://blog.musicbrainz.org".to_string(),
            forums_url: "http://forums.musicbrainz.org".to_string(),
            tickets_url: "http://tickets.musicbrainz.org".to_string(),
            contact_url: "https://metabrainz.org/contact".to_string(),
            various_artists_gid: VARIOUS_ARTISTS_GID.to_string(),
        }
    }
}

impl MenuConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set keys must be non-empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let read = |key: &str, default: String| -> Result<String> {
            match lookup(key) {
                Some(value) => {
                    let value = value.trim().to_string();
                    if value.is_empty() {
                        bail!("{key} must not be empty");
                    }
                    Ok(value)
                }
                None => Ok(default),
            }
        };

        let translate_url = read("MENU_TRANSLATE_URL", defaults.translate_url)?;
        let blog_url = read("MENU_BLOG_URL", defaults.blog_url)?;
        let forums_url = read("MENU_FORUMS_URL", defaults.forums_url)?;
        let tickets_url = read("MENU_TICKETS_URL", defaults.tickets_url)?;
        let contact_url = read("MENU_CONTACT_URL", defaults.contact_url)?;

        let various_artists_gid =
            read("MENU_VARIOUS_ARTISTS_GID", defaults.various_artists_gid)?.to_lowercase();
        validate_gid(&various_artists_gid)
            .context("MENU_VARIOUS_ARTISTS_GID must be a valid MBID")?;

        Ok(Self {
            translate_url,
            blog_url,
            forums_url,
            tickets_url,
            contact_url,
            various_artists_gid,
        })
    }
}

/// Validate the 8-4-4-4-12 hex layout of an MBID.
fn validate_gid(gid: &str) -> Result<()> {
    let groups: Vec<&str> = gid.split('-').collect();
    let lengths: Vec<usize> = groups.iter().map(|g| g.len()).collect();
    if lengths != [8, 4, 4, 4, 12] {
        bail!("expected 8-4-4-4-12 groups, got {gid:?}");
    }
    let is_hex = |g: &&str| g.chars().all(|c| c.is_ascii_hexdigit());
    if !groups.iter().all(is_hex) {
        bail!("non-hex character in {gid:?}");
    }
    Ok(())
}

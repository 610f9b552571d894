//! Link targets with percent-encoded identifiers.

use urlencoding::encode;

/// Locale switch action for a locale id.
pub fn set_language(locale_id: &str) -> String {
    format!("/set-language/{}", encode(locale_id))
}

/// Path under an editor's profile, e.g. `user_path("bob", "/ratings")`.
pub fn user_path(user_name: &str, subpath: &str) -> String {
    format!("/user/{}{}", encode(user_name), subpath)
}

/// Append a `uri` return target to a login/registration path.
pub fn with_return_to(path: &str, return_to: &str) -> String {
    format!("{path}?uri={}", encode(return_to))
}

/// Release editor with an artist preselected.
pub fn release_add_for_artist(artist_gid: &str) -> String {
    format!("/release/add?artist={}", encode(artist_gid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_language_encodes_id() {
        assert_eq!(set_language("en"), "/set-language/en");
        assert_eq!(set_language("zh Hant"), "/set-language/zh%20Hant");
    }

    #[test]
    fn user_path_encodes_name_only() {
        assert_eq!(
            user_path("a/b c", "/edits/open"),
            "/user/a%2Fb%20c/edits/open"
        );
    }

    #[test]
    fn return_to_is_encoded() {
        assert_eq!(
            with_return_to("/login", "/artist/123"),
            "/login?uri=%2Fartist%2F123"
        );
        assert_eq!(
            with_return_to("/register", "/search?query=a&type=artist"),
            "/register?uri=%2Fsearch%3Fquery%3Da%26type%3Dartist"
        );
    }
}

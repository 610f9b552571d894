//! Menu error types.

use thiserror::Error;

/// Errors raised while building or rendering the header menu.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The current locale id has no entry in the available locales.
    ///
    /// The session layer guarantees the current id is drawn from the same
    /// list, so this is a contract violation and is never defaulted.
    #[error("locale not found: {0}")]
    LocaleNotFound(String),

    #[error("template error")]
    Template(#[from] tera::Error),
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;

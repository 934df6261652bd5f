use std::io;
use thiserror::Error;

/// Errors produced when no usable private key could be determined.
#[derive(Debug, Error)]
pub enum KeyResolutionError {
    /// The inline key variable held neither a PEM block nor Base64-encoded PEM
    #[error("The contents of `{var}` could not be validated. Please check to ensure you've copied the contents of the .pem file correctly.")]
    InvalidInlineKey {
        /// Name of the inspected environment variable
        var: String,
    },

    /// More than one `.pem` file was found while scanning the directory
    #[error("Found several private keys: {}. To avoid ambiguity {hint}", .files.join(", "))]
    AmbiguousKeys {
        /// Matching file names, in listing order
        files: Vec<String>,
        /// Usage hint naming the explicit mechanisms
        hint: String,
    },

    /// No source provided a key
    #[error("Missing private key for GitHub App, {hint}")]
    MissingKey {
        /// Usage hint naming the explicit mechanisms
        hint: String,
    },
}

/// Error returned by [`KeyResolver::resolve`](crate::KeyResolver::resolve).
///
/// Filesystem failures are kept apart from resolution failures so callers can
/// tell a mistyped path from a missing or malformed key.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Resolution(#[from] KeyResolutionError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    pub fn as_resolution(&self) -> Option<&KeyResolutionError> {
        match self {
            Self::Resolution(e) => Some(e),
            Self::Io(_) => None,
        }
    }
}

/// Builds the hint listing the mechanisms that select a key explicitly.
pub(crate) fn usage_hint(key_var: &str, path_var: &str) -> String {
    format!(
        "please use:\n  * `--private-key=/path/to/private-key` flag, or\n  * `{key_var}` environment variable, or\n  * `{path_var}` environment variable\n"
    )
}

use std::{fmt, path::PathBuf};

/// How an inline key value was encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineEncoding {
    /// PEM text, possibly with literal `\n` escapes
    Pem,
    /// Base64-encoded PEM text
    Base64,
}

/// Represents the source from which a private key was resolved.
/// Used for provenance tracking and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// Key read from a path given by the caller (highest precedence)
    ExplicitPath(PathBuf),
    /// Key content taken from the inline key environment variable
    EnvInline { encoding: InlineEncoding },
    /// Key read from the path held by the path environment variable
    EnvPath(PathBuf),
    /// Single `.pem` file found while scanning the working directory
    WorkingDirectory(PathBuf),
}

impl fmt::Display for KeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExplicitPath(path) => write!(f, "explicit path ({})", path.display()),
            Self::EnvInline {
                encoding: InlineEncoding::Pem,
            } => write!(f, "inline env var (PEM content)"),
            Self::EnvInline {
                encoding: InlineEncoding::Base64,
            } => write!(f, "inline env var (Base64 content)"),
            Self::EnvPath(path) => write!(f, "env var path ({})", path.display()),
            Self::WorkingDirectory(path) => write!(f, "working directory ({})", path.display()),
        }
    }
}

//! Private key discovery for GitHub Apps and similar signing clients.
//!
//! A key is resolved from the first applicable source, in order:
//! 1. Explicit path (`--private-key=/path/to/private-key`)
//! 2. `PRIVATE_KEY` environment variable - PEM text (literal `\n` escapes
//!    allowed) or Base64-encoded PEM text
//! 3. `PRIVATE_KEY_PATH` environment variable - path to a PEM file
//! 4. The single `*.pem` file in the current working directory
//!
//! Only the inline `PRIVATE_KEY` value is checked for RSA PEM markers; files
//! are returned exactly as read.
//!
//! # Example
//!
//! ```ignore
//! use private_key::{find_private_key, KeySource};
//! use std::path::Path;
//!
//! match find_private_key(Some(Path::new("/path/from/cli"))) {
//!     Ok(resolved) => {
//!         println!("Loaded private key from: {}", resolved.source);
//!     }
//!     Err(e) => eprintln!("Failed to load private key: {}", e),
//! }
//! ```
//!
//! # Testing
//!
//! [`KeyResolver`] reads all ambient state through an [`Environment`]. Tests
//! can pass a [`MockEnvironment`] instead of [`ProcessEnvironment`]:
//!
//! ```ignore
//! let mut env = MockEnvironment::new();
//! env.expect_var().returning(|_| None);
//! let resolver = KeyResolver::with_environment(env);
//! ```

mod config;
mod env;
mod error;
mod loader;
mod material;
mod pem;
mod source;

pub use config::{ResolverConfig, ENV_PRIVATE_KEY, ENV_PRIVATE_KEY_PATH, PEM_EXTENSION};
pub use env::{Environment, MockEnvironment, ProcessEnvironment};
pub use error::{Error, KeyResolutionError};
pub use loader::{find_private_key, KeyResolver, ResolvedKey};
pub use material::KeyMaterial;
pub use pem::{RSA_BEGIN_MARKER, RSA_END_MARKER};
pub use source::{InlineEncoding, KeySource};

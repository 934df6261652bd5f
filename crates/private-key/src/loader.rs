use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};
use tracing::{debug, trace};

use super::{
    config::{ResolverConfig, PEM_EXTENSION},
    env::{Environment, ProcessEnvironment},
    error::{usage_hint, Error, KeyResolutionError},
    material::KeyMaterial,
    pem::{decode_base64_pem, has_rsa_markers, unescape_newlines},
    source::{InlineEncoding, KeySource},
};

/// Result of resolving a private key, including provenance information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKey {
    /// The key material
    pub material: KeyMaterial,
    /// The source from which the key was resolved
    pub source: KeySource,
}

/// Finds a private key through the configured sources of an [`Environment`].
#[derive(Debug, Clone, Default)]
pub struct KeyResolver<E = ProcessEnvironment> {
    env: E,
    config: ResolverConfig,
}

impl KeyResolver<ProcessEnvironment> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Environment> KeyResolver<E> {
    pub fn with_environment(env: E) -> Self {
        KeyResolver {
            env,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve the private key following the precedence chain:
    /// 1. Explicit path (e.g. `--private-key`)
    /// 2. Inline key variable (`PRIVATE_KEY`), PEM or Base64-encoded PEM
    /// 3. Path variable (`PRIVATE_KEY_PATH`)
    /// 4. The only `.pem` file in the scanned directory
    ///
    /// A source is skipped only when it is absent or empty. Once a source
    /// applies, its failure is final: an unreadable explicit path does not
    /// fall back to the environment.
    ///
    /// # Arguments
    /// * `explicit_path` - Optional path supplied by the caller
    ///
    /// # Returns
    /// * `Ok(ResolvedKey)` - Key material with its source
    /// * `Err(Error::Io)` - A selected file or the scanned directory could not be read
    /// * `Err(Error::Resolution)` - The inline key was malformed, or no single key was found
    pub fn resolve(&self, explicit_path: Option<&Path>) -> Result<ResolvedKey, Error> {
        // 1. Explicit path (highest precedence)
        if let Some(path) = explicit_path.filter(|p| !p.as_os_str().is_empty()) {
            debug!(path = %path.display(), "reading private key from explicit path");
            let bytes = self.env.read_file(path)?;
            return Ok(ResolvedKey {
                material: KeyMaterial::Bytes(bytes),
                source: KeySource::ExplicitPath(path.to_path_buf()),
            });
        }
        trace!("no explicit private key path");

        // 2. Inline key content
        if let Some(value) = self.non_empty_var(&self.config.key_var) {
            return self.resolve_inline(&value.to_string_lossy());
        }
        trace!(var = %self.config.key_var, "inline private key not set");

        // 3. Path held by an environment variable
        if let Some(value) = self.non_empty_var(&self.config.path_var) {
            let path = PathBuf::from(value);
            debug!(var = %self.config.path_var, path = %path.display(), "reading private key from env path");
            let bytes = self.env.read_file(&path)?;
            return Ok(ResolvedKey {
                material: KeyMaterial::Bytes(bytes),
                source: KeySource::EnvPath(path),
            });
        }
        trace!(var = %self.config.path_var, "private key path not set");

        // 4. Scan the directory
        self.resolve_from_directory()
    }

    fn non_empty_var(&self, key: &str) -> Option<OsString> {
        self.env.var(key).filter(|value| !value.is_empty())
    }

    fn resolve_inline(&self, value: &str) -> Result<ResolvedKey, Error> {
        if has_rsa_markers(value) {
            debug!(var = %self.config.key_var, "using inline PEM private key");
            return Ok(ResolvedKey {
                material: KeyMaterial::Text(unescape_newlines(value)),
                source: KeySource::EnvInline {
                    encoding: InlineEncoding::Pem,
                },
            });
        }

        // Doesn't look like an RSA key, see if it does once decoded
        if let Some(decoded) = decode_base64_pem(value) {
            debug!(var = %self.config.key_var, "using Base64-encoded private key");
            return Ok(ResolvedKey {
                material: KeyMaterial::Text(decoded),
                source: KeySource::EnvInline {
                    encoding: InlineEncoding::Base64,
                },
            });
        }

        Err(KeyResolutionError::InvalidInlineKey {
            var: self.config.key_var.clone(),
        }
        .into())
    }

    fn resolve_from_directory(&self) -> Result<ResolvedKey, Error> {
        let dir = match &self.config.scan_dir {
            Some(dir) => dir.clone(),
            None => self.env.current_dir()?,
        };
        debug!(dir = %dir.display(), "scanning for {PEM_EXTENSION} files");

        let pem_files: Vec<OsString> = self
            .env
            .list_dir(&dir)?
            .into_iter()
            .filter(|name| name.to_string_lossy().ends_with(PEM_EXTENSION))
            .collect();

        match pem_files.as_slice() {
            [] => Err(KeyResolutionError::MissingKey { hint: self.hint() }.into()),
            [name] => {
                let path = dir.join(name);
                let resolved = self.resolve(Some(&path))?;
                Ok(ResolvedKey {
                    source: KeySource::WorkingDirectory(path),
                    ..resolved
                })
            }
            _ => Err(KeyResolutionError::AmbiguousKeys {
                files: pem_files
                    .iter()
                    .map(|name| name.to_string_lossy().into_owned())
                    .collect(),
                hint: self.hint(),
            }
            .into()),
        }
    }

    fn hint(&self) -> String {
        usage_hint(&self.config.key_var, &self.config.path_var)
    }
}

/// Resolve a private key from the running process with the default
/// variable names, scanning the current directory as a last resort.
pub fn find_private_key(explicit_path: Option<&Path>) -> Result<ResolvedKey, Error> {
    KeyResolver::new().resolve(explicit_path)
}

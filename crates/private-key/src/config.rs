use std::path::PathBuf;

/// Environment variable holding the key content (PEM, escaped PEM or Base64)
pub const ENV_PRIVATE_KEY: &str = "PRIVATE_KEY";

/// Environment variable holding a path to the key file
pub const ENV_PRIVATE_KEY_PATH: &str = "PRIVATE_KEY_PATH";

/// File extension matched when scanning a directory for keys
pub const PEM_EXTENSION: &str = ".pem";

/// Names and locations the resolver consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub key_var: String,
    pub path_var: String,
    /// Directory scanned as a last resort; the current directory when `None`.
    pub scan_dir: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            key_var: ENV_PRIVATE_KEY.to_string(),
            path_var: ENV_PRIVATE_KEY_PATH.to_string(),
            scan_dir: None,
        }
    }
}

impl ResolverConfig {
    pub fn with_key_var(mut self, name: impl Into<String>) -> Self {
        self.key_var = name.into();
        self
    }

    pub fn with_path_var(mut self, name: impl Into<String>) -> Self {
        self.path_var = name.into();
        self
    }

    pub fn with_scan_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scan_dir = Some(dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.key_var, "PRIVATE_KEY");
        assert_eq!(config.path_var, "PRIVATE_KEY_PATH");
        assert_eq!(config.scan_dir, None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ResolverConfig::default()
            .with_key_var("APP_KEY")
            .with_path_var("APP_KEY_PATH")
            .with_scan_dir("/etc/app");
        assert_eq!(config.key_var, "APP_KEY");
        assert_eq!(config.path_var, "APP_KEY_PATH");
        assert_eq!(config.scan_dir, Some(PathBuf::from("/etc/app")));
    }
}

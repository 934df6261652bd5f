use mockall::automock;
use std::{
    env,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

/// Access to the ambient state a key lookup depends on.
///
/// The resolver never touches the process directly, so tests can hand it a
/// [`MockEnvironment`] instead of mutating real variables or directories.
#[automock]
pub trait Environment {
    /// Value of an environment variable, `None` when unset.
    fn var(&self, key: &str) -> Option<OsString>;
    /// Entire contents of a file.
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
    /// Directory scanned when no other source is configured.
    fn current_dir(&self) -> io::Result<PathBuf>;
    /// Names of the entries of `dir`, in listing order.
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<OsString>>;
}

/// [`Environment`] backed by the running process and the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    /// Entries are sorted by name so the listing order is stable across
    /// filesystems.
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let mut names = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}

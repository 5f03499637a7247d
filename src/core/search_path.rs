//! Executable search path model
//!
//! Models the process's executable search path as an explicit, ordered
//! sequence of directories instead of an ambient `PATH` string. The resolver
//! mutates a [`SearchPath`] value handed to it; the caller decides when (and
//! whether) to render the result back into the real environment. This keeps
//! the mutation observable and testable without touching process state.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Ordered executable search path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    /// Create a search path from an ordered list of directories
    pub fn new(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// Capture the current process `PATH`
    ///
    /// An unset `PATH` yields an empty search path.
    pub fn from_current_env() -> Self {
        match env::var_os("PATH") {
            Some(value) => Self::from_env_value(&value),
            None => Self::default(),
        }
    }

    /// Parse a `PATH`-style value using the platform separator
    pub fn from_env_value(value: &std::ffi::OsStr) -> Self {
        Self {
            entries: env::split_paths(value).collect(),
        }
    }

    /// Prepend a directory so it is searched before every existing entry.
    ///
    /// Existing entries are preserved in order and never removed. Prepending
    /// does NOT de-duplicate: resolving the same toolchain twice prepends its
    /// bin directory twice. The resolver runs once per build invocation, so
    /// duplicates only appear when a caller re-runs it on the same value.
    pub fn prepend(&mut self, dir: PathBuf) {
        self.entries.insert(0, dir);
    }

    /// The entries in search order
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// First entry, if any
    pub fn first(&self) -> Option<&Path> {
        self.entries.first().map(PathBuf::as_path)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the search path has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render back to a `PATH`-style value with the platform separator
    ///
    /// Fails only if an entry contains the separator character itself.
    pub fn to_env_value(&self) -> Result<OsString, env::JoinPathsError> {
        env::join_paths(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_puts_entry_first() {
        let mut path = SearchPath::new(vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")]);
        path.prepend(PathBuf::from("/opt/toolchain/bin"));

        assert_eq!(path.first(), Some(Path::new("/opt/toolchain/bin")));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_prepend_preserves_existing_order() {
        let original = vec![
            PathBuf::from("/usr/local/bin"),
            PathBuf::from("/usr/bin"),
            PathBuf::from("/bin"),
        ];
        let mut path = SearchPath::new(original.clone());
        path.prepend(PathBuf::from("/pkgs/tc/bin"));

        assert_eq!(&path.entries()[1..], original.as_slice());
    }

    #[test]
    fn test_prepend_does_not_deduplicate() {
        let mut path = SearchPath::new(vec![PathBuf::from("/usr/bin")]);
        path.prepend(PathBuf::from("/pkgs/tc/bin"));
        path.prepend(PathBuf::from("/pkgs/tc/bin"));

        assert_eq!(path.len(), 3);
        assert_eq!(path.entries()[0], path.entries()[1]);
    }

    #[test]
    fn test_from_env_value_splits_on_separator() {
        let value = env::join_paths([PathBuf::from("/usr/bin"), PathBuf::from("/bin")]).unwrap();
        let path = SearchPath::from_env_value(&value);

        assert_eq!(
            path.entries(),
            &[PathBuf::from("/usr/bin"), PathBuf::from("/bin")]
        );
    }

    #[test]
    fn test_to_env_value_round_trips_entries() {
        let path = SearchPath::new(vec![PathBuf::from("/a"), PathBuf::from("/b")]);
        let value = path.to_env_value().unwrap();

        assert_eq!(SearchPath::from_env_value(&value), path);
    }

    #[test]
    fn test_empty_search_path() {
        let path = SearchPath::default();
        assert!(path.is_empty());
        assert_eq!(path.first(), None);
    }
}

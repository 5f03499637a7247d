//! Directory existence probing
//!
//! The resolver checks candidate layouts through this trait instead of
//! touching the filesystem directly, so tests can assert exactly which
//! probes happened (including that none happened at all).

use std::path::Path;

/// Trait for directory existence checks (injectable for testing).
pub trait DirProber {
    /// Check if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Production prober that uses real filesystem operations.
#[derive(Debug, Default)]
pub struct SystemProber;

impl DirProber for SystemProber {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Test prober with predefined directories and a probe log.
#[cfg(test)]
#[derive(Default)]
pub struct MockProber {
    dirs: std::collections::HashSet<std::path::PathBuf>,
    probed: std::cell::RefCell<Vec<std::path::PathBuf>>,
}

#[cfg(test)]
impl MockProber {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dir(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    /// Every path probed so far, in probe order.
    pub fn probed(&self) -> Vec<std::path::PathBuf> {
        self.probed.borrow().clone()
    }
}

#[cfg(test)]
impl DirProber for MockProber {
    fn is_dir(&self, path: &Path) -> bool {
        self.probed.borrow_mut().push(path.to_path_buf());
        self.dirs.contains(path)
    }
}

use std::{io::ErrorKind, path::PathBuf};

use color_eyre::{eyre::WrapErr, Result};

/// Where fixture files come from. Returns `Ok(None)` when a file does not exist.
#[cfg_attr(test, mockall::automock)]
pub trait FixtureSource {
    fn read(&self, name: &str) -> Result<Option<String>>;
}

/// Fixtures stored as plain files in one directory.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FixtureSource for DirSource {
    fn read(&self, name: &str) -> Result<Option<String>> {
        let path = self.root.join(name);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("fixture {} not found, skipping", path.display());
                Ok(None)
            }
            Err(e) => Err(e).wrap_err_with(|| format!("could not read {}", path.display())),
        }
    }
}

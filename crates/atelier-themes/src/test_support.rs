//! On-disk theme fixtures shared by the unit tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::store::FsThemeStore;

/// A temporary themes root.
pub(crate) struct Fixture {
    _dir: TempDir,
    root: PathBuf,
}

impl Fixture {
    pub(crate) fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("themes");
        std::fs::create_dir_all(&root).unwrap();
        Self { _dir: dir, root }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn store(&self) -> FsThemeStore {
        FsThemeStore::new(&self.root)
    }

    /// Install a theme with a JSON descriptor and an empty `pages/`.
    pub(crate) fn theme(&self, slug: &str, parent: Option<&str>) -> &Self {
        let descriptor = match parent {
            Some(parent) => format!(
                r#"{{"name": "{slug}", "version": "1.0.0", "parent": "{parent}"}}"#
            ),
            None => format!(r#"{{"name": "{slug}", "version": "1.0.0"}}"#),
        };
        self.raw_theme(slug, &descriptor)
    }

    /// Install a theme with exactly this `theme.json` content.
    pub(crate) fn raw_theme(&self, slug: &str, descriptor: &str) -> &Self {
        let dir = self.root.join(slug);
        std::fs::create_dir_all(dir.join("pages")).unwrap();
        std::fs::write(dir.join("theme.json"), descriptor).unwrap();
        self
    }

    /// Write a file inside a theme, creating directories as needed.
    pub(crate) fn file(&self, slug: &str, relative: &str) -> &Self {
        let path = self.root.join(slug).join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, format!("// {slug}/{relative}\n")).unwrap();
        self
    }

    pub(crate) fn path(&self, slug: &str, relative: &str) -> PathBuf {
        self.root.join(slug).join(relative)
    }
}

use crate::error::{Error, Result};
use glob::{glob_with, MatchOptions, Pattern};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Where posts live: one entry per slug.
pub trait ContentStore {
    /// Slugs of every content entry currently in the store.
    fn list(&self) -> Result<Vec<String>>;

    /// Raw content of the entry named `slug`, or `None` if there is none.
    fn read(&self, slug: &str) -> Result<Option<String>>;
}

/// A directory holding one `<slug>.<extension>` file per post.
#[derive(Clone, Debug)]
pub struct FsStore {
    dir: PathBuf,
    extension: String,
}

impl FsStore {
    pub fn new<P: AsRef<Path>>(dir: P, extension: &str) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let extension = extension.trim_start_matches('.').to_string();
        Self { dir, extension }
    }

    pub fn dir(&self) -> &Path {
        self.dir.as_path()
    }

    /// Location of the file backing `slug`. `None` for slugs that cannot name
    /// a content file in this directory.
    pub fn path_for(&self, slug: &str) -> Option<PathBuf> {
        if !is_valid_slug(slug) {
            return None;
        }

        Some(self.dir.join(format!("{}.{}", slug, self.extension)))
    }

    fn pattern(&self) -> String {
        let dir = Pattern::escape(self.dir.to_string_lossy().as_ref());
        let extension = Pattern::escape(self.extension.as_str());
        format!("{}/*.{}", dir, extension)
    }
}

impl ContentStore for FsStore {
    fn list(&self) -> Result<Vec<String>> {
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        let files = glob_with(self.pattern().as_str(), options).map_err(Error::Pattern)?;
        let mut slugs = Vec::new();

        for file in files {
            let file = file.map_err(Error::Glob)?;
            if !file.is_file() {
                continue;
            }

            match file.file_stem().and_then(|stem| stem.to_str()) {
                Some(slug) => slugs.push(slug.to_string()),
                None => log::warn!("skipping {:?}: file name is not valid UTF-8", file),
            }
        }

        Ok(slugs)
    }

    fn read(&self, slug: &str) -> Result<Option<String>> {
        let path = match self.path_for(slug) {
            Some(path) if path.is_file() => path,
            _ => return Ok(None),
        };

        log::debug!("read {:?}", path);
        fs::read_to_string(&path).map(Some).map_err(Error::Io)
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && !slug.starts_with('.') && !slug.contains(['/', '\\'])
}

/// Content kept in memory, keyed by slug.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>, C: Into<String>>(&mut self, slug: S, content: C) {
        self.entries.insert(slug.into(), content.into());
    }

    pub fn remove(&mut self, slug: &str) -> Option<String> {
        self.entries.remove(slug)
    }
}

impl ContentStore for MemoryStore {
    fn list(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn read(&self, slug: &str) -> Result<Option<String>> {
        Ok(self.entries.get(slug).cloned())
    }
}

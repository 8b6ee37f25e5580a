use crate::error::{Error, Result};
use crate::store::FsStore;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub content: ContentConfig,
    pub build: BuildConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContentConfig {
    pub dir: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BuildConfig {
    pub out_dir: String,
    pub index_template: String,
    pub post_template: String,
    pub partials_pattern: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WatchConfig {
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_extension() -> String {
    "mdx".to_string()
}

fn default_debounce_ms() -> u64 {
    50
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(Error::Io)?;
        Self::parse(text.as_str())
    }

    pub fn parse(text: &str) -> Result<Config> {
        toml::from_str(text).map_err(Error::Deserialize)
    }

    pub fn store(&self) -> FsStore {
        FsStore::new(self.content.dir.as_str(), self.content.extension.as_str())
    }

    /// Paths the watcher follows. Falls back to the content directory.
    pub fn watch_paths(&self) -> Vec<PathBuf> {
        if self.watch.paths.is_empty() {
            vec![PathBuf::from(self.content.dir.as_str())]
        } else {
            self.watch.paths.iter().map(PathBuf::from).collect()
        }
    }
}

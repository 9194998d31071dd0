use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::command::is_valid_pair;
use crate::session::CurrencyPair;

/// Pair used when no defaults file exists yet.
pub fn fallback_pair() -> CurrencyPair {
    CurrencyPair::new("eur", "huf")
}

/// The persisted default pair: a plain-text file of exactly two lines,
/// `from` then `to`. Written wholesale by the `cd` command, read only at
/// startup.
pub struct DefaultsFile {
    path: PathBuf,
}

impl DefaultsFile {
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Defaults location under the per-user configuration directory.
    pub fn per_user() -> Result<Self> {
        let dir = dirs::config_dir().context("could not determine the user configuration directory")?;
        Ok(Self {
            path: dir.join("currency-converter").join("defaults.txt"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved pair, falling back to [`fallback_pair`] when the file
    /// is missing or malformed (fewer than two lines, or a code failing the
    /// length check). Lines beyond the first two are ignored.
    pub fn load(&self) -> CurrencyPair {
        self.try_load().unwrap_or_else(fallback_pair)
    }

    fn try_load(&self) -> Option<CurrencyPair> {
        let text = fs::read_to_string(&self.path).ok()?;
        let mut lines = text.lines();
        let from = lines.next()?;
        let to = lines.next()?;
        if !is_valid_pair(from, to) {
            return None;
        }
        Some(CurrencyPair::new(from, to))
    }

    /// Overwrite the file with the given pair, creating parent directories
    /// on first save.
    pub fn save(&self, pair: &CurrencyPair) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, format!("{}\n{}\n", pair.from(), pair.to()))
            .with_context(|| format!("failed to write defaults to {}", self.path.display()))
    }
}

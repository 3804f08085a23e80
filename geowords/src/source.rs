//! Word sources: where raw candidate words come from.
//!
//! Sources return unfiltered strings. Validation and deduplication happen in
//! the vocabulary builder.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::mode::Mode;

const GLOBAL_WORDS: &str = include_str!("../words/global.txt");
const REGION_WORDS: &str = include_str!("../words/region.txt");

/// Supplies raw candidate words for a mode.
pub trait WordSource: Send + Sync {
    fn raw_candidate_words(&self, mode: Mode) -> Result<Vec<String>>;
}

/// Split a word list file into candidates.
/// Blank lines and lines starting with `#` are ignored.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// The word lists compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinWords;

impl WordSource for BuiltinWords {
    fn raw_candidate_words(&self, mode: Mode) -> Result<Vec<String>> {
        let text = match mode {
            Mode::Global => GLOBAL_WORDS,
            Mode::RegionRestricted => REGION_WORDS,
        };
        Ok(parse_word_list(text))
    }
}

/// In-memory word lists. Modes without a list yield no candidates.
#[derive(Debug, Clone, Default)]
pub struct StaticWords {
    by_mode: HashMap<Mode, Vec<String>>,
}

impl StaticWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(mut self, mode: Mode, words: &[&str]) -> Self {
        self.by_mode
            .entry(mode)
            .or_default()
            .extend(words.iter().map(|w| w.to_string()));
        self
    }
}

impl WordSource for StaticWords {
    fn raw_candidate_words(&self, mode: Mode) -> Result<Vec<String>> {
        Ok(self.by_mode.get(&mode).cloned().unwrap_or_default())
    }
}

/// Per-mode word file lists, loadable from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WordFiles {
    pub global: Vec<PathBuf>,
    pub region_restricted: Vec<PathBuf>,
}

impl WordFiles {
    /// Load from a JSON file. Relative paths are resolved against the
    /// directory holding the JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word config {:?}", path))?;
        let mut files: WordFiles = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse word config {:?}", path))?;

        if let Some(base) = path.parent() {
            for list in [&mut files.global, &mut files.region_restricted] {
                for file in list.iter_mut() {
                    if file.is_relative() {
                        *file = base.join(&*file);
                    }
                }
            }
        }
        Ok(files)
    }

    pub fn files(&self, mode: Mode) -> &[PathBuf] {
        match mode {
            Mode::Global => &self.global,
            Mode::RegionRestricted => &self.region_restricted,
        }
    }
}

/// Merges word files per mode, falling back to the built-in lists for
/// modes with no files configured.
///
/// Unreadable files are skipped with a warning. A mode whose files all
/// fail ends up with no candidates and fails vocabulary construction.
#[derive(Debug, Clone, Default)]
pub struct FileWordSource {
    files: WordFiles,
}

impl FileWordSource {
    pub fn new(files: WordFiles) -> Self {
        Self { files }
    }
}

impl WordSource for FileWordSource {
    fn raw_candidate_words(&self, mode: Mode) -> Result<Vec<String>> {
        let paths = self.files.files(mode);
        if paths.is_empty() {
            return BuiltinWords.raw_candidate_words(mode);
        }

        let mut words = Vec::new();
        for path in paths {
            match std::fs::read_to_string(path) {
                Ok(text) => {
                    let parsed = parse_word_list(&text);
                    info!("Loaded {} candidate words for {} from {:?}", parsed.len(), mode, path);
                    words.extend(parsed);
                }
                Err(e) => {
                    warn!("Skipping unreadable word file {:?} for {}: {}", path, mode, e);
                }
            }
        }
        Ok(words)
    }
}

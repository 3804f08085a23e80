//! Per-mode vocabularies large enough to address every grid cell.

use log::{debug, info};
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::error::GeocodeError;
use crate::mode::Mode;
use crate::permutation;
use crate::source::WordSource;

/// Smallest `n >= 3` with `n * (n - 1) * (n - 2) >= total_cells`.
pub fn required_minimum_words(total_cells: u64) -> u64 {
    let mut n = ((total_cells as f64).cbrt().floor() as u64).max(3);
    while n > 3 && permutation::capacity(n - 1) >= total_cells {
        n -= 1;
    }
    while permutation::capacity(n) < total_cells {
        n += 1;
    }
    n
}

/// True when `word` is a non-empty run of `a`-`z`.
pub fn is_vocabulary_token(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Fetch candidates from `source` and keep the lowercased, purely
/// alphabetic, distinct ones. Only ASCII is case-folded, so non-ASCII
/// letters never turn into vocabulary words.
pub fn load_base_words(
    source: &dyn WordSource,
    mode: Mode,
) -> Result<BTreeSet<String>, GeocodeError> {
    let raw = source
        .raw_candidate_words(mode)
        .map_err(|e| GeocodeError::word_source(mode, &e))?;
    let total = raw.len();

    let words: BTreeSet<String> = raw
        .into_iter()
        .map(|w| w.trim().to_ascii_lowercase())
        .filter(|w| is_vocabulary_token(w))
        .collect();

    debug!(
        "{}: kept {} of {} candidate words",
        mode,
        words.len(),
        total
    );
    if words.len() < 3 {
        return Err(GeocodeError::InsufficientVocabulary {
            mode,
            valid: words.len(),
        });
    }
    Ok(words)
}

/// Generate words for `mode` until `existing` plus the output reaches
/// `min_count`. Same inputs, same output.
pub fn synthesize(
    min_count: usize,
    existing: &BTreeSet<String>,
    mode: Mode,
) -> Result<Vec<String>, GeocodeError> {
    mode.profile().synthesize(min_count, existing, mode)
}

/// A finalized word list with its reverse index.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    mode: Mode,
    words: Vec<String>,
    index: HashMap<String, usize>,
    capacity: u64,
    synthesized: usize,
}

impl Vocabulary {
    /// Build the vocabulary for `mode`, padding the source's words until
    /// the permutation capacity covers `total_cells`.
    pub fn build(
        source: &dyn WordSource,
        mode: Mode,
        total_cells: u64,
    ) -> Result<Self, GeocodeError> {
        let mut words = load_base_words(source, mode)?;
        let base_count = words.len();

        let required = required_minimum_words(total_cells);
        let required = usize::try_from(required).map_err(|_| GeocodeError::VocabularyExhausted {
            mode,
            required: usize::MAX,
            produced: base_count,
        })?;

        let extra = synthesize(required, &words, mode)?;
        let synthesized = extra.len();
        words.extend(extra);

        let vocab = Self::from_words(mode, words, synthesized);
        info!(
            "Built {} vocabulary: {} base + {} synthesized = {} words, capacity {}",
            mode,
            base_count,
            synthesized,
            vocab.len(),
            vocab.capacity()
        );
        Ok(vocab)
    }

    fn from_words(mode: Mode, words: BTreeSet<String>, synthesized: usize) -> Self {
        let words: Vec<String> = words.into_iter().collect();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();
        let capacity = permutation::capacity(words.len() as u64);
        Self {
            mode,
            words,
            index,
            capacity,
            synthesized,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Words in ascending order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Number of ordered triples of distinct words.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// How many words came from synthesis rather than the source.
    pub fn synthesized(&self) -> usize {
        self.synthesized
    }
}

/// Lazily built vocabularies, one per mode.
///
/// Lookups after the first build take no lock. First builds are serialized
/// so every caller sees the same `Arc<Vocabulary>` for a mode.
pub struct VocabularyCache {
    source: Arc<dyn WordSource>,
    total_cells: u64,
    global: OnceLock<Arc<Vocabulary>>,
    region_restricted: OnceLock<Arc<Vocabulary>>,
    build_lock: Mutex<()>,
}

impl VocabularyCache {
    pub fn new(source: Arc<dyn WordSource>, total_cells: u64) -> Self {
        Self {
            source,
            total_cells,
            global: OnceLock::new(),
            region_restricted: OnceLock::new(),
            build_lock: Mutex::new(()),
        }
    }

    fn slot(&self, mode: Mode) -> &OnceLock<Arc<Vocabulary>> {
        match mode {
            Mode::Global => &self.global,
            Mode::RegionRestricted => &self.region_restricted,
        }
    }

    /// The vocabulary for `mode`, building it on first use.
    pub fn get(&self, mode: Mode) -> Result<Arc<Vocabulary>, GeocodeError> {
        if let Some(vocab) = self.slot(mode).get() {
            return Ok(Arc::clone(vocab));
        }

        let _guard = self
            .build_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(vocab) = self.slot(mode).get() {
            return Ok(Arc::clone(vocab));
        }

        let vocab = Arc::new(Vocabulary::build(
            self.source.as_ref(),
            mode,
            self.total_cells,
        )?);
        Ok(Arc::clone(self.slot(mode).get_or_init(|| vocab)))
    }

    /// Already-built vocabulary, if any.
    pub fn cached(&self, mode: Mode) -> Option<Arc<Vocabulary>> {
        self.slot(mode).get().cloned()
    }

    /// Drop every cached vocabulary; the next `get` rebuilds.
    pub fn invalidate(&mut self) {
        self.global.take();
        self.region_restricted.take();
    }
}

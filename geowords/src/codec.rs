//! Coordinate <-> three-word conversion.
//!
//! The codec owns the grid and the vocabulary cache. Conversions are pure
//! index arithmetic once a mode's vocabulary exists.

use log::{debug, info};
use serde::Serialize;
use std::sync::Arc;

use crate::error::GeocodeError;
use crate::grid::Grid;
use crate::mode::Mode;
use crate::permutation;
use crate::source::{BuiltinWords, WordSource};
use crate::types::{Coordinate, WordTriple};
use crate::vocabulary::{is_vocabulary_token, Vocabulary, VocabularyCache};

/// Summary of a mode's addressing space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodecStats {
    pub mode: Mode,
    pub latitude_cells: u64,
    pub longitude_cells: u64,
    pub total_cells: u64,
    pub cell_height_deg: f64,
    pub cell_width_deg: f64,
    pub vocabulary_size: usize,
    pub synthesized_words: usize,
    pub permutation_capacity: u64,
}

pub struct GeoCodec {
    grid: Grid,
    vocabularies: VocabularyCache,
}

impl Default for GeoCodec {
    fn default() -> Self {
        Self::new(Arc::new(BuiltinWords))
    }
}

impl GeoCodec {
    /// Codec over the ~3 m Earth grid.
    pub fn new(source: Arc<dyn WordSource>) -> Self {
        Self::with_grid(Grid::earth(), source)
    }

    pub fn with_grid(grid: Grid, source: Arc<dyn WordSource>) -> Self {
        Self {
            grid,
            vocabularies: VocabularyCache::new(source, grid.total_cells()),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The capacity-checked vocabulary for `mode`.
    pub fn vocabulary(&self, mode: Mode) -> Result<Arc<Vocabulary>, GeocodeError> {
        let vocab = self.vocabularies.get(mode)?;
        if vocab.capacity() < self.grid.total_cells() {
            return Err(GeocodeError::CapacityInsufficient {
                mode,
                capacity: vocab.capacity(),
                required: self.grid.total_cells(),
            });
        }
        Ok(vocab)
    }

    /// Build and check every listed mode up front.
    pub fn prepare(&self, modes: &[Mode]) -> Result<(), GeocodeError> {
        for &mode in modes {
            let vocab = self.vocabulary(mode)?;
            info!(
                "Mode {} ready: {} words for {} cells",
                mode,
                vocab.len(),
                self.grid.total_cells()
            );
        }
        Ok(())
    }

    /// Drop cached vocabularies so the next call rebuilds them.
    pub fn invalidate(&mut self) {
        self.vocabularies.invalidate();
    }

    pub fn stats(&self, mode: Mode) -> Result<CodecStats, GeocodeError> {
        let vocab = self.vocabulary(mode)?;
        Ok(CodecStats {
            mode,
            latitude_cells: self.grid.latitude_cells(),
            longitude_cells: self.grid.longitude_cells(),
            total_cells: self.grid.total_cells(),
            cell_height_deg: self.grid.cell_height_deg(),
            cell_width_deg: self.grid.cell_width_deg(),
            vocabulary_size: vocab.len(),
            synthesized_words: vocab.synthesized(),
            permutation_capacity: vocab.capacity(),
        })
    }

    /// Three words naming the cell that contains the coordinate.
    pub fn encode(
        &self,
        latitude: f64,
        longitude: f64,
        mode: Mode,
    ) -> Result<WordTriple, GeocodeError> {
        let cell = self.grid.cell_index(latitude, longitude)?;
        let vocab = self.vocabulary(mode)?;

        let indices = permutation::unrank(cell, vocab.len() as u64).ok_or_else(|| {
            GeocodeError::EncodingInvariantViolation(format!(
                "cell {} has no permutation among {} words",
                cell,
                vocab.len()
            ))
        })?;

        let mut words = Vec::with_capacity(3);
        for i in indices {
            let word = vocab.word(i as usize).ok_or_else(|| {
                GeocodeError::EncodingInvariantViolation(format!(
                    "index {} outside vocabulary of {}",
                    i,
                    vocab.len()
                ))
            })?;
            words.push(word);
        }
        let [w1, w2, w3] = [words[0], words[1], words[2]];

        if w1 == w2 || w1 == w3 || w2 == w3 {
            return Err(GeocodeError::EncodingInvariantViolation(format!(
                "repeated word in {}.{}.{}",
                w1, w2, w3
            )));
        }
        if let Some(bad) = [w1, w2, w3].into_iter().find(|w| !is_vocabulary_token(w)) {
            return Err(GeocodeError::EncodingInvariantViolation(format!(
                "non-alphabetic word '{}'",
                bad
            )));
        }

        debug!("{} ({}, {}) -> cell {} -> {}.{}.{}", mode, latitude, longitude, cell, w1, w2, w3);
        Ok(WordTriple::new(w1, w2, w3))
    }

    /// Center of the cell named by three words.
    pub fn decode(
        &self,
        word1: &str,
        word2: &str,
        word3: &str,
        mode: Mode,
    ) -> Result<Coordinate, GeocodeError> {
        let words = normalize_words([word1, word2, word3])?;
        let vocab = self.vocabulary(mode)?;

        let mut indices = [0u64; 3];
        for (slot, word) in indices.iter_mut().zip(&words) {
            let index = vocab
                .index_of(word)
                .ok_or_else(|| GeocodeError::unknown_word(word.as_str(), mode))?;
            *slot = index as u64;
        }

        let rank = permutation::rank(indices, vocab.len() as u64).ok_or_else(|| {
            GeocodeError::invalid_words(format!("{:?} is not a valid word order", words))
        })?;

        // Triples past the last cell exist because capacity exceeds the grid.
        let center = self.grid.cell_center(rank).ok_or_else(|| {
            GeocodeError::invalid_words(format!(
                "{}.{}.{} does not name a grid cell",
                words[0], words[1], words[2]
            ))
        })?;

        debug!("{} {}.{}.{} -> cell {} -> {}", mode, words[0], words[1], words[2], rank, center);
        Ok(center)
    }

    pub fn encode_triple(&self, coordinate: Coordinate, mode: Mode) -> Result<WordTriple, GeocodeError> {
        self.encode(coordinate.latitude, coordinate.longitude, mode)
    }

    pub fn decode_triple(&self, words: &WordTriple, mode: Mode) -> Result<Coordinate, GeocodeError> {
        let [w1, w2, w3] = words.as_array();
        self.decode(w1, w2, w3, mode)
    }
}

/// Trim and lowercase, then reject empty, whitespace-bearing or
/// digit-bearing tokens and repeated words. Other punctuation is left for
/// the vocabulary lookup to reject.
fn normalize_words(words: [&str; 3]) -> Result<[String; 3], GeocodeError> {
    let normalized = words.map(|w| w.trim().to_ascii_lowercase());

    for word in &normalized {
        if word.is_empty() {
            return Err(GeocodeError::invalid_words("empty word"));
        }
        if word.chars().any(|c| c.is_whitespace() || c.is_ascii_digit()) {
            return Err(GeocodeError::invalid_words(format!(
                "'{}' is not a word",
                word
            )));
        }
    }

    let [a, b, c] = &normalized;
    if a == b || a == c || b == c {
        return Err(GeocodeError::invalid_words("words must be distinct"));
    }
    Ok(normalized)
}

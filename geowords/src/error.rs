//! Error types for encoding, decoding and vocabulary construction.

use thiserror::Error;

use crate::mode::Mode;

/// Errors produced by the geocoding engine.
///
/// Caller-input errors (`OutOfRange`, `InvalidWords`, `UnknownWord`,
/// `UnknownMode`) are recoverable per call. The remaining variants are
/// configuration failures that keep a mode from being served.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeocodeError {
    /// Coordinate outside [-90, 90] x [-180, 180], or not a number.
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    OutOfRange { latitude: f64, longitude: f64 },

    /// Malformed or duplicate input words.
    #[error("invalid words: {reason}")]
    InvalidWords { reason: String },

    /// Word is not part of the mode's vocabulary.
    #[error("unknown word '{word}' for mode {mode}")]
    UnknownWord { word: String, mode: Mode },

    /// Mode selector did not name a known mode.
    #[error("unknown mode '{0}'")]
    UnknownMode(String),

    /// The word source could not supply candidates.
    #[error("word source failed for mode {mode}: {message}")]
    WordSource { mode: Mode, message: String },

    /// Fewer than three usable base words.
    #[error("insufficient vocabulary for mode {mode}: {valid} valid base words, need at least 3")]
    InsufficientVocabulary { mode: Mode, valid: usize },

    /// Synthesis ran out of candidates before reaching the target size.
    #[error("vocabulary exhausted for mode {mode}: reached {produced} of {required} words")]
    VocabularyExhausted {
        mode: Mode,
        required: usize,
        produced: usize,
    },

    /// Permutation capacity does not cover the grid.
    #[error("capacity insufficient for mode {mode}: {capacity} permutations for {required} cells")]
    CapacityInsufficient {
        mode: Mode,
        capacity: u64,
        required: u64,
    },

    /// Forward encoding produced output that breaks the output invariants.
    #[error("encoding invariant violated: {0}")]
    EncodingInvariantViolation(String),
}

impl GeocodeError {
    pub fn out_of_range(latitude: f64, longitude: f64) -> Self {
        Self::OutOfRange {
            latitude,
            longitude,
        }
    }

    pub fn invalid_words(reason: impl Into<String>) -> Self {
        Self::InvalidWords {
            reason: reason.into(),
        }
    }

    pub fn unknown_word(word: impl Into<String>, mode: Mode) -> Self {
        Self::UnknownWord {
            word: word.into(),
            mode,
        }
    }

    pub fn word_source(mode: Mode, err: &anyhow::Error) -> Self {
        Self::WordSource {
            mode,
            message: format!("{:#}", err),
        }
    }

    /// True for errors caused by the request itself rather than by the
    /// engine's configuration.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. }
                | Self::InvalidWords { .. }
                | Self::UnknownWord { .. }
                | Self::UnknownMode(_)
        )
    }
}

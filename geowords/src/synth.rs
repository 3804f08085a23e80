//! Deterministic generation of pronounceable filler words.
//!
//! A profile is an ordered list of patterns. Each pattern is a sequence of
//! morpheme slots and yields every combination of its slots, leftmost slot
//! varying slowest. Patterns are drained in order until enough new words
//! exist, so the output depends only on the profile and the set of words
//! already present.

use log::debug;
use std::collections::{BTreeSet, HashSet};

use crate::error::GeocodeError;
use crate::mode::Mode;

/// One morpheme position: the alternatives that may fill it.
pub type Slot = &'static [&'static str];

const CONSONANTS: Slot = &[
    "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "r", "s", "t", "v", "w", "z",
];
const VOWELS: Slot = &["a", "e", "i", "o", "u"];

const KANA_ONSETS: Slot = &[
    "k", "s", "t", "n", "h", "m", "y", "r", "w", "g", "z", "d", "b", "p",
];
const KANA_VOWELS: Slot = &["a", "i", "u", "e", "o"];
const KANA_CODAS: Slot = &["n"];
const KANA_SUFFIXES: Slot = &["ka", "ko", "mi", "no", "ra", "shi", "ta", "ya"];

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub slots: &'static [Slot],
}

impl Pattern {
    /// Number of candidates this pattern yields, duplicates included.
    pub fn len(&self) -> u64 {
        self.slots
            .iter()
            .fold(1u64, |acc, slot| acc.saturating_mul(slot.len() as u64))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn candidates(&self) -> Candidates {
        Candidates {
            slots: self.slots,
            digits: vec![0; self.slots.len()],
            done: self.slots.is_empty() || self.is_empty(),
        }
    }
}

/// Odometer over a pattern's slots.
pub struct Candidates {
    slots: &'static [Slot],
    digits: Vec<usize>,
    done: bool,
}

impl Iterator for Candidates {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        let word: String = self
            .slots
            .iter()
            .zip(&self.digits)
            .map(|(slot, &d)| slot[d])
            .collect();

        // Advance, rightmost slot fastest.
        let mut pos = self.digits.len();
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            self.digits[pos] += 1;
            if self.digits[pos] < self.slots[pos].len() {
                break;
            }
            self.digits[pos] = 0;
        }

        Some(word)
    }
}

/// A prioritized list of generation patterns.
#[derive(Debug)]
pub struct SynthesisProfile {
    pub name: &'static str,
    pub patterns: &'static [Pattern],
}

impl SynthesisProfile {
    /// Consonant-vowel syllables.
    pub const GENERIC: SynthesisProfile = SynthesisProfile {
        name: "generic",
        patterns: &[
            Pattern {
                name: "cvcv",
                slots: &[CONSONANTS, VOWELS, CONSONANTS, VOWELS],
            },
            Pattern {
                name: "cvcvc",
                slots: &[CONSONANTS, VOWELS, CONSONANTS, VOWELS, CONSONANTS],
            },
            Pattern {
                name: "vcvcv",
                slots: &[VOWELS, CONSONANTS, VOWELS, CONSONANTS, VOWELS],
            },
            Pattern {
                name: "cvcvcv",
                slots: &[CONSONANTS, VOWELS, CONSONANTS, VOWELS, CONSONANTS, VOWELS],
            },
        ],
    };

    /// Romaji-style onset/vowel/coda/suffix morphemes.
    pub const KANA: SynthesisProfile = SynthesisProfile {
        name: "kana",
        patterns: &[
            Pattern {
                name: "ovov",
                slots: &[KANA_ONSETS, KANA_VOWELS, KANA_ONSETS, KANA_VOWELS],
            },
            Pattern {
                name: "ovov-coda",
                slots: &[KANA_ONSETS, KANA_VOWELS, KANA_ONSETS, KANA_VOWELS, KANA_CODAS],
            },
            Pattern {
                name: "ov-coda-ov",
                slots: &[KANA_ONSETS, KANA_VOWELS, KANA_CODAS, KANA_ONSETS, KANA_VOWELS],
            },
            Pattern {
                name: "ovov-suffix",
                slots: &[KANA_ONSETS, KANA_VOWELS, KANA_ONSETS, KANA_VOWELS, KANA_SUFFIXES],
            },
            Pattern {
                name: "ovovov",
                slots: &[
                    KANA_ONSETS,
                    KANA_VOWELS,
                    KANA_ONSETS,
                    KANA_VOWELS,
                    KANA_ONSETS,
                    KANA_VOWELS,
                ],
            },
        ],
    };

    /// Upper bound on the number of words this profile can produce.
    pub fn capacity(&self) -> u64 {
        self.patterns
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.len()))
    }

    /// Generate new words, absent from `existing`, until `existing` plus
    /// the output holds at least `min_count` words.
    pub fn synthesize(
        &self,
        min_count: usize,
        existing: &BTreeSet<String>,
        mode: Mode,
    ) -> Result<Vec<String>, GeocodeError> {
        let needed = min_count.saturating_sub(existing.len());
        let mut out = Vec::with_capacity(needed);
        if needed == 0 {
            return Ok(out);
        }

        let mut produced: HashSet<String> = HashSet::with_capacity(needed);
        for pattern in self.patterns {
            let before = out.len();
            for word in pattern.candidates() {
                if existing.contains(&word) || produced.contains(&word) {
                    continue;
                }
                produced.insert(word.clone());
                out.push(word);
                if out.len() == needed {
                    break;
                }
            }
            debug!(
                "{} profile: pattern {} added {} words ({}/{})",
                self.name,
                pattern.name,
                out.len() - before,
                out.len(),
                needed
            );
            if out.len() == needed {
                return Ok(out);
            }
        }

        Err(GeocodeError::VocabularyExhausted {
            mode,
            required: min_count,
            produced: existing.len() + out.len(),
        })
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::mode::Mode;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Three distinct vocabulary words, order significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordTriple {
    pub word1: String,
    pub word2: String,
    pub word3: String,
}

impl WordTriple {
    pub fn new(word1: impl Into<String>, word2: impl Into<String>, word3: impl Into<String>) -> Self {
        Self {
            word1: word1.into(),
            word2: word2.into(),
            word3: word3.into(),
        }
    }

    pub fn as_array(&self) -> [&str; 3] {
        [
            self.word1.as_str(),
            self.word2.as_str(),
            self.word3.as_str(),
        ]
    }

    /// Split `"one.two.three"` into a triple.
    pub fn parse_dotted(s: &str) -> Option<Self> {
        let mut parts = s.split('.');
        let triple = Self::new(parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        Some(triple)
    }
}

impl fmt::Display for WordTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.word1, self.word2, self.word3)
    }
}

/// Coordinate to words request, as a transport layer would receive it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordsRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub mode: Mode,
}

/// Words to coordinate request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordsRequest {
    pub word1: String,
    pub word2: String,
    pub word3: String,
    #[serde(default)]
    pub mode: Mode,
}

pub type WordsResponse = WordTriple;
pub type CoordsResponse = Coordinate;

//! Reversible mapping between geographic coordinates and three-word labels.
//!
//! The globe is cut into a fixed grid of roughly 3 m cells. Each cell index
//! is mapped to an ordered triple of distinct words from a per-mode
//! vocabulary, and back.

pub mod codec;
pub mod config;
pub mod error;
pub mod grid;
pub mod mode;
pub mod permutation;
pub mod source;
pub mod synth;
pub mod types;
pub mod vocabulary;

// Re-export commonly used types
pub use codec::{CodecStats, GeoCodec};
pub use error::GeocodeError;
pub use grid::Grid;
pub use mode::Mode;
pub use source::{BuiltinWords, FileWordSource, StaticWords, WordFiles, WordSource};
pub use synth::SynthesisProfile;
pub use types::{Coordinate, CoordsRequest, CoordsResponse, WordTriple, WordsRequest, WordsResponse};
pub use vocabulary::{Vocabulary, VocabularyCache};

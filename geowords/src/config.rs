use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::mode::Mode;

/// Command-line configuration for the geowords tool
#[derive(Debug, Clone, Parser)]
#[command(name = "geowords")]
#[command(about = "Convert between coordinates and three-word labels")]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Also write log output to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// JSON file listing word files per mode
    #[arg(long, global = true)]
    pub word_config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a coordinate to three words
    Encode {
        /// Latitude in degrees, -90 to 90
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees, -180 to 180
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Vocabulary mode (global, region-restricted)
        #[arg(long, default_value = "global")]
        mode: Mode,
    },

    /// Convert three words (or one dotted "a.b.c" argument) to a coordinate
    Decode {
        #[arg(required = true, num_args = 1..=3)]
        words: Vec<String>,

        /// Vocabulary mode (global, region-restricted)
        #[arg(long, default_value = "global")]
        mode: Mode,
    },

    /// Show grid and vocabulary figures for a mode
    Info {
        #[arg(long, default_value = "global")]
        mode: Mode,
    },

    /// Print the finalized vocabulary, one word per line
    Vocab {
        #[arg(long, default_value = "global")]
        mode: Mode,
    },
}

impl Command {
    pub fn mode(&self) -> Mode {
        match self {
            Command::Encode { mode, .. }
            | Command::Decode { mode, .. }
            | Command::Info { mode }
            | Command::Vocab { mode } => *mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode() {
        let config =
            Config::try_parse_from(["geowords", "encode", "--lat", "51.5074", "--lng", "-0.1278"])
                .unwrap();
        assert_eq!(config.log_level, "warn");
        assert!(!config.json);
        match config.command {
            Command::Encode { lat, lng, mode } => {
                assert_eq!(lat, 51.5074);
                assert_eq!(lng, -0.1278);
                assert_eq!(mode, Mode::Global);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_decode_with_mode() {
        let config = Config::try_parse_from([
            "geowords", "--json", "decode", "kawa", "yama", "sora", "--mode", "region",
        ])
        .unwrap();
        assert!(config.json);
        assert_eq!(config.command.mode(), Mode::RegionRestricted);
        match config.command {
            Command::Decode { words, .. } => assert_eq!(words, vec!["kawa", "yama", "sora"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Config::try_parse_from(["geowords", "info", "--mode", "lunar"]).is_err());
    }

    #[test]
    fn test_rejects_too_many_words() {
        assert!(Config::try_parse_from(["geowords", "decode", "a", "b", "c", "d"]).is_err());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GeocodeError;
use crate::synth::SynthesisProfile;

/// Selects an independent vocabulary and addressing space.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Global,
    RegionRestricted,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Global, Mode::RegionRestricted];

    /// Canonical name, as accepted by `FromStr` and used in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Global => "global",
            Mode::RegionRestricted => "region-restricted",
        }
    }

    /// Generation profile used to pad this mode's vocabulary.
    pub fn profile(&self) -> &'static SynthesisProfile {
        match self {
            Mode::Global => &SynthesisProfile::GENERIC,
            Mode::RegionRestricted => &SynthesisProfile::KANA,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = GeocodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(Mode::Global),
            "region-restricted" | "region" => Ok(Mode::RegionRestricted),
            _ => Err(GeocodeError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("global".parse::<Mode>().unwrap(), Mode::Global);
        assert_eq!("GLOBAL".parse::<Mode>().unwrap(), Mode::Global);
        assert_eq!(
            "region-restricted".parse::<Mode>().unwrap(),
            Mode::RegionRestricted
        );
        assert_eq!(" region ".parse::<Mode>().unwrap(), Mode::RegionRestricted);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = "martian".parse::<Mode>().unwrap_err();
        assert_eq!(err, GeocodeError::UnknownMode("martian".to_string()));
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Mode::RegionRestricted).unwrap();
        assert_eq!(json, "\"region-restricted\"");
        let mode: Mode = serde_json::from_str("\"global\"").unwrap();
        assert_eq!(mode, Mode::Global);
    }

    #[test]
    fn test_modes_use_distinct_profiles() {
        assert_ne!(
            Mode::Global.profile().name,
            Mode::RegionRestricted.profile().name
        );
    }
}

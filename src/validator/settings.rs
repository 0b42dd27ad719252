//! Validator thresholds, loadable from YAML
//!
//! Every field is optional in YAML; missing fields keep their defaults.
//!
//! ```yaml
//! max-distance:
//!   tenor-bass: 19
//! voice-ranges:
//!   bass: { low: 29, high: 48 }
//! ```

use super::types::Voice;
use crate::error::ChordalError;
use serde::{Deserialize, Serialize};

/// Inclusive range of allowed note values for a voice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceRange {
    pub low: u8,
    pub high: u8,
}

impl VoiceRange {
    pub const fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }
}

/// Largest allowed gap, in semitones, between adjacent voices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VoiceSpacing {
    pub soprano_alto: u8,
    pub alto_tenor: u8,
    pub tenor_bass: u8,
}

impl Default for VoiceSpacing {
    fn default() -> Self {
        Self {
            soprano_alto: 12,
            alto_tenor: 12,
            tenor_bass: 24,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VoiceRanges {
    pub bass: VoiceRange,
    pub tenor: VoiceRange,
    pub alto: VoiceRange,
    pub soprano: VoiceRange,
}

impl VoiceRanges {
    pub fn get(&self, voice: Voice) -> VoiceRange {
        match voice {
            Voice::Bass => self.bass,
            Voice::Tenor => self.tenor,
            Voice::Alto => self.alto,
            Voice::Soprano => self.soprano,
        }
    }
}

impl Default for VoiceRanges {
    fn default() -> Self {
        Self {
            bass: VoiceRange::new(26, 50),
            tenor: VoiceRange::new(36, 57),
            alto: VoiceRange::new(43, 62),
            soprano: VoiceRange::new(47, 69),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ValidatorSettings {
    pub max_distance: VoiceSpacing,
    pub voice_ranges: VoiceRanges,
}

impl ValidatorSettings {
    pub fn from_yaml(content: &str) -> Result<Self, ChordalError> {
        let settings: ValidatorSettings =
            serde_yaml::from_str(content).map_err(|e| ChordalError::Settings(e.to_string()))?;

        for voice in Voice::ALL {
            let range = settings.voice_ranges.get(voice);
            if range.low > range.high {
                return Err(ChordalError::Settings(format!(
                    "{} range is empty ({} > {})",
                    voice.name(),
                    range.low,
                    range.high
                )));
            }
        }

        Ok(settings)
    }
}

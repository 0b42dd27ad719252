//! Validation finding types

use serde::{Serialize, Serializer};
use std::fmt;

/// The four SATB voices, indexed from the bass up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    Bass,
    Tenor,
    Alto,
    Soprano,
}

impl Voice {
    pub const ALL: [Voice; 4] = [Voice::Bass, Voice::Tenor, Voice::Alto, Voice::Soprano];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Voice::Bass => "bass",
            Voice::Tenor => "tenor",
            Voice::Alto => "alto",
            Voice::Soprano => "soprano",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Spelling,
    Spacing,
    Range,
    Movement,
    Resolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NumVoices,
    UnknownChord,
    DoubledLeadingTone,
    DoubledSeventh,
    SopranoAltoDistance,
    AltoTenorDistance,
    TenorBassDistance,
    VoiceHigh,
    VoiceLow,
    Parallel5th,
    Parallel8th,
    UnresolvedLeadingTone,
    UnresolvedSeventh,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NumVoices => "ERR_NUM_VOICES",
            ErrorCode::UnknownChord => "ERR_UNKNOWN_CHORD",
            ErrorCode::DoubledLeadingTone => "ERR_DOUBLED_LT",
            ErrorCode::DoubledSeventh => "ERR_DOUBLED_7TH",
            ErrorCode::SopranoAltoDistance => "ERR_SA_DISTANCE",
            ErrorCode::AltoTenorDistance => "ERR_AT_DISTANCE",
            ErrorCode::TenorBassDistance => "ERR_TB_DISTANCE",
            ErrorCode::VoiceHigh => "ERR_VOICE_HIGH",
            ErrorCode::VoiceLow => "ERR_VOICE_LOW",
            ErrorCode::Parallel5th => "ERR_PARALLEL_5TH",
            ErrorCode::Parallel8th => "ERR_PARALLEL_8TH",
            ErrorCode::UnresolvedLeadingTone => "ERR_UNRESOLVED_LT",
            ErrorCode::UnresolvedSeventh => "ERR_UNRESOLVED_7TH",
        }
    }

    pub fn category(self) -> ErrorCategory {
        match self {
            ErrorCode::NumVoices
            | ErrorCode::UnknownChord
            | ErrorCode::DoubledLeadingTone
            | ErrorCode::DoubledSeventh => ErrorCategory::Spelling,
            ErrorCode::SopranoAltoDistance
            | ErrorCode::AltoTenorDistance
            | ErrorCode::TenorBassDistance => ErrorCategory::Spacing,
            ErrorCode::VoiceHigh | ErrorCode::VoiceLow => ErrorCategory::Range,
            ErrorCode::Parallel5th | ErrorCode::Parallel8th => ErrorCategory::Movement,
            ErrorCode::UnresolvedLeadingTone | ErrorCode::UnresolvedSeventh => {
                ErrorCategory::Resolution
            }
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Where a finding applies. Chord indices are 1-based, voice indices run 0 (bass) to 3 (soprano).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    #[serde(rename_all = "camelCase")]
    Chord { chord_index: usize },
    #[serde(rename_all = "camelCase")]
    Voice { chord_index: usize, voice_index: usize },
    #[serde(rename_all = "camelCase")]
    Transition {
        prev_chord_index: usize,
        curr_chord_index: usize,
        voice_one: usize,
        voice_two: usize,
    },
}

/// One voice-leading finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub category: ErrorCategory,
    pub code: ErrorCode,
    pub details: ErrorDetails,
}

impl ValidationError {
    pub fn new(code: ErrorCode, details: ErrorDetails) -> Self {
        Self {
            category: code.category(),
            code,
            details,
        }
    }

    pub fn chord(code: ErrorCode, chord_index: usize) -> Self {
        Self::new(code, ErrorDetails::Chord { chord_index })
    }

    pub fn voice(code: ErrorCode, chord_index: usize, voice_index: usize) -> Self {
        Self::new(
            code,
            ErrorDetails::Voice {
                chord_index,
                voice_index,
            },
        )
    }

    pub fn transition(
        code: ErrorCode,
        prev_chord_index: usize,
        curr_chord_index: usize,
        voice_one: usize,
        voice_two: usize,
    ) -> Self {
        Self::new(
            code,
            ErrorDetails::Transition {
                prev_chord_index,
                curr_chord_index,
                voice_one,
                voice_two,
            },
        )
    }
}

fn voice_name(index: usize) -> &'static str {
    Voice::from_index(index).map_or("voice", Voice::name)
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.details) {
            (code, ErrorDetails::Chord { chord_index }) => {
                let message = match code {
                    ErrorCode::NumVoices => "does not have exactly four voices",
                    ErrorCode::UnknownChord => "cannot be identified in the key",
                    ErrorCode::DoubledLeadingTone => "doubles the leading tone",
                    ErrorCode::DoubledSeventh => "doubles the chordal seventh",
                    ErrorCode::SopranoAltoDistance => "has soprano and alto too far apart",
                    ErrorCode::AltoTenorDistance => "has alto and tenor too far apart",
                    ErrorCode::TenorBassDistance => "has tenor and bass too far apart",
                    _ => code.as_str(),
                };
                write!(f, "Chord {} {}", chord_index, message)
            }
            (code, ErrorDetails::Voice { chord_index, voice_index }) => {
                let voice = voice_name(voice_index);
                match code {
                    ErrorCode::VoiceHigh => write!(f, "Chord {}: the {} is too high", chord_index, voice),
                    ErrorCode::VoiceLow => write!(f, "Chord {}: the {} is too low", chord_index, voice),
                    ErrorCode::UnresolvedLeadingTone => write!(
                        f,
                        "Chord {}: the leading tone in the {} does not resolve",
                        chord_index, voice
                    ),
                    ErrorCode::UnresolvedSeventh => write!(
                        f,
                        "Chord {}: the seventh in the {} does not resolve",
                        chord_index, voice
                    ),
                    _ => write!(f, "Chord {}: {} in the {}", chord_index, code.as_str(), voice),
                }
            }
            (
                code,
                ErrorDetails::Transition {
                    prev_chord_index,
                    curr_chord_index,
                    voice_one,
                    voice_two,
                },
            ) => {
                let interval = match code {
                    ErrorCode::Parallel5th => "fifths",
                    ErrorCode::Parallel8th => "octaves",
                    _ => code.as_str(),
                };
                write!(
                    f,
                    "Chords {}-{}: parallel {} between the {} and {}",
                    prev_chord_index,
                    curr_chord_index,
                    interval,
                    voice_name(voice_one),
                    voice_name(voice_two)
                )
            }
        }
    }
}

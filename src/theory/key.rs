//! # Keys
//!
//! A key is a tonic spelling plus a mode. Its seven diatonic spellings are derived by
//! stepping through consecutive letters and spelling each scale step on that letter,
//! so every letter appears exactly once per scale.
//!
//! Minor keys use the natural-minor collection. The leading tone is always the
//! major-scale seventh above the tonic (the raised seventh in minor).
//!
//! ## Example
//! ```rust
//! use chordal::Key;
//!
//! let key: Key = "f#".parse()?;
//! let scale: Vec<String> = key.scale().iter().map(|s| s.to_string()).collect();
//! assert_eq!(scale, ["F#", "G#", "A", "B", "C#", "D", "E"]);
//! assert_eq!(key.leading_tone().to_string(), "E#");
//! # Ok::<(), chordal::ChordalError>(())
//! ```

use crate::error::ChordalError;
use crate::theory::spelling::{Letter, Spelling};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MAJOR_STEPS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];
const MINOR_STEPS: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl Mode {
    fn steps(self) -> &'static [u8; 7] {
        match self {
            Mode::Major => &MAJOR_STEPS,
            Mode::Minor => &MINOR_STEPS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    tonic: Spelling,
    mode: Mode,
    scale: [Spelling; 7],
    leading_tone: Spelling,
}

impl Key {
    /// Build a key, or `None` if any scale step would need more than a double accidental
    pub fn new(tonic: Spelling, mode: Mode) -> Option<Self> {
        let tonic_pc = tonic.pitch_class();
        let mut scale = [tonic; 7];
        for (degree, step) in mode.steps().iter().enumerate() {
            scale[degree] = Spelling::from_letter(tonic.letter.offset(degree), (tonic_pc + step) % 12)?;
        }
        let leading_tone = Spelling::from_letter(tonic.letter.offset(6), (tonic_pc + 11) % 12)?;
        Some(Self {
            tonic,
            mode,
            scale,
            leading_tone,
        })
    }

    pub fn major(tonic: Spelling) -> Option<Self> {
        Self::new(tonic, Mode::Major)
    }

    pub fn minor(tonic: Spelling) -> Option<Self> {
        Self::new(tonic, Mode::Minor)
    }

    /// Parse a key name: upper-case tonic for major, lower-case tonic or trailing `m` for minor.
    ///
    /// `"C"`, `"Eb"` are major; `"c"`, `"f#"`, `"bb"`, `"Bbm"` are minor.
    pub fn parse(name: &str) -> Result<Self, ChordalError> {
        let invalid = || ChordalError::InvalidKey(name.to_string());
        let trimmed = name.trim();
        let mut chars = trimmed.chars();
        let first = chars.next().ok_or_else(invalid)?;
        let mut rest = chars.as_str();

        let mut mode = if first.is_ascii_lowercase() {
            Mode::Minor
        } else {
            Mode::Major
        };
        if let Some(stripped) = rest.strip_suffix('m') {
            mode = Mode::Minor;
            rest = stripped;
        }

        let letter = Letter::from_char(first.to_ascii_uppercase()).ok_or_else(invalid)?;
        let tonic = Spelling::parse(&format!("{}{}", letter.as_char(), rest)).ok_or_else(invalid)?;
        Self::new(tonic, mode).ok_or_else(invalid)
    }

    pub fn tonic(&self) -> Spelling {
        self.tonic
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_minor(&self) -> bool {
        self.mode == Mode::Minor
    }

    pub fn scale(&self) -> &[Spelling; 7] {
        &self.scale
    }

    pub fn leading_tone(&self) -> Spelling {
        self.leading_tone
    }

    /// Scale index (0-based) of an exact diatonic spelling
    pub fn degree_of(&self, spelling: Spelling) -> Option<usize> {
        self.scale.iter().position(|s| *s == spelling)
    }

    /// Scale index of the diatonic note sharing this letter
    pub fn degree_of_letter(&self, letter: Letter) -> usize {
        (letter.index() + 7 - self.tonic.letter.index()) % 7
    }

    pub fn note_for_degree(&self, degree: usize) -> Spelling {
        self.scale[degree % 7]
    }

    /// Accidental to print before `spelling` under this key signature ("" when diatonic)
    pub fn accidental_for(&self, spelling: Spelling) -> &'static str {
        if self.degree_of(spelling).is_some() {
            ""
        } else {
            spelling.accidental.notation()
        }
    }
}

impl FromStr for Key {
    type Err = ChordalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::parse(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.mode {
            Mode::Major => self.tonic.letter.as_char(),
            Mode::Minor => self.tonic.letter.as_char().to_ascii_lowercase(),
        };
        write!(f, "{}{}", letter, self.tonic.accidental.symbol())
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

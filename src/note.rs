//! Notes and the factory that parses note tokens such as `F#3`.

use crate::error::ChordalError;
use crate::theory::{Key, Spelling};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

const MAX_OCTAVE: u8 = 9;

/// A spelled note in a specific octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    spelling: Spelling,
    octave: u8,
}

impl Note {
    /// Octave must already be checked against a [`NoteFactory`] range
    pub(crate) fn new(spelling: Spelling, octave: u8) -> Self {
        Self { spelling, octave }
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    pub fn pitch_class(&self) -> u8 {
        self.spelling.pitch_class()
    }

    /// Absolute semitone value: pitch class + 12 * octave
    pub fn value(&self) -> u8 {
        self.pitch_class() + 12 * self.octave
    }

    /// Ascending interval in semitones (mod 12) from this note to `other`
    pub fn interval_to(&self, other: &Note) -> u8 {
        (other.pitch_class() + 12 - self.pitch_class()) % 12
    }

    /// Accidental shown before this note under `key`'s signature
    pub fn accidental_for(&self, key: &Key) -> &'static str {
        key.accidental_for(self.spelling)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spelling, self.octave)
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Note {
    type Err = ChordalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteFactory::default().parse(s)
    }
}

/// Parses note tokens, accepting octaves within a configured range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFactory {
    octaves: RangeInclusive<u8>,
}

impl Default for NoteFactory {
    fn default() -> Self {
        Self { octaves: 0..=8 }
    }
}

impl NoteFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Octaves above 9 cannot be written as a single digit and are dropped from the range
    pub fn with_octave_range(octaves: RangeInclusive<u8>) -> Self {
        let end = (*octaves.end()).min(MAX_OCTAVE);
        Self {
            octaves: *octaves.start()..=end,
        }
    }

    pub fn octaves(&self) -> &RangeInclusive<u8> {
        &self.octaves
    }

    /// Build a note from its parts, rejecting octaves outside the range
    pub fn note(&self, spelling: Spelling, octave: u8) -> Result<Note, ChordalError> {
        if !self.octaves.contains(&octave) {
            return Err(ChordalError::InvalidNote(format!("{}{}", spelling, octave)));
        }
        Ok(Note::new(spelling, octave))
    }

    /// Parse a token like `Bbb6`: the spelling runs up to the first digit,
    /// which must be the last character and names the octave.
    pub fn parse(&self, token: &str) -> Result<Note, ChordalError> {
        let invalid = || ChordalError::InvalidNote(token.to_string());
        let token = token.trim();
        let split = token.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
        let (spelling, octave) = token.split_at(split);

        let spelling = Spelling::parse(spelling).ok_or_else(invalid)?;
        let mut digits = octave.chars();
        let octave = digits
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(invalid)? as u8;
        if digits.next().is_some() {
            return Err(invalid());
        }
        self.note(spelling, octave).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> Note {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_note() {
        let n = note("F#3");
        assert_eq!(n.spelling().to_string(), "F#");
        assert_eq!(n.octave(), 3);
        assert_eq!(n.pitch_class(), 6);
        assert_eq!(n.value(), 42);
        assert_eq!(n.to_string(), "F#3");
    }

    #[test]
    fn test_value_follows_pitch_class() {
        // B#3 shares C3's pitch class and octave number
        assert_eq!(note("B#3").value(), note("C3").value());
        assert_eq!(note("Cb4").value(), 59);
        assert_eq!(note("Bbb6").value(), 81);
    }

    #[test]
    fn test_parse_invalid_notes() {
        for token in ["", "C", "H3", "3C", "C#", "Cy4", "C10", "C9", "C4x", "c4"] {
            assert_eq!(
                token.parse::<Note>(),
                Err(ChordalError::InvalidNote(token.to_string())),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_octave_range() {
        assert!(NoteFactory::default().parse("C8").is_ok());
        let factory = NoteFactory::with_octave_range(0..=7);
        assert!(factory.parse("C7").is_ok());
        assert!(factory.parse("C8").is_err());
    }

    #[test]
    fn test_note_from_parts() {
        let factory = NoteFactory::default();
        let c = Spelling::parse("C").unwrap();
        assert_eq!(factory.note(c, 4).unwrap().value(), 48);
        assert_eq!(factory.note(c, 9), Err(ChordalError::InvalidNote("C9".to_string())));
        assert!(factory.note(c, 21).is_err());
        assert!(factory.note(c, u8::MAX).is_err());
        let wide = NoteFactory::with_octave_range(0..=30);
        assert!(wide.note(c, 9).is_ok());
        assert!(wide.note(c, 21).is_err());
    }

    #[test]
    fn test_interval() {
        assert_eq!(note("C4").interval_to(&note("G4")), 7);
        assert_eq!(note("G4").interval_to(&note("C5")), 5);
        assert_eq!(note("B3").interval_to(&note("C4")), 1);
    }

    #[test]
    fn test_accidental_for_key() {
        let key = Key::parse("f#").unwrap();
        assert_eq!(note("C3").accidental_for(&key), "n");
        assert_eq!(note("E3").accidental_for(&key), "");
    }
}

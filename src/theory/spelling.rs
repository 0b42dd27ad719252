//! Note spellings: a letter name plus up to two accidentals.
//!
//! Spelling, not pitch class, drives roman-numeral accidentals, so `B#`, `C` and `Dbb`
//! are distinct values that share pitch class 0.

use serde::{Serialize, Serializer};
use std::fmt;

/// Note letters C through B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Position in the C-based letter cycle (C=0 .. B=6)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn natural_pitch_class(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// The letter `steps` places above this one, wrapping B -> C
    pub fn offset(self, steps: usize) -> Letter {
        Letter::ALL[(self.index() + steps) % 7]
    }
}

/// Accidentals from double flat to double sharp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    #[default]
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    pub fn semitones(self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    pub fn from_semitones(semitones: i8) -> Option<Self> {
        match semitones {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Symbol as written in a spelling ("" for natural, "x" for double sharp)
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "x",
        }
    }

    /// Symbol as printed against a key signature, where a natural must be shown
    pub fn notation(self) -> &'static str {
        match self {
            Accidental::Natural => "n",
            other => other.symbol(),
        }
    }

    fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "bb" => Some(Accidental::DoubleFlat),
            "b" => Some(Accidental::Flat),
            "" => Some(Accidental::Natural),
            "#" => Some(Accidental::Sharp),
            "x" => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }
}

/// A letter name with its accidental, e.g. `F#` or `Bbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spelling {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl Spelling {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    /// Parse one of the 35 spellings (`C`, `C#`, `Cx`, `Cb`, `Cbb`, ...)
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let letter = Letter::from_char(chars.next()?)?;
        let accidental = Accidental::from_symbol(chars.as_str())?;
        Some(Self::new(letter, accidental))
    }

    pub fn pitch_class(self) -> u8 {
        (self.letter.natural_pitch_class() as i8 + self.accidental.semitones()).rem_euclid(12) as u8
    }

    /// Spell `pitch_class` with the given letter, if it takes at most a double accidental
    pub fn from_letter(letter: Letter, pitch_class: u8) -> Option<Self> {
        let semitones = signed_distance(letter.natural_pitch_class(), pitch_class);
        Accidental::from_semitones(semitones).map(|accidental| Self::new(letter, accidental))
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.symbol())
    }
}

impl Serialize for Spelling {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Shortest signed distance in semitones from one pitch class to another (-5..=6)
pub fn signed_distance(from: u8, to: u8) -> i8 {
    let up = (to as i8 - from as i8).rem_euclid(12);
    if up > 6 {
        up - 12
    } else {
        up
    }
}

//! # Roman Numerals
//!
//! A [`Numeral`] is the structured form of a roman-numeral label: an optional chromatic
//! alteration, a scale degree, the chord quality and the inversion. Relation checks,
//! tendency-tone checks and applied-dominant matching all work on this structure. The
//! string form (`"bVI4/2"`, `"viiø6/5"`) is only produced for display.
//!
//! ## Derivation
//! 1. A root spelled exactly as a diatonic note takes that degree unaltered.
//! 2. Otherwise the diatonic note sharing its letter gives the degree, and the semitone
//!    distance from it gives the alteration (`#`, `x`, `b`, `bb`).
//! 3. Minor-family qualities are lower case; the quality decoration (`o`, `+`, `ø`, `M`)
//!    and the inversion figure follow.
//!
//! ## Example
//! ```rust
//! use chordal::theory::{ChordQuality, Numeral, Spelling};
//! use chordal::Key;
//!
//! let key: Key = "C".parse()?;
//! let root = Spelling::parse("Eb").unwrap();
//! let numeral = Numeral::new(&key, root, ChordQuality::Diminished, 2);
//! assert_eq!(numeral.to_string(), "biiio6/4");
//! # Ok::<(), chordal::ChordalError>(())
//! ```
//!
//! ## Related Modules
//! - `key` - Supplies the diatonic spellings
//! - `chord` - Derives numerals for identified chords
//! - `progression` - Classifies relations and applied dominants across a progression

use crate::theory::key::{Key, Mode};
use crate::theory::quality::ChordQuality;
use crate::theory::spelling::{signed_distance, Spelling};
use serde::Serialize;
use std::fmt;

const ROMAN: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];
const TRIAD_FIGURES: [&str; 3] = ["", "6", "6/4"];
const SEVENTH_FIGURES: [&str; 4] = ["7", "6/5", "4/3", "4/2"];

/// Chromatic alteration of a numeral's root against the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alteration {
    DoubleFlat,
    Flat,
    Sharp,
    DoubleSharp,
}

impl Alteration {
    fn from_distance(semitones: i8) -> Option<Self> {
        match semitones {
            0 => None,
            1 => Some(Alteration::Sharp),
            2 => Some(Alteration::DoubleSharp),
            -1 => Some(Alteration::Flat),
            _ => Some(Alteration::DoubleFlat),
        }
    }

    pub fn semitones(self) -> i8 {
        match self {
            Alteration::DoubleFlat => -2,
            Alteration::Flat => -1,
            Alteration::Sharp => 1,
            Alteration::DoubleSharp => 2,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Alteration::DoubleFlat => "bb",
            Alteration::Flat => "b",
            Alteration::Sharp => "#",
            Alteration::DoubleSharp => "x",
        }
    }
}

/// How a chord stands in relation to the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Diatonic,
    /// Borrowed from the parallel mode
    Mixture,
    Chromatic,
    /// Dominant or leading-tone chord of the chord that follows
    Applied,
}

type Shape = (Option<Alteration>, usize, ChordQuality);

const FLAT: Option<Alteration> = Some(Alteration::Flat);
const SHARP: Option<Alteration> = Some(Alteration::Sharp);

const MAJOR_DIATONIC: &[Shape] = &[
    (None, 0, ChordQuality::Major),
    (None, 1, ChordQuality::Minor),
    (None, 2, ChordQuality::Minor),
    (None, 3, ChordQuality::Major),
    (None, 4, ChordQuality::Major),
    (None, 5, ChordQuality::Minor),
    (None, 6, ChordQuality::Diminished),
    (None, 0, ChordQuality::MajorSeventh),
    (None, 1, ChordQuality::MinorSeventh),
    (None, 2, ChordQuality::MinorSeventh),
    (None, 3, ChordQuality::MajorSeventh),
    (None, 4, ChordQuality::DominantSeventh),
    (None, 5, ChordQuality::MinorSeventh),
    (None, 6, ChordQuality::HalfDiminishedSeventh),
    (None, 6, ChordQuality::DiminishedSeventh),
];

const MAJOR_MIXTURE: &[Shape] = &[
    (None, 0, ChordQuality::Minor),
    (None, 1, ChordQuality::Diminished),
    (FLAT, 2, ChordQuality::Major),
    (None, 3, ChordQuality::Minor),
    (None, 4, ChordQuality::Minor),
    (FLAT, 5, ChordQuality::Major),
    (FLAT, 6, ChordQuality::Major),
    (None, 0, ChordQuality::MinorSeventh),
    (None, 1, ChordQuality::HalfDiminishedSeventh),
    (FLAT, 2, ChordQuality::MajorSeventh),
    (None, 3, ChordQuality::MinorSeventh),
    (None, 4, ChordQuality::MinorSeventh),
    (FLAT, 5, ChordQuality::MajorSeventh),
    (FLAT, 6, ChordQuality::DominantSeventh),
];

const MINOR_DIATONIC: &[Shape] = &[
    (None, 0, ChordQuality::Minor),
    (None, 1, ChordQuality::Diminished),
    (None, 2, ChordQuality::Major),
    (None, 3, ChordQuality::Minor),
    (None, 4, ChordQuality::Minor),
    (None, 5, ChordQuality::Major),
    (None, 6, ChordQuality::Major),
    (None, 0, ChordQuality::MinorSeventh),
    (None, 1, ChordQuality::HalfDiminishedSeventh),
    (None, 2, ChordQuality::MajorSeventh),
    (None, 3, ChordQuality::MinorSeventh),
    (None, 4, ChordQuality::MinorSeventh),
    (None, 5, ChordQuality::MajorSeventh),
    (None, 6, ChordQuality::DominantSeventh),
];

// Raised sixth and seventh degrees borrowed from the parallel major
const MINOR_MIXTURE: &[Shape] = &[
    (None, 0, ChordQuality::Major),
    (None, 1, ChordQuality::Minor),
    (SHARP, 2, ChordQuality::Minor),
    (None, 3, ChordQuality::Major),
    (None, 4, ChordQuality::Major),
    (SHARP, 5, ChordQuality::Minor),
    (SHARP, 6, ChordQuality::Diminished),
    (None, 0, ChordQuality::MajorSeventh),
    (None, 1, ChordQuality::MinorSeventh),
    (SHARP, 2, ChordQuality::MinorSeventh),
    (None, 3, ChordQuality::MajorSeventh),
    (None, 4, ChordQuality::DominantSeventh),
    (SHARP, 5, ChordQuality::MinorSeventh),
    (SHARP, 6, ChordQuality::HalfDiminishedSeventh),
    (None, 6, ChordQuality::DiminishedSeventh),
];

/// A roman numeral relative to some key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Numeral {
    pub alteration: Option<Alteration>,
    /// Scale degree, 0 = tonic
    pub degree: usize,
    pub quality: ChordQuality,
    pub inversion: u8,
}

impl Numeral {
    /// Numeral of a chord with the given root, quality and inversion in `key`
    pub fn new(key: &Key, root: Spelling, quality: ChordQuality, inversion: u8) -> Self {
        let (degree, alteration) = match key.degree_of(root) {
            Some(degree) => (degree, None),
            None => {
                let degree = key.degree_of_letter(root.letter);
                let diatonic = key.note_for_degree(degree);
                let distance = signed_distance(diatonic.pitch_class(), root.pitch_class());
                (degree, Alteration::from_distance(distance))
            }
        };
        Self {
            alteration,
            degree,
            quality,
            inversion,
        }
    }

    pub fn root_position(self) -> Self {
        Self { inversion: 0, ..self }
    }

    fn shape(&self) -> Shape {
        (self.alteration, self.degree, self.quality)
    }

    /// Inversion figure: 6, 6/4 for triads, 7, 6/5, 4/3, 4/2 for seventh chords
    pub fn figure(&self) -> &'static str {
        let index = self.inversion as usize;
        if self.quality.is_triad() {
            TRIAD_FIGURES.get(index).copied().unwrap_or("")
        } else if self.quality.has_seventh() {
            if self.quality == ChordQuality::HalfDiminishedSeventh && index == 0 {
                return "";
            }
            SEVENTH_FIGURES.get(index).copied().unwrap_or("")
        } else {
            ""
        }
    }

    /// Alteration and cased roman numeral only, e.g. `bVI` or `ii`
    pub fn base(&self) -> String {
        let roman = ROMAN[self.degree % 7];
        let roman = if self.quality.is_lower_case() {
            roman.to_lowercase()
        } else {
            roman.to_string()
        };
        match self.alteration {
            Some(alteration) => format!("{}{}", alteration.prefix(), roman),
            None => roman,
        }
    }

    /// Pitch class of the root in `key`
    pub fn root_pitch_class(&self, key: &Key) -> u8 {
        let diatonic = key.note_for_degree(self.degree).pitch_class() as i8;
        let shift = self.alteration.map_or(0, Alteration::semitones);
        (diatonic + shift).rem_euclid(12) as u8
    }

    /// Whether this is a diminished seventh sounding the same pitches as the
    /// leading-tone seventh chord of `key`
    pub fn is_leading_tone_seventh(&self, key: &Key) -> bool {
        self.quality == ChordQuality::DiminishedSeventh
            && (self.root_pitch_class(key) + 12 - key.leading_tone().pitch_class()) % 3 == 0
    }

    /// Respell a fully diminished seventh as the leading-tone seventh of `key` when it
    /// sounds the same pitches: in C, `iio7` becomes `viio6/5`, `ivo7` becomes
    /// `viio4/3` and `bvio7` becomes `viio4/2`.
    ///
    /// Other diminished sevenths are named against the leading tone as well, so in
    /// minor a diminished seventh on the subtonic reads `bviio7`. Anything that is not a
    /// diminished seventh is returned unchanged.
    pub fn leading_tone_respelling(self, key: &Key) -> Self {
        if self.quality != ChordQuality::DiminishedSeventh {
            return self;
        }
        if !self.is_leading_tone_seventh(key) {
            if key.is_minor() && self.alteration.is_none() && self.degree == 6 {
                return Self {
                    alteration: Some(Alteration::Flat),
                    ..self
                };
            }
            return self;
        }
        let above = (self.root_pitch_class(key) + 12 - key.leading_tone().pitch_class()) % 12;
        Self {
            alteration: None,
            degree: 6,
            quality: ChordQuality::DiminishedSeventh,
            inversion: (above / 3 + self.inversion) % 4,
        }
    }

    /// Chords that contain the leading tone as a tendency tone: IM7, iii, V, viio, viiø
    pub fn is_tendency_bearing(&self) -> bool {
        matches!(
            self.shape(),
            (None, 0, ChordQuality::MajorSeventh)
                | (None, 2, ChordQuality::Minor | ChordQuality::MinorSeventh)
                | (None, 4, ChordQuality::Major | ChordQuality::DominantSeventh)
                | (
                    None | SHARP,
                    6,
                    ChordQuality::Diminished | ChordQuality::HalfDiminishedSeventh
                )
                | (None, 6, ChordQuality::DiminishedSeventh)
        )
    }

    pub fn relation(&self, mode: Mode) -> Relation {
        let (diatonic, mixture) = match mode {
            Mode::Major => (MAJOR_DIATONIC, MAJOR_MIXTURE),
            Mode::Minor => (MINOR_DIATONIC, MINOR_MIXTURE),
        };
        let shape = self.shape();
        if diatonic.contains(&shape) {
            Relation::Diatonic
        } else if mixture.contains(&shape) {
            Relation::Mixture
        } else {
            Relation::Chromatic
        }
    }

    /// Whether the chord should be re-read against the chord that follows it:
    /// chromatic chords, and a borrowed major I or III
    pub fn invites_applied_reading(&self, relation: Relation) -> bool {
        match relation {
            Relation::Chromatic => true,
            Relation::Mixture => matches!(
                self.shape(),
                (None, 0 | 2, ChordQuality::Major | ChordQuality::DominantSeventh)
            ),
            _ => false,
        }
    }

    /// This numeral as an applied function (V, V7, viio, viiø, viio7) in its local key
    pub fn as_applied_function(self, local: &Key) -> Option<Self> {
        match self.shape() {
            (None, 4, ChordQuality::Major | ChordQuality::DominantSeventh) => Some(self),
            (None | SHARP, 6, ChordQuality::Diminished | ChordQuality::HalfDiminishedSeventh) => {
                Some(Self {
                    alteration: None,
                    ..self
                })
            }
            (_, _, ChordQuality::DiminishedSeventh) => self
                .is_leading_tone_seventh(local)
                .then(|| self.leading_tone_respelling(local)),
            _ => None,
        }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.base(),
            self.quality.numeral_decoration(),
            self.figure()
        )
    }
}

/// Chromatic chords with a conventional name of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromaticChord {
    Neapolitan,
    Italian,
    German,
    French,
}

impl ChromaticChord {
    /// Recognise a Neapolitan or augmented-sixth chord.
    ///
    /// In minor the `VI7` spelling only counts when one of its notes is sharpened
    /// against the key; otherwise it is an ordinary chromatic seventh chord.
    pub fn classify(
        numeral: &Numeral,
        mode: Mode,
        distinct_spellings: usize,
        has_raised_note: bool,
    ) -> Option<Self> {
        let augmented_sixth = if distinct_spellings == 4 {
            ChromaticChord::German
        } else {
            ChromaticChord::Italian
        };
        match numeral.shape() {
            (FLAT, 1, ChordQuality::Major) => Some(ChromaticChord::Neapolitan),
            (None, 1 | 5, ChordQuality::DominantSeventhFlatFive)
            | (FLAT, 5, ChordQuality::DominantSeventhFlatFive) => Some(ChromaticChord::French),
            (None, 5, ChordQuality::DominantSeventh) if mode == Mode::Minor && has_raised_note => {
                Some(augmented_sixth)
            }
            (FLAT, 5, ChordQuality::DominantSeventh) if mode == Mode::Major => Some(augmented_sixth),
            _ => None,
        }
    }

    pub fn label(self, numeral: &Numeral) -> String {
        match self {
            ChromaticChord::Neapolitan => format!("N{}", numeral.figure()),
            ChromaticChord::Italian => "It+6".to_string(),
            ChromaticChord::German => "Ger+6".to_string(),
            ChromaticChord::French => "Fr+6".to_string(),
        }
    }
}

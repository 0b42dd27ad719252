//! # Chord Progressions
//!
//! An ordered list of chords with an optional key. All per-chord analysis (names,
//! numerals, accidentals, validation) is computed on demand from the current chords, so
//! editing the progression never leaves stale results behind.
//!
//! ## Chord Functions
//! [`ChordProgression::chord_function`] classifies a chord against the key:
//! - its numeral, with diminished sevenths respelled around the leading tone
//! - its relation (diatonic, mixture, chromatic)
//! - for chromatic chords (and a borrowed major I or III), an applied reading against the
//!   following chord, which switches the chord's key context to that chord's key
//! - Neapolitan and augmented-sixth chords, which need no applied reading
//!
//! ## Example
//! ```rust
//! use chordal::{ChordFactory, ChordProgression, Key, NumeralOptions};
//!
//! let factory = ChordFactory::default();
//! let mut progression = ChordProgression::new(Some("c#".parse::<Key>()?));
//! for text in ["C#3,G#3,E4,C#5", "E3,B3,D4,G#4", "A2,A3,C#4,A4"] {
//!     progression.add_chord(&factory, text, None)?;
//! }
//! assert_eq!(progression.numerals(NumeralOptions::default()), ["i", "V7/VI", "VI"]);
//! # Ok::<(), chordal::ChordalError>(())
//! ```

use crate::chord::{Chord, ChordFactory};
use crate::error::ChordalError;
use crate::theory::{ChromaticChord, Key, Numeral, Relation};
use crate::validator::{self, ValidationError, ValidatorSettings};
use log::debug;

/// Options for numeral labelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralOptions {
    /// Label applied chords as `V7/ii`
    pub applied: bool,
    /// Use `N`, `It+6`, `Ger+6` and `Fr+6` for the named chromatic chords
    pub satb: bool,
}

impl Default for NumeralOptions {
    fn default() -> Self {
        Self {
            applied: true,
            satb: true,
        }
    }
}

/// A chord read as the dominant or leading-tone chord of the chord after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedFunction {
    /// Numeral in the local key, e.g. `V7`
    pub numeral: Numeral,
    /// Key of the following chord
    pub key: Key,
    /// Numeral of the following chord in the progression key
    pub target: Numeral,
}

/// How one chord functions in its progression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordFunction {
    /// Numeral in the progression key
    pub numeral: Numeral,
    pub relation: Relation,
    pub key: Key,
    pub applied: Option<AppliedFunction>,
    pub chromatic: Option<ChromaticChord>,
}

impl ChordFunction {
    /// Key the chord is heard in: the local key for applied chords
    pub fn context_key(&self) -> &Key {
        self.applied.as_ref().map_or(&self.key, |a| &a.key)
    }

    /// Numeral in the context key
    pub fn context_numeral(&self) -> Numeral {
        self.applied.map_or(self.numeral, |a| a.numeral)
    }

    /// Chromatic or borrowed chords that neither resolve as applied chords nor have a name
    pub fn is_unexplained(&self) -> bool {
        self.applied.is_none()
            && self.chromatic.is_none()
            && self.numeral.invites_applied_reading(self.relation)
    }

    /// Display label, e.g. `viiø6/5/IV`, `Ger+6`, `V4/2`
    pub fn label(&self, options: NumeralOptions) -> String {
        if let (true, Some(applied)) = (options.applied, self.applied) {
            return format!("{}/{}", applied.numeral, applied.target.base());
        }
        match (options.satb, self.chromatic) {
            (true, Some(chromatic)) => chromatic.label(&self.numeral),
            _ => self.numeral.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChordProgression {
    chords: Vec<Chord>,
    key: Option<Key>,
}

impl ChordProgression {
    pub fn new(key: Option<Key>) -> Self {
        Self {
            chords: Vec::new(),
            key,
        }
    }

    pub fn with_chords(chords: Vec<Chord>, key: Option<Key>) -> Self {
        Self { chords, key }
    }

    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    pub fn set_key(&mut self, key: Option<Key>) {
        self.key = key;
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn push(&mut self, chord: Chord) {
        self.chords.push(chord);
    }

    /// Insert before `index`; `index == len()` appends
    pub fn insert(&mut self, index: usize, chord: Chord) -> Result<(), ChordalError> {
        if index > self.chords.len() {
            return Err(ChordalError::IndexOutOfRange {
                index,
                len: self.chords.len(),
            });
        }
        self.chords.insert(index, chord);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Chord, ChordalError> {
        if index >= self.chords.len() {
            return Err(ChordalError::IndexOutOfRange {
                index,
                len: self.chords.len(),
            });
        }
        Ok(self.chords.remove(index))
    }

    /// Parse `text` with `factory` and append it, or insert it at `index`
    pub fn add_chord(
        &mut self,
        factory: &ChordFactory,
        text: &str,
        index: Option<usize>,
    ) -> Result<(), ChordalError> {
        let chord = factory.parse_chord(text)?;
        match index {
            Some(index) => self.insert(index, chord),
            None => {
                self.push(chord);
                Ok(())
            }
        }
    }

    pub fn names(&self, slash: bool) -> Vec<String> {
        self.chords
            .iter()
            .map(|c| if slash { c.slash_name() } else { c.name() })
            .collect()
    }

    /// Numeral labels per chord; empty without a key, "" for unknown chords
    pub fn numerals(&self, options: NumeralOptions) -> Vec<String> {
        if self.key.is_none() {
            return Vec::new();
        }
        (0..self.chords.len())
            .map(|i| {
                self.chord_function(i)
                    .map(|f| f.label(options))
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Accidentals per note per chord; empty without a key
    pub fn accidentals(&self) -> Vec<Vec<&'static str>> {
        match &self.key {
            Some(key) => self.chords.iter().map(|c| c.accidentals_for_key(key)).collect(),
            None => Vec::new(),
        }
    }

    /// Classify the chord at `index`; `None` without a key or for unknown chords
    pub fn chord_function(&self, index: usize) -> Option<ChordFunction> {
        let key = self.key?;
        let chord = self.chords.get(index)?;
        let numeral = chord.numeral_for_key(&key)?.leading_tone_respelling(&key);
        let relation = numeral.relation(key.mode());

        if numeral.invites_applied_reading(relation) {
            if let Some(applied) = self.chords.get(index + 1).and_then(|next| applied_to(chord, next, &key)) {
                debug!(
                    "chord {} is {} applied to {} in {}",
                    index + 1,
                    applied.numeral,
                    applied.target.base(),
                    key
                );
                return Some(ChordFunction {
                    numeral,
                    relation: Relation::Applied,
                    key,
                    applied: Some(applied),
                    chromatic: None,
                });
            }
        }

        let chromatic = match relation {
            Relation::Chromatic => ChromaticChord::classify(
                &numeral,
                key.mode(),
                chord.distinct_spellings(),
                chord.has_raised_note(&key),
            ),
            _ => None,
        };
        Some(ChordFunction {
            numeral,
            relation,
            key,
            applied: None,
            chromatic,
        })
    }

    /// Check four-part voice leading with the given limits
    pub fn validate(&self, settings: &ValidatorSettings) -> Vec<ValidationError> {
        validator::validate(self, settings)
    }
}

fn applied_to(chord: &Chord, next: &Chord, key: &Key) -> Option<AppliedFunction> {
    Some(AppliedFunction {
        numeral: chord.applied_numeral(next)?,
        key: next.tonicized_key()?,
        target: next.numeral_for_key(key)?,
    })
}

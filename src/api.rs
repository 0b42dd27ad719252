//! # Public API
//!
//! The three request-level operations of the library, bundled on an [`Analyzer`] that
//! owns the chord factory and validator settings they use.
//!
//! ## Operations
//!
//! - [`Analyzer::identify_chord()`] - Name a single chord from note tokens
//! - [`Analyzer::analyze_progression()`] - Names, numerals and accidentals for a progression,
//!   optionally with voice-leading findings
//! - [`Analyzer::validate_progression()`] - Voice-leading findings for a built progression
//!
//! The free functions re-exported at the crate root use [`Analyzer::default()`].
//!
//! ## Typical Usage
//!
//! ```rust
//! use chordal::analyze_progression;
//!
//! let groups = [["C3", "G3", "E4", "C5"], ["B2", "G3", "D4", "G4"], ["C3", "G3", "E4", "C5"]];
//! let analysis = analyze_progression(&groups, "C", true)?;
//!
//! let numerals: Vec<&str> = analysis.chords.iter().map(|c| c.numeral.as_str()).collect();
//! assert_eq!(numerals, ["I", "V6", "I"]);
//! assert_eq!(analysis.validation_errors.map(|e| e.len()), Some(0));
//! # Ok::<(), chordal::ChordalError>(())
//! ```
//!
//! ## Custom Settings
//!
//! ```rust
//! use chordal::{Analyzer, ValidatorSettings};
//!
//! let settings = ValidatorSettings::from_yaml("max-distance:\n  tenor-bass: 19\n")?;
//! let analyzer = Analyzer::default().with_settings(settings);
//! let analysis = analyzer.analyze_progression(&[["E2", "C4", "G4", "C5"]], "C", true)?;
//! let codes: Vec<&str> = analysis
//!     .validation_errors
//!     .unwrap_or_default()
//!     .iter()
//!     .map(|e| e.code.as_str())
//!     .collect();
//! assert_eq!(codes, ["ERR_TB_DISTANCE"]);
//! # Ok::<(), chordal::ChordalError>(())
//! ```

use crate::chord::{Chord, ChordFactory};
use crate::error::ChordalError;
use crate::progression::{ChordProgression, NumeralOptions};
use crate::theory::{ChordQuality, Key};
use crate::validator::{self, ValidationError, ValidatorSettings};
use log::warn;
use serde::Serialize;

/// Result of [`Analyzer::identify_chord()`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordIdentification {
    pub name: String,
    pub slash_name: String,
    pub quality: ChordQuality,
    /// Index of the root among the chord's notes, ordered from the bass
    pub root_index: usize,
    pub inversion: u8,
}

impl From<&Chord> for ChordIdentification {
    fn from(chord: &Chord) -> Self {
        Self {
            name: chord.name(),
            slash_name: chord.slash_name(),
            quality: chord.quality(),
            root_index: chord.root_index(),
            inversion: chord.inversion(),
        }
    }
}

/// One chord of a [`ProgressionAnalysis`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordAnalysis {
    /// Slash name, e.g. `G7/B`
    pub name: String,
    /// Roman numeral, empty for chords that cannot be read in the key
    pub numeral: String,
    /// Notes from the bass up, e.g. `F#3`
    pub notes: Vec<String>,
    /// Accidental per note against the key signature, empty when diatonic
    pub accidentals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionAnalysis {
    pub key: Key,
    pub chords: Vec<ChordAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<ValidationError>>,
}

/// Entry point bundling chord parsing and validator settings
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    chords: ChordFactory,
    settings: ValidatorSettings,
}

impl Analyzer {
    pub fn new(chords: ChordFactory, settings: ValidatorSettings) -> Self {
        Self { chords, settings }
    }

    pub fn with_settings(mut self, settings: ValidatorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn chord_factory(&self) -> &ChordFactory {
        &self.chords
    }

    pub fn settings(&self) -> &ValidatorSettings {
        &self.settings
    }

    /// Identify a chord from note tokens such as `["C3", "E3", "G3"]`.
    ///
    /// # Errors
    /// [`ChordalError::InvalidNote`] for a malformed token, [`ChordalError::NotEnoughNotes`]
    /// for fewer than three notes.
    pub fn identify_chord<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ChordIdentification, ChordalError> {
        let chord = self.chords.create_chord(tokens)?;
        Ok(ChordIdentification::from(&chord))
    }

    /// Build a progression in `key` from chord token groups, skipping groups that fail
    /// to parse, and describe each chord.
    ///
    /// # Errors
    /// [`ChordalError::InvalidKey`] for an unknown key, [`ChordalError::NoValidChords`] when
    /// no group parses.
    pub fn analyze_progression<G, S>(
        &self,
        groups: &[G],
        key: &str,
        run_validation: bool,
    ) -> Result<ProgressionAnalysis, ChordalError>
    where
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        let key = Key::parse(key)?;
        let mut progression = ChordProgression::new(Some(key));

        for (i, group) in groups.iter().enumerate() {
            match self.chords.create_chord(group.as_ref()) {
                Ok(chord) => progression.push(chord),
                Err(e) => warn!("Skipping chord group {}: {}", i + 1, e),
            }
        }

        if progression.is_empty() {
            return Err(ChordalError::NoValidChords);
        }

        let numerals = progression.numerals(NumeralOptions::default());
        let accidentals = progression.accidentals();
        let chords = progression
            .chords()
            .iter()
            .zip(numerals)
            .zip(accidentals)
            .map(|((chord, numeral), accidentals)| ChordAnalysis {
                name: chord.slash_name(),
                numeral,
                notes: chord.notes().iter().map(|n| n.to_string()).collect(),
                accidentals: accidentals.into_iter().map(String::from).collect(),
            })
            .collect();

        let validation_errors = run_validation.then(|| self.validate_progression(&progression));

        Ok(ProgressionAnalysis {
            key,
            chords,
            validation_errors,
        })
    }

    pub fn validate_progression(&self, progression: &ChordProgression) -> Vec<ValidationError> {
        validator::validate(progression, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_chord() {
        let analyzer = Analyzer::default();
        let chord = analyzer.identify_chord(&["D4", "B4", "F#5", "B5"]).unwrap();
        assert_eq!(chord.name, "Bm");
        assert_eq!(chord.slash_name, "Bm/D");
        assert_eq!(chord.quality, ChordQuality::Minor);
        assert_eq!(chord.root_index, 1);
        assert_eq!(chord.inversion, 1);
    }

    #[test]
    fn test_identify_chord_errors() {
        let analyzer = Analyzer::default();
        assert_eq!(
            analyzer.identify_chord(&["C3", "E3"]),
            Err(ChordalError::NotEnoughNotes(2))
        );
        assert_eq!(
            analyzer.identify_chord(&["C3", "E3", "Q3"]),
            Err(ChordalError::InvalidNote("Q3".to_string()))
        );
    }

    #[test]
    fn test_analyze_skips_bad_groups() {
        let groups = vec![
            vec!["C3", "E3", "G3"],
            vec!["C3", "X3", "G3"],
            vec!["C3"],
            vec!["G2", "B2", "D3", "F3"],
        ];
        let analysis = Analyzer::default().analyze_progression(&groups, "C", false).unwrap();

        assert_eq!(analysis.chords.len(), 2);
        assert_eq!(analysis.chords[1].name, "G7");
        assert_eq!(analysis.chords[1].numeral, "V7");
        assert!(analysis.validation_errors.is_none());
    }

    #[test]
    fn test_analyze_no_valid_chords() {
        let groups = [["C3", "E3"]];
        assert_eq!(
            Analyzer::default().analyze_progression(&groups, "C", true),
            Err(ChordalError::NoValidChords)
        );
    }

    #[test]
    fn test_analyze_invalid_key() {
        let groups = [["C3", "E3", "G3"]];
        assert_eq!(
            Analyzer::default().analyze_progression(&groups, "H", false),
            Err(ChordalError::InvalidKey("H".to_string()))
        );
    }

    #[test]
    fn test_analyze_accidentals() {
        let groups = [["E3", "G#3", "B3", "D4"]];
        let analysis = Analyzer::default().analyze_progression(&groups, "a", false).unwrap();
        assert_eq!(analysis.chords[0].notes, ["E3", "G#3", "B3", "D4"]);
        assert_eq!(analysis.chords[0].accidentals, ["", "#", "", ""]);
    }

    #[test]
    fn test_serialize_analysis() {
        let groups = [["C3", "E3", "G3"]];
        let analysis = Analyzer::default().analyze_progression(&groups, "C", false).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["key"], "C");
        assert_eq!(json["chords"][0]["numeral"], "I");
        assert!(json.get("validationErrors").is_none());
    }
}

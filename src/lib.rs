pub mod api;
pub mod chord;
pub mod error;
pub mod note;
pub mod progression;
pub mod theory;
pub mod validator;

pub use api::{Analyzer, ChordAnalysis, ChordIdentification, ProgressionAnalysis};
pub use chord::{split_tokens, Chord, ChordFactory};
pub use error::*;
pub use note::{Note, NoteFactory};
pub use progression::{AppliedFunction, ChordFunction, ChordProgression, NumeralOptions};
pub use theory::{ChordQuality, ChromaticChord, Key, Mode, Numeral, Relation};
pub use validator::{ErrorCategory, ErrorCode, ValidationError, ValidatorSettings};

/// Identify a chord from note tokens with the default note range.
pub fn identify_chord<S: AsRef<str>>(tokens: &[S]) -> Result<ChordIdentification, ChordalError> {
    Analyzer::default().identify_chord(tokens)
}

/// Analyze chord token groups in `key`, skipping groups that fail to parse.
pub fn analyze_progression<G, S>(
    groups: &[G],
    key: &str,
    run_validation: bool,
) -> Result<ProgressionAnalysis, ChordalError>
where
    G: AsRef<[S]>,
    S: AsRef<str>,
{
    Analyzer::default().analyze_progression(groups, key, run_validation)
}

/// Validate with the default spacing and range limits
pub fn validate_progression(progression: &ChordProgression) -> Vec<ValidationError> {
    Analyzer::default().validate_progression(progression)
}

//! # Error Types
//!
//! This module defines the error type for the chordal library.
//!
//! Only malformed input is an error here. Musically wrong chords and voice-leading
//! problems are reported as data (`ChordQuality::Unknown`, `ValidationError`), so a
//! caller can always display them.
//!
//! ## Error Types
//! - `InvalidNote` - A note token that is not a recognised spelling plus octave
//! - `NotEnoughNotes` - Fewer than three notes supplied for a chord
//! - `InvalidKey` - A key name that cannot be resolved to a scale
//! - `NoValidChords` - A progression request where no chord group parsed
//! - `IndexOutOfRange` - Editing a progression at a position that does not exist
//! - `Settings` - Invalid YAML validator settings
//!
//! ## Usage
//! ```rust
//! use chordal::{identify_chord, ChordalError};
//!
//! match identify_chord(&["C3", "E3", "H3"]) {
//!     Ok(chord) => println!("{}", chord.name),
//!     Err(ChordalError::InvalidNote(token)) => eprintln!("Bad note: {}", token),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordalError {
    /// A note token could not be parsed.
    ///
    /// # Example
    /// ```
    /// # use chordal::ChordalError;
    /// let err = ChordalError::InvalidNote("H3".to_string());
    /// assert_eq!(err.to_string(), "Invalid note 'H3'");
    /// ```
    #[error("Invalid note '{0}'")]
    InvalidNote(String),

    /// A chord needs at least three notes.
    #[error("Not enough notes for a chord: expected at least 3, got {0}")]
    NotEnoughNotes(usize),

    /// The key name is not a spelling, or its scale needs more than double accidentals.
    ///
    /// # Example
    /// ```
    /// # use chordal::ChordalError;
    /// let err = ChordalError::InvalidKey("H#".to_string());
    /// assert_eq!(err.to_string(), "Invalid key 'H#'");
    /// ```
    #[error("Invalid key '{0}'")]
    InvalidKey(String),

    #[error("No valid chords were provided")]
    NoValidChords,

    #[error("Chord index {index} is out of range for a progression of {len} chords")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid validator settings.
    ///
    /// Occurs when a YAML settings document cannot be deserialized.
    #[error("Invalid validator settings: {0}")]
    Settings(String),
}

//! # Music Theory Tables
//!
//! Static reference data and the small value types built on it.
//!
//! ## Modules
//! - `spelling` - Letters, accidentals and the 35 note spellings
//! - `key` - Diatonic spellings and leading tone per major/minor key
//! - `quality` - The closed set of chord qualities and their predicates
//! - `patterns` - Interval string to root/quality/inversion lookup
//! - `numeral` - Roman numerals, relations and named chromatic chords
//!
//! Every table here is a compile-time constant, so lookups are safe from any thread.

mod key;
mod numeral;
mod patterns;
mod quality;
mod spelling;

pub use key::{Key, Mode};
pub use numeral::{Alteration, ChromaticChord, Numeral, Relation};
pub use patterns::{lookup_pattern, PatternMatch};
pub use quality::ChordQuality;
pub use spelling::{signed_distance, Accidental, Letter, Spelling};

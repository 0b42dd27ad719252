//! # Voice-Leading Validation
//!
//! Checks a four-voice (SATB) progression against common-practice part-writing rules.
//! Notes in each chord are ordered from the bass up, so voice 0 is the bass and voice 3
//! the soprano.
//!
//! ## Purpose
//! Walks the progression once, carrying the previous chord and its function forward so
//! that movement and resolution can be judged chord to chord. Per chord the checks run
//! in a fixed order:
//!
//! 1. **Spelling**: four voices and a recognizable chord
//! 2. **Spacing**: soprano/alto, alto/tenor, tenor/bass distances
//! 3. **Range**: each voice within its limits, bass first
//! 4. **Doubling**: no doubled leading tone or seventh
//! 5. **Movement**: parallel fifths and octaves against the previous chord
//! 6. **Resolution**: the previous chord's seventh and leading tone
//!
//! A chord with the wrong number of voices gets a single finding and breaks the chain:
//! the next chord has no previous chord to compare against.
//!
//! Applied chords are judged in their local key, so the leading tone of `V7/V` is the
//! raised fourth of the progression key.
//!
//! ## Example
//! ```rust
//! use chordal::{ChordFactory, ChordProgression, ValidatorSettings};
//!
//! let factory = ChordFactory::default();
//! let mut progression = ChordProgression::new(Some("C".parse()?));
//! progression.add_chord(&factory, "C3,G3,E4,C5", None)?;
//! progression.add_chord(&factory, "D3,A3,F4,D5", None)?;
//!
//! let errors = progression.validate(&ValidatorSettings::default());
//! assert!(errors.iter().any(|e| e.code.as_str() == "ERR_PARALLEL_5TH"));
//! # Ok::<(), chordal::ChordalError>(())
//! ```
//!
//! ## Related Modules
//! - `progression` - chord functions and key context
//! - `settings` - spacing and range limits

mod settings;
mod types;


pub use settings::{ValidatorSettings, VoiceRange, VoiceRanges, VoiceSpacing};
pub use types::{ErrorCategory, ErrorCode, ErrorDetails, ValidationError, Voice};

use crate::chord::Chord;
use crate::progression::{ChordFunction, ChordProgression};
use log::{debug, warn};

const FIFTH: u8 = 7;
const UNISON: u8 = 0;

/// The chord most recently checked with four voices
struct Previous<'a> {
    index: usize,
    chord: &'a Chord,
    function: Option<ChordFunction>,
}

/// Validate a progression, returning findings in the order they were detected.
///
/// Without a key there is nothing to judge against and the result is empty.
pub fn validate(progression: &ChordProgression, settings: &ValidatorSettings) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let Some(key) = progression.key() else {
        warn!("Cannot validate a progression without a key");
        return errors;
    };
    debug!("Validating {} chords in {}", progression.len(), key);

    let mut previous: Option<Previous> = None;

    for (position, chord) in progression.chords().iter().enumerate() {
        let index = position + 1;

        if chord.len() != Voice::ALL.len() {
            debug!("Chord {} has {} voices", index, chord.len());
            errors.push(ValidationError::chord(ErrorCode::NumVoices, index));
            previous = None;
            continue;
        }

        let function = progression.chord_function(position);
        debug!(
            "Chord {} ({}) reads as {}",
            index,
            chord,
            function.map_or_else(|| "?".to_string(), |f| f.label(Default::default()))
        );

        check_spelling(chord, function.as_ref(), index, &mut errors);
        check_spacing(chord, settings, index, &mut errors);
        check_range(chord, settings, index, &mut errors);
        if let Some(function) = &function {
            check_doubling(chord, function, index, &mut errors);
        }

        if let Some(prev) = &previous {
            check_parallels(prev, chord, index, &mut errors);
            if let Some(prev_function) = &prev.function {
                check_seventh_resolution(prev, prev_function, chord, &mut errors);
                check_leading_tone_resolution(prev, prev_function, chord, &mut errors);
            }
        }

        previous = Some(Previous {
            index,
            chord,
            function,
        });
    }

    errors
}

fn check_spelling(
    chord: &Chord,
    function: Option<&ChordFunction>,
    index: usize,
    errors: &mut Vec<ValidationError>,
) {
    let Some(function) = function else {
        errors.push(ValidationError::chord(ErrorCode::UnknownChord, index));
        return;
    };

    let recognized = chord.quality().is_satb_recognized() || function.chromatic.is_some();
    if !recognized || function.is_unexplained() {
        errors.push(ValidationError::chord(ErrorCode::UnknownChord, index));
    }
}

/// Leading tone and chordal seventh are judged in the chord's own key context
fn check_doubling(chord: &Chord, function: &ChordFunction, index: usize, errors: &mut Vec<ValidationError>) {
    let key = function.context_key();
    if function.context_numeral().is_tendency_bearing()
        && chord.find_notes(key.leading_tone()).len() > 1
    {
        errors.push(ValidationError::chord(ErrorCode::DoubledLeadingTone, index));
    }

    if let Some(seventh) = chord.seventh_index_in(key) {
        let spelling = chord.notes()[seventh].spelling();
        if chord.find_notes(spelling).len() > 1 {
            errors.push(ValidationError::chord(ErrorCode::DoubledSeventh, index));
        }
    }
}

fn check_spacing(chord: &Chord, settings: &ValidatorSettings, index: usize, errors: &mut Vec<ValidationError>) {
    let notes = chord.notes();
    let limits = &settings.max_distance;
    let gap = |upper: Voice, lower: Voice| {
        notes[upper.index()].value().saturating_sub(notes[lower.index()].value())
    };

    if gap(Voice::Soprano, Voice::Alto) > limits.soprano_alto {
        errors.push(ValidationError::chord(ErrorCode::SopranoAltoDistance, index));
    }
    if gap(Voice::Alto, Voice::Tenor) > limits.alto_tenor {
        errors.push(ValidationError::chord(ErrorCode::AltoTenorDistance, index));
    }
    if gap(Voice::Tenor, Voice::Bass) > limits.tenor_bass {
        errors.push(ValidationError::chord(ErrorCode::TenorBassDistance, index));
    }
}

fn check_range(chord: &Chord, settings: &ValidatorSettings, index: usize, errors: &mut Vec<ValidationError>) {
    for voice in Voice::ALL {
        let value = chord.notes()[voice.index()].value();
        let range = settings.voice_ranges.get(voice);
        if value > range.high {
            errors.push(ValidationError::voice(ErrorCode::VoiceHigh, index, voice.index()));
        } else if value < range.low {
            errors.push(ValidationError::voice(ErrorCode::VoiceLow, index, voice.index()));
        }
    }
}

fn check_parallels(prev: &Previous, chord: &Chord, index: usize, errors: &mut Vec<ValidationError>) {
    let before = prev.chord.notes();
    let after = chord.notes();

    for one in 0..Voice::ALL.len() {
        for two in (one + 1)..Voice::ALL.len() {
            let interval = before[one].interval_to(&before[two]);
            if interval != after[one].interval_to(&after[two]) {
                continue;
            }
            let code = match interval {
                FIFTH => ErrorCode::Parallel5th,
                UNISON => ErrorCode::Parallel8th,
                _ => continue,
            };
            errors.push(ValidationError::transition(code, prev.index, index, one, two));
        }
    }
}

/// The seventh must step down to the next lower scale degree of the previous chord's key,
/// unless another voice holds it. Augmented sixths expand outward instead and are skipped.
fn check_seventh_resolution(
    prev: &Previous,
    function: &ChordFunction,
    chord: &Chord,
    errors: &mut Vec<ValidationError>,
) {
    if function.chromatic.is_some() {
        return;
    }
    let key = function.context_key();
    let Some(voice) = prev.chord.seventh_index_in(key) else {
        return;
    };

    let seventh = prev.chord.notes()[voice].spelling();
    let degree = key.degree_of_letter(seventh.letter);
    let resolution = key.note_for_degree(degree + 6);

    if chord.notes()[voice].spelling() != resolution && !chord.contains(seventh) {
        errors.push(ValidationError::voice(ErrorCode::UnresolvedSeventh, prev.index, voice));
    }
}

/// A tendency-bearing chord's leading tone must rise by a semitone in the same voice,
/// unless another voice holds it.
fn check_leading_tone_resolution(
    prev: &Previous,
    function: &ChordFunction,
    chord: &Chord,
    errors: &mut Vec<ValidationError>,
) {
    if !function.context_numeral().is_tendency_bearing() {
        return;
    }

    let leading_tone = function.context_key().leading_tone();
    let Some(&voice) = prev.chord.find_notes(leading_tone).first() else {
        return;
    };

    let expected = prev.chord.notes()[voice].value() + 1;
    if chord.notes()[voice].value() != expected && !chord.contains(leading_tone) {
        errors.push(ValidationError::voice(ErrorCode::UnresolvedLeadingTone, prev.index, voice));
    }
}

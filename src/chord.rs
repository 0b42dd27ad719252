//! # Chords
//!
//! A [`Chord`] is a set of notes that identifies itself on construction: it sorts its
//! notes, reduces them to distinct spellings, builds the interval string and looks it up
//! in the pattern table.
//!
//! ## Identification
//! 1. Notes are sorted ascending by absolute value (ties keep their input order).
//! 2. The first note of each spelling is kept for the pattern; later octave duplicates
//!    stay in the note list.
//! 3. The interval string of the distinct spellings gives root offset, quality and
//!    inversion. Unlisted patterns and chords of fewer than three notes are `Unknown`.
//! 4. The root offset names a spelling; the root index is the first note with it.
//!
//! ## Entry Point
//! `ChordFactory::parse_chord(text: &str) -> Result<Chord, ChordalError>`
//!
//! ## Example
//! ```rust
//! use chordal::{ChordFactory, ChordQuality};
//!
//! let factory = ChordFactory::default();
//! let chord = factory.parse_chord("D4, B4, F#5, B5")?;
//! assert_eq!(chord.name(), "Bm");
//! assert_eq!(chord.slash_name(), "Bm/D");
//! assert_eq!(chord.quality(), ChordQuality::Minor);
//! assert_eq!(chord.root_index(), 1);
//! assert_eq!(chord.inversion(), 1);
//! # Ok::<(), chordal::ChordalError>(())
//! ```
//!
//! ## Related Modules
//! - `theory` - Pattern table, keys and numerals
//! - `progression` - Sequences of chords analysed in a key

use crate::error::ChordalError;
use crate::note::{Note, NoteFactory};
use crate::theory::{lookup_pattern, signed_distance, ChordQuality, Key, Numeral, Spelling};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    notes: Vec<Note>,
    root_index: usize,
    quality: ChordQuality,
    inversion: u8,
}

impl Chord {
    /// Identify a chord from notes given in any order
    pub fn new(notes: &[Note]) -> Self {
        let mut sorted = notes.to_vec();
        sorted.sort_by_key(|n| n.value());

        let mut distinct: Vec<Spelling> = Vec::with_capacity(sorted.len());
        for note in &sorted {
            if !distinct.contains(&note.spelling()) {
                distinct.push(note.spelling());
            }
        }

        let found = if sorted.len() < 3 {
            None
        } else {
            lookup_pattern(&interval_string(&distinct))
        };

        match found {
            Some(found) => {
                let root = distinct[found.root_offset];
                let root_index = sorted
                    .iter()
                    .position(|n| n.spelling() == root)
                    .unwrap_or(found.root_offset);
                Self {
                    notes: sorted,
                    root_index,
                    quality: found.quality,
                    inversion: found.inversion,
                }
            }
            None => Self {
                notes: sorted,
                root_index: 0,
                quality: ChordQuality::Unknown,
                inversion: 0,
            },
        }
    }

    /// Notes in ascending order, bass first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn root_index(&self) -> usize {
        self.root_index
    }

    pub fn root(&self) -> Option<&Note> {
        self.notes.get(self.root_index)
    }

    pub fn bass(&self) -> Option<&Note> {
        self.notes.first()
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    pub fn inversion(&self) -> u8 {
        self.inversion
    }

    pub fn has_seventh(&self) -> bool {
        self.quality.has_seventh()
    }

    /// Root and quality symbol, e.g. `F#o7`; empty for unknown chords
    pub fn name(&self) -> String {
        match (self.quality, self.root()) {
            (ChordQuality::Unknown, _) | (_, None) => String::new(),
            (quality, Some(root)) => format!("{}{}", root.spelling(), quality.symbol()),
        }
    }

    /// Name with the bass appended when inverted, e.g. `D/F#`
    pub fn slash_name(&self) -> String {
        let name = self.name();
        match self.bass() {
            Some(bass) if self.inversion != 0 && !name.is_empty() => {
                format!("{}/{}", name, bass.spelling())
            }
            _ => name,
        }
    }

    /// Number of different spellings in the chord
    pub fn distinct_spellings(&self) -> usize {
        let mut seen: Vec<Spelling> = Vec::new();
        for note in &self.notes {
            if !seen.contains(&note.spelling()) {
                seen.push(note.spelling());
            }
        }
        seen.len()
    }

    /// Indices of every note spelled `spelling`
    pub fn find_notes(&self, spelling: Spelling) -> Vec<usize> {
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.spelling() == spelling)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn contains(&self, spelling: Spelling) -> bool {
        self.notes.iter().any(|n| n.spelling() == spelling)
    }

    /// Indices of notes lying `semitones` (mod 12) above the root
    pub fn indices_from_root(&self, semitones: u8) -> Vec<usize> {
        let Some(root) = self.root() else {
            return Vec::new();
        };
        self.notes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.spelling() != root.spelling() && root.interval_to(n) == semitones)
            .map(|(i, _)| i)
            .collect()
    }

    /// Index of the first note sounding the chordal seventh
    pub fn seventh_index(&self) -> Option<usize> {
        let interval = self.quality.seventh_interval()?;
        self.indices_from_root(interval).first().copied()
    }

    /// Seventh index for `key`, reading a diminished seventh as the leading-tone
    /// seventh chord it respells to
    pub fn seventh_index_in(&self, key: &Key) -> Option<usize> {
        let leading_tone_seventh = self
            .numeral_for_key(key)
            .is_some_and(|n| n.is_leading_tone_seventh(key));
        if !leading_tone_seventh {
            return self.seventh_index();
        }
        let seventh = (key.leading_tone().pitch_class() + 9) % 12;
        self.notes.iter().position(|n| n.pitch_class() == seventh)
    }

    /// Roman numeral in `key` with its inversion figure
    pub fn numeral_for_key(&self, key: &Key) -> Option<Numeral> {
        if !self.quality.is_known() {
            return None;
        }
        let root = self.root()?;
        Some(Numeral::new(key, root.spelling(), self.quality, self.inversion))
    }

    /// Key in which this chord is the tonic, if its quality can be tonicized
    pub fn tonicized_key(&self) -> Option<Key> {
        let mode = self.quality.tonic_mode()?;
        Key::new(self.root()?.spelling(), mode)
    }

    /// Numeral of this chord as the dominant or leading-tone chord of `target`
    pub fn applied_numeral(&self, target: &Chord) -> Option<Numeral> {
        let local = target.tonicized_key()?;
        self.numeral_for_key(&local)?.as_applied_function(&local)
    }

    /// Accidental each note needs under `key`'s signature ("" when diatonic)
    pub fn accidentals_for_key(&self, key: &Key) -> Vec<&'static str> {
        self.notes.iter().map(|n| n.accidental_for(key)).collect()
    }

    /// Whether any note sits above the diatonic note of its letter, whatever accidental
    /// it is written with (B natural in F minor counts)
    pub fn has_raised_note(&self, key: &Key) -> bool {
        self.notes.iter().any(|n| {
            let spelling = n.spelling();
            let diatonic = key.note_for_degree(key.degree_of_letter(spelling.letter));
            signed_distance(diatonic.pitch_class(), spelling.pitch_class()) > 0
        })
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notes: Vec<String> = self.notes.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", notes.join(", "))
    }
}

fn interval_string(distinct: &[Spelling]) -> String {
    distinct
        .windows(2)
        .map(|pair| ((pair[1].pitch_class() + 12 - pair[0].pitch_class()) % 12).to_string())
        .collect()
}

/// Builds chords from note tokens
#[derive(Debug, Clone, Default)]
pub struct ChordFactory {
    notes: NoteFactory,
}

impl ChordFactory {
    pub fn new(notes: NoteFactory) -> Self {
        Self { notes }
    }

    pub fn note_factory(&self) -> &NoteFactory {
        &self.notes
    }

    /// Build a chord from at least three note tokens
    pub fn create_chord<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Chord, ChordalError> {
        if tokens.len() < 3 {
            return Err(ChordalError::NotEnoughNotes(tokens.len()));
        }
        let notes = tokens
            .iter()
            .map(|t| self.notes.parse(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Chord::new(&notes))
    }

    /// Build a chord from a comma-separated list such as `"C3, E3, G3"`
    pub fn parse_chord(&self, text: &str) -> Result<Chord, ChordalError> {
        let tokens: Vec<&str> = split_tokens(text);
        self.create_chord(&tokens)
    }
}

/// Split a comma-separated note list, dropping empty entries
pub fn split_tokens(text: &str) -> Vec<&str> {
    text.split(',').map(str::trim).filter(|t| !t.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(text: &str) -> Chord {
        ChordFactory::default().parse_chord(text).unwrap()
    }

    fn key(name: &str) -> Key {
        Key::parse(name).unwrap()
    }

    #[test]
    fn test_notes_are_sorted_without_touching_input() {
        let notes: Vec<Note> = ["G3", "C3", "E3"].iter().map(|s| s.parse().unwrap()).collect();
        let c = Chord::new(&notes);
        assert_eq!(c.to_string(), "C3, E3, G3");
        assert_eq!(notes[0].to_string(), "G3");
    }

    #[test]
    fn test_triad_properties() {
        // (notes, slash name, root index, inversion)
        let cases = [
            ("C1,Eb1,G1,Eb2", "Cm", 0, 0),
            ("F#0,D1,A0", "D/F#", 2, 1),
            ("E5,A5,C#6,E6", "A/E", 1, 2),
            ("D4,B4,F#5,B5", "Bm/D", 1, 1),
            ("D0,Bb0,G1", "Gm/D", 2, 2),
            ("D#2,A1,F#1", "D#o/F#", 2, 1),
            ("F#3,C4,A3", "F#o", 0, 0),
            ("Bbb6,Eb7,Gb7", "Ebo/Bbb", 1, 2),
            ("E4,G#4,B#5", "E+", 0, 0),
            ("Bb5,F#5,D6", "F#+", 0, 0),
        ];
        for (notes, name, root, inversion) in cases {
            let c = chord(notes);
            assert_eq!(c.slash_name(), name, "{}", notes);
            assert_eq!(c.root_index(), root, "{}", notes);
            assert_eq!(c.inversion(), inversion, "{}", notes);
        }
    }

    #[test]
    fn test_seventh_properties() {
        let cases = [
            ("Eb2,G2,Bb2,D3", "Ebmaj7", 0),
            ("A1,C2,E2,F2", "Fmaj7/A", 3),
            ("G5,E6,Bb6,C7", "C7/G", 3),
            ("C3,F#3,A3,D3", "D7/C", 1),
            ("E0,B0,D1,G1", "Em7", 0),
            ("F4,Ab4,Bb5,Db5", "Bbm7/F", 3),
            ("B2,E2,G3,C#3", "C#ø/E", 2),
            ("F#1,B1,D2,G#2", "G#ø/F#", 3),
            ("A6,C7,Eb7,Gb7", "Ao7", 0),
            ("F5,D5,Ab5,Cb6", "Do7", 0),
        ];
        for (notes, name, root) in cases {
            let c = chord(notes);
            assert_eq!(c.slash_name(), name, "{}", notes);
            assert_eq!(c.root_index(), root, "{}", notes);
            assert!(c.has_seventh());
        }
    }

    #[test]
    fn test_unknown_chords() {
        let c = chord("C#3,D#4,E4,C#5");
        assert_eq!(c.quality(), ChordQuality::Unknown);
        assert_eq!(c.name(), "");
        assert_eq!(c.numeral_for_key(&key("C")), None);

        let notes: Vec<Note> = ["C3", "E3"].iter().map(|s| s.parse().unwrap()).collect();
        assert_eq!(Chord::new(&notes).quality(), ChordQuality::Unknown);
    }

    #[test]
    fn test_factory_errors() {
        let factory = ChordFactory::default();
        assert_eq!(factory.parse_chord("C3,E3"), Err(ChordalError::NotEnoughNotes(2)));
        assert_eq!(
            factory.parse_chord("C3,E3,X3"),
            Err(ChordalError::InvalidNote("X3".to_string()))
        );
    }

    #[test]
    fn test_triad_numerals() {
        let chords = [
            "C1,Eb1,G1,Eb2",
            "F#0,D1,A0",
            "Bbb6,Eb7,Gb7",
            "E4,G#4,B#5",
        ];
        let numerals = |k: &str| -> Vec<String> {
            chords
                .iter()
                .map(|c| chord(c).numeral_for_key(&key(k)).unwrap().to_string())
                .collect()
        };
        assert_eq!(numerals("C"), ["i", "II6", "biiio6/4", "III+"]);
        assert_eq!(numerals("e"), ["vi", "VII6", "bio6/4", "I+"]);
        assert_eq!(numerals("Bb"), ["ii", "III6", "ivo6/4", "#IV+"]);
    }

    #[test]
    fn test_seventh_numerals() {
        let chords = [
            "Eb2,G2,Bb2,D3",
            "A1,C2,E2,F2",
            "G5,E6,Bb6,C7",
            "C3,F#3,A3,D3",
            "E0,B0,D1,G1",
            "F4,Ab4,Bb5,Db5",
            "B2,E2,G3,C#3",
            "F#1,B1,D2,G#2",
            "A6,C7,Eb7,Gb7",
            "F5,D5,Ab5,Cb6",
        ];
        let numerals: Vec<String> = chords
            .iter()
            .map(|c| chord(c).numeral_for_key(&key("D")).unwrap().to_string())
            .collect();
        assert_eq!(
            numerals,
            ["bIIM7", "bIIIM6/5", "bVII4/3", "I4/2", "ii7", "bvi4/3", "viiø6/5", "#ivø4/2", "vo7", "io7"]
        );
    }

    #[test]
    fn test_numeral_is_stable() {
        let c = chord("A1,C2,E2,F2");
        let k = key("C");
        let first = c.numeral_for_key(&k).unwrap();
        let second = c.numeral_for_key(&k).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "IVM6/5");
        assert_eq!(first.root_position().to_string(), "IVM7");
    }

    #[test]
    fn test_seventh_index() {
        assert_eq!(chord("G2,B3,D4,F4").seventh_index(), Some(3));
        assert_eq!(chord("F#2,A3,D4,C5").seventh_index(), Some(3));
        assert_eq!(chord("C3,E3,G3").seventh_index(), None);
    }

    #[test]
    fn test_diminished_seventh_index_in_key() {
        let c = key("C");
        // B-D-F-Ab: seventh is Ab however the chord is spelled from the bass
        assert_eq!(chord("B3,D4,F4,Ab4").seventh_index_in(&c), Some(3));
        assert_eq!(chord("D3,F3,Ab3,B3").seventh_index_in(&c), Some(2));
        assert_eq!(chord("F3,Ab3,B3,D4").seventh_index_in(&c), Some(1));
        assert_eq!(chord("Ab3,B3,D4,F4").seventh_index_in(&c), Some(0));
    }

    #[test]
    fn test_applied_numerals() {
        // (tonicized chord, applied chord, expected)
        let cases = [
            ("F1,A1,C1", "C1,E1,G1", "V"),
            ("Eb1,Gb1,Bb1", "Bb3,D3,Bb2,Bb2", "V"),
            ("Bb1,D1,F1", "Eb5,A4,C5", "viio"),
            ("E1,G1,B1", "F#1,A1,D#1", "viio"),
            ("Bb1,Db2,F2", "F2,C3,A2,Eb3", "V7"),
            ("F#1,A1,C#1,E2", "C#3,E#2,C#2,B1", "V4/2"),
            ("Eb1,G1,Bb1,D2", "D6,F6,Ab5,C6", "viiø4/3"),
            ("F1,A1,C1,E1", "E3,G2,D2,Bb2", "viiø4/2"),
            ("Ab1,Cb1,Eb1,Ab1", "G4,Db5,Bb4,Fb5", "viio7"),
            ("F#1,A1,C#1", "E#4,G#3,B3,D4", "viio6/5"),
        ];
        for (target, applied, expected) in cases {
            let numeral = chord(applied).applied_numeral(&chord(target));
            assert_eq!(numeral.map(|n| n.to_string()).as_deref(), Some(expected), "{} -> {}", applied, target);
        }
    }

    #[test]
    fn test_applied_numeral_requires_tonic_quality() {
        let dim = chord("B2,D3,F3");
        assert_eq!(chord("G2,B2,D3").applied_numeral(&dim), None);
    }

    #[test]
    fn test_accidentals_for_key() {
        assert_eq!(chord("C3,E3,G3").accidentals_for_key(&key("f#")), ["n", "", "n"]);
        assert_eq!(chord("C1,Eb1,G1,Eb2").accidentals_for_key(&key("Gb")), ["n", "", "n", ""]);
        assert!(chord("D3,F#3,A3").has_raised_note(&key("C")));
    }

    #[test]
    fn test_raised_note_written_as_natural() {
        assert!(chord("Db3,F3,Ab3,B3").has_raised_note(&key("f")));
        assert!(chord("Gb2,Bb3,E4,Bb4").has_raised_note(&key("bb")));
        assert!(!chord("Db3,F3,Ab3,Cb4").has_raised_note(&key("f")));
        assert!(!chord("C3,Eb3,G3").has_raised_note(&key("c")));
    }

    #[test]
    fn test_non_leading_tone_diminished_seventh_index() {
        // A-C-Eb-Gb in C is no respelling of B-D-F-Ab; its own seventh is Gb
        assert_eq!(chord("A2,C3,Eb3,Gb3").seventh_index_in(&key("C")), Some(3));
        assert_eq!(chord("A2,C3,Eb3,Gb3").applied_numeral(&chord("G2,B2,D3")).map(|n| n.to_string()).as_deref(), Some("viio6/5"));
        assert_eq!(chord("G2,Bb2,Db3,Fb3").applied_numeral(&chord("A2,C3,E3")), None);
    }
}

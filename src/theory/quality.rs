//! Chord qualities and the predicates derived from them.

use crate::theory::key::Mode;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    /// Root and fifth only (`add5`)
    Power,
    /// Root, fifth and major seventh with no third (`add5/maj7`)
    PowerMajorSeventh,
    Suspended2,
    Suspended4,
    /// Major third with a diminished fifth (`b5`)
    FlatFive,
    MajorSeventh,
    DominantSeventh,
    MinorSeventh,
    MinorMajorSeventh,
    HalfDiminishedSeventh,
    DominantSeventhFlatFive,
    DiminishedSeventh,
    #[default]
    Unknown,
}

impl ChordQuality {
    /// Suffix used in chord names, e.g. the `m7` in `Am7`
    pub fn symbol(self) -> &'static str {
        match self {
            ChordQuality::Major | ChordQuality::Unknown => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "o",
            ChordQuality::Augmented => "+",
            ChordQuality::Power => "add5",
            ChordQuality::PowerMajorSeventh => "add5/maj7",
            ChordQuality::Suspended2 => "sus2",
            ChordQuality::Suspended4 => "sus4",
            ChordQuality::FlatFive => "b5",
            ChordQuality::MajorSeventh => "maj7",
            ChordQuality::DominantSeventh => "7",
            ChordQuality::MinorSeventh => "m7",
            ChordQuality::MinorMajorSeventh => "mM7",
            ChordQuality::HalfDiminishedSeventh => "ø",
            ChordQuality::DominantSeventhFlatFive => "7b5",
            ChordQuality::DiminishedSeventh => "o7",
        }
    }

    pub fn is_known(self) -> bool {
        self != ChordQuality::Unknown
    }

    /// The five classical seventh chords
    pub fn has_seventh(self) -> bool {
        matches!(
            self,
            ChordQuality::DominantSeventh
                | ChordQuality::MinorSeventh
                | ChordQuality::MajorSeventh
                | ChordQuality::HalfDiminishedSeventh
                | ChordQuality::DiminishedSeventh
        )
    }

    /// Triads that take the 6 and 6/4 inversion figures
    pub fn is_triad(self) -> bool {
        matches!(
            self,
            ChordQuality::Major | ChordQuality::Minor | ChordQuality::Diminished | ChordQuality::Augmented
        )
    }

    /// Semitones from the root to the chordal seventh
    pub fn seventh_interval(self) -> Option<u8> {
        match self {
            ChordQuality::MajorSeventh | ChordQuality::MinorMajorSeventh => Some(11),
            ChordQuality::DominantSeventh
            | ChordQuality::MinorSeventh
            | ChordQuality::HalfDiminishedSeventh
            | ChordQuality::DominantSeventhFlatFive => Some(10),
            ChordQuality::DiminishedSeventh => Some(9),
            _ => None,
        }
    }

    /// Qualities written with a lower-case roman numeral
    pub fn is_lower_case(self) -> bool {
        matches!(
            self,
            ChordQuality::Minor
                | ChordQuality::MinorSeventh
                | ChordQuality::HalfDiminishedSeventh
                | ChordQuality::Diminished
                | ChordQuality::DiminishedSeventh
                | ChordQuality::MinorMajorSeventh
        )
    }

    /// Text appended to the roman numeral before the inversion figure
    pub fn numeral_decoration(self) -> &'static str {
        match self {
            ChordQuality::Diminished | ChordQuality::DiminishedSeventh => "o",
            ChordQuality::Augmented => "+",
            ChordQuality::HalfDiminishedSeventh => "ø",
            ChordQuality::MajorSeventh => "M",
            ChordQuality::MinorMajorSeventh => "M7",
            ChordQuality::Suspended2 => "sus2",
            ChordQuality::Suspended4 => "sus4",
            ChordQuality::FlatFive => "b5",
            ChordQuality::DominantSeventhFlatFive => "7b5",
            _ => "",
        }
    }

    /// Qualities a four-voice progression may contain
    pub fn is_satb_recognized(self) -> bool {
        self.is_triad() || self.has_seventh()
    }

    /// Mode of the key this chord implies when treated as a local tonic
    pub fn tonic_mode(self) -> Option<Mode> {
        match self {
            ChordQuality::Major | ChordQuality::MajorSeventh | ChordQuality::DominantSeventh => {
                Some(Mode::Major)
            }
            ChordQuality::Minor | ChordQuality::MinorSeventh => Some(Mode::Minor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_seventh() {
        assert!(ChordQuality::DominantSeventh.has_seventh());
        assert!(ChordQuality::DiminishedSeventh.has_seventh());
        assert!(!ChordQuality::MinorMajorSeventh.has_seventh());
        assert!(!ChordQuality::Major.has_seventh());
    }

    #[test]
    fn test_satb_recognized() {
        assert!(ChordQuality::Augmented.is_satb_recognized());
        assert!(ChordQuality::HalfDiminishedSeventh.is_satb_recognized());
        assert!(!ChordQuality::Suspended4.is_satb_recognized());
        assert!(!ChordQuality::Power.is_satb_recognized());
        assert!(!ChordQuality::Unknown.is_satb_recognized());
    }

    #[test]
    fn test_tonic_mode() {
        assert_eq!(ChordQuality::DominantSeventh.tonic_mode(), Some(Mode::Major));
        assert_eq!(ChordQuality::MinorSeventh.tonic_mode(), Some(Mode::Minor));
        assert_eq!(ChordQuality::Diminished.tonic_mode(), None);
    }
}

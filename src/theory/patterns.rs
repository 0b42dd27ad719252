//! # Interval Patterns
//!
//! Maps the interval string of a chord's distinct spellings to its root, quality and
//! inversion.
//!
//! The interval string concatenates `(next - current) mod 12` for each adjacent pair of
//! distinct spellings in ascending order, so C-E-G gives `"43"` and E-G-C gives `"35"`.
//! Patterns produced by open, doubled and incomplete voicings are listed as well as the
//! close-position ones. A pattern that is not listed is not guessed at.
//!
//! ## Example
//! ```rust
//! use chordal::theory::{lookup_pattern, ChordQuality};
//!
//! let found = lookup_pattern("35").unwrap();
//! assert_eq!(found.root_offset, 2);
//! assert_eq!(found.quality, ChordQuality::Major);
//! assert_eq!(found.inversion, 1);
//! assert!(lookup_pattern("21").is_none());
//! ```

use crate::theory::quality::ChordQuality;
use crate::theory::quality::ChordQuality::*;

/// A recognised interval pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// Index into the distinct-spelling list of the chord root
    pub root_offset: usize,
    pub quality: ChordQuality,
    /// 0 = root position, 1 = first inversion, ...
    pub inversion: u8,
}

/// (interval string, root offset, quality, inversion)
const INTERVAL_PATTERNS: &[(&str, usize, ChordQuality, u8)] = &[
    // Two distinct spellings
    ("3", 0, Minor, 0),
    ("4", 0, Major, 0),
    ("5", 1, Power, 0),
    ("7", 0, Power, 0),
    ("8", 1, Major, 1),
    ("9", 2, Minor, 1),
    // Triads
    ("25", 0, Suspended2, 0),
    ("26", 2, FlatFive, 1),
    ("33", 0, Diminished, 0),
    ("34", 0, Minor, 0),
    ("35", 2, Major, 1),
    ("36", 2, Diminished, 1),
    ("42", 0, FlatFive, 0),
    ("43", 0, Major, 0),
    ("44", 0, Augmented, 0),
    ("45", 2, Minor, 1),
    ("53", 1, Minor, 2),
    ("52", 0, Suspended4, 0),
    ("54", 1, Major, 2),
    ("63", 1, Diminished, 2),
    ("64", 1, FlatFive, 2),
    ("69", 0, Diminished, 0),
    ("78", 0, Minor, 0),
    ("79", 0, Major, 0),
    ("86", 1, FlatFive, 1),
    ("87", 1, Major, 1),
    ("88", 1, Augmented, 1),
    ("89", 2, Minor, 2),
    ("96", 1, Diminished, 1),
    ("97", 1, Minor, 1),
    ("98", 2, Major, 2),
    ("99", 2, Diminished, 2),
    ("108", 2, FlatFive, 2),
    ("610", 0, FlatFive, 0),
    // Seventh chords with an omitted or doubled member
    ("14", 1, MajorSeventh, 3),
    ("17", 1, PowerMajorSeventh, 0),
    ("23", 1, MinorSeventh, 3),
    ("24", 1, DominantSeventh, 3),
    ("37", 0, MinorSeventh, 0),
    ("41", 2, PowerMajorSeventh, 0),
    ("46", 0, DominantSeventh, 0),
    ("47", 0, MajorSeventh, 0),
    ("58", 2, MajorSeventh, 3),
    ("59", 2, MinorSeventh, 3),
    ("62", 2, DominantSeventh, 1),
    ("68", 2, DominantSeventh, 3),
    ("71", 2, MajorSeventh, 1),
    ("72", 2, MinorSeventh, 1),
    ("74", 0, PowerMajorSeventh, 0),
    ("105", 0, MinorSeventh, 0),
    ("106", 0, DominantSeventh, 0),
    ("115", 0, MajorSeventh, 0),
    ("118", 0, PowerMajorSeventh, 0),
    // Complete seventh chords
    ("134", 1, MinorMajorSeventh, 3),
    ("143", 1, MajorSeventh, 3),
    ("178", 1, MinorMajorSeventh, 3),
    ("179", 1, MajorSeventh, 3),
    ("233", 1, HalfDiminishedSeventh, 3),
    ("234", 1, MinorSeventh, 3),
    ("242", 3, DominantSeventhFlatFive, 1),
    ("243", 1, DominantSeventh, 3),
    ("269", 1, HalfDiminishedSeventh, 3),
    ("278", 1, MinorSeventh, 3),
    ("279", 1, DominantSeventh, 3),
    ("323", 2, MinorSeventh, 2),
    ("324", 2, DominantSeventh, 2),
    ("332", 3, DominantSeventh, 1),
    ("333", 0, DiminishedSeventh, 0),
    ("334", 0, HalfDiminishedSeventh, 0),
    ("341", 3, MajorSeventh, 1),
    ("342", 3, HalfDiminishedSeventh, 1),
    ("343", 0, MinorSeventh, 0),
    ("344", 0, MinorMajorSeventh, 0),
    ("359", 3, MinorSeventh, 2),
    ("368", 3, DominantSeventh, 2),
    ("369", 0, DiminishedSeventh, 0),
    ("378", 0, HalfDiminishedSeventh, 0),
    ("379", 0, MinorSeventh, 0),
    ("388", 0, MinorMajorSeventh, 0),
    ("413", 2, MinorMajorSeventh, 2),
    ("414", 2, MajorSeventh, 2),
    ("424", 0, DominantSeventhFlatFive, 0),
    ("423", 2, HalfDiminishedSeventh, 2),
    ("432", 3, MinorSeventh, 1),
    ("433", 0, DominantSeventh, 0),
    ("434", 0, MajorSeventh, 0),
    ("441", 3, MinorMajorSeventh, 1),
    ("443", 3, MinorMajorSeventh, 2),
    ("445", 3, MinorMajorSeventh, 3),
    ("453", 3, MajorSeventh, 2),
    ("459", 3, HalfDiminishedSeventh, 2),
    ("468", 0, DominantSeventhFlatFive, 0),
    ("469", 0, DominantSeventh, 0),
    ("478", 0, MajorSeventh, 0),
    ("497", 2, MinorMajorSeventh, 3),
    ("514", 1, MinorMajorSeventh, 2),
    ("535", 3, MajorSeventh, 1),
    ("536", 3, HalfDiminishedSeventh, 3),
    ("537", 1, MinorSeventh, 2),
    ("538", 1, MinorMajorSeventh, 2),
    ("545", 3, MinorSeventh, 3),
    ("546", 1, DominantSeventh, 2),
    ("547", 1, MajorSeventh, 2),
    ("574", 1, MajorSeventh, 2),
    ("587", 2, MajorSeventh, 3),
    ("596", 2, HalfDiminishedSeventh, 3),
    ("597", 2, MinorSeventh, 3),
    ("626", 2, DominantSeventhFlatFive, 1),
    ("627", 2, DominantSeventh, 1),
    ("635", 3, DominantSeventh, 3),
    ("636", 0, DiminishedSeventh, 0),
    ("637", 1, HalfDiminishedSeventh, 2),
    ("645", 0, HalfDiminishedSeventh, 0),
    ("646", 0, DominantSeventhFlatFive, 0),
    ("686", 3, DominantSeventhFlatFive, 1),
    ("687", 2, DominantSeventh, 3),
    ("695", 3, DominantSeventh, 1),
    ("696", 0, DiminishedSeventh, 0),
    ("697", 0, HalfDiminishedSeventh, 0),
    ("711", 1, PowerMajorSeventh, 0),
    ("714", 2, MajorSeventh, 1),
    ("717", 2, MajorSeventh, 1),
    ("726", 2, HalfDiminishedSeventh, 1),
    ("727", 2, MinorSeventh, 1),
    ("735", 0, MinorSeventh, 0),
    ("736", 0, DominantSeventh, 0),
    ("744", 0, MinorMajorSeventh, 0),
    ("745", 0, MajorSeventh, 0),
    ("785", 3, MajorSeventh, 1),
    ("786", 3, HalfDiminishedSeventh, 1),
    ("787", 0, MinorSeventh, 0),
    ("788", 0, MinorMajorSeventh, 0),
    ("795", 3, MinorSeventh, 1),
    ("796", 0, DominantSeventh, 0),
    ("797", 0, MajorSeventh, 0),
    ("810", 1, DominantSeventh, 1),
    ("811", 1, MajorSeventh, 1),
    ("817", 2, MinorMajorSeventh, 1),
    ("853", 2, MinorMajorSeventh, 3),
    ("854", 2, MajorSeventh, 3),
    ("863", 2, HalfDiminishedSeventh, 3),
    ("864", 1, DominantSeventhFlatFive, 1),
    ("872", 3, MinorSeventh, 2),
    ("873", 1, DominantSeventh, 1),
    ("874", 1, MajorSeventh, 1),
    ("881", 3, MinorMajorSeventh, 2),
    ("885", 3, MinorMajorSeventh, 1),
    ("889", 3, MinorMajorSeventh, 3),
    ("891", 2, MinorMajorSeventh, 2),
    ("898", 3, MajorSeventh, 3),
    ("910", 1, MinorSeventh, 1),
    ("953", 2, MinorSeventh, 3),
    ("954", 2, DominantSeventh, 3),
    ("958", 3, DominantSeventh, 3),
    ("962", 3, DominantSeventh, 2),
    ("963", 0, DiminishedSeventh, 0),
    ("964", 1, HalfDiminishedSeventh, 1),
    ("971", 3, MajorSeventh, 2),
    ("972", 3, HalfDiminishedSeventh, 2),
    ("973", 1, MinorSeventh, 1),
    ("974", 1, MinorMajorSeventh, 1),
    ("989", 3, MinorSeventh, 3),
    ("998", 3, DominantSeventh, 3),
    ("999", 0, DiminishedSeventh, 0),
    ("1053", 0, HalfDiminishedSeventh, 0),
    ("1054", 0, MinorSeventh, 0),
    ("1062", 0, DominantSeventhFlatFive, 0),
    ("1063", 0, DominantSeventh, 0),
    ("1089", 0, HalfDiminishedSeventh, 0),
    ("1098", 0, MinorSeventh, 0),
    ("1099", 0, DominantSeventh, 0),
    ("1153", 0, MajorSeventh, 0),
    ("1188", 0, MinorMajorSeventh, 0),
    ("1189", 0, MajorSeventh, 0),
    ("1194", 0, MinorMajorSeventh, 0),
    ("2610", 2, DominantSeventhFlatFive, 1),
    ("3510", 2, DominantSeventh, 1),
    ("3511", 2, MajorSeventh, 1),
    ("3610", 2, HalfDiminishedSeventh, 1),
    ("4510", 2, MinorSeventh, 1),
    ("4511", 2, MinorMajorSeventh, 1),
    ("5105", 1, MinorSeventh, 2),
    ("5106", 1, DominantSeventh, 2),
    ("5115", 1, MajorSeventh, 2),
    ("6105", 1, HalfDiminishedSeventh, 2),
    ("6106", 0, DominantSeventhFlatFive, 0),
    ("8108", 1, DominantSeventhFlatFive, 1),
    ("8109", 1, DominantSeventh, 1),
    ("8118", 1, MajorSeventh, 1),
    ("8910", 2, MinorSeventh, 2),
    ("9108", 1, HalfDiminishedSeventh, 1),
    ("9109", 1, MinorSeventh, 1),
    ("9118", 1, MinorMajorSeventh, 1),
    ("9311", 2, MajorSeventh, 2),
    ("9810", 2, DominantSeventh, 2),
    ("9910", 2, HalfDiminishedSeventh, 2),
    ("10810", 0, DominantSeventhFlatFive, 0),
];

/// Look up an interval string
pub fn lookup_pattern(pattern: &str) -> Option<PatternMatch> {
    INTERVAL_PATTERNS
        .iter()
        .find(|(p, ..)| *p == pattern)
        .map(|&(_, root_offset, quality, inversion)| PatternMatch {
            root_offset,
            quality,
            inversion,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_patterns_are_unique() {
        let mut seen = HashSet::new();
        for (pattern, ..) in INTERVAL_PATTERNS {
            assert!(seen.insert(*pattern), "duplicate pattern {}", pattern);
        }
    }

    #[test]
    fn test_entries_are_in_bounds() {
        for (pattern, root_offset, quality, inversion) in INTERVAL_PATTERNS {
            assert!(*root_offset <= 3, "{}", pattern);
            assert!(*inversion <= 3, "{}", pattern);
            assert_ne!(*quality, Unknown, "{}", pattern);
        }
    }

    #[test]
    fn test_close_position_triads() {
        let check = |p: &str, root: usize, quality: ChordQuality, inversion: u8| {
            assert_eq!(
                lookup_pattern(p),
                Some(PatternMatch { root_offset: root, quality, inversion }),
                "pattern {}",
                p
            );
        };
        check("43", 0, Major, 0);
        check("34", 0, Minor, 0);
        check("33", 0, Diminished, 0);
        check("44", 0, Augmented, 0);
        check("35", 2, Major, 1);
        check("54", 1, Major, 2);
        check("45", 2, Minor, 1);
        check("53", 1, Minor, 2);
    }

    #[test]
    fn test_seventh_chords() {
        assert_eq!(lookup_pattern("433").map(|m| m.quality), Some(DominantSeventh));
        assert_eq!(lookup_pattern("434").map(|m| m.quality), Some(MajorSeventh));
        assert_eq!(lookup_pattern("343").map(|m| m.quality), Some(MinorSeventh));
        assert_eq!(lookup_pattern("334").map(|m| m.quality), Some(HalfDiminishedSeventh));
        assert_eq!(lookup_pattern("333").map(|m| m.quality), Some(DiminishedSeventh));
        assert_eq!(lookup_pattern("243").map(|m| m.inversion), Some(3));
    }

    #[test]
    fn test_unknown_patterns() {
        assert_eq!(lookup_pattern(""), None);
        assert_eq!(lookup_pattern("21"), None);
        assert_eq!(lookup_pattern("1111"), None);
    }
}

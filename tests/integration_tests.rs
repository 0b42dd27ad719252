//! Integration tests for chordal
//!
//! Exercises the public API from note tokens through numerals and validation.

use chordal::{
    analyze_progression, identify_chord, validate_progression, ChordFactory, ChordProgression,
    ChordQuality, ChordalError, ErrorCategory, ErrorCode, Key, NumeralOptions, ValidationError,
};

fn progression(key: &str, chords: &[&str]) -> ChordProgression {
    let factory = ChordFactory::default();
    let mut progression = ChordProgression::new(Some(key.parse::<Key>().unwrap()));
    for text in chords {
        progression.add_chord(&factory, text, None).unwrap();
    }
    progression
}

#[test]
fn test_identify_root_position_triad() {
    let chord = identify_chord(&["C3", "E3", "G3"]).unwrap();
    assert_eq!(chord.name, "C");
    assert_eq!(chord.quality, ChordQuality::Major);
    assert_eq!(chord.root_index, 0);
    assert_eq!(chord.inversion, 0);
}

#[test]
fn test_identify_first_inversion_with_doubled_root() {
    let chord = identify_chord(&["D4", "B4", "F#5", "B5"]).unwrap();
    assert_eq!(chord.name, "Bm");
    assert_eq!(chord.root_index, 1);
    assert_eq!(chord.inversion, 1);
}

#[test]
fn test_identify_seventh_chords() {
    let cases = [
        (["G2", "B2", "D3", "F3"], ChordQuality::DominantSeventh, 0),
        (["F3", "A3", "C4", "E4"], ChordQuality::MajorSeventh, 0),
        (["C3", "D3", "F3", "A3"], ChordQuality::MinorSeventh, 3),
        (["F3", "B3", "D4", "A4"], ChordQuality::HalfDiminishedSeventh, 2),
    ];
    for (notes, quality, inversion) in cases {
        let chord = identify_chord(&notes).unwrap();
        assert_eq!(chord.quality, quality, "quality of {:?}", notes);
        assert_eq!(chord.inversion, inversion, "inversion of {:?}", notes);
    }
}

#[test]
fn test_identify_more_than_four_notes() {
    let chord = identify_chord(&["E2", "C3", "G3", "C4", "E4"]).unwrap();
    assert_eq!(chord.name, "C");
    assert_eq!(chord.slash_name, "C/E");
    assert_eq!(chord.quality, ChordQuality::Major);
    assert_eq!(chord.root_index, 1);
    assert_eq!(chord.inversion, 1);
}

#[test]
fn test_identify_unknown_pattern_is_not_an_error() {
    let chord = identify_chord(&["C3", "C#3", "D3", "D#3"]).unwrap();
    assert_eq!(chord.quality, ChordQuality::Unknown);
    assert_eq!(chord.root_index, 0);
    assert_eq!(chord.inversion, 0);
}

#[test]
fn test_identify_too_few_notes() {
    assert_eq!(identify_chord(&["C3", "E3"]), Err(ChordalError::NotEnoughNotes(2)));
}

#[test]
fn test_diminished_sevenths_share_leading_tone_numeral() {
    let progression = progression(
        "C",
        &["B2,D3,F3,Ab3", "D3,F3,Ab3,B3", "F2,Ab2,B2,D3", "Ab2,B2,D3,F3"],
    );
    assert_eq!(
        progression.numerals(NumeralOptions::default()),
        ["viio7", "viio6/5", "viio4/3", "viio4/2"]
    );
}

#[test]
fn test_numerals_are_stable() {
    let progression = progression("C", &["E3,G3,C4", "G2,B3,D4,F4", "C3,E3,G3"]);
    let first = progression.numerals(NumeralOptions::default());
    let second = progression.numerals(NumeralOptions::default());
    assert_eq!(first, ["I6", "V7", "I"]);
    assert_eq!(first, second);
}

#[test]
fn test_parallel_motion_progression() {
    let progression = progression(
        "C",
        &["C3,G3,E4,C5", "E3,B3,G4,E5", "F3,C4,A4,F5", "E3,C4,G4,E5"],
    );
    let errors = validate_progression(&progression);

    assert_eq!(errors.len(), 5);
    assert!(errors.iter().all(|e| e.category == ErrorCategory::Movement));
    assert_eq!(
        errors.last(),
        Some(&ValidationError::transition(ErrorCode::Parallel8th, 3, 4, 0, 3))
    );
}

#[test]
fn test_unresolved_leading_tone_progression() {
    let progression = progression(
        "G",
        &["G2,B3,D4,G4", "A2,F#3,D4,C5", "F#2,A3,D4,C5", "B2,G3,D4,B4"],
    );
    assert_eq!(
        validate_progression(&progression),
        [ValidationError::voice(ErrorCode::UnresolvedLeadingTone, 3, 0)]
    );
}

#[test]
fn test_unknown_chord_is_a_finding() {
    let progression = progression("C", &["C3,C#3,D3,D#3"]);
    let errors = validate_progression(&progression);
    assert!(errors.contains(&ValidationError::chord(ErrorCode::UnknownChord, 1)));
}

#[test]
fn test_analyze_progression_with_validation() {
    let groups = [
        vec!["C3", "G3", "E4", "C5"],
        vec!["A2", "E3", "C4", "C5"],
        vec!["D3", "A3", "F4", "D5"],
        vec!["G2", "B3", "D4", "F4"],
        vec!["C3", "G3", "E4", "C5"],
    ];
    let analysis = analyze_progression(&groups, "C", true).unwrap();

    let numerals: Vec<&str> = analysis.chords.iter().map(|c| c.numeral.as_str()).collect();
    assert_eq!(numerals, ["I", "vi", "ii", "V7", "I"]);

    let errors = analysis.validation_errors.unwrap();
    let codes: Vec<&str> = errors.iter().map(|e| e.code.as_str()).collect();
    assert!(codes.contains(&"ERR_PARALLEL_5TH"));
}

#[test]
fn test_analyze_progression_no_valid_chords() {
    let groups = [["C3", "Z3", "G3"], ["E3", "G3", "Y3"]];
    assert_eq!(
        analyze_progression(&groups, "C", false),
        Err(ChordalError::NoValidChords)
    );
}

#[test]
fn test_analysis_json_shape() {
    let groups = [["C3", "G3", "E4", "C5"], ["D3", "A3", "F4", "D5"]];
    let analysis = analyze_progression(&groups, "C", true).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["chords"][1]["numeral"], "ii");
    assert_eq!(json["chords"][1]["notes"][0], "D3");
    assert_eq!(json["validationErrors"][0]["type"], "movement");
    assert_eq!(json["validationErrors"][0]["code"], "ERR_PARALLEL_5TH");
    assert_eq!(json["validationErrors"][0]["details"]["prevChordIndex"], 1);
    assert_eq!(json["validationErrors"][0]["details"]["voiceTwo"], 1);
}

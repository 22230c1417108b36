use super::*;
use crate::catalog::CatalogVariant;
use crate::pitch::{semitone_distance, NOTE_SEQUENCE};

fn frets_on(highlights: &Highlights, string: usize) -> Vec<usize> {
    highlights.on_string(string).map(|p| p.fret).collect()
}

#[test]
fn test_single_note_e() {
    let highlights = Fretboard::default().highlights("E", None).unwrap();

    assert!(highlights.is_single_note());
    assert_eq!(highlights.positions.len(), 12);
    assert_eq!(frets_on(&highlights, 0), vec![0, 12]); // high E
    assert_eq!(frets_on(&highlights, 1), vec![5, 17]); // B
    assert_eq!(frets_on(&highlights, 2), vec![9, 21]); // G
    assert_eq!(frets_on(&highlights, 3), vec![2, 14]); // D
    assert_eq!(frets_on(&highlights, 4), vec![7, 19]); // A
    assert_eq!(frets_on(&highlights, 5), vec![0, 12]); // low E
    assert!(highlights.positions.iter().all(|p| p.pitch_class == PitchClass::E));
}

#[test]
fn test_single_note_every_root_hits_every_string() {
    let board = Fretboard::default();
    for root in NOTE_SEQUENCE {
        let highlights = board.highlights(root.name(), None).unwrap();
        for string in 0..6 {
            let frets = frets_on(&highlights, string);
            assert!(!frets.is_empty(), "{} missing on string {}", root, string);
            assert!(frets[0] < 12);
            // one hit per 12-fret span
            for pair in frets.windows(2) {
                assert_eq!(pair[1] - pair[0], 12);
            }
        }
        assert!(highlights.positions.iter().all(|p| p.pitch_class == root));
    }
}

#[test]
fn test_c_major_on_high_e_string() {
    let highlights = Fretboard::default().highlights("C", Some("Major")).unwrap();

    assert_eq!(highlights.chord.as_deref(), Some("Major"));
    assert_eq!(frets_on(&highlights, 0), vec![0, 3, 8, 12, 15, 20]);
    let classes: Vec<PitchClass> = highlights.on_string(0).map(|p| p.pitch_class).collect();
    assert_eq!(
        classes,
        vec![
            PitchClass::E,
            PitchClass::G,
            PitchClass::C,
            PitchClass::E,
            PitchClass::G,
            PitchClass::C
        ]
    );
    for p in &highlights.positions {
        assert!(matches!(p.pitch_class, PitchClass::C | PitchClass::E | PitchClass::G));
    }
}

#[test]
fn test_a_power_chord() {
    let highlights = Fretboard::default().highlights("A", Some("Power Chord (5)")).unwrap();

    assert_eq!(frets_on(&highlights, 4), vec![0, 7, 12, 19]);
    assert_eq!(frets_on(&highlights, 0), vec![0, 5, 12, 17]);
    for string in 0..6 {
        // two classes per 12 frets
        let in_first_octave = highlights.on_string(string).filter(|p| p.fret < 12).count();
        assert_eq!(in_first_octave, 2, "string {}", string);
    }
}

#[test]
fn test_compound_intervals_match_simple_intervals() {
    let tuning = Tuning::standard();
    let maj9 = Catalog::standard().lookup("Major 9th (maj9)").unwrap();
    let reduced = IntervalSet::new(vec![0, 4, 7, 11, 2]).unwrap();

    for root in NOTE_SEQUENCE {
        assert_eq!(
            map_positions(root, Some(maj9), tuning, 21),
            map_positions(root, Some(&reduced), tuning, 21)
        );
    }
}

#[test]
fn test_octave_duplicates_do_not_duplicate_positions() {
    let tuning = Tuning::standard();
    let with_octave = IntervalSet::new(vec![0, 12, 24]).unwrap();

    let positions = map_positions(PitchClass::G, Some(&with_octave), tuning, 21);
    assert_eq!(positions, map_positions(PitchClass::G, None, tuning, 21));
    let mut keys: Vec<(usize, usize)> = positions.iter().map(|p| (p.string, p.fret)).collect();
    keys.dedup();
    assert_eq!(keys.len(), positions.len());
}

#[test]
fn test_root_above_open_string_in_sequence() {
    // D# is last in sequence order, so every low fret gives a negative raw distance
    let tuning = Tuning::standard();
    let triad = IntervalSet::new(vec![0, 4, 7]).unwrap();
    let positions = map_positions(PitchClass::DSharp, Some(&triad), tuning, 3);
    let on_e: Vec<usize> = positions.iter().filter(|p| p.string == 0).map(|p| p.fret).collect();
    // D# G A#: E string hits G at 3 only; open E is not in the triad
    assert_eq!(on_e, vec![3]);
}

#[test]
fn test_ordered_by_string_then_fret() {
    let highlights = Fretboard::default()
        .highlights("F#", Some("Blues Scale"))
        .unwrap();
    let keys: Vec<(usize, usize)> = highlights.positions.iter().map(|p| (p.string, p.fret)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_idempotent() {
    let board = Fretboard::default();
    let first = board.highlights("D", Some("Dorian")).unwrap();
    let second = board.highlights("D", Some("Dorian")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_chord_falls_back_to_single_note() {
    let board = Fretboard::default();
    let plain = board.highlights("G", None).unwrap();
    let unknown = board.highlights("G", Some("Major 42nd")).unwrap();

    assert_eq!(unknown.positions, plain.positions);
    assert_eq!(unknown.chord, None);
    assert_eq!(
        unknown.advisory,
        Some(Advisory::UnrecognizedName {
            name: "Major 42nd".to_string()
        })
    );
    assert_eq!(plain.advisory, None);
}

#[test]
fn test_empty_chord_name_is_no_chord() {
    let board = Fretboard::default();
    let empty = board.highlights("G", Some("")).unwrap();
    assert_eq!(empty, board.highlights("G", None).unwrap());
    assert!(empty.advisory.is_none());
}

#[test]
fn test_invalid_root_is_rejected() {
    let err = Fretboard::default().highlights("H", Some("Major")).unwrap_err();
    assert_eq!(err, FretboardError::InvalidRoot("H".to_string()));
}

#[test]
fn test_flat_root_alias() {
    let board = Fretboard::default();
    assert_eq!(
        board.highlights("Bb", Some("Major")).unwrap().positions,
        board.highlights("A#", Some("Major")).unwrap().positions
    );
}

#[test]
fn test_octaves_and_colors() {
    let highlights = Fretboard::default().highlights("C", Some("Major")).unwrap();
    let on_e: Vec<(usize, i32)> = highlights.on_string(0).map(|p| (p.fret, p.octave)).collect();
    assert_eq!(on_e, vec![(0, 6), (3, 6), (8, 7), (12, 7), (15, 7), (20, 8)]);
    for p in &highlights.positions {
        assert_eq!(p.color, crate::color::color_of(p.pitch_class));
        assert_eq!(p.wavelength_nm, crate::color::wavelength_nm(p.pitch_class));
    }
    // C sits at the red end of the palette
    let c = highlights.on_string(0).find(|p| p.fret == 8).unwrap();
    assert_eq!((c.pitch_class, c.wavelength_nm), (PitchClass::C, 700));
}

#[test]
fn test_sounded_note_follows_open_pitch() {
    let tuning = Tuning::standard();
    let major = Catalog::standard().lookup("Major").unwrap().pitch_class_set();
    let root = PitchClass::D;
    let highlights = Fretboard::default().highlights("D", Some("Major")).unwrap();

    for p in &highlights.positions {
        let sounded = (tuning.open_pitch_index(p.string).unwrap() + p.fret) as i64;
        assert_eq!(PitchClass::at(sounded), p.pitch_class);
        assert!(major.contains(&semitone_distance(sounded, root.index() as i64)));
    }
    // and nothing in the key was skipped
    let expected: usize = (0..6)
        .map(|string| {
            let open = tuning.open_pitch_index(string).unwrap() as i64;
            (0..=21)
                .filter(|fret| major.contains(&semitone_distance(open + fret, root.index() as i64)))
                .count()
        })
        .sum();
    assert_eq!(highlights.positions.len(), expected);
}

#[test]
fn test_fret_count_is_inclusive() {
    let catalog = Catalog::standard();
    let positions = map_positions(PitchClass::E, None, Tuning::standard(), 24);
    let high_e: Vec<usize> = positions.iter().filter(|p| p.string == 0).map(|p| p.fret).collect();
    assert_eq!(high_e, vec![0, 12, 24]);

    let short = Fretboard::new(catalog, Tuning::standard(), 0);
    let open = short.highlights("E", None).unwrap();
    assert_eq!(open.positions.len(), 2);
}

#[test]
fn test_classic_catalog_board() {
    let config = FretboardConfig {
        catalog: CatalogVariant::Classic,
        ..FretboardConfig::default()
    };
    let board = Fretboard::from_config(&config);
    let japanese = board.highlights("E", Some("Japanese Scale")).unwrap();
    assert!(japanese.advisory.is_none());
    assert_eq!(frets_on(&japanese, 0), vec![0, 2, 5, 7, 9, 12, 14, 17, 19, 21]);

    let missing = board.highlights("E", Some("Ryukyu Scale")).unwrap();
    assert!(missing.advisory.is_some());
}

#[test]
fn test_title() {
    let board = Fretboard::default();
    assert_eq!(board.highlights("C", Some("Major")).unwrap().title(), "C Major");
    assert_eq!(board.highlights("C", Some("nope")).unwrap().title(), "C");
}

#[test]
fn test_title_keeps_flat_spelling() {
    let highlights = Fretboard::default().highlights("Bb", Some("Major")).unwrap();
    assert_eq!(highlights.root, PitchClass::ASharp);
    assert_eq!(highlights.root_name, "Bb");
    assert_eq!(highlights.title(), "Bb Major");
    assert_eq!(crate::render::export_file_name(&highlights.title()), "Bb_Major.png");

    let sharp = Fretboard::default().highlights("A#", None).unwrap();
    assert_eq!(sharp.title(), "A#");
}

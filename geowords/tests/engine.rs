use geowords::vocabulary::{required_minimum_words, synthesize};
use geowords::{BuiltinWords, GeoCodec, GeocodeError, Mode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeSet, HashSet};
use std::sync::{Arc, OnceLock};

/// Fixed seed for reproducible tests
const TEST_SEED: u64 = 42;

/// One codec shared by every test in this file.
fn codec() -> &'static GeoCodec {
    static CODEC: OnceLock<GeoCodec> = OnceLock::new();
    CODEC.get_or_init(|| GeoCodec::new(Arc::new(BuiltinWords)))
}

fn assert_valid_triple(words: &geowords::WordTriple, mode: Mode) {
    let vocab = codec().vocabulary(mode).unwrap();
    let arr = words.as_array();
    assert_ne!(arr[0], arr[1]);
    assert_ne!(arr[0], arr[2]);
    assert_ne!(arr[1], arr[2]);
    for word in arr {
        assert!(word.bytes().all(|b| b.is_ascii_lowercase()), "bad word {}", word);
        assert!(vocab.index_of(word).is_some(), "{} not in vocabulary", word);
    }
}

#[test]
fn test_capacity_covers_grid_for_every_mode() {
    let codec = codec();
    codec.prepare(&Mode::ALL).unwrap();
    let cells = codec.grid().total_cells();

    for mode in Mode::ALL {
        let vocab = codec.vocabulary(mode).unwrap();
        let n = vocab.len() as u64;
        assert!(n * (n - 1) * (n - 2) >= cells);
        assert_eq!(n, required_minimum_words(cells));
    }
}

#[test]
fn test_london_round_trip() {
    let codec = codec();
    let (lat, lng) = (51.5074, -0.1278);

    let words = codec.encode(lat, lng, Mode::Global).unwrap();
    assert_valid_triple(&words, Mode::Global);

    let back = codec
        .decode(&words.word1, &words.word2, &words.word3, Mode::Global)
        .unwrap();
    assert!((back.latitude - lat).abs() <= codec.grid().cell_height_deg());
    assert!((back.longitude - lng).abs() <= codec.grid().cell_width_deg());
}

#[test]
fn test_random_points_round_trip_within_one_cell() {
    let codec = codec();
    let grid = codec.grid();
    let mut rng = StdRng::seed_from_u64(TEST_SEED);

    for mode in Mode::ALL {
        for _ in 0..2_000 {
            let lat = rng.gen_range(-90.0..=90.0);
            let lng = rng.gen_range(-180.0..=180.0);

            let words = codec.encode(lat, lng, mode).unwrap();
            assert_valid_triple(&words, mode);

            let back = codec.decode_triple(&words, mode).unwrap();
            assert!(
                (back.latitude - lat).abs() <= grid.cell_height_deg(),
                "{} lat {} -> {}",
                mode,
                lat,
                back.latitude
            );
            assert!(
                (back.longitude - lng).abs() <= grid.cell_width_deg(),
                "{} lng {} -> {}",
                mode,
                lng,
                back.longitude
            );
        }
    }
}

#[test]
fn test_cell_centers_round_trip_exactly() {
    let codec = codec();
    let grid = codec.grid();
    let mut rng = StdRng::seed_from_u64(TEST_SEED + 1);

    let mut indices = vec![0, 1, grid.longitude_cells(), grid.total_cells() - 1];
    indices.extend((0..500).map(|_| rng.gen_range(0..grid.total_cells())));

    for index in indices {
        let center = grid.cell_center(index).unwrap();
        let words = codec.encode_triple(center, Mode::Global).unwrap();
        let back = codec.decode_triple(&words, Mode::Global).unwrap();
        assert!((back.latitude - center.latitude).abs() < 1e-9);
        assert!((back.longitude - center.longitude).abs() < 1e-9);
    }
}

#[test]
fn test_neighbouring_cells_get_distinct_words() {
    let codec = codec();
    let grid = codec.grid();
    let start = grid.total_cells() / 3;

    let mut seen = HashSet::new();
    for index in start..start + 5_000 {
        let center = grid.cell_center(index).unwrap();
        let words = codec.encode_triple(center, Mode::RegionRestricted).unwrap();
        assert!(seen.insert(words), "cell {} reused a triple", index);
    }
}

#[test]
fn test_poles_and_antimeridian() {
    let codec = codec();
    for (lat, lng) in [(90.0, 180.0), (-90.0, -180.0), (90.0, -180.0), (0.0, 180.0)] {
        let words = codec.encode(lat, lng, Mode::Global).unwrap();
        let back = codec.decode_triple(&words, Mode::Global).unwrap();
        assert!((-90.0..=90.0).contains(&back.latitude));
        assert!((-180.0..=180.0).contains(&back.longitude));
        assert!((back.latitude - lat).abs() <= codec.grid().cell_height_deg());
    }
}

#[test]
fn test_out_of_range_rejected() {
    let codec = codec();
    for (lat, lng) in [(91.0, 0.0), (-91.0, 0.0), (0.0, 181.0), (0.0, -181.0)] {
        assert!(matches!(
            codec.encode(lat, lng, Mode::Global),
            Err(GeocodeError::OutOfRange { .. })
        ));
    }
}

#[test]
fn test_invalid_decode_rejected() {
    let codec = codec();
    assert!(matches!(
        codec.decode("apple", "apple", "banana", Mode::Global),
        Err(GeocodeError::InvalidWords { .. })
    ));
    assert!(matches!(
        codec.decode("apple1", "banana", "cherry", Mode::Global),
        Err(GeocodeError::InvalidWords { .. })
    ));
    assert_eq!(
        codec.decode("zzz-nonexistent", "banana", "cherry", Mode::Global),
        Err(GeocodeError::unknown_word("zzz-nonexistent", Mode::Global))
    );
}

#[test]
fn test_decode_is_case_insensitive() {
    let codec = codec();
    let words = codec.encode(35.6586, 139.7454, Mode::RegionRestricted).unwrap();
    let lower = codec.decode_triple(&words, Mode::RegionRestricted).unwrap();
    let upper = codec
        .decode(
            &words.word1.to_uppercase(),
            &format!(" {}", words.word2),
            &words.word3,
            Mode::RegionRestricted,
        )
        .unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn test_builtin_filtered_entries_absent() {
    let vocab = codec().vocabulary(Mode::Global).unwrap();
    assert!(vocab.index_of("half-moon").is_none());
    assert!(vocab.index_of("x2").is_none());
    assert!(vocab.index_of("apple").is_some());
}

#[test]
fn test_independent_codecs_agree() {
    // A fresh codec rebuilds the vocabulary from scratch.
    let fresh = GeoCodec::new(Arc::new(BuiltinWords));
    for (lat, lng) in [(51.5074, -0.1278), (-33.8688, 151.2093), (0.0, 0.0)] {
        for mode in Mode::ALL {
            assert_eq!(
                fresh.encode(lat, lng, mode).unwrap(),
                codec().encode(lat, lng, mode).unwrap()
            );
        }
    }
}

#[test]
fn test_synthesis_deterministic_across_calls() {
    let existing: BTreeSet<String> = ["apple", "banana", "cherry"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    for mode in Mode::ALL {
        let a = synthesize(40_000, &existing, mode).unwrap();
        let b = synthesize(40_000, &existing, mode).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|w| !existing.contains(w)));
    }
}

#[test]
fn test_synthesized_words_are_pinned() {
    let existing: BTreeSet<String> = ["apple", "banana", "cherry"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let global = synthesize(8, &existing, Mode::Global).unwrap();
    assert_eq!(global, vec!["baba", "babe", "babi", "babo", "babu"]);

    let region = synthesize(8, &existing, Mode::RegionRestricted).unwrap();
    assert_eq!(region, vec!["kaka", "kaki", "kaku", "kake", "kako"]);
}

#[test]
fn test_addresses_are_pinned() {
    // Any change to the word tables or their order remaps every address.
    let codec = codec();
    assert_eq!(
        codec.vocabulary(Mode::Global).unwrap().len(),
        38_413
    );
    let london = codec.encode(51.5074, -0.1278, Mode::Global).unwrap();
    assert_eq!(london.to_string(), "fipe.cegec.fiwo");
}

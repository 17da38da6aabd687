//! Date and range expansion against known inputs.

use uspec_core::{expand_dates, expand_ranges};
use uspec_model::{InputKind, UspecError};

#[test]
fn birthday_expands_to_every_part_arrangement() {
    let tokens = expand_dates("12.04.1982").unwrap();
    assert_eq!(tokens.len(), 48);
    insta::assert_snapshot!(tokens.as_strs().join("\n"), @r"
    04
    0412
    0412198
    04121982
    041282
    0412982
    04198
    0419812
    041982
    04198212
    0482
    048212
    04982
    0498212
    12
    1204
    1204198
    12041982
    120482
    1204982
    12198
    1219804
    121982
    12198204
    1282
    128204
    12982
    1298204
    198
    19804
    1980412
    19812
    1981204
    1982
    198204
    19820412
    198212
    19821204
    82
    8204
    820412
    8212
    821204
    982
    98204
    9820412
    98212
    9821204
    ");
}

#[test]
fn repeated_dates_expand_once() {
    let once = expand_dates("12.04.1982").unwrap();
    let twice = expand_dates("12.04.1982, 12.04.1982").unwrap();
    assert_eq!(once, twice);
}

#[test]
fn two_dates_union_their_tokens() {
    let first = expand_dates("12.04.1982").unwrap();
    let second = expand_dates("31.12.1995").unwrap();
    let both = expand_dates("12.04.1982,31.12.1995").unwrap();
    for token in first.iter().chain(second.iter()) {
        assert!(both.contains(token.as_str()), "missing {token}");
    }
    assert!(both.len() <= first.len() + second.len());
}

#[test]
fn dot_separator_is_literal() {
    let err = expand_dates("12x04x1982").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#""exact dates" format faulty: no entry of "12x04x1982" matches DD.MM.YYYY"#
    );
}

#[test]
fn small_range_scenario() {
    let tokens = expand_ranges("1-3").unwrap();
    assert_eq!(tokens.as_strs(), vec!["1", "2", "3"]);
}

#[test]
fn multiple_ranges_cover_both_spans() {
    let tokens = expand_ranges("5-23,87-105").unwrap();
    assert_eq!(tokens.len(), 19 + 19);
    for value in (5..=23).chain(87..=105) {
        assert!(tokens.contains(&value.to_string()), "missing {value}");
    }
    assert!(!tokens.contains("4"));
    assert!(!tokens.contains("24"));
    assert!(!tokens.contains("106"));
}

#[test]
fn overlapping_ranges_deduplicate() {
    let tokens = expand_ranges("1-5, 3-8").unwrap();
    assert_eq!(tokens.len(), 8);
}

#[test]
fn garbage_ranges_are_invalid() {
    let err = expand_ranges("one-two").unwrap_err();
    assert!(matches!(
        err,
        UspecError::InvalidFormat {
            kind: InputKind::Ranges,
            ..
        }
    ));
}

//! File output and merge against a temporary directory.

use std::collections::BTreeSet;
use std::fs;

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;
use uspec_model::WordlistResult;
use uspec_output::{merge_files, save_merged_at, save_wordlist, save_wordlist_at};

fn stamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 11, 2)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap()
}

fn wordlist(words: &[&str]) -> WordlistResult {
    WordlistResult::new(words.iter().map(|word| word.to_string()).collect())
}

#[test]
fn wordlist_is_written_sorted_under_timestamped_name() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("output");

    let saved = save_wordlist_at(
        &out_dir,
        "wordlist.txt",
        &wordlist(&["doe", "John", "john"]),
        &stamp(),
    )
    .unwrap();

    assert_eq!(saved.path, out_dir.join("2025-11-02_18-30-00_wordlist.txt"));
    assert_eq!(saved.lines, 3);
    assert_eq!(fs::read_to_string(&saved.path).unwrap(), "John\ndoe\njohn\n");
}

#[test]
fn wordlist_file_name_ends_with_configured_name() {
    let dir = TempDir::new().unwrap();
    let saved = save_wordlist(dir.path(), "list.txt", &wordlist(&["abc"])).unwrap();
    let name = saved.path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.ends_with("_list.txt"), "{name}");
    assert_eq!(name.len(), "2025-11-02_18-30-00_list.txt".len());
}

#[test]
fn empty_wordlist_writes_empty_file() {
    let dir = TempDir::new().unwrap();
    let saved = save_wordlist_at(dir.path(), "empty.txt", &wordlist(&[]), &stamp()).unwrap();
    assert_eq!(saved.lines, 0);
    assert_eq!(fs::read_to_string(&saved.path).unwrap(), "");
}

#[test]
fn merge_unions_and_sorts_files() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, "abc\nxyz\n").unwrap();
    fs::write(&second, "xyz\r\n123\r\n\r\n").unwrap();

    let merged = merge_files(&[first, second]).unwrap();
    let saved = save_merged_at(dir.path(), "merged.txt", &merged, &stamp()).unwrap();

    assert_eq!(saved.lines, 3);
    let contents = fs::read_to_string(&saved.path).unwrap();
    assert!(contents.ends_with("xyz\n"));
    insta::assert_snapshot!(contents.trim_end(), @r"
    123
    abc
    xyz
    ");
}

#[test]
fn merge_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let present = dir.path().join("present.txt");
    fs::write(&present, "abc\n").unwrap();

    let err = merge_files(&[present, dir.path().join("absent.txt")]).unwrap_err();
    assert!(err.to_string().contains("absent.txt"), "{err}");
}

#[test]
fn merge_of_empty_files_is_empty() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");
    fs::write(&first, "\n\n").unwrap();
    fs::write(&second, "").unwrap();
    assert_eq!(merge_files(&[first, second]).unwrap(), BTreeSet::new());
}

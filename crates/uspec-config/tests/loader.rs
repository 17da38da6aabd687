use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use uspec_config::{
    ConfigError, DEFAULT_OUTPUT_DIR, LogFileMode, LogLevel, load_settings, parse_settings,
};
use uspec_model::UspecError;

const MINIMAL: &str = r#"
[options]
length_min = 4
length_max = 12
tails = "1, 123,"

[leet]
a = "4,@"
o = "0"

[chars]
special_chars = "!,?"
required = true

[output]
output_file = " wordlist.txt "
merged_file = "merged.txt"
"#;

fn parse(contents: &str) -> Result<uspec_config::Settings, ConfigError> {
    parse_settings(contents, Path::new("uspec.toml"))
}

#[test]
fn parses_minimal_config() {
    let settings = parse(MINIMAL).unwrap();
    let generator = &settings.generator;
    assert_eq!(generator.length_min(), 4);
    assert_eq!(generator.length_max(), 12);
    assert_eq!(generator.tails, vec!["1", "123"]);
    assert_eq!(generator.special_chars, vec!["!", "?"]);
    assert!(generator.required);
    assert_eq!(generator.leet.len(), 2);
    assert_eq!(settings.output.output_file, "wordlist.txt");
    assert_eq!(settings.output.directory, PathBuf::from(DEFAULT_OUTPUT_DIR));
    assert!(settings.logging.is_none());
}

#[test]
fn parses_logging_section() {
    let contents = format!(
        "{MINIMAL}\n[logging]\nenabled = true\nlog_file = \"uspec.log\"\nmode = \"truncate\"\nlevel = \"debug\"\n"
    );
    let logging = parse(&contents).unwrap().logging.unwrap();
    assert!(logging.enabled);
    assert_eq!(logging.log_file, PathBuf::from("uspec.log"));
    assert_eq!(logging.mode, LogFileMode::Truncate);
    assert_eq!(logging.level, LogLevel::Debug);
}

#[test]
fn missing_section_is_a_parse_error() {
    let contents = MINIMAL.replace("[chars]\nspecial_chars = \"!,?\"\nrequired = true\n", "");
    let err = parse(&contents).unwrap_err();
    assert!(matches!(err, ConfigError::Toml { .. }));
}

#[test]
fn unknown_logging_mode_is_a_parse_error() {
    let contents = format!("{MINIMAL}\n[logging]\nlog_file = \"uspec.log\"\nmode = \"rotate\"\n");
    assert!(matches!(parse(&contents), Err(ConfigError::Toml { .. })));
}

#[test]
fn inverted_bounds_are_rejected() {
    let contents = MINIMAL.replace("length_min = 4", "length_min = 20");
    let err = parse(&contents).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Model(UspecError::Configuration(_))
    ));
}

#[test]
fn multi_char_leet_key_is_rejected() {
    let contents = MINIMAL.replace("o = \"0\"", "oo = \"0\"");
    assert!(matches!(
        parse(&contents),
        Err(ConfigError::InvalidLeetKey { .. })
    ));
}

#[test]
fn loads_from_disk_and_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("uspec.toml");
    fs::write(&path, MINIMAL).unwrap();
    assert!(load_settings(&path).is_ok());

    let err = load_settings(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn shipped_sample_config_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../uspec.toml");
    let settings = load_settings(&path).unwrap();
    assert!(settings.generator.length_min() <= settings.generator.length_max());
    assert!(!settings.generator.leet.is_empty());
}

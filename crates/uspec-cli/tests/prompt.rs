//! Input collection over in-memory readers.

use uspec_cli::prompt::{
    DATES_PROMPT, InputSources, KEYWORDS_PROMPT, Prompter, RANGES_PROMPT, SKIP_HINT,
    read_keywords, split_keywords,
};

fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
    Prompter::new(input.as_bytes(), Vec::new())
}

fn interactive() -> InputSources {
    InputSources {
        interactive: true,
        ..Default::default()
    }
}

#[test]
fn asks_for_every_missing_input() {
    let mut prompter = prompter("John, Doe\n12.04.1982\n5-23\n");
    let inputs = prompter.collect(interactive()).unwrap();

    assert_eq!(inputs.keywords, vec!["John", " Doe"]);
    assert_eq!(inputs.dates.as_deref(), Some("12.04.1982"));
    assert_eq!(inputs.ranges.as_deref(), Some("5-23"));

    let shown = String::from_utf8(prompter.into_output()).unwrap();
    assert!(shown.starts_with(SKIP_HINT));
    for prompt in [KEYWORDS_PROMPT, DATES_PROMPT, RANGES_PROMPT] {
        assert!(shown.contains(prompt), "missing prompt {prompt:?}");
    }
    assert_eq!(shown.matches("\n> ").count(), 3);
}

#[test]
fn blank_answers_skip_inputs() {
    let mut prompter = prompter("\n   \r\n\n");
    let inputs = prompter.collect(interactive()).unwrap();
    assert!(inputs.keywords.is_empty());
    assert_eq!(inputs.dates, None);
    assert_eq!(inputs.ranges, None);
}

#[test]
fn end_of_input_counts_as_blank() {
    let mut prompter = prompter("dragon\n");
    let inputs = prompter.collect(interactive()).unwrap();
    assert_eq!(inputs.keywords, vec!["dragon"]);
    assert_eq!(inputs.dates, None);
    assert_eq!(inputs.ranges, None);
}

#[test]
fn supplied_inputs_are_not_asked_again() {
    let mut prompter = prompter("1-3\n");
    let sources = InputSources {
        keywords: Some(vec!["cat".to_string()]),
        dates: Some("01.01.2000".to_string()),
        ranges: None,
        interactive: true,
    };
    let inputs = prompter.collect(sources).unwrap();
    assert_eq!(inputs.keywords, vec!["cat"]);
    assert_eq!(inputs.ranges.as_deref(), Some("1-3"));

    let shown = String::from_utf8(prompter.into_output()).unwrap();
    assert!(!shown.contains(KEYWORDS_PROMPT));
    assert!(!shown.contains(DATES_PROMPT));
    assert!(shown.contains(RANGES_PROMPT));
}

#[test]
fn no_prompt_leaves_missing_inputs_empty() {
    let mut prompter = prompter("ignored\n");
    let sources = InputSources {
        dates: Some("01.01.2000".to_string()),
        ..Default::default()
    };
    let inputs = prompter.collect(sources).unwrap();
    assert!(inputs.keywords.is_empty());
    assert_eq!(inputs.dates.as_deref(), Some("01.01.2000"));
    assert!(prompter.into_output().is_empty());
}

#[test]
fn fully_supplied_inputs_print_nothing() {
    let mut prompter = prompter("");
    let sources = InputSources {
        keywords: Some(Vec::new()),
        dates: Some(String::new()),
        ranges: Some(String::new()),
        interactive: true,
    };
    prompter.collect(sources).unwrap();
    assert!(prompter.into_output().is_empty());
}

#[test]
fn keyword_answers_split_on_commas() {
    assert_eq!(split_keywords("a,b ,, c"), vec!["a", "b ", "", " c"]);
}

#[test]
fn imported_keywords_are_one_per_line() {
    let keywords = read_keywords("john\r\ndoe\n\nlondon".as_bytes()).unwrap();
    assert_eq!(keywords, vec!["john", "doe", "", "london"]);
}

//! Interactive input collection.
//!
//! Inputs given on the command line are used as is. Anything else is asked
//! for on the terminal unless prompting is disabled; a blank answer skips
//! that input.

use std::io::{self, BufRead, Write};

pub const SKIP_HINT: &str = "[!] Leave the input blank [Enter] to skip the prompt.";

pub const KEYWORDS_PROMPT: &str = "\
Keywords related to the target (comma-separated):
Example: John, Doe, Jane, London, hotdog, dragon";

pub const DATES_PROMPT: &str = "\
Exact dates related to the target (comma-separated):
Format:  DD.MM.YYYY
Example: 12.04.1982, 20.12.1986, 04.01.2003";

pub const RANGES_PROMPT: &str = "\
Range of numbers related to the target (comma-separated):
Format:  N[nnn]-N[nnn] (minimum: 0 | maximum: 9999)
Example: 5-23, 87-105, 30-312, 1990-1995";

/// Raw inputs for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub keywords: Vec<String>,
    pub dates: Option<String>,
    pub ranges: Option<String>,
}

/// Inputs already known before prompting.
#[derive(Debug, Clone, Default)]
pub struct InputSources {
    /// Keywords from `--keywords` or an import file.
    pub keywords: Option<Vec<String>>,
    pub dates: Option<String>,
    pub ranges: Option<String>,
    /// Ask for missing inputs.
    pub interactive: bool,
}

/// Line-based prompts over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `text` followed by a `> ` marker and reads one line.
    ///
    /// Returns `None` for a blank answer or end of input.
    pub fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "\n{text}\n> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Fills in every input missing from `sources`.
    pub fn collect(&mut self, sources: InputSources) -> io::Result<RawInputs> {
        if !sources.interactive {
            return Ok(RawInputs {
                keywords: sources.keywords.unwrap_or_default(),
                dates: sources.dates,
                ranges: sources.ranges,
            });
        }

        let missing =
            sources.keywords.is_none() || sources.dates.is_none() || sources.ranges.is_none();
        if missing {
            writeln!(self.output, "{SKIP_HINT}")?;
        }
        let keywords = match sources.keywords {
            Some(keywords) => keywords,
            None => self
                .ask(KEYWORDS_PROMPT)?
                .map(|line| split_keywords(&line))
                .unwrap_or_default(),
        };
        let dates = match sources.dates {
            Some(dates) => Some(dates),
            None => self.ask(DATES_PROMPT)?,
        };
        let ranges = match sources.ranges {
            Some(ranges) => Some(ranges),
            None => self.ask(RANGES_PROMPT)?,
        };
        Ok(RawInputs {
            keywords,
            dates,
            ranges,
        })
    }
}

/// Splits a comma-separated keyword answer; entries are cleaned up later.
pub fn split_keywords(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

/// Reads one keyword per line.
pub fn read_keywords<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

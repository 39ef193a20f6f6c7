//! Output formatter for book reports
//!
//! This module renders a `BookReport` as the console text report, as JSON or
//! as CSV. Every formatter builds the whole output in memory; the caller
//! writes it in one go.

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::core::ranking::RankedFrequencyList;

const BANNER: &str = "============ BOOKSTATS ============";
const WORD_COUNT_DIVIDER: &str = "----------- Word Count ------------";
const CHAR_COUNT_DIVIDER: &str = "--------- Character Count ---------";
const END_BANNER: &str = "============= END =================";

/// Output format selected on the command line or in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable report
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
    /// `char,count` records
    Csv,
}

/// Everything the reporter needs for one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookReport {
    /// Path as given on the command line
    pub path: String,
    pub word_count: usize,
    pub letters: RankedFrequencyList,
}

/// Render the report in the requested format
pub fn render(report: &BookReport, format: OutputFormat, use_color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text_report(report, use_color)),
        OutputFormat::Json => format_json_report(report),
        OutputFormat::Csv => format_csv_report(report),
    }
}

/// Format the report for console output
///
/// # Arguments
///
/// * `report` - Word count and ranked frequencies of one book
/// * `use_color` - Whether banners and dividers are printed bold
///
/// # Returns
///
/// Formatted report, one trailing newline per line
pub fn format_text_report(report: &BookReport, use_color: bool) -> String {
    let frame = |line: &str| -> String {
        if use_color {
            line.bold().to_string()
        } else {
            line.to_string()
        }
    };

    let mut output = String::new();

    output.push_str(&format!("{}\n", frame(BANNER)));
    output.push_str(&format!("Analyzing book found at {}...\n", report.path));
    output.push_str(&format!("{}\n", frame(WORD_COUNT_DIVIDER)));
    output.push_str(&format!("Found {} total words\n", report.word_count));
    output.push_str(&format!("{}\n", frame(CHAR_COUNT_DIVIDER)));

    for entry in report.letters.entries() {
        output.push_str(&format!("{}: {}\n", display_char(entry.character), entry.count));
    }

    output.push_str(&format!("{}\n", frame(END_BANNER)));

    output
}

/// Quote whitespace and control characters so each entry stays on one line
fn display_char(c: char) -> String {
    if c.is_whitespace() || c.is_control() {
        format!("{:?}", c)
    } else {
        c.to_string()
    }
}

/// Format the report as a pretty-printed JSON document
pub fn format_json_report(report: &BookReport) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(report).context("Failed to serialize report as JSON")?;
    json.push('\n');
    Ok(json)
}

/// Format the ranked entries as CSV with a `char,count` header
pub fn format_csv_report(report: &BookReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["char", "count"]).context("Failed to write CSV header")?;

    for entry in report.letters.entries() {
        writer
            .write_record([entry.character.to_string(), entry.count.to_string()])
            .context("Failed to write CSV record")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::{count_chars, count_letters};
    use crate::core::ranking::rank_frequencies;

    fn report_for(text: &str) -> BookReport {
        BookReport {
            path: "books/test.txt".to_string(),
            word_count: text.split_whitespace().count(),
            letters: rank_frequencies(&count_letters(text)),
        }
    }

    #[test]
    fn test_text_report_layout() {
        let output = format_text_report(&report_for("the cat sat"), false);
        let expected = "\
============ BOOKSTATS ============
Analyzing book found at books/test.txt...
----------- Word Count ------------
Found 3 total words
--------- Character Count ---------
t: 3
a: 2
h: 1
e: 1
c: 1
s: 1
============= END =================
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_text_report_empty_book() {
        let output = format_text_report(&report_for(""), false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], "Found 0 total words");
        assert_eq!(lines[4], CHAR_COUNT_DIVIDER);
        assert_eq!(lines[5], END_BANNER);
    }

    #[test]
    fn test_text_report_quotes_whitespace() {
        let report = BookReport {
            path: "x".to_string(),
            word_count: 2,
            letters: rank_frequencies(&count_chars("a\nb")),
        };
        let output = format_text_report(&report, false);
        assert!(output.contains("'\\n': 1\n"));
        assert!(output.contains("a: 1\n"));
    }

    #[test]
    fn test_json_report() {
        let output = format_json_report(&report_for("the cat sat")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["path"], "books/test.txt");
        assert_eq!(value["word_count"], 3);
        assert_eq!(value["letters"][0], serde_json::json!({"char": "t", "count": 3}));
        assert_eq!(value["letters"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_csv_report() {
        let output = format_csv_report(&report_for("aab")).unwrap();
        assert_eq!(output, "char,count\na,2\nb,1\n");
    }

    #[test]
    fn test_csv_report_quotes_special_chars() {
        let report = BookReport {
            path: "x".to_string(),
            word_count: 1,
            letters: rank_frequencies(&count_chars(",")),
        };
        assert_eq!(format_csv_report(&report).unwrap(), "char,count\n\",\",1\n");
    }

    #[test]
    fn test_render_dispatch() {
        let report = report_for("ab");
        assert!(render(&report, OutputFormat::Text, false).unwrap().starts_with(BANNER));
        assert!(render(&report, OutputFormat::Json, false).unwrap().starts_with('{'));
        assert!(render(&report, OutputFormat::Csv, false).unwrap().starts_with("char,count"));
    }
}

//! bookstats - word count and letter frequency reports for plain text books
//!
//! The pipeline runs once per invocation: load the file, count words and
//! letters, rank the letters and render a report.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::analyzer::{CountMode, LetterFrequencyTable, TextAnalyzer, TextStats};
pub use crate::core::ranking::{rank_frequencies, RankedFrequencyList};
pub use crate::utils::file_utils::LoadError;
pub use crate::utils::output_formatter::{BookReport, OutputFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze a single book with default settings
///
/// This is a convenience function for simple use cases: letters only, every
/// ranked entry kept.
///
/// # Arguments
///
/// * `file_path` - Path to the book
///
/// # Returns
///
/// The report for the book, ready for rendering
pub fn analyze_book<P: AsRef<std::path::Path>>(file_path: P) -> Result<BookReport, LoadError> {
    app::build_report(file_path.as_ref(), CountMode::Letters, None)
}

/// Configuration file support
pub mod config {
    use std::path::Path;

    use log::{error, info};
    use serde::Deserialize;

    use crate::utils::output_formatter::OutputFormat;

    /// Settings read from a JSON configuration file.
    ///
    /// Every field is optional; command line flags take precedence.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct Config {
        pub format: Option<OutputFormat>,
        pub top: Option<usize>,
        pub all_chars: Option<bool>,
        pub color: Option<bool>,
        pub log_level: Option<String>,
    }

    /// Load configuration from file if provided
    ///
    /// A missing or malformed file is logged and replaced by the defaults.
    pub fn load_config(config_path: Option<&Path>) -> Config {
        let Some(path) = config_path else {
            return Config::default();
        };

        if !path.exists() {
            error!("Configuration file not found: {}", path.display());
            return Config::default();
        }

        let config_str = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                error!("Failed to read configuration file {}: {}", path.display(), e);
                return Config::default();
            }
        };

        match serde_json::from_str(&config_str) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                error!("Invalid JSON in configuration file: {}", e);
                Config::default()
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_no_path_gives_defaults() {
            assert_eq!(load_config(None), Config::default());
        }

        #[test]
        fn test_missing_file_gives_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let config = load_config(Some(dir.path().join("nope.json").as_path()));
            assert_eq!(config, Config::default());
        }

        #[test]
        fn test_full_config() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("bookstats.json");
            std::fs::write(
                &path,
                r#"{"format": "csv", "top": 5, "all_chars": true, "color": false, "log_level": "debug"}"#,
            )
            .unwrap();

            let config = load_config(Some(path.as_path()));
            assert_eq!(config.format, Some(OutputFormat::Csv));
            assert_eq!(config.top, Some(5));
            assert_eq!(config.all_chars, Some(true));
            assert_eq!(config.color, Some(false));
            assert_eq!(config.log_level.as_deref(), Some("debug"));
        }

        #[test]
        fn test_partial_config() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("bookstats.json");
            std::fs::write(&path, r#"{"top": 3}"#).unwrap();

            let config = load_config(Some(path.as_path()));
            assert_eq!(config.top, Some(3));
            assert_eq!(config.format, None);
        }

        #[test]
        fn test_invalid_json_gives_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("bookstats.json");
            std::fs::write(&path, "{ not json").unwrap();

            assert_eq!(load_config(Some(path.as_path())), Config::default());
        }
    }
}

/// Command-line application functionality
pub mod app {
    use std::path::Path;

    use anyhow::Result;
    use log::info;

    use crate::core::analyzer::{CountMode, TextAnalyzer};
    use crate::core::ranking::rank_frequencies;
    use crate::utils::file_utils::{read_book_text, LoadError};
    use crate::utils::output_formatter::{self, BookReport, OutputFormat};

    /// Settings for one run, after merging CLI flags and configuration
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RunOptions {
        pub format: OutputFormat,
        pub top: Option<usize>,
        pub mode: CountMode,
        pub use_color: bool,
    }

    /// Load, analyze and rank one book
    ///
    /// # Arguments
    ///
    /// * `file_path` - Path to the book
    /// * `mode` - Which characters are counted
    /// * `top` - Optional limit on the number of ranked entries
    pub fn build_report(
        file_path: &Path,
        mode: CountMode,
        top: Option<usize>,
    ) -> Result<BookReport, LoadError> {
        info!("Analyzing book: {}", file_path.display());

        let text = read_book_text(file_path)?;
        let stats = TextAnalyzer::new(mode).analyze(&text);

        let mut letters = rank_frequencies(&stats.frequencies);
        if let Some(n) = top {
            letters = letters.top(n);
        }

        Ok(BookReport {
            path: file_path.display().to_string(),
            word_count: stats.word_count,
            letters,
        })
    }

    /// Run the full pipeline and return the rendered report
    pub fn run(file_path: &Path, options: &RunOptions) -> Result<String> {
        let report = build_report(file_path, options.mode, options.top)?;
        output_formatter::render(&report, options.format, options.use_color)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_build_report_with_top() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("book.txt");
            std::fs::write(&path, "the cat sat").unwrap();

            let report = build_report(&path, CountMode::Letters, Some(1)).unwrap();
            assert_eq!(report.word_count, 3);
            assert_eq!(report.letters.len(), 1);
            assert_eq!(report.letters.entries()[0].character, 't');
        }

        #[test]
        fn test_run_keeps_load_error() {
            let dir = tempfile::tempdir().unwrap();
            let err = run(&dir.path().join("missing.txt"), &RunOptions::default()).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<LoadError>(),
                Some(LoadError::NotFound { .. })
            ));
        }
    }
}

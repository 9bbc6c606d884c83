use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Default line buffer size, in bytes
pub const DEFAULT_LINE_SIZE: usize = 700;

/// Settings that can be loaded from a file passed with `--config`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Maximum bytes read per line before it is split
    #[serde(default = "default_line_size")]
    pub line_size: NonZeroUsize,

    /// Report the canonical path instead of the given one
    #[serde(default)]
    pub show_full_path: bool,

    /// Skip the line size check before scanning
    #[serde(default)]
    pub ignore_warnings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_size: default_line_size(),
            show_full_path: false,
            ignore_warnings: false,
        }
    }
}

fn default_line_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_LINE_SIZE).unwrap_or(NonZeroUsize::MIN)
}

/// Where the report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Everything a single run needs, fixed once the CLI has been parsed
#[derive(Debug, Clone)]
pub struct Configuration {
    /// File to scan
    pub file_path: PathBuf,

    /// Report destination
    pub output: Destination,

    /// Report the canonical path instead of the given one
    pub show_full_path: bool,

    /// Bound shared by the validator and the scan
    pub line_size: NonZeroUsize,

    /// Skip the line size check
    pub ignore_warnings: bool,
}

impl Configuration {
    /// Build a configuration with default settings for `file_path`
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        let defaults = Config::default();
        Self {
            file_path: file_path.into(),
            output: Destination::Stdout,
            show_full_path: defaults.show_full_path,
            line_size: defaults.line_size,
            ignore_warnings: defaults.ignore_warnings,
        }
    }
}

/// A line (or line segment) containing the marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    /// 1-indexed count of reads, not of logical lines
    pub line_number: usize,

    /// Raw bytes as read, including the terminator when there was one
    pub raw_line: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.line_size.get(), 700);
        assert!(!config.show_full_path);
        assert!(!config.ignore_warnings);
    }

    #[test]
    fn test_configuration_defaults() {
        let configuration = Configuration::new("notes.txt");
        assert_eq!(configuration.file_path, PathBuf::from("notes.txt"));
        assert_eq!(configuration.output, Destination::Stdout);
        assert_eq!(configuration.line_size.get(), DEFAULT_LINE_SIZE);
        assert!(!configuration.ignore_warnings);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("show_full_path = true").unwrap();
        assert!(config.show_full_path);
        assert_eq!(config.line_size.get(), DEFAULT_LINE_SIZE);
    }
}

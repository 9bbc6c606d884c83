//! list_todos - list every `TODO:` note in a file
//!
//! Reads one file in fixed-size line segments, and prints each segment that
//! contains the marker together with its 1-based read number.
//!
//! # Features
//!
//! - Pre-scan that refuses to run when a line would be split by the buffer
//! - Byte-exact report, to stdout or a file
//! - Optional canonical path in the report header
//! - Defaults loadable from a TOML settings file (`--config`)
//!
//! # Example
//!
//! ```rust,no_run
//! use list_todos::*;
//!
//! let configuration = Configuration::new("src/main.rs");
//! let name = scanner::resolve_display_name(&configuration).unwrap();
//!
//! let mut source =
//!     source::LineSource::open(&configuration.file_path, configuration.line_size).unwrap();
//! let mut report = reporter::ReportWriter::open(&configuration.output).unwrap();
//!
//! scanner::run(&configuration, &name, &mut source, &mut report).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod reporter;
pub mod scanner;
pub mod source;
pub mod validator;

// Re-export commonly used types
pub use error::ScanError;
pub use models::{Config, Configuration, Destination, MatchEntry};

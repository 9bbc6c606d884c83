use crate::models::{Config, Configuration, Destination};
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// list_todos -- A program to list all TODO notes in a file.
#[derive(Parser, Debug)]
#[command(name = "list_todos")]
#[command(version, about = "A program to list all TODO notes in a file", long_about = None)]
pub struct Cli {
    /// File to scan
    #[arg(value_name = "FILENAME")]
    pub file: PathBuf,

    /// Prints the full path of the file
    #[arg(short = 'f', long = "fullpath")]
    pub full_path: bool,

    /// Change line (buffer) size, in bytes
    #[arg(short = 's', long = "line-size", value_name = "LINESIZE")]
    pub line_size: Option<NonZeroUsize>,

    /// Output to OUTFILE instead of stdout
    #[arg(short, long, value_name = "OUTFILE")]
    pub output: Option<PathBuf>,

    /// Ignore buffer size checking and run anyway; over-long lines are split
    #[arg(short, long = "ignore-warnings")]
    pub ignore_warnings: bool,

    /// Path to a settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge the flags over `defaults`; flags win
    pub fn into_configuration(self, defaults: &Config) -> Configuration {
        Configuration {
            file_path: self.file,
            output: self.output.map_or(Destination::Stdout, Destination::File),
            show_full_path: self.full_path || defaults.show_full_path,
            line_size: self.line_size.unwrap_or(defaults.line_size),
            ignore_warnings: self.ignore_warnings || defaults.ignore_warnings,
        }
    }
}

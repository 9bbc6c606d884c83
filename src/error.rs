use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can end a run early
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input file is missing or unreadable
    #[error("Failed to open file {name}")]
    InputOpen {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The report destination could not be created
    #[error("Failed to create output file {}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line is longer than the buffer and would be split
    #[error("line segment {segment} does not fit in a {line_size} byte buffer")]
    TruncationRisk { line_size: usize, segment: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

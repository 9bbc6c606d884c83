use crate::error::ScanError;
use crate::models::{Configuration, MatchEntry};
use crate::reporter::ReportWriter;
use crate::source::LineSource;
use crate::validator::{self, Verdict};
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::fs;
use std::io::{self, BufRead, Seek, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The literal every reported line contains
pub const MARKER: &str = "TODO:";

static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| build_marker_regex(MARKER).expect("Invalid MARKER_RE regex"));

/// Counters for a finished scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub segments: usize,
    pub matches: usize,
}

/// Finds marker lines in a bounded line source
pub struct TodoScanner {
    pattern: &'static Regex,
}

impl Default for TodoScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoScanner {
    pub fn new() -> Self {
        Self {
            pattern: &MARKER_RE,
        }
    }

    /// Case-sensitive, anywhere in the segment
    pub fn is_match(&self, segment: &[u8]) -> bool {
        self.pattern.is_match(segment)
    }

    /// Lazily yield every matching segment of `source`
    pub fn matches<'a, R: BufRead>(&'a self, source: &'a mut LineSource<R>) -> Matches<'a, R> {
        Matches {
            scanner: self,
            source,
            buf: Vec::new(),
            segments: 0,
        }
    }

    /// Stream every match of `source` into `report`
    pub fn scan<R: BufRead, W: Write>(
        &self,
        source: &mut LineSource<R>,
        report: &mut ReportWriter<W>,
    ) -> Result<ScanSummary, ScanError> {
        let mut matches = self.matches(source);
        let mut count = 0;

        for entry in matches.by_ref() {
            report.write_entry(&entry?)?;
            count += 1;
        }

        Ok(ScanSummary {
            segments: matches.segments_read(),
            matches: count,
        })
    }
}

/// Match the literal marker, with any regex metacharacters escaped
fn build_marker_regex(marker: &str) -> Result<Regex, regex::Error> {
    Regex::new(&regex::escape(marker))
}

/// Iterator over matching segments; see [`TodoScanner::matches`]
pub struct Matches<'a, R> {
    scanner: &'a TodoScanner,
    source: &'a mut LineSource<R>,
    // Reused between reads; grows only as far as the longest segment seen.
    buf: Vec<u8>,
    segments: usize,
}

impl<R> Matches<'_, R> {
    /// Reads performed so far, matching or not
    pub fn segments_read(&self) -> usize {
        self.segments
    }
}

impl<R: BufRead> Iterator for Matches<'_, R> {
    type Item = io::Result<MatchEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.source.read_segment(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }

            // Every read counts, so a split line takes several numbers.
            self.segments += 1;

            if self.scanner.is_match(&self.buf) {
                return Some(Ok(MatchEntry {
                    line_number: self.segments,
                    raw_line: self.buf.clone(),
                }));
            }
        }
    }
}

/// Name to print in the header: the argument as given, or its canonical path
pub fn resolve_display_name(configuration: &Configuration) -> Result<PathBuf, ScanError> {
    let literal = &configuration.file_path;
    if !configuration.show_full_path {
        return Ok(literal.clone());
    }

    fs::canonicalize(literal).map_err(|source| ScanError::InputOpen {
        name: literal.display().to_string(),
        source,
    })
}

/// Validate (unless disabled), then write the header and every match.
///
/// The bound is whatever `source` was opened with. On a truncation risk the
/// warning goes to `report` and the run fails with
/// [`ScanError::TruncationRisk`]; nothing else is written.
pub fn run<R: BufRead + Seek, W: Write>(
    configuration: &Configuration,
    display_name: &Path,
    source: &mut LineSource<R>,
    report: &mut ReportWriter<W>,
) -> Result<ScanSummary, ScanError> {
    let scanner = TodoScanner::new();

    if configuration.ignore_warnings {
        debug!("line size check skipped");
    } else if let Verdict::Unsafe { segment } = validator::check_line_size(source)? {
        report.write_size_warning()?;
        report.flush()?;
        return Err(ScanError::TruncationRisk {
            line_size: source.bound(),
            segment,
        });
    }

    report.write_header(display_name)?;
    let summary = scanner.scan(source, report)?;
    report.flush()?;

    debug!(
        segments = summary.segments,
        matches = summary.matches,
        "scan finished"
    );
    Ok(summary)
}

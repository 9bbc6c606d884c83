use crate::source::LineSource;
use std::io::{self, BufRead, Seek};
use tracing::debug;

/// Outcome of the line size pre-scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No line is longer than the bound
    Safe,
    /// The read numbered `segment` (1-indexed) is the head of a split line
    Unsafe { segment: usize },
}

/// Lookahead state while walking the segments
#[derive(Debug, Clone, Copy)]
enum Lookahead {
    Scanning,
    /// Previous segment had no terminator; next read decides
    PendingConfirmation { segment: usize },
}

/// Check that every line of `source` fits in its bound.
///
/// A segment without a trailing `\n` is only a truncation if another read
/// follows it; a file that simply ends on the boundary is fine. The source
/// is rewound to the start before returning, whatever the verdict.
pub fn check_line_size<R: BufRead + Seek>(source: &mut LineSource<R>) -> io::Result<Verdict> {
    let verdict = walk_segments(source)?;
    source.rewind()?;
    Ok(verdict)
}

fn walk_segments<R: BufRead>(source: &mut LineSource<R>) -> io::Result<Verdict> {
    let mut buf = Vec::new();
    let mut state = Lookahead::Scanning;
    let mut segment = 0;

    while source.read_segment(&mut buf)? > 0 {
        segment += 1;

        state = match state {
            Lookahead::PendingConfirmation { segment } => {
                debug!(segment, bound = source.bound(), "line exceeds buffer size");
                return Ok(Verdict::Unsafe { segment });
            }
            Lookahead::Scanning if buf.ends_with(b"\n") => Lookahead::Scanning,
            Lookahead::Scanning => Lookahead::PendingConfirmation { segment },
        };
    }

    debug!(segments = segment, "all lines fit in buffer");
    Ok(Verdict::Safe)
}

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek};
use std::num::NonZeroUsize;
use std::path::Path;

/// Sequential, bounded line reads over a seekable reader
///
/// Each read returns at most `bound` bytes, stopping after the first `\n`.
/// A physical line longer than the bound comes back as several segments,
/// and every segment but the last lacks the terminator.
pub struct LineSource<R> {
    reader: R,
    bound: NonZeroUsize,
}

impl LineSource<BufReader<File>> {
    /// Open a file for bounded reads
    pub fn open(path: &Path, bound: NonZeroUsize) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), bound))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R, bound: NonZeroUsize) -> Self {
        Self { reader, bound }
    }

    pub fn bound(&self) -> usize {
        self.bound.get()
    }

    /// Read the next segment into `buf`, replacing its contents.
    ///
    /// Returns the number of bytes read; 0 means end of input.
    pub fn read_segment(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        buf.clear();
        let limit = self.bound.get() as u64;
        (&mut self.reader).take(limit).read_until(b'\n', buf)
    }
}

impl<R: BufRead + Seek> LineSource<R> {
    /// Move back to the first byte of the input
    pub fn rewind(&mut self) -> io::Result<()> {
        self.reader.rewind()
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.read_segment(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(buf)),
            Err(e) => Some(Err(e)),
        }
    }
}

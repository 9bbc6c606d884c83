use crate::error::ScanError;
use crate::models::{DEFAULT_LINE_SIZE, Destination, MatchEntry};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the report to its destination
pub struct ReportWriter<W: Write> {
    out: W,
}

impl ReportWriter<Box<dyn Write>> {
    /// Create (or truncate) the destination file, or fall back to stdout
    pub fn open(destination: &Destination) -> Result<Self, ScanError> {
        let out: Box<dyn Write> = match destination {
            Destination::Stdout => Box::new(BufWriter::new(io::stdout())),
            Destination::File(path) => {
                let file = File::create(path).map_err(|source| ScanError::OutputCreate {
                    path: path.clone(),
                    source,
                })?;
                Box::new(BufWriter::new(file))
            }
        };

        Ok(Self::new(out))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// `File <name>:` followed by a blank line; the name is written as raw bytes
    pub fn write_header(&mut self, name: &Path) -> io::Result<()> {
        self.out.write_all(b"File ")?;
        self.out.write_all(&path_bytes(name))?;
        self.out.write_all(b":\n\n")
    }

    /// `On line <N>:` then the raw line, tab-indented, terminator untouched
    pub fn write_entry(&mut self, entry: &MatchEntry) -> io::Result<()> {
        writeln!(self.out, "On line {}:", entry.line_number)?;
        self.out.write_all(b"\t")?;
        self.out.write_all(&entry.raw_line)
    }

    pub fn write_size_warning(&mut self) -> io::Result<()> {
        write!(
            self.out,
            "Warning: buffer size may be too small.\nConsider changing it with the -s flag (default size is {})\n",
            DEFAULT_LINE_SIZE
        )
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

// Other platforms have no byte view of a path; non-Unicode names come out lossy.
#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(line_number: usize, raw: &[u8]) -> MatchEntry {
        MatchEntry {
            line_number,
            raw_line: raw.to_vec(),
        }
    }

    #[test]
    fn test_header_format() {
        let mut report = ReportWriter::new(Vec::new());
        report.write_header(Path::new("notes.txt")).unwrap();
        assert_eq!(report.into_inner(), b"File notes.txt:\n\n");
    }

    #[test]
    #[cfg(unix)]
    fn test_header_keeps_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = Path::new(OsStr::from_bytes(b"caf\xe9.txt"));
        let mut report = ReportWriter::new(Vec::new());
        report.write_header(name).unwrap();

        assert_eq!(report.into_inner(), b"File caf\xe9.txt:\n\n");
    }

    #[test]
    fn test_entry_keeps_raw_bytes() {
        let mut report = ReportWriter::new(Vec::new());
        report.write_entry(&entry(2, b"TODO: bar\n")).unwrap();
        report.write_entry(&entry(7, b"x // TODO: \xff no newline")).unwrap();

        assert_eq!(
            report.into_inner(),
            b"On line 2:\n\tTODO: bar\nOn line 7:\n\tx // TODO: \xff no newline".to_vec()
        );
    }

    #[test]
    fn test_size_warning() {
        let mut report = ReportWriter::new(Vec::new());
        report.write_size_warning().unwrap();

        let output = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(
            output,
            "Warning: buffer size may be too small.\nConsider changing it with the -s flag (default size is 700)\n"
        );
    }

    #[test]
    fn test_open_file_destination() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.txt");

        let mut report = ReportWriter::open(&Destination::File(path.clone())).unwrap();
        report.write_header(Path::new("a.txt")).unwrap();
        report.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "File a.txt:\n\n");
    }

    #[test]
    fn test_open_uncreatable_destination() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.txt");

        let result = ReportWriter::open(&Destination::File(path));
        assert!(matches!(result, Err(ScanError::OutputCreate { .. })));
    }
}

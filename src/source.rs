//! Line source over a seekable text stream. The loader consumes description
//! files exclusively through this interface, so tests can substitute an
//! in-memory source for a file on disk.

use crate::types::MachineError;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Seek, SeekFrom};
use std::path::Path;

/// Ordered line access over a seekable stream.
///
/// Wraps any `BufRead + Seek` reader; [`LineSource::open`] builds one over a
/// buffered file and [`LineSource::from_text`] over an in-memory string.
pub struct LineSource<R> {
    reader: R,
}

impl LineSource<BufReader<File>> {
    /// Opens a buffered line source over the file at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(LineSource)` positioned at the start of the file.
    /// * `Err(MachineError::File)` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, MachineError> {
        let file = File::open(path).map_err(|e| {
            MachineError::File(format!("Failed to open {}: {}", path.display(), e))
        })?;

        Ok(Self {
            reader: BufReader::new(file),
        })
    }
}

impl<'a> LineSource<Cursor<&'a str>> {
    /// Builds a synthetic line source over in-memory text.
    pub fn from_text(text: &'a str) -> Self {
        Self {
            reader: Cursor::new(text),
        }
    }
}

impl<R: BufRead + Seek> LineSource<R> {
    /// Counts the lines remaining between the current read position and the
    /// end of the stream, leaving the read position unchanged.
    ///
    /// An exhausted or empty stream counts as 0 lines; a final line without
    /// a terminator still counts.
    pub fn line_count(&mut self) -> io::Result<usize> {
        let saved = self.reader.stream_position()?;

        let mut count = 0;
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                break;
            }
            count += 1;
        }

        self.reader.seek(SeekFrom::Start(saved))?;
        Ok(count)
    }

    /// Reads the next line, without its terminator, of any length.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(line))` with the line content.
    /// * `Ok(None)` at end of stream.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}

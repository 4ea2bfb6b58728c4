//! Builds a [`Table`] from a machine-description file: the start state from
//! the header line, two reserved lines, then one transition row per line.

use crate::parser::parse_row;
use crate::source::LineSource;
use crate::types::{MachineError, Table};
use std::io::{BufRead, Seek};
use std::path::Path;

/// Index of the header line carrying the start state.
const HEADER_LINE: usize = 0;
/// Index of the first transition row; lines 1-2 are reserved metadata.
const FIRST_ROW_LINE: usize = 3;

/// `Loader` constructs transition tables from description files or from
/// string content.
pub struct Loader;

impl Loader {
    /// Loads a transition table from the description file at `path`.
    ///
    /// # Returns
    ///
    /// * `Ok(Table)` on success.
    /// * `Err(MachineError::File)` if the file cannot be opened or has no
    ///   usable header.
    /// * `Err(MachineError::Parse)` if a body line is a malformed row.
    pub fn load(path: &Path) -> Result<Table, MachineError> {
        let mut source = LineSource::open(path)?;
        Self::read_table(&mut source)
    }

    /// Loads a transition table from description content held in memory.
    pub fn load_from_text(content: &str) -> Result<Table, MachineError> {
        let mut source = LineSource::from_text(content);
        Self::read_table(&mut source)
    }

    /// Reads a full table from a positioned line source.
    ///
    /// Line 0 is the header naming the start state. Lines 1-2 are reserved
    /// metadata with no consumer; they are read and discarded without
    /// interpretation. Every later line goes through [`parse_row`]; lines too
    /// short to be rows are skipped, malformed rows abort construction.
    pub fn read_table<R: BufRead + Seek>(
        source: &mut LineSource<R>,
    ) -> Result<Table, MachineError> {
        let total = source.line_count()?;
        if total == 0 {
            return Err(MachineError::File(
                "Machine description is empty".to_string(),
            ));
        }

        let mut start_state = String::new();
        let mut transitions = Vec::new();

        for index in 0..total {
            let line = match source.read_line()? {
                Some(line) => line,
                None => break,
            };

            if index == HEADER_LINE {
                start_state = line.trim().to_string();
            } else if index < FIRST_ROW_LINE {
                // Reserved metadata, not consumed by execution.
            } else if let Some(transition) = parse_row(&line)? {
                transitions.push(transition);
            }
        }

        if start_state.is_empty() {
            return Err(MachineError::File(
                "Machine description has a blank header".to_string(),
            ));
        }

        Ok(Table {
            start_state,
            transitions,
        })
    }
}

//! This crate interprets fixed-format Turing machine descriptions.
//! A description file names a start state, carries two reserved metadata
//! lines, and then lists transition rows of the form
//! `(STATE,SYMBOL,STATE,SYMBOL,MOVE)`. The interpreter parses the rows into
//! a transition table and drives the machine over an input string on a
//! growable tape until it accepts (`A`), rejects (`R`), or fails.

pub mod library;
pub mod loader;
pub mod machine;
pub mod parser;
pub mod source;
pub mod tape;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the `MachineLibrary` registry from the library module.
pub use library::MachineLibrary;
/// Re-exports the `Loader` struct from the loader module.
pub use loader::Loader;
/// Re-exports the `Machine` struct from the machine module.
pub use machine::Machine;
/// Re-exports the row parser from the parser module.
pub use parser::parse_row;
/// Re-exports the `LineSource` struct from the source module.
pub use source::LineSource;
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the data model and error types from the types module.
pub use types::{
    MachineError, Movement, Outcome, Step, Table, Transition, BLANK_SYMBOL, DEFAULT_STEP_LIMIT,
};

use std::path::Path;

/// Loads the machine description at `path` and runs it over `input`.
///
/// This is the one-call entry point: table construction (releasing the file
/// handle before stepping begins) followed by a full run with the default
/// step budget.
///
/// # Returns
///
/// * `Ok(Outcome::Accept)` / `Ok(Outcome::Reject)` on a terminal state.
/// * `Err(MachineError)` for file, parse, no-transition, out-of-bounds, or
///   step-budget failures.
pub fn execute(path: &Path, input: &str) -> Result<Outcome, MachineError> {
    let table = Loader::load(path)?;
    Machine::new(table, input).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_execute_accepts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("accept.tm");

        let mut file = File::create(&path).unwrap();
        file.write_all(b"S1\n01\n01\n(S1,1,A,1,S)\n").unwrap();

        assert_eq!(execute(&path, "1").unwrap(), Outcome::Accept);
    }

    #[test]
    fn test_execute_no_transition() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("accept.tm");

        let mut file = File::create(&path).unwrap();
        file.write_all(b"S1\n01\n01\n(S1,1,A,1,S)\n").unwrap();

        let err = execute(&path, "0").unwrap_err();
        assert!(matches!(err, MachineError::NoTransition { .. }));
    }

    #[test]
    fn test_execute_missing_file() {
        let dir = tempdir().unwrap();
        let err = execute(&dir.path().join("missing.tm"), "1").unwrap_err();
        assert!(matches!(err, MachineError::File(_)));
    }
}

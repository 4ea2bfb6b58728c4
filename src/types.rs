//! Core data structures for the machine interpreter: transition rows, the
//! transition table, movements, run outcomes, and the error taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::Rule;

/// The blank symbol filling tape cells beyond the initial input.
pub const BLANK_SYMBOL: char = ' ';
/// State identifier that halts the machine with an accepting outcome.
pub const ACCEPT_STATE: &str = "A";
/// State identifier that halts the machine with a rejecting outcome.
pub const REJECT_STATE: &str = "R";
/// Default step budget; machines that have not halted by then are aborted.
pub const DEFAULT_STEP_LIMIT: usize = 100_000;

/// One row of a machine's program: in `current_state`, reading
/// `read_symbol` under the head, write `write_symbol`, move the head, and
/// adopt `next_state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// State the machine must be in for this row to apply.
    pub current_state: String,
    /// Symbol that must sit under the head for this row to apply.
    pub read_symbol: char,
    /// State the machine adopts after applying the row.
    pub next_state: String,
    /// Symbol written over the cell under the head.
    pub write_symbol: char,
    /// Head movement applied after the write.
    pub movement: Movement,
}

impl fmt::Display for Transition {
    /// Re-serializes the row in its canonical description-file form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{},{},{})",
            self.current_state,
            self.read_symbol,
            self.next_state,
            self.write_symbol,
            self.movement.as_char()
        )
    }
}

/// Head movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Movement {
    /// Move the head one cell to the left (`G` in a description file).
    Left,
    /// Move the head one cell to the right (`D` in a description file).
    Right,
    /// Keep the head where it is.
    Stay,
}

impl Movement {
    /// Signed head displacement for this movement.
    pub fn offset(self) -> i64 {
        match self {
            Movement::Left => -1,
            Movement::Right => 1,
            Movement::Stay => 0,
        }
    }

    /// Canonical description-file character for this movement.
    pub fn as_char(self) -> char {
        match self {
            Movement::Left => 'G',
            Movement::Right => 'D',
            Movement::Stay => 'S',
        }
    }
}

/// A machine program: the start state from the description header plus the
/// transition rows in file order.
///
/// Lookup is a linear scan and the first matching row wins, so a table that
/// repeats a `(state, symbol)` pair still behaves deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// State the machine starts in, taken from line 0 of the description.
    pub start_state: String,
    /// Transition rows in the order they appear in the description.
    pub transitions: Vec<Transition>,
}

impl Table {
    /// Returns the first row applicable to `state` reading `symbol`, if any.
    pub fn find(&self, state: &str, symbol: char) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.current_state == state && t.read_symbol == symbol)
    }

    /// Number of transition rows in the table.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// True when the table holds no transition rows.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Successful terminal outcome of a machine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The machine halted in the accept state.
    Accept,
    /// The machine halted in the reject state.
    Reject,
}

/// Result of a single execution step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The step applied a transition; the machine keeps running.
    Continue,
    /// The machine reached a terminal state.
    Halted(Outcome),
}

/// Errors that abort a machine run. Accept/reject are not errors; they are
/// reported through [`Outcome`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MachineError {
    /// The description file is missing, unreadable, or structurally empty.
    #[error("File error: {0}")]
    File(String),
    /// A stream operation on the line source failed.
    #[error("I/O error: {0}")]
    Io(String),
    /// A body line does not match the transition-row grammar.
    #[error("Malformed transition row: {0}")]
    Parse(#[from] Box<pest::error::Error<Rule>>),
    /// The machine is in a non-terminal state with no applicable row.
    #[error("No transition for state {state} reading {symbol:?}")]
    NoTransition {
        /// State the machine was in when lookup failed.
        state: String,
        /// Symbol under the head when lookup failed.
        symbol: char,
    },
    /// The head moved off the left edge of the tape.
    #[error("Head out of bounds at position {position} in state {state}")]
    OutOfBounds {
        /// State the machine was in when the head went negative.
        state: String,
        /// The negative head position.
        position: i64,
    },
    /// The machine did not halt within its step budget.
    #[error("Machine did not halt within {0} steps")]
    StepLimit(usize),
}

impl From<std::io::Error> for MachineError {
    fn from(e: std::io::Error) -> Self {
        MachineError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_serialization() {
        let left = Movement::Left;
        let right = Movement::Right;

        let left_json = serde_json::to_string(&left).unwrap();
        let right_json = serde_json::to_string(&right).unwrap();

        assert_eq!(left_json, "\"Left\"");
        assert_eq!(right_json, "\"Right\"");

        let left_deserialized: Movement = serde_json::from_str(&left_json).unwrap();
        let right_deserialized: Movement = serde_json::from_str(&right_json).unwrap();

        assert_eq!(left, left_deserialized);
        assert_eq!(right, right_deserialized);
    }

    #[test]
    fn test_movement_offsets() {
        assert_eq!(Movement::Left.offset(), -1);
        assert_eq!(Movement::Right.offset(), 1);
        assert_eq!(Movement::Stay.offset(), 0);
    }

    #[test]
    fn test_transition_display() {
        let transition = Transition {
            current_state: "S1".to_string(),
            read_symbol: '0',
            next_state: "S2".to_string(),
            write_symbol: '1',
            movement: Movement::Right,
        };

        assert_eq!(transition.to_string(), "(S1,0,S2,1,D)");
    }

    #[test]
    fn test_table_find_first_match_wins() {
        let table = Table {
            start_state: "S1".to_string(),
            transitions: vec![
                Transition {
                    current_state: "S1".to_string(),
                    read_symbol: '0',
                    next_state: "S2".to_string(),
                    write_symbol: '1',
                    movement: Movement::Right,
                },
                Transition {
                    current_state: "S1".to_string(),
                    read_symbol: '0',
                    next_state: "S3".to_string(),
                    write_symbol: '0',
                    movement: Movement::Left,
                },
            ],
        };

        let found = table.find("S1", '0').unwrap();
        assert_eq!(found.next_state, "S2");
        assert!(table.find("S1", '1').is_none());
        assert!(table.find("S2", '0').is_none());
    }

    #[test]
    fn test_error_display() {
        let error = MachineError::NoTransition {
            state: "S1".to_string(),
            symbol: 'x',
        };

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("No transition"));
        assert!(error_msg.contains("S1"));

        let error = MachineError::OutOfBounds {
            state: "S2".to_string(),
            position: -1,
        };
        assert!(format!("{}", error).contains("-1"));
    }
}

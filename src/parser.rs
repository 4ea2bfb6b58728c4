//! Parser for transition rows, utilizing the `pest` crate. It defines the
//! fixed row grammar of machine-description files and converts one line into
//! a structured [`Transition`].

use crate::types::{MachineError, Movement, Transition};
use pest::Parser as PestParser;
use pest_derive::Parser as PestParser;

/// Movement marker for a rightward head move.
pub const MOVE_RIGHT: char = 'D';
/// Movement marker for a leftward head move.
pub const MOVE_LEFT: char = 'G';

/// Lines shorter than this are not transitions and are skipped by callers.
const MIN_ROW_LEN: usize = 3;

/// Derives a `PestParser` for the transition-row grammar in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct RowParser;

/// Parses one description-file line into a [`Transition`].
///
/// Lines under three characters are not transition rows (blank lines,
/// comments); they yield `Ok(None)` and the caller skips them. Anything
/// longer must match the row grammar
/// `(STATE,SYMBOL,STATE,SYMBOL,MOVE)` exactly, where states are 1-4
/// characters and delimiters are located by content. A line that violates
/// the grammar is a [`MachineError::Parse`], never a partially filled row.
///
/// # Arguments
///
/// * `line` - One line of a description file, without its terminator.
///
/// # Returns
///
/// * `Ok(Some(Transition))` for a well-formed row.
/// * `Ok(None)` for a line too short to be a row.
/// * `Err(MachineError::Parse)` for a malformed row.
pub fn parse_row(line: &str) -> Result<Option<Transition>, MachineError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.chars().count() < MIN_ROW_LEN {
        return Ok(None);
    }

    let row = RowParser::parse(Rule::row, line)
        .map_err(|e| MachineError::Parse(Box::new(e)))?
        .next()
        .unwrap();

    let mut current_state = None;
    let mut read_symbol = None;
    let mut next_state = None;
    let mut write_symbol = None;
    let mut movement = None;

    // Fields appear in row order: state, symbol, state, symbol, movement.
    for pair in row.into_inner() {
        match pair.as_rule() {
            Rule::state => {
                if current_state.is_none() {
                    current_state = Some(pair.as_str().to_string());
                } else {
                    next_state = Some(pair.as_str().to_string());
                }
            }
            Rule::symbol => {
                let symbol = first_char(pair.as_str());
                if read_symbol.is_none() {
                    read_symbol = Some(symbol);
                } else {
                    write_symbol = Some(symbol);
                }
            }
            Rule::movement => movement = Some(parse_movement(first_char(pair.as_str()))),
            _ => {} // Skip EOI
        }
    }

    // The grammar guarantees all five fields are present.
    Ok(Some(Transition {
        current_state: current_state.unwrap(),
        read_symbol: read_symbol.unwrap(),
        next_state: next_state.unwrap(),
        write_symbol: write_symbol.unwrap(),
        movement: movement.unwrap(),
    }))
}

/// Maps a movement marker to a [`Movement`].
///
/// `D` moves right and `G` moves left; every other character reads as Stay,
/// matching the description-file convention.
pub fn parse_movement(marker: char) -> Movement {
    match marker {
        MOVE_RIGHT => Movement::Right,
        MOVE_LEFT => Movement::Left,
        _ => Movement::Stay,
    }
}

fn first_char(s: &str) -> char {
    // symbol and movement rules match exactly one character
    s.chars().next().unwrap_or(crate::types::BLANK_SYMBOL)
}

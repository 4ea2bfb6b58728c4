//! The machine's working storage: a growable sequence of symbols addressed
//! by head position, blank-filled beyond the initial input.

use crate::types::BLANK_SYMBOL;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bounded growable tape.
///
/// Reads past the current content return the blank symbol, writes extend the
/// content as needed, and [`Tape::grow`] doubles the logical length once the
/// head crosses the halfway threshold. Growth never moves or loses a symbol:
/// every previously addressable position keeps identical contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tape {
    cells: Vec<char>,
    blank: char,
}

impl Tape {
    /// Builds a tape holding `input`, blank-filled beyond it, with room for
    /// at least twice the input length before reallocating.
    pub fn new(input: &str) -> Self {
        Self::with_blank(input, BLANK_SYMBOL)
    }

    /// Same as [`Tape::new`] with an explicit blank symbol.
    pub fn with_blank(input: &str, blank: char) -> Self {
        let mut cells = Vec::with_capacity((input.len() * 2).max(2));
        cells.extend(input.chars());

        Self { cells, blank }
    }

    /// Symbol at `position`; blank beyond the current content.
    pub fn read(&self, position: usize) -> char {
        self.cells.get(position).copied().unwrap_or(self.blank)
    }

    /// Stores `symbol` at `position`, blank-filling any gap before it.
    pub fn write(&mut self, position: usize, symbol: char) {
        if position >= self.cells.len() {
            self.cells.resize(position + 1, self.blank);
        }
        self.cells[position] = symbol;
    }

    /// True once `position` has crossed half the current logical length,
    /// the growth threshold inherited from the description-file format.
    pub fn needs_growth(&self, position: usize) -> bool {
        position > self.cells.len() / 2
    }

    /// Doubles the logical length, blank-filling the new cells.
    pub fn grow(&mut self) {
        let target = (self.cells.len() * 2).max(2);
        self.cells.resize(target, self.blank);
    }

    /// Current logical length in cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the tape holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The blank symbol of this tape.
    pub fn blank(&self) -> char {
        self.blank
    }

    /// The tape contents as a slice of symbols.
    pub fn symbols(&self) -> &[char] {
        &self.cells
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cells {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tape_holds_input() {
        let tape = Tape::new("101");

        assert_eq!(tape.len(), 3);
        assert_eq!(tape.read(0), '1');
        assert_eq!(tape.read(1), '0');
        assert_eq!(tape.read(2), '1');
    }

    #[test]
    fn test_initial_capacity_is_at_least_double() {
        let tape = Tape::new("101");
        assert!(tape.cells.capacity() >= 6);

        // Empty input still gets a non-zero buffer.
        let empty = Tape::new("");
        assert!(empty.cells.capacity() >= 2);
    }

    #[test]
    fn test_read_beyond_content_is_blank() {
        let tape = Tape::new("1");
        assert_eq!(tape.read(1), BLANK_SYMBOL);
        assert_eq!(tape.read(100), BLANK_SYMBOL);
    }

    #[test]
    fn test_write_extends_with_blank_fill() {
        let mut tape = Tape::new("1");
        tape.write(3, 'x');

        assert_eq!(tape.len(), 4);
        assert_eq!(tape.read(0), '1');
        assert_eq!(tape.read(1), BLANK_SYMBOL);
        assert_eq!(tape.read(2), BLANK_SYMBOL);
        assert_eq!(tape.read(3), 'x');
    }

    #[test]
    fn test_growth_threshold() {
        let tape = Tape::new("0123");
        assert!(!tape.needs_growth(0));
        assert!(!tape.needs_growth(2));
        assert!(tape.needs_growth(3));
    }

    #[test]
    fn test_grow_doubles_and_preserves() {
        let mut tape = Tape::new("abc");
        tape.grow();

        assert_eq!(tape.len(), 6);
        assert_eq!(tape.read(0), 'a');
        assert_eq!(tape.read(1), 'b');
        assert_eq!(tape.read(2), 'c');
        assert_eq!(tape.read(3), BLANK_SYMBOL);
    }

    #[test]
    fn test_grow_empty_tape() {
        let mut tape = Tape::new("");
        tape.grow();
        assert_eq!(tape.len(), 2);
    }

    #[test]
    fn test_interleaved_writes_and_growth_preserve_symbols() {
        let mut tape = Tape::new("01");
        let mut expected: Vec<(usize, char)> = vec![(0, '0'), (1, '1')];

        for round in 0..8 {
            let position = tape.len().saturating_sub(1);
            let symbol = char::from_digit(round % 10, 10).unwrap();
            tape.write(position, symbol);
            expected.retain(|(p, _)| *p != position);
            expected.push((position, symbol));

            if tape.needs_growth(position) {
                tape.grow();
            }

            for (p, s) in &expected {
                assert_eq!(tape.read(*p), *s, "position {} after round {}", p, round);
            }
        }
    }

    #[test]
    fn test_custom_blank() {
        let tape = Tape::with_blank("1", '_');
        assert_eq!(tape.blank(), '_');
        assert_eq!(tape.read(5), '_');
    }

    #[test]
    fn test_display() {
        let mut tape = Tape::new("10");
        tape.write(3, '1');
        assert_eq!(tape.to_string(), "10 1");
    }
}

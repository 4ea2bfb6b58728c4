//! The `Machine` struct drives a single run: transition lookup against the
//! table, tape writes, head movement, growth, and halting.

use crate::tape::Tape;
use crate::types::{
    MachineError, Outcome, Step, Table, ACCEPT_STATE, DEFAULT_STEP_LIMIT, REJECT_STATE,
};

/// A single-tape machine run.
///
/// Owns its [`Table`] and [`Tape`] for the duration of the run; both are
/// released when the machine is dropped, on every halting path.
pub struct Machine {
    state: String,
    position: i64,
    tape: Tape,
    table: Table,
    step_count: usize,
    step_limit: usize,
}

impl Machine {
    /// Creates a machine over `input`, starting in the table's start state
    /// with the head on the first cell.
    pub fn new(table: Table, input: &str) -> Self {
        Self {
            state: table.start_state.clone(),
            position: 0,
            tape: Tape::new(input),
            table,
            step_count: 0,
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// Replaces the default step budget. Machines are not guaranteed to
    /// halt, so [`Machine::run`] gives up after this many steps.
    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Executes a single step.
    ///
    /// A terminal state halts before anything else is consulted, so a start
    /// state of `A` or `R` never touches the table. Otherwise the first row
    /// matching `(state, symbol under head)` is applied: write, state
    /// change, head move, and tape growth once the head crosses the growth
    /// threshold.
    ///
    /// # Returns
    ///
    /// * `Ok(Step::Continue)` after applying a transition.
    /// * `Ok(Step::Halted(outcome))` in a terminal state.
    /// * `Err(MachineError::OutOfBounds)` if the head sits left of cell 0.
    /// * `Err(MachineError::NoTransition)` if no row applies; the tape is
    ///   left exactly as it was when lookup failed.
    pub fn step(&mut self) -> Result<Step, MachineError> {
        if let Some(outcome) = self.outcome() {
            return Ok(Step::Halted(outcome));
        }

        let position = usize::try_from(self.position).map_err(|_| MachineError::OutOfBounds {
            state: self.state.clone(),
            position: self.position,
        })?;

        let symbol = self.tape.read(position);
        let transition = self
            .table
            .find(&self.state, symbol)
            .ok_or_else(|| MachineError::NoTransition {
                state: self.state.clone(),
                symbol,
            })?
            .clone();

        self.tape.write(position, transition.write_symbol);
        self.state = transition.next_state;
        self.position += transition.movement.offset();

        if self.position >= 0 && self.tape.needs_growth(self.position as usize) {
            self.tape.grow();
        }

        self.step_count += 1;

        Ok(Step::Continue)
    }

    /// Runs the machine until it halts, errors, or exhausts the step budget.
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome::Accept)` when the machine halts in the accept state.
    /// * `Ok(Outcome::Reject)` when it halts in the reject state.
    /// * `Err(MachineError::StepLimit)` when the budget runs out.
    /// * Any error surfaced by [`Machine::step`].
    pub fn run(&mut self) -> Result<Outcome, MachineError> {
        while self.step_count < self.step_limit {
            if let Step::Halted(outcome) = self.step()? {
                return Ok(outcome);
            }
        }

        // One last chance: the budget's final step may have entered a
        // terminal state.
        if let Some(outcome) = self.outcome() {
            return Ok(outcome);
        }

        Err(MachineError::StepLimit(self.step_limit))
    }

    /// Terminal outcome of the current state, or `None` while the machine
    /// is still running.
    pub fn halted(&self) -> Option<Outcome> {
        self.outcome()
    }

    /// Terminal outcome of the current state, if it is terminal.
    fn outcome(&self) -> Option<Outcome> {
        match self.state.as_str() {
            ACCEPT_STATE => Some(Outcome::Accept),
            REJECT_STATE => Some(Outcome::Reject),
            _ => None,
        }
    }

    /// The currently active state identifier.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The signed head position.
    pub fn position(&self) -> i64 {
        self.position
    }

    /// The tape, observable on every halting path.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Number of steps executed so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// The configured step budget.
    pub fn step_limit(&self) -> usize {
        self.step_limit
    }
}

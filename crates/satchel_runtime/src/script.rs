//! Per-line results of running a script.

use satchel_foundation::Error;
use satchel_inventory::SimulationState;
use satchel_parser::{CmdErr, Command};

/// What happened to one line.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// The command ran. Empty lines and comments count as executed.
    Executed,
    /// The line did not parse and was skipped.
    Skipped(CmdErr),
    /// The command parsed but failed to run.
    Failed(Error),
}

impl Outcome {
    /// Returns true for `Executed`.
    #[must_use]
    pub fn is_executed(&self) -> bool {
        matches!(self, Self::Executed)
    }

    /// Returns true for `Failed`.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One executed line.
#[derive(Clone, Debug)]
pub struct StepRecord {
    /// Line number within its script (1-indexed).
    pub line_number: usize,
    /// The line as written.
    pub line: String,
    /// The parsed command.
    pub command: Command,
    /// What happened.
    pub outcome: Outcome,
    /// State after the step, when snapshots are recorded.
    pub snapshot: Option<SimulationState>,
}

impl StepRecord {
    /// The error class of this step. Failed steps report `CmdErr::Execute`.
    #[must_use]
    pub fn cmd_err(&self) -> CmdErr {
        match &self.outcome {
            Outcome::Executed => self.command.cmd_err(),
            Outcome::Skipped(cmd_err) => *cmd_err,
            Outcome::Failed(_) => CmdErr::Execute,
        }
    }

    /// Messages to show the user for this step.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match &self.outcome {
            Outcome::Executed => Vec::new(),
            Outcome::Skipped(_) => self.command.messages().to_vec(),
            Outcome::Failed(error) => match &error.context {
                Some(context) => vec![format!("{error} {context}")],
                None => vec![error.to_string()],
            },
        }
    }
}

/// Everything that happened while running one script.
#[derive(Clone, Debug, Default)]
pub struct ScriptReport {
    /// Script name, usually a file path.
    pub source: Option<String>,
    /// Steps in order.
    pub steps: Vec<StepRecord>,
    /// Whether the script stopped early on an error.
    pub halted: bool,
}

impl ScriptReport {
    /// Number of executed steps.
    #[must_use]
    pub fn executed(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_executed()).count()
    }

    /// Steps that were skipped as hints.
    pub fn skipped(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Skipped(_)))
    }

    /// Steps that failed to execute.
    pub fn failures(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter().filter(|s| s.outcome.is_failed())
    }

    /// True when every line executed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.steps.iter().all(|s| s.outcome.is_executed())
    }

    /// The last recorded snapshot.
    #[must_use]
    pub fn final_snapshot(&self) -> Option<&SimulationState> {
        self.steps.iter().rev().find_map(|s| s.snapshot.as_ref())
    }
}

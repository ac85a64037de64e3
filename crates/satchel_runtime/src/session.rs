//! Session state for scripts and the REPL.
//!
//! A session owns the simulation state, the item registry used to resolve
//! names, and the history of every line it has run.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};
use satchel_foundation::{Error, ErrorContext, ErrorKind, ItemRegistry, Result};
use satchel_inventory::SimulationState;
use satchel_parser::{Command, CommandKind, parse_command};

use crate::config::RuntimeConfig;
use crate::items::SessionResolver;
use crate::script::{Outcome, ScriptReport, StepRecord};

/// A running simulation.
#[derive(Clone, Debug, Default)]
pub struct Session {
    state: SimulationState,
    registry: ItemRegistry,
    config: RuntimeConfig,
    history: Vec<StepRecord>,
}

impl Session {
    /// Creates a session with an empty state and an open registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session resolving names against `registry`.
    #[must_use]
    pub fn with_registry(registry: ItemRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// Builder method to set the configuration.
    #[must_use]
    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder method to start from an existing state.
    #[must_use]
    pub fn with_state(mut self, state: SimulationState) -> Self {
        self.state = state;
        self
    }

    /// Current simulation state.
    #[must_use]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Replaces the simulation state. History is kept.
    pub fn set_state(&mut self, state: SimulationState) {
        self.state = state;
    }

    /// Item registry. Empty means open mode.
    #[must_use]
    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Every step run so far, in order.
    #[must_use]
    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    /// Resolver over this session's registry.
    #[must_use]
    pub fn resolver(&self) -> SessionResolver<'_> {
        SessionResolver::new(&self.registry)
    }

    /// Parses a line without running it.
    #[must_use]
    pub fn parse(&self, line: &str) -> Command {
        parse_command(line, &self.resolver())
    }

    /// Clears the state and history. The registry is kept.
    pub fn reset(&mut self) {
        self.state = SimulationState::new();
        self.history.clear();
        debug!("session reset");
    }

    /// Parses and runs one line.
    pub fn run_line(&mut self, line: &str) -> &StepRecord {
        let line_number = self.history.len() + 1;
        let record = self.step(line_number, line, None);
        self.history.push(record);
        &self.history[self.history.len() - 1]
    }

    /// Runs every line of `script`, one command per line.
    ///
    /// Lines that do not parse are skipped. Execution errors are recorded and
    /// the script continues unless `halt_on_error` is set.
    pub fn run_script(&mut self, script: &str, source: Option<&str>) -> ScriptReport {
        let mut report = ScriptReport {
            source: source.map(str::to_string),
            ..ScriptReport::default()
        };
        info!("running script {}", source.unwrap_or("<input>"));

        for (index, line) in script.lines().enumerate() {
            let record = self.step(index + 1, line, source);
            let failed = record.outcome.is_failed();
            self.history.push(record.clone());
            report.steps.push(record);
            if failed && self.config.halt_on_error {
                warn!("halting at line {}", index + 1);
                report.halted = true;
                break;
            }
        }

        info!(
            "script done: {} executed, {} skipped, {} failed",
            report.executed(),
            report.skipped().count(),
            report.failures().count()
        );
        report
    }

    /// Reads and runs a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ScriptReport> {
        let path = path.as_ref();
        let script = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::IoError(format!(
                "failed to read script '{}': {e}",
                path.display()
            )))
        })?;
        let source = path.display().to_string();
        Ok(self.run_script(&script, Some(&source)))
    }

    /// Dump of the game data, or of a save when `save` is given.
    ///
    /// `Some("")` names the manual save.
    ///
    /// # Errors
    ///
    /// Returns an error if the save does not exist.
    pub fn dump(&self, save: Option<&str>) -> Result<Vec<String>> {
        let game_data = match save {
            None => self.state.game_data(),
            Some("") => self
                .state
                .manual_save()
                .ok_or_else(|| Error::save_not_found("manual save"))?,
            Some(name) => self
                .state
                .named_saves()
                .get(name)
                .ok_or_else(|| Error::save_not_found(name))?,
        };
        Ok(game_data.dump())
    }

    fn step(&mut self, line_number: usize, line: &str, source: Option<&str>) -> StepRecord {
        let command = self.parse(line);
        let outcome = if matches!(command.kind(), CommandKind::Hint { .. }) {
            debug!("line {line_number} skipped: {:?}", command.messages());
            Outcome::Skipped(command.cmd_err())
        } else {
            if self.config.trace_commands {
                info!("{line_number}: {}", line.trim());
            }
            match command.execute(&mut self.state) {
                Ok(()) => Outcome::Executed,
                Err(error) => {
                    let mut context = ErrorContext::new()
                        .with_line(line_number)
                        .with_command(line.trim());
                    if let Some(source) = source {
                        context = context.with_source(source);
                    }
                    let error = error.with_context(context);
                    warn!("{error}");
                    Outcome::Failed(error)
                }
            }
        };
        let snapshot = self.config.record_snapshots.then(|| self.state.clone());
        StepRecord {
            line_number,
            line: line.to_string(),
            command,
            outcome,
            snapshot,
        }
    }
}

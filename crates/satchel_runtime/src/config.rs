//! Runtime configuration for sessions and the CLI.

/// How a [`Session`](crate::Session) runs scripts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Stop a script at the first command that fails to execute.
    pub halt_on_error: bool,

    /// Keep a copy of the state after every step.
    pub record_snapshots: bool,

    /// Render animated icons in slot displays.
    pub icon_animated: bool,

    /// Log every executed command at info level.
    pub trace_commands: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            halt_on_error: false,
            record_snapshots: true,
            icon_animated: false,
            trace_commands: false,
        }
    }
}

impl RuntimeConfig {
    /// Halts on the first execution error.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            halt_on_error: true,
            ..Self::default()
        }
    }

    /// Records snapshots and traces every command.
    #[must_use]
    pub fn recording() -> Self {
        Self {
            record_snapshots: true,
            trace_commands: true,
            ..Self::default()
        }
    }

    /// Builder method to set halting on errors.
    #[must_use]
    pub fn with_halt_on_error(mut self, halt: bool) -> Self {
        self.halt_on_error = halt;
        self
    }

    /// Builder method to enable/disable per-step snapshots.
    #[must_use]
    pub fn with_record_snapshots(mut self, record: bool) -> Self {
        self.record_snapshots = record;
        self
    }

    /// Builder method to set animated icons.
    #[must_use]
    pub fn with_icon_animated(mut self, animated: bool) -> Self {
        self.icon_animated = animated;
        self
    }

    /// Builder method to enable/disable command tracing.
    #[must_use]
    pub fn with_trace_commands(mut self, trace: bool) -> Self {
        self.trace_commands = trace;
        self
    }
}

//! The main REPL implementation.
//!
//! Lines starting with `:` are REPL commands; anything else is a script line
//! run against the session.

use std::io::{self, Write};

use satchel_foundation::{Error, ErrorKind, Result};
use satchel_parser::CommandKind;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::script::Outcome;
use crate::serialize::{load_from_file, save_to_file};
use crate::session::Session;

const HELP: &[&str] = &[
    "Script lines run against the simulation, e.g. `get 2 materiala`.",
    "REPL commands:",
    "  :help            show this message",
    "  :pouch           show the visible inventory",
    "  :dump [save]     show game data, or a save (`manual` for the manual save)",
    "  :saves           list saves",
    "  :history         list lines run so far",
    "  :write PATH      write the state to a file",
    "  :load PATH       read the state from a file",
    "  :reset           start over with an empty state",
    "  :quit            leave",
];

/// What the REPL should do after one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print these lines and continue.
    Output(Vec<String>),
    /// Leave the loop.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state.
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "satchel> ".to_string(),
        }
    }

    /// Sets the session for this REPL. Item names become completions.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        let words = session
            .registry()
            .iter()
            .map(|item| item.id.to_lowercase())
            .collect();
        self.editor.set_completions(words);
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.print_error(&e);
                }
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input)? {
            Reply::Output(lines) => {
                for line in lines {
                    println!("{line}");
                }
                Ok(true)
            }
            Reply::Quit => Ok(false),
        }
    }

    /// Evaluates one input line.
    ///
    /// # Errors
    ///
    /// Returns an error if a REPL command fails. Script line failures are
    /// reported in the output instead.
    pub fn eval(&mut self, input: &str) -> Result<Reply> {
        let trimmed = input.trim();
        if let Some(meta) = trimmed.strip_prefix(':') {
            return self.eval_meta(meta);
        }

        let record = self.session.run_line(input);
        let mut lines = record.messages();
        let changed =
            record.outcome.is_executed() && !matches!(record.command.kind(), CommandKind::Nop);
        if let Outcome::Skipped(cmd_err) = record.outcome {
            lines.insert(0, format!("\x1b[33m{cmd_err}\x1b[0m"));
        }
        if changed {
            lines.extend(self.pouch_lines());
        }
        Ok(Reply::Output(lines))
    }

    fn eval_meta(&mut self, meta: &str) -> Result<Reply> {
        let (command, arg) = match meta.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (meta, ""),
        };

        let lines = match command {
            "q" | "quit" | "exit" => return Ok(Reply::Quit),
            "h" | "help" => HELP.iter().map(|line| (*line).to_string()).collect(),
            "pouch" => self.pouch_lines(),
            "dump" => match arg {
                "" => self.session.dump(None)?,
                "manual" => self.session.dump(Some(""))?,
                name => self.session.dump(Some(name))?,
            },
            "saves" => self.save_names(),
            "history" => self
                .session
                .history()
                .iter()
                .map(|step| format!("{:>4} [{}] {}", step.line_number, step.cmd_err(), step.line))
                .collect(),
            "write" => {
                save_to_file(self.session.state(), required(arg, "write")?)?;
                vec![format!("wrote {arg}")]
            }
            "load" => {
                let state = load_from_file(required(arg, "load")?)?;
                self.session.set_state(state);
                vec![format!("loaded {arg}")]
            }
            "reset" => {
                self.session.reset();
                Vec::new()
            }
            other => {
                return Err(Error::new(ErrorKind::Internal(format!(
                    "unknown REPL command :{other} (try :help)"
                ))));
            }
        };
        Ok(Reply::Output(lines))
    }

    fn pouch_lines(&self) -> Vec<String> {
        let state = self.session.state();
        let animated = self.session.config().icon_animated;
        let mut lines = vec![format!(
            "pouch: {} slots, {} counted",
            state.pouch().slots().len(),
            state.pouch().m_count()
        )];
        lines.extend(
            state
                .pouch()
                .displayed_slots(animated)
                .iter()
                .enumerate()
                .map(|(i, slot)| format!("{:>3}: {slot}", i + 1)),
        );
        lines
    }

    fn save_names(&self) -> Vec<String> {
        let state = self.session.state();
        let manual = state.manual_save().map(|_| "manual".to_string());
        manual
            .into_iter()
            .chain(state.named_saves().keys().cloned())
            .collect()
    }

    /// Prints an error message.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36msatchel\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type commands to run them. :help lists REPL commands. Ctrl+D exits.\n");
        let _ = io::stdout().flush();
    }
}

fn required<'a>(arg: &'a str, command: &str) -> Result<&'a str> {
    if arg.is_empty() {
        Err(Error::new(ErrorKind::Internal(format!(
            ":{command} requires a path"
        ))))
    } else {
        Ok(arg)
    }
}

//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`], so tests can script input while the
//! binary uses rustyline.

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use satchel_foundation::{Error, ErrorKind, Result};

use crate::highlight::SatchelHighlighter;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Extra completion words, such as item names.
    fn set_completions(&mut self, words: Vec<String>);
}

/// Words every session can complete.
pub const COMMAND_WORDS: &[&str] = &[
    "initialize",
    "init",
    "gamedata",
    "get",
    "add",
    "buy",
    "cook",
    "pick",
    "up",
    "remove",
    "sell",
    "drop",
    "eat",
    "dnp",
    "all",
    "with",
    "equip",
    "unequip",
    "shoot",
    "arrow",
    "write",
    "to",
    "in",
    "from",
    "slot",
    "save",
    "as",
    "reload",
    "use",
    "break",
    "slots",
    "close",
    "exit",
    "game",
    "sync",
    "has",
    "not",
    "enter",
    "leave",
    "trial",
    "eventide",
    "tots",
    "!swap",
    "!sort",
    "material",
    "!add",
];

#[derive(Helper, Completer, Hinter, Validator)]
struct SatchelHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: SatchelHighlighter,
}

impl Highlighter for SatchelHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes command words and item names.
struct WordCompleter {
    extra: Vec<String>,
}

impl WordCompleter {
    fn candidates(&self, word: &str) -> Vec<Pair> {
        let word = word.to_lowercase();
        let mut seen = Vec::new();
        COMMAND_WORDS
            .iter()
            .copied()
            .chain(self.extra.iter().map(String::as_str))
            .filter(|candidate| candidate.starts_with(&word))
            .filter(|candidate| {
                let fresh = !seen.contains(candidate);
                seen.push(*candidate);
                fresh
            })
            .map(|candidate| Pair {
                display: candidate.to_string(),
                replacement: candidate.to_string(),
            })
            .collect()
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = line.get(..pos).unwrap_or(line);
        let start = head
            .rfind(|c: char| c.is_whitespace() || "[],=:".contains(c))
            .map_or(0, |i| i + 1);
        let word = head.get(start..).unwrap_or_default();
        Ok((start, self.candidates(word)))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<SatchelHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = SatchelHelper {
            completer: WordCompleter { extra: Vec::new() },
            hinter: HistoryHinter::new(),
            highlighter: SatchelHighlighter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::IoError(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_completions(&mut self, words: Vec<String>) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.extra = words;
        }
    }
}

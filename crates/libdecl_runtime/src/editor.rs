//! Line editor abstraction for the REPL.
//!
//! The REPL reads through [`LineEditor`] so tests can drive it with scripted
//! input. [`RustylineEditor`] is the terminal implementation.

use std::borrow::Cow;

use libdecl_foundation::{Error, ErrorKind, Result};
use libdecl_resolver::Keyword;
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};

use crate::script;

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
}

/// Script commands offered for completion.
pub const COMMANDS: [&str; 7] = [
    "add_library",
    "add_executable",
    "set",
    "unset",
    "cmake_policy",
    "add_subdirectory",
    "end_subdirectory",
];

/// Returns every word the completer offers: commands, declaration keywords,
/// and REPL meta-commands.
#[must_use]
pub fn completion_words() -> Vec<String> {
    let mut words: Vec<String> = COMMANDS.iter().map(|c| (*c).to_string()).collect();
    words.extend(Keyword::ALL.iter().map(|k| k.text().to_string()));
    words.extend(["OLD", "NEW", "SET", "CMP0037"].map(String::from));
    words.extend([":targets", ":diagnostics", ":save", ":load", ":help"].map(String::from));
    words
}

#[derive(Helper, Completer, Hinter, RLValidator)]
struct LibdeclHelper {
    #[rustyline(Completer)]
    completer: KeywordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: ParenValidator,
}

impl Highlighter for LibdeclHelper {
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

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes commands and keywords, and file paths inside quotes or after
/// `:save`/`:load`.
struct KeywordCompleter {
    file_completer: FilenameCompleter,
    words: Vec<String>,
}

impl KeywordCompleter {
    fn new() -> Self {
        Self {
            file_completer: FilenameCompleter::new(),
            words: completion_words(),
        }
    }
}

impl Completer for KeywordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        let in_string = head.chars().filter(|&c| c == '"').count() % 2 == 1;
        if in_string || head.starts_with(":save ") || head.starts_with(":load ") {
            return self.file_completer.complete(line, pos, ctx);
        }

        let start = head
            .rfind(|c: char| c.is_whitespace() || c == '(' || c == ')')
            .map_or(0, |i| i + 1);
        let word = &line[start..pos];

        let candidates = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Keeps reading while an argument list or quoted argument is open.
struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if script::is_complete(ctx.input()) {
            Ok(ValidationResult::Valid(None))
        } else {
            Ok(ValidationResult::Incomplete)
        }
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<LibdeclHelper, DefaultHistory>,
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

        let helper = LibdeclHelper {
            completer: KeywordCompleter::new(),
            hinter: HistoryHinter::new(),
            validator: ParenValidator,
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
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

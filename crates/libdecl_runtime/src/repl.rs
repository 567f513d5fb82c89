//! The interactive REPL.
//!
//! Input is script text, evaluated by the [`Session`]. Lines starting with
//! `:` are REPL commands:
//!
//! | Command          | Effect                              |
//! |------------------|-------------------------------------|
//! | `:targets`       | List targets and aliases            |
//! | `:diagnostics`   | Show pending diagnostics            |
//! | `:save PATH`     | Save a project snapshot             |
//! | `:load PATH`     | Replace the project from a snapshot |
//! | `:help`          | Show this table                     |

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use libdecl_foundation::{Diagnostic, Error, ErrorKind, Result, Severity};
use libdecl_project::Project;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::script;
use crate::session::{Outcome, Session, describe_error};

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

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,
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
            prompt: "libdecl> ".to_string(),
            continuation_prompt: "     ... ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
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

    /// Runs the REPL loop until end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        while let Some(input) = self.read_input()? {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.editor.add_history(&input);

            match self.eval(trimmed) {
                Ok(output) => {
                    if !output.is_empty() {
                        println!("{output}");
                    }
                }
                Err(e) => eprintln!("\x1b[31mError: {}\x1b[0m", describe_error(&e)),
            }
            for diagnostic in self.session.take_diagnostics() {
                eprintln!("{}", format_diagnostic(&diagnostic));
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Reads a potentially multi-line input.
    ///
    /// Returns `None` at end of input.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);

                    if input.trim_start().starts_with(':') || script::is_complete(&input) {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::new(ErrorKind::ScriptSyntax {
                        message: "unexpected end of input".to_string(),
                        line: input.lines().count(),
                    }));
                }
            }
        }
    }

    /// Evaluates one input and returns the text to print.
    ///
    /// # Errors
    ///
    /// Returns an error if a REPL command fails or the script fails.
    pub fn eval(&mut self, input: &str) -> Result<String> {
        if let Some(command) = input.strip_prefix(':') {
            return self.meta_command(command.trim());
        }

        let outcomes = self.session.eval(input)?;
        Ok(outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Declared(_) | Outcome::Executable(_)))
            .map(|o| format!("\x1b[1m{o}\x1b[0m"))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn meta_command(&mut self, command: &str) -> Result<String> {
        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(n, a)| (n, a.trim()));

        match (name, arg) {
            ("targets", "") => Ok(describe_project(self.session.project())),
            ("diagnostics", "") => Ok(self
                .session
                .diagnostics()
                .entries()
                .iter()
                .map(format_diagnostic)
                .collect::<Vec<_>>()
                .join("\n")),
            ("save", path) if !path.is_empty() => {
                self.session.save(Path::new(path))?;
                Ok(format!("saved to {path}"))
            }
            ("load", path) if !path.is_empty() => {
                self.session.load(Path::new(path))?;
                Ok(format!(
                    "loaded {} targets from {path}",
                    self.session.project().target_count()
                ))
            }
            ("help", "") => Ok(HELP.to_string()),
            _ => Err(Error::new(ErrorKind::UnknownCommand(format!(":{command}")))),
        }
    }
}

const HELP: &str = "\
:targets          List targets and aliases
:diagnostics      Show pending diagnostics
:save PATH        Save a project snapshot
:load PATH        Replace the project from a snapshot
:help             Show this help";

/// Formats a diagnostic with a severity color.
#[must_use]
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let color = match diagnostic.severity {
        Severity::AuthorWarning | Severity::Warning => "33",
        Severity::FatalError => "31",
    };
    format!("\x1b[{color}m{diagnostic}\x1b[0m")
}

/// Lists a project's targets and aliases, one per line.
#[must_use]
pub fn describe_project(project: &Project) -> String {
    let mut out = String::new();
    for target in project.targets() {
        let _ = write!(out, "{} ({}", target.name, target.kind.describe());
        if target.imported {
            out.push_str(", imported");
            if target.global {
                out.push_str(", global");
            }
        }
        if target.exclude_from_all {
            out.push_str(", excluded from all");
        }
        out.push(')');
        if !target.sources.is_empty() {
            let _ = write!(out, ": {}", target.sources.join(" "));
        }
        out.push('\n');
    }
    for alias in project.aliases() {
        match project.alias_target(alias) {
            Some(target) => {
                let _ = writeln!(out, "{alias} -> {}", target.name);
            }
            None => {
                let _ = writeln!(out, "{alias} -> (removed)");
            }
        }
    }
    out.truncate(out.trim_end().len());
    out
}

fn print_banner() {
    println!("\x1b[1;36mlibdecl\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
    println!("Enter add_library(...) and other commands. :help for REPL commands, Ctrl+D to exit.\n");
    let _ = io::stdout().flush();
}

//! Parser for build-description scripts.
//!
//! A script is a sequence of command invocations:
//!
//! ```text
//! # comment
//! set(BUILD_SHARED_LIBS ON)
//! add_library(core STATIC
//!     src/a.c
//!     "src/with space.c")
//! add_library(ns::core ALIAS core)
//! ```
//!
//! Arguments are separated by whitespace and may span lines. Quoted arguments
//! keep their whitespace and support `\"`, `\\`, `\n` and `\t` escapes.
//! Command names are case-insensitive and are normalized to lowercase.

use std::iter::Peekable;
use std::str::Chars;

use libdecl_foundation::{Error, ErrorKind, Result};

/// One command invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    /// Lowercased command name.
    pub command: String,
    /// Arguments, with quotes removed.
    pub args: Vec<String>,
    /// Line the command name appears on (1-indexed).
    pub line: usize,
}

impl Statement {
    /// Creates a statement.
    #[must_use]
    pub fn new(command: impl Into<String>, args: Vec<String>, line: usize) -> Self {
        Self {
            command: command.into(),
            args,
            line,
        }
    }
}

fn syntax(message: impl Into<String>, line: usize) -> Error {
    Error::new(ErrorKind::ScriptSyntax {
        message: message.into(),
        line,
    })
}

struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    /// Skips whitespace and comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('#') => self.skip_comment(),
                _ => break,
            }
        }
    }

    fn identifier(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                name.push(c);
                self.bump();
            } else {
                break;
            }
        }
        name
    }

    fn arguments(&mut self, start_line: usize) -> Result<Vec<String>> {
        let mut args = Vec::new();
        loop {
            self.skip_trivia();
            match self.peek() {
                None => return Err(syntax("unterminated argument list", start_line)),
                Some(')') => {
                    self.bump();
                    return Ok(args);
                }
                Some('(') => {
                    return Err(syntax("nested parentheses are not supported", self.line));
                }
                Some('"') => {
                    self.bump();
                    args.push(self.quoted()?);
                }
                Some(_) => args.push(self.unquoted()),
            }
        }
    }

    fn quoted(&mut self) -> Result<String> {
        let line = self.line;
        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(syntax("unterminated quoted argument", line)),
                Some('"') => return Ok(value),
                Some('\\') => match self.bump() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some(c) => value.push(c),
                    None => return Err(syntax("unterminated quoted argument", line)),
                },
                Some(c) => value.push(c),
            }
        }
    }

    fn unquoted(&mut self) -> String {
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, '(' | ')' | '"' | '#') {
                break;
            }
            value.push(c);
            self.bump();
        }
        value
    }
}

/// Parses a script into statements.
///
/// # Errors
///
/// Returns a `ScriptSyntax` error for a missing command name, a missing `(`,
/// an unterminated argument list or quoted argument, or nested parentheses.
pub fn parse(source: &str) -> Result<Vec<Statement>> {
    let mut cursor = Cursor::new(source);
    let mut statements = Vec::new();

    loop {
        cursor.skip_trivia();
        let Some(c) = cursor.peek() else {
            break;
        };
        let line = cursor.line;
        if !(c.is_ascii_alphabetic() || c == '_') {
            return Err(syntax(format!("expected a command name, found '{c}'"), line));
        }
        let command = cursor.identifier();

        while cursor.peek().is_some_and(|c| c == ' ' || c == '\t') {
            cursor.bump();
        }
        match cursor.bump() {
            Some('(') => {}
            Some(other) => {
                return Err(syntax(
                    format!("expected '(' after {command}, found '{other}'"),
                    line,
                ));
            }
            None => {
                return Err(syntax(format!("expected '(' after {command}"), line));
            }
        }

        let args = cursor.arguments(line)?;
        statements.push(Statement::new(command.to_ascii_lowercase(), args, line));
    }

    Ok(statements)
}

/// Returns true if the input has no open argument list or quoted argument.
///
/// Used to decide whether interactive input needs a continuation line.
#[must_use]
pub fn is_complete(input: &str) -> bool {
    let mut depth = 0i32;
    let mut in_string = false;
    let mut in_comment = false;
    let mut escape_next = false;

    for c in input.chars() {
        if in_comment {
            in_comment = c != '\n';
            continue;
        }
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '#' if !in_string => in_comment = true,
            '(' if !in_string => depth += 1,
            ')' if !in_string => depth -= 1,
            _ => {}
        }
    }

    depth <= 0 && !in_string
}

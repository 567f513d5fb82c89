//! Session state and script evaluation.
//!
//! The session owns the project, the diagnostic log, and the resolver. It
//! evaluates script statements one at a time. A statement that fails stops
//! evaluation and the error carries the command, script, and line. A fatal
//! diagnostic emitted by a statement that still succeeded does not stop
//! evaluation; the caller decides what to do with the collected log.

use std::fmt;
use std::fs;
use std::path::Path;

use libdecl_foundation::{
    Diagnostic, DiagnosticLog, DiagnosticSink, Error, ErrorContext, ErrorKind, PolicyId,
    PolicyStatus, Result,
};
use libdecl_project::{Project, ProjectConfig, ProjectModel, StandardNameValidator};
use libdecl_resolver::{Context, Resolution, Resolver};
use tracing::{debug, debug_span};

use crate::script::{self, Statement};
use crate::serialize::{self, Snapshot};

/// What one statement did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// An `add_library` declaration was resolved.
    Declared(Resolution),
    /// An executable was added.
    Executable(String),
    /// A definition was set.
    Defined {
        /// Definition name.
        key: String,
        /// New value.
        value: String,
    },
    /// A definition was removed.
    Undefined(String),
    /// A policy was set in the current scope.
    Policy {
        /// The policy.
        policy: PolicyId,
        /// Its new status.
        status: PolicyStatus,
    },
    /// A child directory scope was entered.
    EnteredScope(String),
    /// The current directory scope was left.
    LeftScope,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declared(resolution) => write!(f, "{resolution}"),
            Self::Executable(name) => write!(f, "executable {name}"),
            Self::Defined { key, value } => write!(f, "{key} = {value}"),
            Self::Undefined(key) => write!(f, "{key} unset"),
            Self::Policy { policy, status } => write!(f, "{policy} = {status}"),
            Self::EnteredScope(name) => write!(f, "entered {name}"),
            Self::LeftScope => write!(f, "left scope"),
        }
    }
}

fn usage(command: &str, message: impl Into<String>) -> Error {
    Error::new(ErrorKind::CommandUsage {
        command: command.to_string(),
        message: message.into(),
    })
}

fn located(mut error: Error, source: Option<&str>, statement: Option<&Statement>) -> Error {
    let mut context = error.context.take().unwrap_or_default();
    if let Some(source) = source {
        context = context.with_source(source);
    }
    if let Some(statement) = statement {
        context = context
            .with_command(&statement.command)
            .with_line(statement.line);
    } else if let ErrorKind::ScriptSyntax { line, .. } = error.kind {
        context = context.with_line(line);
    }
    error.with_context(context)
}

/// An evaluation session.
pub struct Session {
    project: Project,
    diagnostics: DiagnosticLog,
    resolver: Resolver,
    names: StandardNameValidator,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with a default project.
    #[must_use]
    pub fn new() -> Self {
        Self::with_project(Project::new())
    }

    /// Creates a session with a project seeded from `config`.
    #[must_use]
    pub fn with_config(config: &ProjectConfig) -> Self {
        Self::with_project(Project::with_config(config))
    }

    /// Creates a session around an existing project.
    #[must_use]
    pub fn with_project(project: Project) -> Self {
        Self {
            project,
            diagnostics: DiagnosticLog::new(),
            resolver: Resolver::new(),
            names: StandardNameValidator::new(),
        }
    }

    /// Restores a session from a snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut session = Self::with_project(snapshot.project);
        for diagnostic in snapshot.diagnostics {
            session
                .diagnostics
                .emit(diagnostic.severity, diagnostic.message);
        }
        session
    }

    /// Replaces the resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Returns the project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the project mutably.
    pub fn project_mut(&mut self) -> &mut Project {
        &mut self.project
    }

    /// Returns the diagnostics collected so far.
    #[must_use]
    pub const fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// Removes and returns the collected diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.drain()
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Captures the project and pending diagnostics.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.project.clone(), self.diagnostics.entries().to_vec())
    }

    /// Saves a snapshot to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        serialize::save_to_file(&self.snapshot(), path)
    }

    /// Replaces the session state with a snapshot loaded from `path`.
    ///
    /// The resolver configuration is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let resolver = self.resolver.clone();
        *self = Self::from_snapshot(serialize::load_from_file(path)?).with_resolver(resolver);
        Ok(())
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    /// Resolves one library declaration.
    ///
    /// # Errors
    ///
    /// Returns the structural failure of the declaration.
    pub fn declare<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<Resolution> {
        let mut ctx = Context::new(&mut self.project, &self.names, &mut self.diagnostics);
        self.resolver.resolve(&mut ctx, tokens)
    }

    /// Evaluates script text.
    ///
    /// # Errors
    ///
    /// Returns the first syntax error or failing statement.
    pub fn eval(&mut self, source: &str) -> Result<Vec<Outcome>> {
        self.eval_source(source, None)
    }

    /// Reads and evaluates a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or the first syntax error
    /// or failing statement.
    pub fn eval_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<Outcome>> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;
        let label = path.display().to_string();
        self.eval_source(&source, Some(&label))
    }

    fn eval_source(&mut self, source: &str, label: Option<&str>) -> Result<Vec<Outcome>> {
        let span = debug_span!("eval", source = label.unwrap_or("<input>"));
        let _guard = span.enter();

        let statements = script::parse(source).map_err(|e| located(e, label, None))?;
        let mut outcomes = Vec::with_capacity(statements.len());
        for statement in &statements {
            let outcome = self
                .eval_statement(statement)
                .map_err(|e| located(e, label, Some(statement)))?;
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// Evaluates a single statement.
    ///
    /// # Errors
    ///
    /// Returns an error if the command is unknown, its arguments are wrong, or
    /// the declaration it makes fails.
    pub fn eval_statement(&mut self, statement: &Statement) -> Result<Outcome> {
        debug!(
            command = %statement.command,
            line = statement.line,
            args = statement.args.len(),
            "evaluating statement"
        );
        let command = statement.command.as_str();
        let args = statement.args.as_slice();

        match command {
            "add_library" => self.declare(args).map(Outcome::Declared),
            "add_executable" => self.add_executable(args),
            "set" => self.set(command, args),
            "unset" => match args {
                [key] => {
                    self.project.unset_definition(key);
                    Ok(Outcome::Undefined(key.clone()))
                }
                _ => Err(usage(command, "called with incorrect number of arguments")),
            },
            "cmake_policy" => self.set_policy(command, args),
            "add_subdirectory" => match args {
                [name] => {
                    self.project.enter_scope(name.clone());
                    Ok(Outcome::EnteredScope(name.clone()))
                }
                _ => Err(usage(command, "called with incorrect number of arguments")),
            },
            "end_subdirectory" => {
                if !args.is_empty() {
                    return Err(usage(command, "does not take arguments"));
                }
                self.project
                    .exit_scope()
                    .map(|_| Outcome::LeftScope)
                    .ok_or_else(|| usage(command, "called outside of a subdirectory"))
            }
            other => Err(Error::new(ErrorKind::UnknownCommand(other.to_string()))),
        }
    }

    fn add_executable(&mut self, args: &[String]) -> Result<Outcome> {
        let Some((name, sources)) = args.split_first() else {
            return Err(usage(
                "add_executable",
                "called with incorrect number of arguments",
            ));
        };
        self.project
            .enforce_unique_name(name)
            .map_err(Error::duplicate_target)?;
        self.project.add_executable(name, sources.to_vec());
        Ok(Outcome::Executable(name.clone()))
    }

    fn set(&mut self, command: &str, args: &[String]) -> Result<Outcome> {
        match args {
            [] => Err(usage(command, "called with incorrect number of arguments")),
            [key] => {
                self.project.unset_definition(key);
                Ok(Outcome::Undefined(key.clone()))
            }
            [key, values @ ..] => {
                let value = values.join(";");
                self.project.set_definition(key.clone(), value.clone());
                Ok(Outcome::Defined {
                    key: key.clone(),
                    value,
                })
            }
        }
    }

    fn set_policy(&mut self, command: &str, args: &[String]) -> Result<Outcome> {
        let [mode, id, status] = args else {
            return Err(usage(command, "SET requires a policy id and OLD or NEW"));
        };
        if mode != "SET" {
            return Err(usage(command, format!("given unknown mode {mode}")));
        }
        let policy: PolicyId = id.parse().map_err(|e: String| usage(command, e))?;
        let status = match status.as_str() {
            "OLD" => PolicyStatus::Old,
            "NEW" => PolicyStatus::New,
            other => {
                return Err(usage(
                    command,
                    format!("SET must be given OLD or NEW, got {other}"),
                ));
            }
        };
        self.project.set_policy(policy, status);
        Ok(Outcome::Policy { policy, status })
    }
}

/// Formats an error with its location, if it has one.
#[must_use]
pub fn describe_error(error: &Error) -> String {
    match &error.context {
        Some(context) if *context != ErrorContext::default() => format!("{error} ({context})"),
        _ => error.to_string(),
    }
}

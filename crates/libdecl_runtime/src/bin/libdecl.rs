//! libdecl CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use libdecl_foundation::Severity;
use libdecl_project::ProjectConfig;
use libdecl_runtime::repl::{describe_project, format_diagnostic};
use libdecl_runtime::{Repl, Session, describe_error, init_logging};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    strict: bool,
    dump_project: bool,
    save: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--strict" => config.strict = true,
            "--dump-project" => config.dump_project = true,
            "--save" => {
                i += 1;
                if i >= args.len() {
                    return Err("--save requires a path".into());
                }
                config.save = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("libdecl {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    init_logging()?;

    let project_config = if config.strict {
        ProjectConfig::strict()
    } else {
        ProjectConfig::default()
    };
    let mut session = Session::with_config(&project_config);

    // Fatal diagnostics do not stop evaluation, but they fail a batch run.
    let mut fatal = false;
    for file in &config.files {
        let result = session.eval_file(file);
        for diagnostic in session.take_diagnostics() {
            fatal |= diagnostic.severity == Severity::FatalError;
            eprintln!("{}", format_diagnostic(&diagnostic));
        }
        if let Err(e) = result {
            return Err(describe_error(&e).into());
        }
    }

    if config.dump_project {
        println!("\x1b[1;36m=== Project ===\x1b[0m");
        println!("Targets: {}", session.project().target_count());
        let listing = describe_project(session.project());
        if !listing.is_empty() {
            println!("{listing}");
        }
        println!();
    }

    if let Some(path) = &config.save {
        session.save(path)?;
    }

    if config.batch_mode {
        return Ok(if fatal {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    let mut repl = Repl::new()?.with_session(session);
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

fn print_help() {
    println!(
        "\x1b[1mlibdecl\x1b[0m - Library declaration resolver

\x1b[1mUSAGE:\x1b[0m
    libdecl [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Scripts to evaluate before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Evaluate files and exit (no REPL)
    --strict           Treat unset policies as NEW
    --dump-project     Print targets and aliases after evaluating files
    --save PATH        Save a project snapshot after evaluating files

\x1b[1mENVIRONMENT:\x1b[0m
    LIBDECL_LOG        Log filter, e.g. libdecl_resolver=debug (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    libdecl                           Start interactive REPL
    libdecl build.txt                 Evaluate build.txt, then start REPL
    libdecl -b --dump-project a.txt   Evaluate a.txt, list targets, and exit
    libdecl -b --save out.msgpack a.txt

\x1b[1mSCRIPT COMMANDS:\x1b[0m
    add_library(name [STATIC|SHARED|MODULE|OBJECT|INTERFACE|UNKNOWN]
                [EXCLUDE_FROM_ALL] [IMPORTED [GLOBAL]] [ALIAS target] sources...)
    add_executable(name sources...)
    set(VAR value...)  unset(VAR)
    cmake_policy(SET CMP0037 OLD|NEW)
    add_subdirectory(name)  end_subdirectory()"
    );
}

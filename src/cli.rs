//! CLI argument definitions and command execution.
//!
//! The `nomen` binary answers one question from the shell: given a Python
//! file and a line number, what name does the statement on that line bind
//! its value to? Output is plain text or JSON.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use crate::error::NameError;
use crate::parse::{self, AssignmentShape};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Python source file containing the call site
    pub file: PathBuf,

    /// 1-based line number of the call site
    pub line: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): a name was resolved
/// - `Failure` (1): the line binds no unique name (no target, or ambiguous)
/// - `Error` (2): the command itself failed (unreadable file, bad line)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

/// What one resolution attempt produced, as rendered to the user.
#[derive(Debug, Serialize)]
struct Report<'a> {
    file: &'a str,
    line: u32,
    name: Option<String>,
    shape: Option<AssignmentShape>,
    error: Option<String>,
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    if args.line == 0 {
        bail!("line numbers are 1-based");
    }
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read source file: {}", args.file.display()))?;

    let Some(source_line) = content.lines().nth(args.line as usize - 1) else {
        bail!("{} has no line {}", args.file.display(), args.line);
    };

    let file = args.file.display().to_string();
    let outcome = parse::assigned_name(source_line);
    let report = Report {
        file: &file,
        line: args.line,
        name: outcome.as_ref().ok().and_then(|name| name.clone()),
        shape: parse::classify(source_line),
        error: outcome.as_ref().err().map(NameError::to_string),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }

    Ok(match (&report.name, &report.error) {
        (Some(_), _) => ExitStatus::Success,
        _ => ExitStatus::Failure,
    })
}

fn print_text(report: &Report) {
    let location = format!("{}:{}", report.file, report.line);
    match (&report.name, &report.error) {
        (Some(name), _) => {
            let shape = report
                .shape
                .map(|shape| format!(" ({shape})"))
                .unwrap_or_default();
            println!("{location}: {}{shape}", name.as_str().bold());
        }
        (None, Some(error)) => {
            println!("{location}: {} {error}", "error:".red());
        }
        (None, None) => {
            println!("{location}: {} no assignment target", "warning:".yellow());
        }
    }
}

//! Source-line assignment parsing.
//!
//! Given the single line of source text at a construction call site, this
//! module answers: what name did that statement bind the new value to?
//!
//! The line is first parsed as Python to classify its [`AssignmentShape`].
//! Strict parsing only exists to catch the one inherently ambiguous case,
//! chained assignment (`a = b = expr`); everything else goes through a
//! textual extraction, because call-site lines are frequently fragments of
//! larger statements (an argument list continued on the next line, say) that
//! do not parse in isolation, and a best-effort name beats no name.

use rustpython_parser::{Parse, ast};
use serde::Serialize;

use crate::error::NameError;

const SOURCE_PATH: &str = "<call-site>";

/// How a parsed assignment statement binds its targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentShape {
    /// One name bound to one value: `x = expr`.
    SingleTarget,
    /// Several names bound by destructuring: `a, b = expr1, expr2`.
    TupleUnpacking,
    /// The same value bound to several names: `a = b = expr`.
    MultiTarget,
}

impl std::fmt::Display for AssignmentShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentShape::SingleTarget => write!(f, "single-target"),
            AssignmentShape::TupleUnpacking => write!(f, "tuple-unpacking"),
            AssignmentShape::MultiTarget => write!(f, "multi-target"),
        }
    }
}

/// Classify the assignment statement on `line`, if there is one.
///
/// Returns `None` when the line does not parse as Python or parses to
/// something that is not an assignment statement. Compound statements are
/// not descended into; a call site is a simple statement.
pub fn classify(line: &str) -> Option<AssignmentShape> {
    let suite = ast::Suite::parse(line.trim(), SOURCE_PATH).ok()?;
    first_assignment(&suite)
}

fn first_assignment(suite: &[ast::Stmt]) -> Option<AssignmentShape> {
    suite.iter().find_map(|stmt| match stmt {
        ast::Stmt::Assign(assign) => Some(shape_of(assign)),
        _ => None,
    })
}

fn shape_of(assign: &ast::StmtAssign) -> AssignmentShape {
    // Tuple targets are checked first: `a, b = c = expr` still reads as an
    // unpacking from the leftmost target's point of view.
    if matches!(assign.targets.first(), Some(ast::Expr::Tuple(_))) {
        AssignmentShape::TupleUnpacking
    } else if assign.targets.len() > 1 {
        AssignmentShape::MultiTarget
    } else {
        AssignmentShape::SingleTarget
    }
}

/// Extract the assignment target's name from one line of call-site source.
///
/// - `Ok(Some(name))` for single-target and tuple-unpacking assignments, and
///   for unparseable fragments that still contain an `=` (textual fallback).
/// - `Ok(None)` when the line is empty, carries no `=`, or parses to a
///   statement that is not an assignment; the caller falls back to scope
///   scanning.
/// - `Err(NameError::AmbiguousAssignment)` for chained assignment.
///
/// For attribute targets (`self.x = ...`) only the final path component is
/// returned.
pub fn assigned_name(line: &str) -> Result<Option<String>, NameError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    match ast::Suite::parse(line, SOURCE_PATH) {
        Ok(suite) => match first_assignment(&suite) {
            Some(AssignmentShape::MultiTarget) => return Err(NameError::AmbiguousAssignment),
            Some(_) => {}
            // A well-formed statement that assigns nothing names nothing.
            None => return Ok(None),
        },
        // Broken fragments of multi-line statements are expected here; the
        // textual extraction below still gets a usable name out of them.
        Err(_) => {}
    }

    let Some((lhs, _)) = line.split_once('=') else {
        return Ok(None);
    };
    let name = lhs.rsplit('.').next().unwrap_or(lhs).trim();
    if name.is_empty() {
        Ok(None)
    } else {
        Ok(Some(name.to_string()))
    }
}

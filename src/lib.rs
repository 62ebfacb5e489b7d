//! Nomen - binding-name inference for Python call sites
//!
//! Nomen infers the symbolic name a Python value was bound to at its point
//! of creation, without the caller spelling the name out: a value created by
//! `timer = Timer()` can report that it is named `timer`. Instead of walking
//! live interpreter frames, the crate takes its inputs explicitly (a
//! call-site location, its source text, the scope namespaces) and is usable
//! both as a library and through the `nomen` binary.
//!
//! ## Module Structure
//!
//! - `callsite`: call-site capture and best-effort source line retrieval
//! - `cli`: command-line interface for resolving a name at `FILE LINE`
//! - `error`: the resolution error taxonomy
//! - `object`: the coordinator type tying capture, parsing, scanning, and
//!   memoization together
//! - `parse`: assignment-statement classification and target extraction
//! - `scope`: namespaces and the scope-chain identity scan

pub mod callsite;
pub mod cli;
pub mod error;
pub mod object;
pub mod parse;
pub mod scope;

pub use callsite::CallSite;
pub use error::NameError;
pub use object::Object;
pub use parse::{AssignmentShape, assigned_name, classify};
pub use scope::{Binding, Namespace, ScopeChain};

//! Namespaces and the scope-chain identity scan.
//!
//! A [`ScopeChain`] models the nested namespaces that were live when a value
//! was created, innermost first, the way Python exposes enclosing frames.
//! The scan looks for bindings whose value is *identity-equal* to the target,
//! meaning the same heap allocation; two distinct values that compare equal
//! must never be confused. Namespaces preserve insertion order so that scans
//! are deterministic, mirroring Python's dict semantics.

use std::any::Any;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::NameError;

/// A value bound in a namespace. Anything reference-counted qualifies.
pub type Binding = Rc<dyn Any>;

/// One frame's name-to-value bindings.
#[derive(Default, Clone)]
pub struct Namespace {
    bindings: IndexMap<String, Binding>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding for `name`.
    pub fn bind(&mut self, name: impl Into<String>, value: Binding) {
        self.bindings.insert(name.into(), value);
    }

    /// Remove the binding for `name`, if any.
    pub fn unbind(&mut self, name: &str) {
        self.bindings.shift_remove(name);
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Names of every binding whose value lives at `addr`, in insertion
    /// order.
    fn aliases_of(&self, addr: *const ()) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|(_, value)| Rc::as_ptr(value).cast::<()>() == addr)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl std::fmt::Debug for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.bindings.keys()).finish()
    }
}

/// An ordered chain of namespaces, innermost first.
///
/// The chain is read-only from this crate's perspective: scanning never
/// mutates it, and the crate takes no snapshot. Callers that mutate
/// namespaces from elsewhere must not do so mid-scan.
#[derive(Debug, Default, Clone)]
pub struct ScopeChain {
    frames: Vec<Namespace>,
}

impl ScopeChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame enclosing all frames pushed so far. The first frame
    /// pushed is the innermost.
    pub fn push(&mut self, frame: Namespace) {
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[Namespace] {
        &self.frames
    }

    /// Find the unique name bound to `target`'s identity.
    ///
    /// Frames are scanned innermost to outermost and the decision is made
    /// per frame: the first frame holding exactly one binding for the
    /// target's identity wins, and a frame holding several fails the whole
    /// scan with [`NameError::AmbiguousIdentity`] even if an outer frame
    /// would have been unique. Exhausting the chain without a match yields
    /// [`NameError::NotFound`].
    pub fn name_of<T: ?Sized>(&self, target: &Rc<T>) -> Result<String, NameError> {
        let addr = Rc::as_ptr(target).cast::<()>();
        for frame in &self.frames {
            let aliases = frame.aliases_of(addr);
            match aliases.as_slice() {
                [] => continue,
                [name] => return Ok((*name).to_string()),
                _ => {
                    return Err(NameError::AmbiguousIdentity {
                        names: aliases.iter().map(|name| (*name).to_string()).collect(),
                    });
                }
            }
        }
        Err(NameError::NotFound)
    }
}

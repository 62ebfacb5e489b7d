//! The name coordinator: capture at construction, resolve on first access,
//! memoize until reset.

use std::cell::RefCell;
use std::rc::Rc;

use crate::callsite::CallSite;
use crate::error::NameError;
use crate::parse;
use crate::scope::ScopeChain;

/// A value that knows, or can discover, the name it was bound to.
///
/// Construction decides the primary strategy:
///
/// - [`Object::named`] takes an explicit name from the caller.
/// - [`Object::at`] captures a [`CallSite`] and runs the assignment parser
///   over its source line right away, while the capture is still meaningful.
/// - [`Object::anonymous`] skips both; resolution relies entirely on the
///   scope scan.
///
/// [`Object::name`] resolves lazily on first access and caches the result
/// until [`Object::reset_name`]. A failed resolution is never cached: a later
/// access retries and may succeed if the scope chain gained a binding in the
/// meantime.
///
/// Handles are `Rc<Object>` so that the same instance can sit in namespaces
/// and be recognized by identity during the scan.
#[derive(Debug)]
pub struct Object {
    call_site: Option<CallSite>,
    /// Name known since construction, explicit or call-site-derived.
    inferred: Option<String>,
    resolved: RefCell<Option<String>>,
}

impl Object {
    /// An object with no call-site information.
    pub fn anonymous() -> Rc<Self> {
        Rc::new(Self {
            call_site: None,
            inferred: None,
            resolved: RefCell::new(None),
        })
    }

    /// An object whose name the caller supplies directly.
    pub fn named(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            call_site: None,
            inferred: Some(name.into()),
            resolved: RefCell::new(None),
        })
    }

    /// An object created at `call_site`.
    ///
    /// The site's source line is parsed here, not at first access: once the
    /// constructing call has returned, the captured location is all that
    /// remains of it. A chained assignment at the site fails construction
    /// with [`NameError::AmbiguousAssignment`].
    pub fn at(call_site: CallSite) -> Result<Rc<Self>, NameError> {
        let inferred = match call_site.source_line() {
            Some(line) => parse::assigned_name(&line)?,
            None => None,
        };
        Ok(Rc::new(Self {
            call_site: Some(call_site),
            inferred,
            resolved: RefCell::new(None),
        }))
    }

    pub fn call_site(&self) -> Option<&CallSite> {
        self.call_site.as_ref()
    }

    /// The name this object was bound to.
    ///
    /// The call-site-derived (or explicit) name wins when present; otherwise
    /// the scope chain is scanned. Success is memoized; failure propagates
    /// and leaves the object unresolved.
    pub fn name(self: &Rc<Self>, scopes: &ScopeChain) -> Result<String, NameError> {
        if let Some(name) = self.resolved.borrow().as_ref() {
            return Ok(name.clone());
        }
        let name = match &self.inferred {
            Some(name) => name.clone(),
            None => scopes.name_of(self)?,
        };
        *self.resolved.borrow_mut() = Some(name.clone());
        Ok(name)
    }

    /// Forget the memoized name; the next [`Object::name`] resolves afresh.
    ///
    /// An explicit or call-site-derived name survives the reset and will be
    /// produced again; a scanner-derived name may come out different if the
    /// scope chain changed.
    pub fn reset_name(&self) {
        self.resolved.borrow_mut().take();
    }
}

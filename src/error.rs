use thiserror::Error;

/// Failures of a single name-resolution attempt.
///
/// All variants propagate synchronously to whoever requested the name; none
/// are logged or swallowed inside the crate, and a failed attempt is never
/// cached (see [`crate::Object::name`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The call-site statement binds one value to several distinct targets
    /// (`a = b = expr`). No unique name exists for such a statement.
    #[error("cannot assign a unique name: multiple targets share one value")]
    AmbiguousAssignment,

    /// More than one binding in a single namespace refers to the same
    /// object identity.
    #[error("cannot assign a unique name: {} bindings ({}) refer to one value", .names.len(), .names.join(", "))]
    AmbiguousIdentity {
        /// The aliases found, in namespace insertion order.
        names: Vec<String>,
    },

    /// No call-site-derived name and no scope-chain binding references the
    /// value.
    #[error("cannot find the name of this value: no binding references it")]
    NotFound,
}

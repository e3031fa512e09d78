//! Form definitions backing the admin routes. Conversions into domain
//! payloads go through the `try_new` constructors, so invalid input surfaces
//! as [`crate::domain::types::TypeConstraintError`].

pub mod applications;
pub mod categories;
pub mod interests;
pub mod retailers;
pub mod templates;

/// Maps an HTML checkbox value (`on`/absent) to a boolean.
pub(crate) fn checkbox(value: &Option<String>) -> bool {
    value.is_some()
}

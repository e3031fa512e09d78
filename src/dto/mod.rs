//! Request/response data shapes passed between routes, services and templates.

pub mod api;
pub mod applications;
pub mod categories;
pub mod confirm;
pub mod interests;
pub mod payments;
pub mod retailers;
pub mod templates;

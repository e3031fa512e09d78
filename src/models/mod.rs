pub mod application;
#[cfg(feature = "server")]
pub mod auth;
pub mod category;
#[cfg(feature = "server")]
pub mod config;
pub mod interest;
pub mod payment;
pub mod retailer;
pub mod template;

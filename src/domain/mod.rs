pub mod application;
pub mod category;
pub mod interest;
pub mod payment;
pub mod retailer;
pub mod template;
pub mod types;

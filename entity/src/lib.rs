//! SeaORM entity definitions for the booking database.
//!
//! Each module maps one table created by the `migration` crate. Columns that hold
//! enumerations (roles, statuses) are stored as plain strings and converted into
//! typed domain models by the server's repository layer.

pub mod prelude;

pub mod booking;
pub mod business;
pub mod business_client;
pub mod payment;
pub mod service;
pub mod user;

//! Test support for the barberbook workspace.
//!
//! - [`builder::TestBuilder`] creates an in-memory SQLite database with the tables a test asks for.
//! - [`context::TestContext`] owns that database and, on request, a session stored in it.
//! - [`factory`] inserts users, businesses, services, bookings and payments with defaults.
//! - [`fixture`] builds entity models in memory without touching a database.
//!
//! ```rust,ignore
//! let mut test = TestBuilder::new().with_booking_tables().build().await?;
//! let db = test.database().await?;
//! let shop = factory::helpers::create_business_with_dependencies(db).await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;

//! Entity models built in memory, for conversion tests that need no database.
//!
//! ```rust,ignore
//! let worker = fixture::user::entity_builder()
//!     .role("WORKER")
//!     .business_id(Some(1))
//!     .build();
//! ```

pub mod booking;
pub mod business;
pub mod user;

pub use booking::{entity as booking_entity, entity_builder as booking_entity_builder};
pub use business::{entity as business_entity, entity_builder as business_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};

//! Inserts rows with unique defaults so tests only spell out what they assert on.
//!
//! Each module has a `*Factory` builder and a `create_*` shorthand:
//!
//! ```rust,ignore
//! let shop = factory::helpers::create_business_with_dependencies(db).await?;
//! let client = factory::create_user(db).await?;
//! let booking = factory::booking::BookingFactory::new(db, &shop.service, shop.worker.id, client.id)
//!     .status("CONFIRMED")
//!     .build()
//!     .await?;
//! ```
//!
//! Accounts use `user::DEFAULT_PASSWORD`, and the default booking falls inside the
//! default opening hours tomorrow.

pub mod booking;
pub mod business;
pub mod helpers;
pub mod payment;
pub mod service;
pub mod user;

pub use booking::create_booking;
pub use business::create_business;
pub use payment::create_payment;
pub use service::create_service;
pub use user::{create_user, create_user_with_role};

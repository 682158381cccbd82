pub use super::booking::Entity as Booking;
pub use super::business::Entity as Business;
pub use super::business_client::Entity as BusinessClient;
pub use super::payment::Entity as Payment;
pub use super::service::Entity as Service;
pub use super::user::Entity as User;

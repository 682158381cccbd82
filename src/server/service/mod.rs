//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Booking rules, status transitions and fee computation
//! - **Orchestration**: Coordinating multiple repository calls and the payment processor
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Validation**: Rejecting invalid input with `AppError::BadRequest`

pub mod auth;
pub mod booking;
pub mod business;
pub mod catalog;
pub mod payment;
pub mod seed;
pub mod user;

#[cfg(test)]
mod test;

//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON shapes of requests and responses. The server converts
//! its domain models into these DTOs at the controller boundary.

pub mod api;
pub mod booking;
pub mod business;
pub mod catalog;
pub mod payment;
pub mod user;

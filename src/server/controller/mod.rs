//! HTTP request handlers.
//!
//! Each submodule groups the endpoints of one route prefix. Handlers extract the
//! request, load the caller through `AuthGuard` where the route needs a user, call
//! into the service layer and convert the returned domain models into DTOs. Every
//! handler carries a `#[utoipa::path]` annotation that feeds the OpenAPI document
//! served at `/api/docs`.

pub mod admin;
pub mod auth;
pub mod business;
pub mod client;
pub mod extract;
pub mod page;
pub mod param;
pub mod public;
pub mod webhook;
pub mod worker;

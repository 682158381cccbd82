//! Booking server: HTTP API, HTML pages and everything behind them.
//!
//! Requests pass through `router` (layers and role gates per route group) into
//! `controller` handlers, which check permissions with `middleware::auth::AuthGuard`,
//! turn DTOs into params and call a `service`. Services hold the booking rules and
//! talk to the database through the repositories in `data`, which return the domain
//! types from `model`. Failures of any layer are `error::AppError`.
//!
//! `config`, `startup` and `state` wire the process together: environment settings,
//! tracing, the SQLite pool, signed sessions, the HTTP client for the payment
//! processor and the initial seed.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

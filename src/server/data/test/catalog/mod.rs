use crate::server::{
    data::catalog::ServiceRepository,
    error::AppError,
    model::catalog::{CreateServiceParam, UpdateServiceParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_business;
mod update;

use crate::server::{
    data::business::BusinessRepository,
    error::AppError,
    model::business::{BusinessSettings, CreateBusinessParam, UpdateBusinessParam},
};
use entity::prelude::*;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_paginated;
mod get_by_owner;
mod update;
mod update_settings;

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        model::user::{CreateUserParam, UpdateUserParam},
        util::pagination::{ListParams, ListQuery},
    },
};

mod create;
mod delete;
mod find_by_account;
mod get_paginated;
mod update;

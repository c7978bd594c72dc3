use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::user_token::UserTokenRepository;

mod create;
mod delete;
mod replace;

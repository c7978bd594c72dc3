use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::cart::CartRepository;

mod add_line;
mod set_quantity;
mod total_quantity;

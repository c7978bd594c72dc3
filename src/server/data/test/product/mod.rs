use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::product::ProductCategory,
    server::{
        data::product::ProductRepository,
        model::product::{CreateProductParam, ProductScope, UpdateProductParam},
        util::pagination::{ListParams, ListQuery},
    },
};

mod create;
mod delete;
mod get_paginated;
mod update;

fn create_param(name: &str, images: &[&str]) -> CreateProductParam {
    CreateProductParam {
        name: name.to_string(),
        price: 150,
        description: format!("{} description", name),
        category: ProductCategory::Popular,
        sell: true,
        images: images.iter().map(|i| i.to_string()).collect(),
    }
}

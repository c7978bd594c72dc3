//! Wire-level DTOs shared by the HTTP API and its tests.
//!
//! Every payload is camelCase JSON. Successful responses are wrapped in
//! [`api::ApiResponse`], failures in [`api::ErrorDto`].

pub mod api;
pub mod cart;
pub mod order;
pub mod product;
pub mod user;

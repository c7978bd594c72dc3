//! Domain models and operation parameters.
//!
//! Repositories convert entity rows into these types at the data boundary; controllers
//! convert them into DTOs at the HTTP boundary.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

//! SeaORM entity models for the storefront database.
//!
//! One module per table. Child collections (tokens, cart lines, product images,
//! order lines) live in their own tables and are ordered by primary key.

pub mod prelude;

pub mod cart_item;
pub mod order;
pub mod order_item;
pub mod product;
pub mod product_image;
pub mod user;
pub mod user_token;

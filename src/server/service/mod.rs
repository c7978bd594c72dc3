//! Business logic between controllers and repositories.
//!
//! Services take domain parameter types, apply the rules that span repositories
//! (token rotation, cart merging, order snapshots) and return domain models.

pub mod auth;
pub mod cart;
pub mod image_store;
pub mod order;
pub mod product;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;

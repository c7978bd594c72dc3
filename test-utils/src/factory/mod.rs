//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .account("customer@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//! let product = factory::create_product(&db).await?;
//! factory::create_cart_item(&db, user.id, product.id, 2).await?;
//! ```

pub mod cart_item;
pub mod helpers;
pub mod order;
pub mod product;
pub mod user;
pub mod user_token;

pub use cart_item::create_cart_item;
pub use order::create_order;
pub use product::create_product;
pub use user::create_user;
pub use user_token::create_user_token;

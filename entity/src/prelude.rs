pub use super::cart_item::Entity as CartItem;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::product::Entity as Product;
pub use super::product_image::Entity as ProductImage;
pub use super::user::Entity as User;
pub use super::user_token::Entity as UserToken;

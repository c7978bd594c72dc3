use thiserror::Error;

/// Field validation failures.
///
/// Each message is returned verbatim to the client with 400 Bad Request.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid ID format")]
    InvalidId,

    #[error("Account must be a valid email address")]
    InvalidEmail,

    #[error("Password must be 4 to 20 characters")]
    PasswordLength,

    #[error("Name is required")]
    NameRequired,

    #[error("Phone must be a valid mobile number")]
    InvalidPhone,

    #[error("Product name is required")]
    ProductNameRequired,

    #[error("Product description is required")]
    DescriptionRequired,

    #[error("Price must be a number")]
    InvalidPrice,

    #[error("Price cannot be negative")]
    NegativePrice,

    #[error("Invalid product category")]
    InvalidCategory,

    #[error("Sell must be true or false")]
    InvalidSell,

    #[error("Product image is required")]
    ImageRequired,

    #[error("Quantity must be positive")]
    NonPositiveQuantity,

    #[error("Cart cannot be empty")]
    EmptyCart,

    #[error("Pickup date must be YYYY-MM-DD")]
    InvalidPickupDate,

    #[error("Pickup time is required")]
    PickupTimeRequired,
}

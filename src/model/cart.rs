use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::product::ProductDto;

/// Cart mutation: adds `quantity` (possibly negative) of `product`.
#[derive(Serialize, Deserialize, Default, Debug, ToSchema)]
#[serde(default)]
pub struct EditCartDto {
    /// Product ID as a string
    pub product: String,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CartItemDto {
    pub product: ProductDto,
    pub quantity: i32,
}

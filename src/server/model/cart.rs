//! Cart domain models and parameters.

use crate::{
    model::cart::{CartItemDto, EditCartDto},
    server::{error::AppError, model::product::Product, util::parse::parse_id},
};

/// One stored cart line, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl CartLine {
    pub fn from_entity(entity: entity::cart_item::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            quantity: entity.quantity,
        }
    }
}

/// A cart line with its product populated.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: i32,
}

impl CartEntry {
    pub fn into_dto(self) -> CartItemDto {
        CartItemDto {
            product: self.product.into_dto(),
            quantity: self.quantity,
        }
    }
}

/// Adds `quantity` (which may be negative) of a product to a user's cart.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCartParam {
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl EditCartParam {
    /// # Returns
    /// - `Ok(EditCartParam)` - Parsed parameters
    /// - `Err(AppError::ValidationErr(InvalidId))` - `product` is not an ID
    pub fn from_dto(user_id: i32, dto: EditCartDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id,
            product_id: parse_id(&dto.product)?,
            quantity: dto.quantity,
        })
    }
}

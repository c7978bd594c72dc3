//! Cart mutation and retrieval.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{cart::CartRepository, product::ProductRepository},
    error::{validation::ValidationError, AppError},
    model::cart::{CartEntry, EditCartParam},
};

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a (possibly negative) quantity of a product to the cart.
    ///
    /// An existing line is adjusted in place and removed once its quantity drops to
    /// zero or below. A new line requires the product to exist and be on sale, and a
    /// positive quantity.
    ///
    /// # Returns
    /// - `Ok(i64)` - Cart quantity after the change
    /// - `Err(AppError::NotFound)` - New line for a missing or off-sale product
    /// - `Err(AppError::ValidationErr(NonPositiveQuantity))` - New line with quantity <= 0
    pub async fn edit(&self, param: EditCartParam) -> Result<i64, AppError> {
        let cart_repo = CartRepository::new(self.db);

        match cart_repo.find_line(param.user_id, param.product_id).await? {
            Some(line) => {
                let quantity = line.quantity.saturating_add(param.quantity);
                if quantity <= 0 {
                    cart_repo.remove_line(line.id).await?;
                } else {
                    cart_repo.set_quantity(line.id, quantity).await?;
                }
            }
            None => {
                let product = ProductRepository::new(self.db)
                    .find_by_id(param.product_id)
                    .await?
                    .filter(|p| p.sell)
                    .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

                if param.quantity <= 0 {
                    return Err(ValidationError::NonPositiveQuantity.into());
                }

                cart_repo
                    .add_line(param.user_id, product.id, param.quantity)
                    .await?;
            }
        }

        Ok(cart_repo.total_quantity(param.user_id).await?)
    }

    /// Gets the cart with products populated, in insertion order.
    pub async fn get_cart(&self, user_id: i32) -> Result<Vec<CartEntry>, AppError> {
        let lines = CartRepository::new(self.db).get_lines(user_id).await?;
        let product_ids: Vec<i32> = lines.iter().map(|l| l.product_id).collect();
        let mut products = ProductRepository::new(self.db)
            .find_by_ids(&product_ids)
            .await?;

        let entries = lines
            .into_iter()
            .filter_map(|line| {
                let idx = products.iter().position(|p| p.id == line.product_id)?;
                Some(CartEntry {
                    product: products.swap_remove(idx),
                    quantity: line.quantity,
                })
            })
            .collect();

        Ok(entries)
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pickup details for a new order; the items come from the caller's cart.
#[derive(Serialize, Deserialize, Default, Debug, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderDto {
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: String,
    pub name: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    /// `None` once the product has been deleted
    pub product: Option<i32>,
    pub name: String,
    pub price: i32,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i32,
    pub user: i32,
    pub date: NaiveDate,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub items: Vec<OrderItemDto>,
    /// Sum of price times quantity over the items
    pub total: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PaginatedOrdersDto {
    pub data: Vec<OrderDto>,
    pub total: u64,
}

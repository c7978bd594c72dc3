//! Order domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::order::{CreateOrderDto, OrderDto, OrderItemDto, PaginatedOrdersDto},
    server::{error::validation::ValidationError, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// `None` once the product has been deleted
    pub product_id: Option<i32>,
    /// Product name at the time of ordering
    pub name: String,
    /// Unit price at the time of ordering
    pub price: i32,
    pub quantity: i32,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            product_id: entity.product_id,
            name: entity.name,
            price: entity.price,
            quantity: entity.quantity,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            product: self.product_id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Placed order with its snapshotted items.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub date: NaiveDate,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn from_entity(entity: entity::order::Model, items: Vec<entity::order_item::Model>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            date: entity.date,
            time: entity.time,
            name: entity.name,
            phone: entity.phone,
            items: items.into_iter().map(OrderItem::from_entity).collect(),
            created_at: entity.created_at,
        }
    }

    /// Sum of price times quantity over all items.
    pub fn total(&self) -> i64 {
        self.items
            .iter()
            .map(|i| i64::from(i.price) * i64::from(i.quantity))
            .sum()
    }

    pub fn into_dto(self) -> OrderDto {
        let total = self.total();
        OrderDto {
            id: self.id,
            user: self.user_id,
            date: self.date,
            time: self.time,
            name: self.name,
            phone: self.phone,
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
            total,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedOrders {
    pub orders: Vec<Order>,
    pub total: u64,
}

impl PaginatedOrders {
    pub fn into_dto(self) -> PaginatedOrdersDto {
        PaginatedOrdersDto {
            data: self.orders.into_iter().map(Order::into_dto).collect(),
            total: self.total,
        }
    }
}

/// Pickup details for placing an order from the user's cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderParam {
    pub user_id: i32,
    pub date: NaiveDate,
    pub time: String,
    pub name: String,
    pub phone: String,
}

impl CreateOrderParam {
    pub fn from_dto(user_id: i32, dto: CreateOrderDto) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(dto.date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidPickupDate)?;

        let time = dto.time.trim().to_string();
        if time.is_empty() {
            return Err(ValidationError::PickupTimeRequired);
        }

        let name = dto.name.trim().to_string();
        validate::name(&name)?;

        let phone = dto.phone.trim().to_string();
        validate::phone(&phone)?;

        Ok(Self {
            user_id,
            date,
            time,
            name,
            phone,
        })
    }
}

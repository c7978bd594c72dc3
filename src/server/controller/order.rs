use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        order::{CreateOrderDto, OrderDto, PaginatedOrdersDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::order::{CreateOrderParam, Order},
        service::order::OrderService,
        state::AppState,
        util::{json::AppJson, pagination::ListQuery},
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place an order from the caller's cart.
///
/// Prices and names are copied from the products at the time of ordering and the
/// cart is emptied.
///
/// # Returns
/// - `200 OK` - The placed order
/// - `400 Bad Request` - Invalid pickup details or empty cart
/// - `404 Not Found` - A product in the cart no longer exists
#[utoipa::path(
    post,
    path = "/orders",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    request_body = CreateOrderDto,
    responses(
        (status = 200, description = "Placed order", body = OrderDto),
        (status = 400, description = "Invalid order data or empty cart", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    bearer: BearerToken,
    AppJson(payload): AppJson<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = CreateOrderParam::from_dto(auth.user.id, payload)?;
    let order = OrderService::new(&state.db).place(param).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(order.into_dto()))))
}

/// The caller's orders, newest first.
#[utoipa::path(
    get,
    path = "/orders",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's orders", body = Vec<OrderDto>),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_orders(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let orders = OrderService::new(&state.db)
        .get_for_user(auth.user.id)
        .await?;
    let orders_dto: Vec<OrderDto> = orders.into_iter().map(Order::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(orders_dto))))
}

/// List every order. Searches on the pickup name.
#[utoipa::path(
    get,
    path = "/orders/all",
    tag = ORDER_TAG,
    security(("bearer" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Page of orders", body = PaginatedOrdersDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_orders(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let orders = OrderService::new(&state.db)
        .get_paginated(&query.into_params())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(orders.into_dto()))))
}

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        product::{PaginatedProductsDto, ProductDto, ProductFormDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        middleware::{
            auth::{AuthGuard, BearerToken, Permission},
            upload::UploadForm,
        },
        model::product::{CreateProductParam, ProductScope, UpdateProductParam},
        service::product::ProductService,
        state::AppState,
        util::{pagination::ListQuery, parse::parse_id},
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// Create a product.
///
/// Reads a multipart body of text fields plus one or more image files. Fields are
/// validated before any file is sent to the image store.
///
/// # Access Control
/// - `Admin` - Only admins can create products
///
/// # Returns
/// - `200 OK` - The created product
/// - `400 Bad Request` - Invalid field, missing image, or rejected file
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Image store or database failure
#[utoipa::path(
    post,
    path = "/products",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    request_body(content = ProductFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Created product", body = ProductDto),
        (status = 400, description = "Invalid product data or file", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    bearer: BearerToken,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let form = UploadForm::from_multipart(multipart).await?;
    let mut param = CreateProductParam::from_form(&form.fields)?;
    if form.files.is_empty() {
        return Err(ValidationError::ImageRequired.into());
    }
    param.images = state.image_store.upload_all(&form.files).await?;

    let product = ProductService::new(&state.db).create(param).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(product.into_dto()))))
}

/// List every product, on sale or not.
#[utoipa::path(
    get,
    path = "/products/all",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Page of products", body = PaginatedProductsDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_products(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let products = ProductService::new(&state.db)
        .get_paginated(ProductScope::All, &query.into_params())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(products.into_dto()))))
}

/// List products currently on sale.
#[utoipa::path(
    get,
    path = "/products",
    tag = PRODUCT_TAG,
    params(ListQuery),
    responses(
        (status = 200, description = "Page of products on sale", body = PaginatedProductsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db)
        .get_paginated(ProductScope::OnSale, &query.into_params())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(products.into_dto()))))
}

/// Get a single product.
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product", body = ProductDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let product_id = parse_id(&id)?;
    let product = ProductService::new(&state.db).get_by_id(product_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(product.into_dto()))))
}

/// Edit a product.
///
/// Only supplied fields change. Images are replaced when the body carries files and
/// kept otherwise.
///
/// # Access Control
/// - `Admin` - Only admins can edit products
#[utoipa::path(
    patch,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body(content = ProductFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Updated product", body = ProductDto),
        (status = 400, description = "Invalid ID, product data or file", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let product_id = parse_id(&id)?;
    let form = UploadForm::from_multipart(multipart).await?;
    let mut param = UpdateProductParam::from_form(&form.fields)?;
    if !form.files.is_empty() {
        param.images = Some(state.image_store.upload_all(&form.files).await?);
    }

    let product = ProductService::new(&state.db)
        .update(product_id, param)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(product.into_dto()))))
}

/// Delete a product.
///
/// Cart lines holding it are removed; past order items keep their snapshot.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let product_id = parse_id(&id)?;
    ProductService::new(&state.db).delete(product_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::empty())))
}

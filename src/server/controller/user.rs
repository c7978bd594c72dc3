use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        cart::{CartItemDto, EditCartDto},
        user::{
            AdminUpdateUserDto, LoginDto, LoginResultDto, PaginatedUsersDto, ProfileDto,
            RegisterDto, UpdateProfileDto, UserDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, BearerToken, Permission},
            upload::UploadForm,
        },
        model::{
            cart::{CartEntry, EditCartParam},
            user::{RegisterUserParam, UpdateUserParam},
        },
        service::{auth::AuthService, cart::CartService, user::UserService},
        state::AppState,
        util::{
            json::AppJson,
            pagination::ListQuery,
            parse::parse_id,
        },
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new account.
///
/// # Returns
/// - `200 OK` - Account created
/// - `400 Bad Request` - First field that failed validation
/// - `409 Conflict` - Account already registered
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Account created"),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Account already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);

    user_service
        .register(RegisterUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::empty())))
}

/// Log in with account and password.
///
/// Issues a 14-day token and returns it with the user's profile.
///
/// # Returns
/// - `200 OK` - Token and profile
/// - `400 Bad Request` - Account or password missing
/// - `401 Unauthorized` - Unknown account or wrong password
#[utoipa::path(
    post,
    path = "/users/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResultDto),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 401, description = "Account not found or incorrect password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let result = auth_service
        .login(&payload.account, &payload.password)
        .await?;

    let dto = LoginResultDto {
        token: result.token,
        profile: result.profile.into_dto(),
    };

    Ok((StatusCode::OK, Json(ApiResponse::ok(dto))))
}

/// Log out by revoking the presented token.
///
/// Accepts expired tokens so stale sessions can still be closed.
#[utoipa::path(
    delete,
    path = "/users/logout",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Token revoked"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    AuthService::new(&state.db, &state.tokens)
        .logout(auth.user.id, &auth.token)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::empty())))
}

/// Swap the presented token for a fresh 7-day token.
///
/// Accepts expired tokens; the new token takes the old one's place.
#[utoipa::path(
    patch,
    path = "/users/extend",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "New token", body = String),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn extend(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let token = AuthService::new(&state.db, &state.tokens)
        .extend(auth.user.id, &auth.token)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(token))))
}

/// Get the caller's profile.
#[utoipa::path(
    get,
    path = "/users/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Profile", body = ProfileDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let profile = UserService::new(&state.db).profile_of(auth.user).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(profile.into_dto()))))
}

/// Edit the caller's own name and phone.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - A supplied field failed validation
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    patch,
    path = "/users/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    bearer: BearerToken,
    AppJson(payload): AppJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let profile = UserService::new(&state.db)
        .update_own(auth.user.id, UpdateUserParam::from_profile_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(profile.into_dto()))))
}

/// Upload a new avatar image.
///
/// Expects one png/jpeg file of at most 1 MiB in a multipart body.
///
/// # Returns
/// - `200 OK` - Profile with the new avatar URL
/// - `400 Bad Request` - No file, wrong format or file too large
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Image store or database failure
#[utoipa::path(
    patch,
    path = "/users/avatar",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body(content_type = "multipart/form-data", description = "Field `image` holding one png/jpeg file"),
    responses(
        (status = 200, description = "Updated profile", body = ProfileDto),
        (status = 400, description = "Invalid or missing file", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_avatar(
    State(state): State<AppState>,
    bearer: BearerToken,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let form = UploadForm::from_multipart(multipart).await?;
    let file = form.require_file()?;
    let url = state.image_store.upload(file).await?;

    let profile = UserService::new(&state.db)
        .set_avatar(auth.user.id, url)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(profile.into_dto()))))
}

/// Add or remove a quantity of a product in the caller's cart.
///
/// # Returns
/// - `200 OK` - Cart quantity after the change
/// - `400 Bad Request` - Invalid product ID, or non-positive quantity for a new line
/// - `404 Not Found` - Product missing or not on sale
#[utoipa::path(
    patch,
    path = "/users/cart",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = EditCartDto,
    responses(
        (status = 200, description = "Cart quantity", body = i64),
        (status = 400, description = "Invalid cart data", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_cart(
    State(state): State<AppState>,
    bearer: BearerToken,
    AppJson(payload): AppJson<EditCartDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let param = EditCartParam::from_dto(auth.user.id, payload)?;
    let quantity = CartService::new(&state.db).edit(param).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(quantity))))
}

/// Get the caller's cart with products populated.
#[utoipa::path(
    get,
    path = "/users/cart",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Cart lines in insertion order", body = Vec<CartItemDto>),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    let cart = CartService::new(&state.db).get_cart(auth.user.id).await?;
    let cart_dto: Vec<CartItemDto> = cart.into_iter().map(CartEntry::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(cart_dto))))
}

/// List users for the admin panel.
///
/// Searches on account.
#[utoipa::path(
    get,
    path = "/users/all",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_paginated(&query.into_params())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(users.into_dto()))))
}

/// Edit any user.
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Invalid ID or field
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = AdminUpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid ID or user data", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<String>,
    AppJson(payload): AppJson<AdminUpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let user_id = parse_id(&id)?;
    let user = UserService::new(&state.db)
        .update(user_id, UpdateUserParam::from_admin_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(user.into_dto()))))
}

/// Delete a user and everything they own.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let user_id = parse_id(&id)?;
    UserService::new(&state.db).delete(user_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::empty())))
}

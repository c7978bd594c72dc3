use axum::{extract::DefaultBodyLimit, routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{order, product, user},
    error::AppError,
    middleware::upload::MAX_FILE_SIZE,
    startup,
    state::AppState,
};

/// Whole-request body limit; product forms may carry several images.
pub const MAX_BODY_SIZE: usize = 16 * MAX_FILE_SIZE;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Storefront API"),
    modifiers(&BearerSecurity),
    tags(
        (name = "user", description = "Accounts, sessions and carts"),
        (name = "product", description = "Product catalog"),
        (name = "order", description = "Pickup orders")
    )
)]
struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::register))
        .routes(routes!(user::login))
        .routes(routes!(user::logout))
        .routes(routes!(user::extend))
        .routes(routes!(user::get_profile, user::update_profile))
        .routes(routes!(user::update_avatar))
        .routes(routes!(user::edit_cart, user::get_cart))
        .routes(routes!(user::get_all))
        .routes(routes!(user::update_user, user::delete_user))
        .routes(routes!(product::create_product, product::get_products))
        .routes(routes!(product::get_all_products))
        .routes(routes!(
            product::get_product,
            product::update_product,
            product::delete_product
        ))
        .routes(routes!(order::create_order, order::get_my_orders))
        .routes(routes!(order::get_all_orders))
}

/// API routes plus the generated OpenAPI document, without state or layers.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.route(
        OPENAPI_JSON_PATH,
        get(move || std::future::ready(Json(api.clone()))),
    )
}

/// Fully layered application ready to serve.
pub fn app(state: AppState) -> Router {
    router()
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(startup::cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

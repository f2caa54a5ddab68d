//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its utoipa path annotations. The collected
//! OpenAPI document is served at `/docs/openapi.json` and browsed through Swagger UI at `/docs`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET, POST /user` and `GET, DELETE /user/{id}`
/// - `GET /user/{id}/favorites`
/// - `GET, POST /character`, `/planet`, `/ship`
/// - `GET, DELETE /character/{id}`, `/planet/{id}`, `/ship/{id}`
/// - `POST /favorites/{character,planet,ship}`
/// - `DELETE /favorites/{character,planet,ship}/{id}`
///
/// # Returns
/// A `Router<AppState>` which still needs its state, see [`app`] for the fully assembled service.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars characters, planets, ships and user favorites"), tags(
        (name = controller::user::USER_TAG, description = "User routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet routes"),
        (name = controller::ship::SHIP_TAG, description = "Ship routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(
            controller::character::get_characters,
            controller::character::create_character
        ))
        .routes(routes!(
            controller::character::get_character,
            controller::character::delete_character
        ))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::ship::get_ships,
            controller::ship::create_ship
        ))
        .routes(routes!(
            controller::ship::get_ship,
            controller::ship::delete_ship
        ))
        .routes(routes!(controller::favorite::add_favorite_character))
        .routes(routes!(controller::favorite::add_favorite_planet))
        .routes(routes!(controller::favorite::add_favorite_ship))
        .routes(routes!(controller::favorite::remove_favorite_character))
        .routes(routes!(controller::favorite::remove_favorite_planet))
        .routes(routes!(controller::favorite::remove_favorite_ship))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
}

/// Assembles the complete application: routes, state, request tracing and permissive CORS.
pub fn app(state: AppState) -> Router {
    routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

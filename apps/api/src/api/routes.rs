use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::errors::ApiError;
use crate::api::handlers::{health, memberships, roles, teams, users};
use crate::api::state::AppState;

/// Builds the application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Role routes
        .route("/v1/roles", post(roles::create_role).get(roles::get_roles))
        .route("/v1/roles/search", get(roles::search_role))
        .route("/v1/roles/:role_id", get(roles::get_role))
        // Membership routes
        .route("/v1/roles/memberships", post(memberships::assign_role_to_membership))
        .route("/v1/roles/memberships/search", get(memberships::get_memberships))
        // Directory routes
        .route("/v1/teams", get(teams::get_teams))
        .route("/v1/teams/:team_id", get(teams::get_team))
        .route("/v1/users", get(users::get_users))
        .route("/v1/users/:user_id", get(users::get_user))
        .fallback(not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

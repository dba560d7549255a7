//! Routes Layer
//!
//! HTTP handlers that bridge the browser client to the repositories.

mod feature_routes;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub use feature_routes::*;

/// `/api` routes
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/features", get(list_features).post(create_feature))
        .route(
            "/api/features/:id",
            get(get_feature).patch(update_feature).delete(delete_feature),
        )
}

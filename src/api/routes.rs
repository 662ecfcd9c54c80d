use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::config::DashboardConfig;
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Establishments
        .route(
            "/establishments",
            get(handlers::list_establishments::<S>).post(handlers::create_establishment::<S>),
        )
        .route(
            "/establishments/:id",
            delete(handlers::delete_establishment::<S>),
        )
        // Quotations
        .route(
            "/quotations",
            get(handlers::list_quotations::<S>).post(handlers::create_quotation::<S>),
        )
        .route(
            "/quotations/summary",
            get(handlers::quotation_summary::<S>),
        )
        .route("/quotations/:id", delete(handlers::delete_quotation::<S>))
}

/// Full application: API routes, the dashboard's static files and CORS
pub fn build_app<S: Store + 'static>(store: Arc<S>, dashboard: &DashboardConfig) -> Router {
    let mut router = create_router::<S>();

    if dashboard.enabled {
        router = router.fallback_service(ServeDir::new(&dashboard.static_dir));
    }

    router.layer(CorsLayer::permissive()).with_state(store)
}

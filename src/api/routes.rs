use super::handlers::*;
use crate::ports::{OrderActionsPort, TranslatorPort};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router<A: OrderActionsPort, T: TranslatorPort>(state: AppState<A, T>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/admin/refund-sessions", post(open_session::<A, T>))
        .route(
            "/api/admin/refund-sessions/:session_id",
            get(get_session::<A, T>).delete(close_session::<A, T>),
        )
        .route(
            "/api/admin/refund-sessions/:session_id/verify",
            post(verify_refund::<A, T>),
        )
        .route(
            "/api/admin/refund-sessions/:session_id/refund",
            post(start_refund::<A, T>),
        )
        .route(
            "/api/admin/refund-sessions/:session_id/proxy-refund",
            post(proxy_refund::<A, T>),
        )
        .route(
            "/api/admin/refund-sessions/:session_id/mark-refunded",
            post(mark_refunded::<A, T>),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

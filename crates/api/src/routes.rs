use crate::handlers;
use crate::state::AppState;
use axum::Router;

/// Every method and path is a DNSLink lookup.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::resolve_dnslink)
        .with_state(state)
}

mod app_specific;
mod cards;

use salvo::Router;

use identifini_core::constants::API_ROUTE_COMPONENT;

/// ## Summary
/// Constructs the main API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(cards::routes())
}

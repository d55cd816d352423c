mod origin;
mod vcard;


use salvo::Router;

use identifini_core::constants::CARDS_ROUTE_COMPONENT;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CARDS_ROUTE_COMPONENT)
        .push(Router::with_path("username/{username}/vcard").get(vcard::vcard_by_username))
        .push(Router::with_path("{id}/vcard").get(vcard::vcard_by_id))
}

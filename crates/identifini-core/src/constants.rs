/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const CARDS_ROUTE_COMPONENT: &str = "cards";

/// Public page a card is viewed at, relative to the site origin.
pub const VIEW_CARD_ROUTE_COMPONENT: &str = "view-card";
pub const VIEW_CARD_ROUTE_PREFIX: &str = const_str::concat!("/", VIEW_CARD_ROUTE_COMPONENT);

pub const VCARD_CONTENT_TYPE: &str = "text/vcard; charset=utf-8";
pub const VCARD_FILE_EXTENSION: &str = "vcf";

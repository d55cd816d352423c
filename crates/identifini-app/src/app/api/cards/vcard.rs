//! `.vcf` downloads for cards.

use salvo::http::StatusCode;
use salvo::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE, HeaderValue};
use salvo::writing::Json;
use salvo::{Depot, Request, Response, handler};
use serde::Serialize;
use tracing::error;

use identifini_core::constants::VCARD_CONTENT_TYPE;
use identifini_service::card::{CardRecord, export_vcard, load_card_by_id, load_card_by_username};
use identifini_service::error::{ServiceError, ServiceResult};

use super::origin::request_origin;
use crate::config::get_config_from_depot;
use crate::repository_handler::get_cards_from_depot;

const CARD_NOT_FOUND: &str = "Card not found";
const CARD_MISSING_NAME: &str = "Card is missing a display name";
const GENERATION_FAILED: &str = "Failed to generate vCard";

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// GET /api/cards/username/{username}/vcard - Download a card as a vCard
///
/// ## Errors
/// Returns HTTP 404 if no live card has this username.
/// Returns HTTP 400 if the card has no display name.
/// Returns HTTP 500 if the card cannot be loaded.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn vcard_by_username(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(username) = req.param::<String>("username") else {
        render_error(res, StatusCode::NOT_FOUND, CARD_NOT_FOUND);
        return;
    };

    let repository = match get_cards_from_depot(depot) {
        Ok(repository) => repository,
        Err(e) => {
            error!(error = %e, "Card repository not available");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED);
            return;
        }
    };

    let result = load_card_by_username(repository.as_ref(), &username).await;
    respond_with_vcard(req, depot, res, result);
}

/// ## Summary
/// GET /api/cards/{id}/vcard - Download a card as a vCard
///
/// An ID that is not a UUID cannot name a card, so it is reported as not found.
///
/// ## Errors
/// Same as [`vcard_by_username`].
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn vcard_by_id(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(id) = req
        .param::<String>("id")
        .and_then(|raw| uuid::Uuid::parse_str(&raw).ok())
    else {
        tracing::debug!("Card ID is not a UUID");
        render_error(res, StatusCode::NOT_FOUND, CARD_NOT_FOUND);
        return;
    };

    let repository = match get_cards_from_depot(depot) {
        Ok(repository) => repository,
        Err(e) => {
            error!(error = %e, "Card repository not available");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED);
            return;
        }
    };

    let result = load_card_by_id(repository.as_ref(), id).await;
    respond_with_vcard(req, depot, res, result);
}

fn respond_with_vcard(
    req: &Request,
    depot: &Depot,
    res: &mut Response,
    result: ServiceResult<CardRecord>,
) {
    let card = match result {
        Ok(card) => card,
        Err(ServiceError::NotFound(what)) => {
            tracing::debug!(%what, "Card not found");
            render_error(res, StatusCode::NOT_FOUND, CARD_NOT_FOUND);
            return;
        }
        Err(ServiceError::MissingRequiredField(field)) => {
            tracing::warn!(field, "Card cannot be exported");
            render_error(res, StatusCode::BAD_REQUEST, CARD_MISSING_NAME);
            return;
        }
        Err(e) => {
            error!(error = %e, "Failed to load card");
            render_error(res, StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED);
            return;
        }
    };

    let Some(origin) = request_origin(req.headers(), req.uri()).or_else(|| {
        get_config_from_depot(depot)
            .ok()
            .map(|settings| settings.server.origin())
    }) else {
        error!("Request names no host and no origin is configured");
        render_error(res, StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED);
        return;
    };

    let export = export_vcard(&card, &origin);
    let disposition = format!("attachment; filename=\"{}\"", export.filename);

    let Ok(disposition) = HeaderValue::from_str(&disposition) else {
        error!(filename = %export.filename, "Download file name is not a valid header value");
        render_error(res, StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED);
        return;
    };

    tracing::info!(card = %card.card_username, bytes = export.body.len(), "Serving vCard");

    res.status_code(StatusCode::OK);
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(VCARD_CONTENT_TYPE));
    res.headers_mut().insert(CONTENT_DISPOSITION, disposition);

    if let Err(e) = res.write_body(export.body.into_bytes()) {
        error!(error = %e, "Failed to write vCard body");
        render_error(res, StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED);
    }
}

fn render_error(res: &mut Response, status: StatusCode, message: &str) {
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: message.to_string(),
    }));
}

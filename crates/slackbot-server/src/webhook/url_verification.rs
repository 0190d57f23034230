//! URL verification handshake.

use actix_web::{http::header::ContentType, HttpResponse};
use slackbot_slackapi_interface::types::SlackUrlVerificationEvent;
use tracing::info;

pub(crate) fn url_verification_event(event: SlackUrlVerificationEvent) -> HttpResponse {
    info!("URL verification handshake");

    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(event.challenge)
}

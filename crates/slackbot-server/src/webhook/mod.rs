//! Webhook handlers.

mod event_callback;
mod url_verification;


use actix_web::{web, HttpResponse};
use slackbot_slackapi_interface::types::SlackEventEnvelope;
use tracing::debug;

use crate::{server::AppContext, utils::read_payload, Result, ServerError};

fn parse_envelope(body: &[u8]) -> Result<SlackEventEnvelope> {
    serde_json::from_slice(body).map_err(|e| ServerError::EventParseError { source: e })
}

#[tracing::instrument(skip_all)]
pub(crate) async fn event_handler(
    mut payload: web::Payload,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse> {
    let body = read_payload(&mut payload, ctx.config.server.max_body_size).await?;

    match parse_envelope(&body)? {
        SlackEventEnvelope::UrlVerification(event) => {
            Ok(url_verification::url_verification_event(event))
        }
        SlackEventEnvelope::EventCallback(event) => {
            event_callback::event_callback_event(&ctx, event).await
        }
        SlackEventEnvelope::Unsupported => {
            debug!("Ignoring unsupported event envelope");
            Ok(HttpResponse::Ok().finish())
        }
    }
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(event_handler)));
}

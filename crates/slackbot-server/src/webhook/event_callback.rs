//! Event callback handlers.

use actix_web::HttpResponse;
use shaku::HasComponent;
use slackbot_core::use_cases::events::HandleEventCallbackInterface;
use slackbot_slackapi_interface::types::SlackEventCallback;

use crate::{server::AppContext, Result};

pub(crate) async fn event_callback_event(
    ctx: &AppContext,
    event: SlackEventCallback,
) -> Result<HttpResponse> {
    let handle_event_callback: &dyn HandleEventCallbackInterface = ctx.core_module.resolve_ref();
    handle_event_callback
        .run(&ctx.as_core_context(), event)
        .await?;

    Ok(HttpResponse::Ok().finish())
}

//! Server middlewares.

#![allow(clippy::type_complexity)]

use std::{pin::Pin, rc::Rc};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    Error, HttpMessage,
};
use futures::{
    future::{ok, Ready},
    Future,
};
use slackbot_config::Config;
use slackbot_crypto::SlackSignature;
use time::OffsetDateTime;

use crate::{
    constants::{SLACK_SIGNATURE_HEADER, SLACK_TIMESTAMP_HEADER},
    utils::read_payload,
    ServerError,
};

#[derive(Clone)]
struct SignatureSettings {
    secret: String,
    tolerance: u64,
    max_body_size: usize,
}

/// Signature verification configuration.
pub struct VerifySignature {
    settings: Option<SignatureSettings>,
}

impl VerifySignature {
    /// Create a new configuration.
    pub fn new(config: &Config) -> Self {
        let settings = if config.server.disable_webhook_signature {
            None
        } else {
            Some(SignatureSettings {
                secret: config.server.signing_secret.clone(),
                tolerance: config.server.signature_tolerance,
                max_body_size: config.server.max_body_size,
            })
        };

        Self { settings }
    }
}

// Middleware factory is `Transform` trait from actix-service crate
// `S` - type of the next service
// `B` - type of response's body
impl<S, B> Transform<S, ServiceRequest> for VerifySignature
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<B>;
    type Transform = VerifySignatureMiddleware<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(VerifySignatureMiddleware {
            settings: self.settings.clone(),
            service: Rc::new(service),
        })
    }
}

/// Signature verification middleware.
pub struct VerifySignatureMiddleware<S> {
    settings: Option<SignatureSettings>,
    service: Rc<S>,
}

fn extract_header(req: &ServiceRequest, header: &'static str) -> Result<String, ServerError> {
    req.headers()
        .get(header)
        .ok_or(ServerError::MissingWebhookSignature { header })?
        .to_str()
        .map(ToOwned::to_owned)
        .map_err(|_| ServerError::MissingWebhookSignature { header })
}

async fn verify_request(
    req: &mut ServiceRequest,
    settings: &SignatureSettings,
) -> Result<(), ServerError> {
    let timestamp = extract_header(req, SLACK_TIMESTAMP_HEADER)?;
    let signature = extract_header(req, SLACK_SIGNATURE_HEADER)?;

    let mut stream = req.take_payload();
    let body = read_payload(&mut stream, settings.max_body_size).await?;

    SlackSignature {
        timestamp: &timestamp,
        signature: &signature,
    }
    .verify(
        &body,
        &settings.secret,
        OffsetDateTime::now_utc().unix_timestamp(),
        settings.tolerance,
    )
    .map_err(|e| ServerError::InvalidWebhookSignature { source: e })?;

    // Put the body back for the handler.
    let (_, mut payload) = actix_http::h1::Payload::create(true);
    payload.unread_data(body);
    req.set_payload(payload.into());

    Ok(())
}

impl<S, B> Service<ServiceRequest> for VerifySignatureMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;
    type Response = ServiceResponse<B>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let settings = self.settings.clone();

        Box::pin(async move {
            if let Some(settings) = settings {
                if req.method() == Method::POST {
                    verify_request(&mut req, &settings).await?;
                }
            }

            svc.call(req).await
        })
    }
}

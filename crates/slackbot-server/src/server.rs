//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};
use sentry_actix::Sentry;
use slackbot_config::Config;
use slackbot_core::{CoreContext, CoreModule};
use slackbot_slackapi_interface::ApiService;
use tracing::{info, warn};

use crate::{
    constants::SLACK_EVENTS_PATH, middlewares::VerifySignature,
    webhook::configure_webhook_handlers, Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// API adapter
    pub api_service: Box<dyn ApiService>,
}

impl AppContext {
    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        api_service: Box<dyn ApiService>,
    ) -> Self {
        Self {
            config,
            core_module,
            api_service,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext<'_> {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context.clone())
        .wrap(Sentry::new())
        .wrap(Logger::default())
        .service(
            web::scope(SLACK_EVENTS_PATH)
                .wrap(VerifySignature::new(&context.config))
                .configure(configure_webhook_handlers),
        )
}

/// Run bot server.
pub async fn run_bot_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting bot server",
    );

    if context.config.server.disable_webhook_signature {
        warn!("Signature verification is disabled. This can be a security concern.");
    }

    run_bot_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_bot_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}

use slackbot_config::Config;
use slackbot_slackapi_interface::ApiService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
}

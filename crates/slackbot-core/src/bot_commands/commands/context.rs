use slackbot_config::Config;
use slackbot_slackapi_interface::ApiService;

pub struct CommandContext<'a> {
    pub config: &'a Config,
    pub api_service: &'a (dyn ApiService + 'a),
    pub channel: &'a str,
    pub user: Option<&'a str>,
}

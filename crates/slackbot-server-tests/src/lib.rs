#![cfg(test)]

use std::time::Duration;

use reqwest::StatusCode;
use slackbot_config::Config;
use slackbot_core::CoreModule;
use slackbot_crypto::SlackSignature;
use slackbot_server::{
    constants::{SLACK_EVENTS_PATH, SLACK_SIGNATURE_HEADER, SLACK_TIMESTAMP_HEADER},
    server::{run_bot_server, AppContext},
};
use slackbot_slackapi_interface::{types::SlackPostedMessage, ApiService, MockApiService};
use time::OffsetDateTime;

const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";

fn build_context(port: u16, api_service: Box<dyn ApiService>) -> AppContext {
    let mut config = Config::from_env_no_version().unwrap();
    config.server.workers_count = Some(1);
    config.server.bind_ip = "127.0.0.1".into();
    config.server.bind_port = port;
    config.server.signing_secret = SECRET.into();
    config.server.disable_webhook_signature = false;

    AppContext::new_with_adapters(config, CoreModule::builder().build(), api_service)
}

fn spawn_server(port: u16, api_service: Box<dyn ApiService>) {
    actix_web::rt::spawn(async move {
        let context = build_context(port, api_service);
        run_bot_server(context).await
    });
}

async fn post_signed(port: u16, body: &str) -> reqwest::Response {
    let url = format!("http://127.0.0.1:{port}{SLACK_EVENTS_PATH}");
    let client = reqwest::Client::new();

    // The server binds asynchronously, retry until it accepts connections.
    for _ in 0..50 {
        let timestamp = OffsetDateTime::now_utc().unix_timestamp().to_string();
        let signature = SlackSignature::compute(&timestamp, body.as_bytes(), SECRET).unwrap();

        match client
            .post(&url)
            .header(SLACK_TIMESTAMP_HEADER, timestamp)
            .header(SLACK_SIGNATURE_HEADER, signature)
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
        {
            Ok(response) => return response,
            Err(e) if e.is_connect() => tokio::time::sleep(Duration::from_millis(100)).await,
            Err(e) => panic!("request failed: {e}"),
        }
    }

    panic!("server did not start on port {port}");
}

#[actix_web::test]
async fn handshake() {
    const PORT: u16 = 50601;

    spawn_server(PORT, Box::new(MockApiService::new()));

    let response = post_signed(
        PORT,
        r#"{"type":"url_verification","token":"t","challenge":"abc123"}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "abc123");
}

#[actix_web::test]
async fn mention_ping() {
    const PORT: u16 = 50602;

    let mut api_service = MockApiService::new();
    api_service
        .expect_chat_post_message()
        .once()
        .withf(|channel, text| channel == "C123" && text == "pong")
        .return_once(|channel, _| {
            Ok(SlackPostedMessage {
                channel: channel.into(),
                ts: "1.0".into(),
            })
        });
    spawn_server(PORT, Box::new(api_service));

    let body = serde_json::json!({
        "type": "event_callback",
        "event": {
            "type": "app_mention",
            "user": "U456",
            "text": "<@U0LAN0Z89> ping",
            "channel": "C123"
        }
    })
    .to_string();
    let response = post_signed(PORT, &body).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn missing_signature() {
    const PORT: u16 = 50603;

    spawn_server(PORT, Box::new(MockApiService::new()));

    // Wait for the server with a valid request first.
    post_signed(PORT, r#"{"type":"url_verification","challenge":"warmup"}"#).await;

    let response = reqwest::Client::new()
        .post(format!("http://127.0.0.1:{PORT}{SLACK_EVENTS_PATH}"))
        .body(r#"{"type":"url_verification","challenge":"abc123"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text().await.unwrap(), "");
}

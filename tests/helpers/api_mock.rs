//! Mock REST backend for testing the HTTP client
//!
//! Wraps a wiremock server and builds an `ApiClient` pointed at it.

use std::sync::Arc;
use std::time::Duration;
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};
use eventhub::config::ApiConfig;
use eventhub::services::{ApiClient, NotificationLevel, ServiceFactory};
use eventhub::Settings;

pub struct BackendMockServer {
    pub server: MockServer,
}

impl BackendMockServer {
    pub async fn new() -> Self {
        Self { server: MockServer::start().await }
    }

    /// Base URL including the `/api` prefix
    pub fn base_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    pub fn api_config(&self, token: Option<&str>) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url(),
            timeout_seconds: 1,
            auth_token: token.map(str::to_string),
            ..ApiConfig::default()
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.api_config(Some("test-token"))).expect("client builds")
    }

    /// Views wired to this server over HTTP
    pub fn services(&self) -> ServiceFactory {
        let settings = Settings { api: self.api_config(Some("test-token")), ..Settings::default() };
        ServiceFactory::with_backend(settings, Arc::new(self.client()))
    }

    /// Respond to `verb path` with `status` and a JSON body
    pub async fn mock_json(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(format!("/api{}", route)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond after a delay longer than the client's timeout
    pub async fn mock_slow(&self, verb: &str, route: &str) {
        Mock::given(method(verb))
            .and(path(format!("/api{}", route)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])).set_delay(Duration::from_secs(3)))
            .mount(&self.server)
            .await;
    }
}

pub fn event_json(id: &str, title: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": "<p>Details</p>",
        "eventCategory": "workshop",
        "language": "english",
        "status": status,
        "startingDate": "2099-01-05T10:00:00.000Z",
        "endingDate": "2099-01-05T12:00:00.000Z",
        "location": "Main Hall",
        "maxParticipants": 40,
        "createdAt": "2024-02-01T08:00:00.000Z",
        "updatedAt": "2024-02-01T08:00:00.000Z",
        "__v": 0
    })
}

pub fn registration_json(id: &str, event_id: Value) -> Value {
    json!({
        "_id": id,
        "eventId": event_id,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "phone": "555-0100",
        "address": "12 Analytical Row, London",
        "createdAt": "2024-03-09T15:30:00.000Z"
    })
}

/// Drain the error toasts a factory has raised
pub fn error_toasts(services: &ServiceFactory) -> Vec<String> {
    services
        .notifications
        .drain()
        .into_iter()
        .filter(|n| n.level == NotificationLevel::Error)
        .map(|n| n.message)
        .collect()
}

//! REST backend client
//!
//! The views talk to the backend only through the collection traits below.
//! [`ApiClient`] implements all of them over HTTP: it attaches the bearer
//! token and a request id, unwraps the backend's response envelopes and turns
//! transport and status failures into [`EventHubError`] variants.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::{multipart, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;
use crate::config::ApiConfig;
use crate::models::{
    CreateRegistrationRequest, Event, EventPayload, EventRegistration, News, NewsPayload,
    SubscribeRequest, Subscriber,
};
use crate::utils::errors::{EventHubError, Result};
use crate::utils::logging::log_api_request;

/// Event collection
#[async_trait]
pub trait EventApi: Send + Sync {
    async fn list_events(&self) -> Result<Vec<Event>>;
    async fn get_event(&self, id: &str) -> Result<Event>;
    async fn create_event(&self, payload: &EventPayload) -> Result<Event>;
    /// Full replace from the form's point of view
    async fn update_event(&self, id: &str, payload: &EventPayload) -> Result<Event>;
    async fn delete_event(&self, id: &str) -> Result<()>;
}

/// Event registration collection
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    async fn list_registrations(&self) -> Result<Vec<EventRegistration>>;
    async fn list_registrations_for_event(&self, event_id: &str) -> Result<Vec<EventRegistration>>;
    async fn create_registration(&self, request: &CreateRegistrationRequest) -> Result<EventRegistration>;
    async fn delete_registration(&self, id: &str) -> Result<()>;
}

/// News article collection
#[async_trait]
pub trait NewsApi: Send + Sync {
    async fn list_news(&self) -> Result<Vec<News>>;
    async fn get_news(&self, id: &str) -> Result<News>;
    async fn create_news(&self, payload: &NewsPayload) -> Result<News>;
    async fn update_news(&self, id: &str, payload: &NewsPayload) -> Result<News>;
    async fn delete_news(&self, id: &str) -> Result<()>;
}

/// Newsletter subscriptions
#[async_trait]
pub trait NewsletterApi: Send + Sync {
    async fn subscribe(&self, email: &str) -> Result<()>;
    async fn list_subscribers(&self) -> Result<Vec<Subscriber>>;
}

#[derive(Debug, Deserialize)]
struct MessageEnvelope<T> {
    message: T,
}

#[derive(Debug, Deserialize)]
struct EventEnvelope {
    event: Event,
}

#[derive(Debug, Deserialize)]
struct EventUpdateEnvelope {
    #[serde(rename = "eventUpdate")]
    event_update: Event,
}

#[derive(Debug, Deserialize)]
struct RegistrationEnvelope {
    registration: EventRegistration,
}

/// What a request is about, for not-found errors
#[derive(Debug, Clone, Copy)]
struct Target<'a> {
    resource: &'static str,
    id: &'a str,
}

/// HTTP implementation of every collection trait
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a new ApiClient from the backend settings
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(EventHubError::Http)?;

        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;

        Ok(Self {
            client,
            base_url,
            auth_token: config.auth_token.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, path.trim_start_matches('/')))?)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.endpoint(path)?;
        let request_id = uuid::Uuid::new_v4().to_string();
        log_api_request(method.as_str(), path, &request_id);

        let mut builder = self.client.request(method, url).header("X-Request-Id", request_id);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder, target: Target<'_>) -> Result<Response> {
        let response = builder.send().await.map_err(map_transport_error)?;
        check_status(response, target).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, target: Target<'_>) -> Result<T> {
        let response = self.send(self.request(Method::GET, path)?, target).await?;
        decode(response).await
    }

    async fn delete(&self, path: &str, target: Target<'_>) -> Result<()> {
        self.send(self.request(Method::DELETE, path)?, target).await?;
        Ok(())
    }

    fn news_form(payload: &NewsPayload) -> Result<multipart::Form> {
        let mut form = multipart::Form::new();
        if let Some(title) = &payload.title {
            form = form.text("title", title.clone());
        }
        if let Some(description) = &payload.description {
            form = form.text("description", description.clone());
        }
        if let Some(image) = &payload.image {
            let part = multipart::Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("image", part);
        }
        Ok(form)
    }
}

fn encode_id(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

fn map_transport_error(e: reqwest::Error) -> EventHubError {
    if e.is_timeout() {
        EventHubError::Timeout
    } else if e.is_connect() {
        EventHubError::ServiceUnavailable(e.to_string())
    } else {
        EventHubError::Http(e)
    }
}

async fn check_status(response: Response, target: Target<'_>) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => {
            warn!(resource = target.resource, "Backend rejected the session token");
            Err(EventHubError::Unauthorized)
        }
        StatusCode::NOT_FOUND => {
            let body = error_body(response).await;
            Err(EventHubError::NotFound {
                resource: target.resource,
                id: target.id.to_string(),
                message: json_message(&body),
            })
        }
        _ => {
            let body = error_body(response).await;
            Err(EventHubError::Api {
                status: status.as_u16(),
                message: server_message(status, &body),
            })
        }
    }
}

async fn error_body(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!(status = status.as_u16(), error = %e, "Failed to read error response body");
            String::new()
        }
    }
}

/// The `message` field of a JSON error body
fn json_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_string))
}

/// The backend's `message` field, else the raw body, else the status reason
fn server_message(status: StatusCode, body: &str) -> String {
    match json_message(body) {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => format!("HTTP {}", status),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await.map_err(map_transport_error)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl EventApi for ApiClient {
    async fn list_events(&self) -> Result<Vec<Event>> {
        let events: Vec<Event> = self.get_json("events", Target { resource: "Events", id: "" }).await?;
        debug!(count = events.len(), "Fetched events");
        Ok(events)
    }

    async fn get_event(&self, id: &str) -> Result<Event> {
        let path = format!("events/{}", encode_id(id));
        let envelope: MessageEnvelope<Event> = self.get_json(&path, Target { resource: "Event", id }).await?;
        Ok(envelope.message)
    }

    async fn create_event(&self, payload: &EventPayload) -> Result<Event> {
        let target = Target { resource: "Events", id: "" };
        let response = self.send(self.request(Method::POST, "events")?.json(payload), target).await?;
        let envelope: EventEnvelope = decode(response).await?;
        Ok(envelope.event)
    }

    async fn update_event(&self, id: &str, payload: &EventPayload) -> Result<Event> {
        let path = format!("events/{}", encode_id(id));
        let target = Target { resource: "Event", id };
        let response = self.send(self.request(Method::PATCH, &path)?.json(payload), target).await?;
        let envelope: EventUpdateEnvelope = decode(response).await?;
        Ok(envelope.event_update)
    }

    async fn delete_event(&self, id: &str) -> Result<()> {
        let path = format!("events/{}", encode_id(id));
        self.delete(&path, Target { resource: "Event", id }).await
    }
}

#[async_trait]
impl RegistrationApi for ApiClient {
    async fn list_registrations(&self) -> Result<Vec<EventRegistration>> {
        self.get_json("event-registrations", Target { resource: "Registrations", id: "" }).await
    }

    async fn list_registrations_for_event(&self, event_id: &str) -> Result<Vec<EventRegistration>> {
        let path = format!("event-registrations/event/{}", encode_id(event_id));
        self.get_json(&path, Target { resource: "Event", id: event_id }).await
    }

    async fn create_registration(&self, request: &CreateRegistrationRequest) -> Result<EventRegistration> {
        let target = Target { resource: "Event", id: &request.event_id };
        let response = self
            .send(self.request(Method::POST, "event-registrations")?.json(request), target)
            .await?;
        let envelope: RegistrationEnvelope = decode(response).await?;
        Ok(envelope.registration)
    }

    async fn delete_registration(&self, id: &str) -> Result<()> {
        let path = format!("event-registrations/{}", encode_id(id));
        self.delete(&path, Target { resource: "Registration", id }).await
    }
}

#[async_trait]
impl NewsApi for ApiClient {
    async fn list_news(&self) -> Result<Vec<News>> {
        self.get_json("news", Target { resource: "News", id: "" }).await
    }

    async fn get_news(&self, id: &str) -> Result<News> {
        let path = format!("news/{}", encode_id(id));
        let envelope: MessageEnvelope<News> = self.get_json(&path, Target { resource: "News", id }).await?;
        Ok(envelope.message)
    }

    async fn create_news(&self, payload: &NewsPayload) -> Result<News> {
        let form = Self::news_form(payload)?;
        let target = Target { resource: "News", id: "" };
        let response = self.send(self.request(Method::POST, "news")?.multipart(form), target).await?;
        decode(response).await
    }

    async fn update_news(&self, id: &str, payload: &NewsPayload) -> Result<News> {
        let form = Self::news_form(payload)?;
        let path = format!("news/{}", encode_id(id));
        let target = Target { resource: "News", id };
        let response = self.send(self.request(Method::PATCH, &path)?.multipart(form), target).await?;
        decode(response).await
    }

    async fn delete_news(&self, id: &str) -> Result<()> {
        let path = format!("news/{}", encode_id(id));
        self.delete(&path, Target { resource: "News", id }).await
    }
}

#[async_trait]
impl NewsletterApi for ApiClient {
    async fn subscribe(&self, email: &str) -> Result<()> {
        let body = SubscribeRequest { email: email.to_string() };
        let target = Target { resource: "Newsletter", id: "" };
        self.send(self.request(Method::POST, "newsletter")?.json(&body), target).await?;
        Ok(())
    }

    async fn list_subscribers(&self) -> Result<Vec<Subscriber>> {
        self.get_json("newsletter", Target { resource: "Newsletter", id: "" }).await
    }
}

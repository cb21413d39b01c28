//! In-memory backend implementing every API trait
//!
//! Records live behind a mutex; reads and writes can be made to fail so the
//! handlers' failure paths can be exercised.

use std::sync::Mutex;
use async_trait::async_trait;
use chrono::Utc;
use eventhub::models::{
    CreateRegistrationRequest, Event, EventPayload, EventRef, EventRegistration, News, NewsPayload, Subscriber,
};
use eventhub::services::{EventApi, NewsApi, NewsletterApi, RegistrationApi};
use eventhub::{EventHubError, Result};

/// Failure to inject into the next calls
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    Api { status: u16, message: String },
    Timeout,
    Unauthorized,
}

impl Failure {
    pub fn api(status: u16, message: &str) -> Self {
        Failure::Api { status, message: message.to_string() }
    }

    fn to_error(&self) -> EventHubError {
        match self {
            Failure::Api { status, message } => EventHubError::Api { status: *status, message: message.clone() },
            Failure::Timeout => EventHubError::Timeout,
            Failure::Unauthorized => EventHubError::Unauthorized,
        }
    }
}

#[derive(Debug, Default)]
struct BackendState {
    events: Vec<Event>,
    registrations: Vec<EventRegistration>,
    news: Vec<News>,
    subscribers: Vec<Subscriber>,
    read_failure: Option<Failure>,
    write_failure: Option<Failure>,
    calls: Vec<String>,
}

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: Mutex<BackendState>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        let backend = Self::new();
        backend.state.lock().unwrap().events = events;
        backend
    }

    pub fn seed_events(&self, events: Vec<Event>) {
        self.state.lock().unwrap().events = events;
    }

    pub fn seed_registrations(&self, registrations: Vec<EventRegistration>) {
        self.state.lock().unwrap().registrations = registrations;
    }

    pub fn seed_news(&self, news: Vec<News>) {
        self.state.lock().unwrap().news = news;
    }

    pub fn seed_subscribers(&self, subscribers: Vec<Subscriber>) {
        self.state.lock().unwrap().subscribers = subscribers;
    }

    pub fn fail_reads(&self, failure: Failure) {
        self.state.lock().unwrap().read_failure = Some(failure);
    }

    pub fn fail_writes(&self, failure: Failure) {
        self.state.lock().unwrap().write_failure = Some(failure);
    }

    pub fn heal(&self) {
        let mut state = self.state.lock().unwrap();
        state.read_failure = None;
        state.write_failure = None;
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn registrations(&self) -> Vec<EventRegistration> {
        self.state.lock().unwrap().registrations.clone()
    }

    pub fn subscribers(&self) -> Vec<Subscriber> {
        self.state.lock().unwrap().subscribers.clone()
    }

    /// Every call made so far, e.g. `"list_events"`
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.calls().iter().filter(|call| call.as_str() == name).count()
    }

    fn read(&self, call: &str) -> Result<std::sync::MutexGuard<'_, BackendState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call.to_string());
        if let Some(failure) = state.read_failure.clone() {
            return Err(failure.to_error());
        }
        Ok(state)
    }

    fn write(&self, call: &str) -> Result<std::sync::MutexGuard<'_, BackendState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call.to_string());
        if let Some(failure) = state.write_failure.clone() {
            return Err(failure.to_error());
        }
        Ok(state)
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn not_found(resource: &'static str, id: &str) -> EventHubError {
    EventHubError::NotFound { resource, id: id.to_string(), message: None }
}

fn event_from_payload(id: String, payload: &EventPayload, created_at: chrono::DateTime<Utc>) -> Event {
    Event {
        id,
        title: payload.title.clone(),
        description: payload.description.clone(),
        category: payload.category,
        language: payload.language.clone(),
        status: payload.status,
        starting_date: payload.starting_date,
        ending_date: payload.ending_date,
        location: payload.location.clone(),
        max_participants: payload.max_participants,
        created_at,
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl EventApi for InMemoryBackend {
    async fn list_events(&self) -> Result<Vec<Event>> {
        Ok(self.read("list_events")?.events.clone())
    }

    async fn get_event(&self, id: &str) -> Result<Event> {
        let state = self.read("get_event")?;
        state.events.iter().find(|event| event.id == id).cloned().ok_or_else(|| not_found("Event", id))
    }

    async fn create_event(&self, payload: &EventPayload) -> Result<Event> {
        let mut state = self.write("create_event")?;
        let event = event_from_payload(new_id(), payload, Utc::now());
        state.events.push(event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: &str, payload: &EventPayload) -> Result<Event> {
        let mut state = self.write("update_event")?;
        let slot = state.events.iter_mut().find(|event| event.id == id).ok_or_else(|| not_found("Event", id))?;
        *slot = event_from_payload(id.to_string(), payload, slot.created_at);
        Ok(slot.clone())
    }

    async fn delete_event(&self, id: &str) -> Result<()> {
        let mut state = self.write("delete_event")?;
        let before = state.events.len();
        state.events.retain(|event| event.id != id);
        if state.events.len() == before {
            return Err(not_found("Event", id));
        }
        Ok(())
    }
}

#[async_trait]
impl RegistrationApi for InMemoryBackend {
    async fn list_registrations(&self) -> Result<Vec<EventRegistration>> {
        Ok(self.read("list_registrations")?.registrations.clone())
    }

    async fn list_registrations_for_event(&self, event_id: &str) -> Result<Vec<EventRegistration>> {
        let state = self.read("list_registrations_for_event")?;
        Ok(state
            .registrations
            .iter()
            .filter(|registration| registration.event_id.id() == event_id)
            .cloned()
            .collect())
    }

    async fn create_registration(&self, request: &CreateRegistrationRequest) -> Result<EventRegistration> {
        let mut state = self.write("create_registration")?;
        if !state.events.iter().any(|event| event.id == request.event_id) {
            return Err(not_found("Event", &request.event_id));
        }
        let registration = EventRegistration {
            id: new_id(),
            event_id: EventRef::Id(request.event_id.clone()),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            address: request.address.clone(),
            additional_info: request.additional_info.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        state.registrations.push(registration.clone());
        Ok(registration)
    }

    async fn delete_registration(&self, id: &str) -> Result<()> {
        let mut state = self.write("delete_registration")?;
        let before = state.registrations.len();
        state.registrations.retain(|registration| registration.id != id);
        if state.registrations.len() == before {
            return Err(not_found("Registration", id));
        }
        Ok(())
    }
}

#[async_trait]
impl NewsApi for InMemoryBackend {
    async fn list_news(&self) -> Result<Vec<News>> {
        Ok(self.read("list_news")?.news.clone())
    }

    async fn get_news(&self, id: &str) -> Result<News> {
        let state = self.read("get_news")?;
        state.news.iter().find(|news| news.id == id).cloned().ok_or_else(|| not_found("News", id))
    }

    async fn create_news(&self, payload: &NewsPayload) -> Result<News> {
        let mut state = self.write("create_news")?;
        let now = Utc::now();
        let news = News {
            id: new_id(),
            title: payload.title.clone().unwrap_or_default(),
            description: payload.description.clone().unwrap_or_default(),
            image: payload
                .image
                .as_ref()
                .map(|image| format!("/uploads/{}", image.file_name))
                .unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        state.news.push(news.clone());
        Ok(news)
    }

    async fn update_news(&self, id: &str, payload: &NewsPayload) -> Result<News> {
        let mut state = self.write("update_news")?;
        let slot = state.news.iter_mut().find(|news| news.id == id).ok_or_else(|| not_found("News", id))?;
        if let Some(title) = &payload.title {
            slot.title = title.clone();
        }
        if let Some(description) = &payload.description {
            slot.description = description.clone();
        }
        if let Some(image) = &payload.image {
            slot.image = format!("/uploads/{}", image.file_name);
        }
        slot.updated_at = Utc::now();
        Ok(slot.clone())
    }

    async fn delete_news(&self, id: &str) -> Result<()> {
        let mut state = self.write("delete_news")?;
        let before = state.news.len();
        state.news.retain(|news| news.id != id);
        if state.news.len() == before {
            return Err(not_found("News", id));
        }
        Ok(())
    }
}

#[async_trait]
impl NewsletterApi for InMemoryBackend {
    async fn subscribe(&self, email: &str) -> Result<()> {
        let mut state = self.write("subscribe")?;
        if state.subscribers.iter().any(|subscriber| subscriber.email == email) {
            return Err(EventHubError::Api { status: 400, message: "Email already subscribed".to_string() });
        }
        state.subscribers.push(Subscriber {
            id: new_id(),
            email: email.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        });
        Ok(())
    }

    async fn list_subscribers(&self) -> Result<Vec<Subscriber>> {
        Ok(self.read("list_subscribers")?.subscribers.clone())
    }
}

//! Admin newsletter subscribers page

use std::path::Path;
use std::sync::Arc;
use chrono::{DateTime, Utc};
use tracing::debug;
use crate::models::Subscriber;
use crate::services::export::{export_to_file, subscribers_to_string};
use crate::services::{NewsletterApi, NotificationSink};
use crate::state::BusyState;
use crate::utils::helpers::{contains_ignore_case, DateDisplay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberStats {
    pub total: usize,
    pub this_month: usize,
}

pub struct SubscribersHandler {
    api: Arc<dyn NewsletterApi>,
    sink: Arc<dyn NotificationSink>,
    display: DateDisplay,
    subscribers: Vec<Subscriber>,
    search: String,
    busy: BusyState,
}

impl SubscribersHandler {
    pub fn new(api: Arc<dyn NewsletterApi>, sink: Arc<dyn NotificationSink>, display: DateDisplay) -> Self {
        Self {
            api,
            sink,
            display,
            subscribers: Vec::new(),
            search: String::new(),
            busy: BusyState::default(),
        }
    }

    pub async fn load(&mut self) -> bool {
        self.busy.set_loading(true);
        let loaded = match self.api.list_subscribers().await {
            Ok(subscribers) => {
                debug!(count = subscribers.len(), "Subscribers loaded");
                self.subscribers = subscribers;
                true
            }
            Err(e) => {
                self.sink.failure("Failed to fetch subscribers", &e);
                false
            }
        };
        self.busy.set_loading(false);
        loaded
    }

    pub fn subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }

    pub fn busy(&self) -> &BusyState {
        &self.busy
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn filtered(&self) -> Vec<&Subscriber> {
        self.subscribers
            .iter()
            .filter(|subscriber| contains_ignore_case(&subscriber.email, &self.search))
            .collect()
    }

    pub fn stats_at(&self, now: DateTime<Utc>) -> SubscriberStats {
        SubscriberStats {
            total: self.subscribers.len(),
            this_month: self
                .subscribers
                .iter()
                .filter(|subscriber| self.display.same_month(&subscriber.created_at, &now))
                .count(),
        }
    }

    pub fn stats(&self) -> SubscriberStats {
        self.stats_at(Utc::now())
    }

    /// CSV of the filtered subscribers
    pub fn export_csv(&mut self) -> Option<String> {
        self.busy.set_exporting(true);
        let rows: Vec<Subscriber> = self.filtered().into_iter().cloned().collect();
        let result = subscribers_to_string(&rows, &self.display);
        self.busy.set_exporting(false);

        match result {
            Ok(csv) => {
                self.sink.success("Subscribers exported successfully");
                Some(csv)
            }
            Err(e) => {
                self.sink.failure("Failed to export subscribers", &e);
                None
            }
        }
    }

    pub fn export_to_path(&mut self, path: impl AsRef<Path>) -> bool {
        let Some(csv) = self.export_csv() else {
            return false;
        };
        match export_to_file(path, &csv) {
            Ok(()) => true,
            Err(e) => {
                self.sink.failure("Failed to export subscribers", &e);
                false
            }
        }
    }
}

//! Public news list and article pages

use std::sync::Arc;
use tracing::debug;
use crate::handlers::{server_message_or, DetailOutcome};
use crate::models::News;
use crate::services::{NewsApi, NotificationSink};
use crate::state::BusyState;
use crate::utils::helpers::{strip_html, truncate_text};
use crate::utils::logging::log_api_error;

pub const FALLBACK_PATH: &str = "/news";

/// Characters of plain text shown on a news card
pub const PREVIEW_CHARS: usize = 150;

/// Plain-text teaser of a rich-text description
pub fn preview(description: &str) -> String {
    truncate_text(&strip_html(description), PREVIEW_CHARS)
}

pub struct NewsPageHandler {
    api: Arc<dyn NewsApi>,
    sink: Arc<dyn NotificationSink>,
    news: Vec<News>,
    article: Option<News>,
    busy: BusyState,
}

impl NewsPageHandler {
    pub fn new(api: Arc<dyn NewsApi>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            api,
            sink,
            news: Vec::new(),
            article: None,
            busy: BusyState::default(),
        }
    }

    pub async fn load(&mut self) -> bool {
        self.busy.set_loading(true);
        let loaded = match self.api.list_news().await {
            Ok(news) => {
                debug!(count = news.len(), "Public news loaded");
                self.news = news;
                true
            }
            Err(e) => {
                log_api_error("Failed to fetch news", &e);
                self.sink.error(&server_message_or(&e, "Failed to fetch news"));
                false
            }
        };
        self.busy.set_loading(false);
        loaded
    }

    pub fn news(&self) -> &[News] {
        &self.news
    }

    pub fn busy(&self) -> &BusyState {
        &self.busy
    }

    /// Open one article; failures send the reader back to the list
    pub async fn open(&mut self, id: &str) -> DetailOutcome<News> {
        self.busy.set_loading(true);
        let result = self.api.get_news(id).await;
        self.busy.set_loading(false);

        match result {
            Ok(news) => {
                self.article = Some(news.clone());
                DetailOutcome::Loaded(news)
            }
            Err(e) => {
                log_api_error("Failed to fetch news", &e);
                self.sink.error(&server_message_or(&e, "Failed to fetch news"));
                self.article = None;
                DetailOutcome::Redirect(FALLBACK_PATH.to_string())
            }
        }
    }

    pub fn article(&self) -> Option<&News> {
        self.article.as_ref()
    }
}

//! Admin news page

use std::sync::Arc;
use tracing::debug;
use crate::forms::{FieldErrors, NewsDraft};
use crate::handlers::SubmitOutcome;
use crate::models::News;
use crate::services::{NewsApi, NotificationSink};
use crate::state::{BusyState, ConfirmationGate, ConfirmationRequest};
use crate::utils::logging::log_admin_action;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this news?";

#[derive(Debug, Clone, PartialEq)]
pub struct NewsForm {
    pub editing: Option<String>,
    pub draft: NewsDraft,
    pub errors: FieldErrors,
}

pub struct NewsHandler {
    api: Arc<dyn NewsApi>,
    sink: Arc<dyn NotificationSink>,
    news: Vec<News>,
    busy: BusyState,
    confirm: ConfirmationGate<String>,
    form: Option<NewsForm>,
}

impl NewsHandler {
    pub fn new(api: Arc<dyn NewsApi>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            api,
            sink,
            news: Vec::new(),
            busy: BusyState::default(),
            confirm: ConfirmationGate::default(),
            form: None,
        }
    }

    pub async fn load(&mut self) -> bool {
        self.busy.set_loading(true);
        let loaded = match self.api.list_news().await {
            Ok(news) => {
                debug!(count = news.len(), "Admin news loaded");
                self.news = news;
                true
            }
            Err(e) => {
                self.sink.failure("Failed to fetch news", &e);
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

    pub fn form(&self) -> Option<&NewsForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut NewsForm> {
        self.form.as_mut()
    }

    pub fn open_create(&mut self) {
        self.form = Some(NewsForm {
            editing: None,
            draft: NewsDraft::default(),
            errors: FieldErrors::new(),
        });
    }

    pub fn open_edit(&mut self, id: &str) -> bool {
        match self.news.iter().find(|news| news.id == id) {
            Some(news) => {
                self.form = Some(NewsForm {
                    editing: Some(news.id.clone()),
                    draft: NewsDraft::from_news(news),
                    errors: FieldErrors::new(),
                });
                true
            }
            None => false,
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub async fn submit(&mut self) -> SubmitOutcome<News> {
        let Some(form) = self.form.as_mut() else {
            return SubmitOutcome::NoForm;
        };

        let errors = form.draft.validate(form.editing.is_none());
        form.errors = errors.clone();
        if !errors.is_empty() {
            return SubmitOutcome::Invalid(errors);
        }
        let payload = form.draft.to_payload();
        let editing = form.editing.clone();

        if !self.busy.begin_submit() {
            return SubmitOutcome::Busy;
        }

        let result = match &editing {
            Some(id) => self.api.update_news(id, &payload).await,
            None => self.api.create_news(&payload).await,
        };
        self.busy.end_submit();

        match result {
            Ok(news) => {
                let (action, message) = match editing {
                    Some(_) => ("update", "News updated successfully"),
                    None => ("create", "News created successfully"),
                };
                log_admin_action(action, "news", Some(&news.id));
                self.sink.success(message);
                self.form = None;
                self.load().await;
                SubmitOutcome::Saved(news)
            }
            Err(e) => {
                self.sink.failure("Failed to save news", &e);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn request_delete(&mut self, id: &str) -> ConfirmationRequest<String> {
        self.confirm.request(id.to_string(), DELETE_PROMPT)
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.confirm.cancel()
    }

    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.confirm.confirm() else {
            return false;
        };
        if !self.busy.begin_delete(&id) {
            return false;
        }

        let result = self.api.delete_news(&id).await;
        self.busy.end_delete();

        match result {
            Ok(()) => {
                log_admin_action("delete", "news", Some(&id));
                self.sink.success("News deleted successfully");
                self.load().await;
                true
            }
            Err(e) => {
                self.sink.failure("Failed to delete news", &e);
                false
            }
        }
    }
}

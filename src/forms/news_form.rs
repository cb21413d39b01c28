//! Admin news form

use crate::models::news::{ImageUpload, News, NewsPayload};
use super::event_form::{DESCRIPTION_REQUIRED, TITLE_REQUIRED};
use super::{Field, FieldErrors};

pub const IMAGE_REQUIRED: &str = "Featured Image is required for new news.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsDraft {
    pub title: String,
    pub description: String,
    /// Newly picked image; on edit, `None` keeps the stored one
    pub image: Option<ImageUpload>,
}

impl NewsDraft {
    pub fn from_news(news: &News) -> Self {
        Self {
            title: news.title.clone(),
            description: news.description.clone(),
            image: None,
        }
    }

    /// An image is only mandatory when creating
    pub fn validate(&self, is_new: bool) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.title.trim().is_empty() {
            errors.insert(Field::Title, TITLE_REQUIRED);
        }

        if self.description.trim().is_empty() {
            errors.insert(Field::Description, DESCRIPTION_REQUIRED);
        }

        if is_new && self.image.is_none() {
            errors.insert(Field::Image, IMAGE_REQUIRED);
        }

        errors
    }

    pub fn to_payload(&self) -> NewsPayload {
        NewsPayload {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            image: self.image.clone(),
        }
    }
}

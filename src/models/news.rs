//! News article model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// URL of the featured image
    #[serde(default)]
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An image file picked in the admin form
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart body for news create and update; absent fields are not sent
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}

//! Public event registration form

use crate::models::registration::CreateRegistrationRequest;
use crate::utils::errors::{EventHubError, Result};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub additional_info: String,
}

impl RegistrationDraft {
    /// First name, last name, email and phone are all present
    pub fn is_complete(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email, &self.phone]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    /// Build the request for `event_id`, or refuse with the required-fields message
    pub fn to_request(&self, event_id: &str) -> Result<CreateRegistrationRequest> {
        if !self.is_complete() {
            return Err(EventHubError::InvalidInput(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(CreateRegistrationRequest {
            event_id: event_id.to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: non_blank(&self.address),
            additional_info: non_blank(&self.additional_info),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

use gloo_timers::future::TimeoutFuture;
use log::info;
use serde::Serialize;
use thiserror::Error;

pub const SERVICE_OPTIONS: &[&str] = &[
    "Collision Repair",
    "Paint Refinishing",
    "Aluminum Body Repair",
    "Frame Straightening",
    "Glass Services",
    "Detailing",
    "Other",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Vehicle,
    Service,
    Message,
}

impl ContactField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "phone" => Some(ContactField::Phone),
            "vehicle" => Some(ContactField::Vehicle),
            "service" => Some(ContactField::Service),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vehicle: String,
    pub service: String,
    pub message: String,
}

impl ContactRequest {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Vehicle => self.vehicle = value,
            ContactField::Service => self.service = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Name, email and message are required; the rest are optional.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("Name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingField("Email"));
        }
        if !email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("Message"));
        }
        Ok(())
    }
}

/// Stand-in for a real submission: validates, waits, and reports success.
/// Nothing leaves the browser.
pub async fn submit_simulated(request: ContactRequest, delay_ms: u32) -> Result<(), ContactError> {
    request.validate()?;
    TimeoutFuture::new(delay_ms).await;
    info!(
        "Contact request accepted: {}",
        serde_json::to_string(&request).unwrap_or_default()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "Rear bumper scuff".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields_only() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_missing_name() {
        let mut request = filled();
        request.name = "   ".into();
        assert_eq!(request.validate(), Err(ContactError::MissingField("Name")));
    }

    #[test]
    fn test_missing_message() {
        let mut request = filled();
        request.message.clear();
        assert_eq!(request.validate(), Err(ContactError::MissingField("Message")));
    }

    #[test]
    fn test_email_checks() {
        let mut request = filled();
        request.email.clear();
        assert_eq!(request.validate(), Err(ContactError::MissingField("Email")));
        request.email = "jane.example.com".into();
        assert_eq!(request.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_set_by_field_name() {
        let mut request = ContactRequest::default();
        let field = ContactField::from_name("vehicle").unwrap();
        request.set(field, "2023 911 GT3".into());
        assert_eq!(request.vehicle, "2023 911 GT3");
        assert_eq!(ContactField::from_name("fax"), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ContactError::MissingField("Name").to_string(), "Name is required");
    }
}

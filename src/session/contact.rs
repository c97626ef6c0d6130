//! Contact form session

use serde::Serialize;

use super::{required, FormError};

/// Acknowledgement shown after a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

/// Contact form fields; submissions are acknowledged and discarded
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Validate, acknowledge, and reset the form
    pub fn submit(&mut self) -> Result<Toast, FormError> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        required("subject", &self.subject)?;
        required("message", &self.message)?;

        let email = self.email.trim();
        if !is_plausible_email(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }

        tracing::info!("Contact message from {} <{}> acknowledged", self.name.trim(), email);
        *self = Self::default();

        Ok(Toast {
            title: "Message sent successfully!".to_string(),
            description: "Thank you for reaching out. I'll get back to you within 24 hours."
                .to_string(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

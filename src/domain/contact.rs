// src/domain/contact.rs

use thiserror::Error;

const MAX_NAME_LEN: usize = 100;
const MAX_PHONE_LEN: usize = 32;
const MAX_EMAIL_LEN: usize = 254;
const MAX_MESSAGE_LEN: usize = 5000;

/// A message sent through the "Get In Touch" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} is too long")]
    TooLong(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

impl ContactSubmission {
    /// Collects the form fields without validating them.
    /// Field names match the `name` attributes of the contact form.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "firstName" => &mut form.first_name,
                "lastName" => &mut form.last_name,
                "email" => &mut form.email,
                "phone" => &mut form.phone,
                "message" => &mut form.message,
                _ => continue,
            };
            *slot = value.as_ref().trim().to_string();
        }
        form
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        require("first name", &self.first_name, MAX_NAME_LEN)?;
        limit("last name", &self.last_name, MAX_NAME_LEN)?;
        require("email", &self.email, MAX_EMAIL_LEN)?;
        limit("phone", &self.phone, MAX_PHONE_LEN)?;
        require("message", &self.message, MAX_MESSAGE_LEN)?;

        if !is_plausible_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

fn require(field: &'static str, value: &str, max: usize) -> Result<(), ContactError> {
    if value.is_empty() {
        return Err(ContactError::Missing(field));
    }
    limit(field, value, max)
}

fn limit(field: &'static str, value: &str, max: usize) -> Result<(), ContactError> {
    if value.chars().count() > max {
        return Err(ContactError::TooLong(field));
    }
    Ok(())
}

/// One '@', something on both sides, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

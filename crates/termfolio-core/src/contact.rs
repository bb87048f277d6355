//! Contact form message and `mailto:` link builder.

use std::fmt;

/// Contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Reason a contact message cannot be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingMessage,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ContactError::MissingName => "NAME IS REQUIRED",
            ContactError::MissingEmail => "EMAIL IS REQUIRED",
            ContactError::InvalidEmail => "EMAIL MUST CONTAIN '@'",
            ContactError::MissingMessage => "MESSAGE IS REQUIRED",
        };
        f.write_str(text)
    }
}

impl std::error::Error for ContactError {}

impl ContactMessage {
    /// Checks that every field is filled and the email looks like an address.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !self.email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Message from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "From: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// Validates the message and builds the `mailto:` URL for `recipient`.
    pub fn mailto(&self, recipient: &str) -> Result<String, ContactError> {
        self.validate()?;
        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            encode_component(&self.subject()),
            encode_component(&self.body())
        ))
    }
}

/// Percent-encodes `value` for use in a URL query component.
///
/// `form_urlencoded` writes spaces as `+`, which mail clients show
/// literally, so they are rewritten as `%20`. A literal `+` is already
/// encoded as `%2B` at that point.
pub fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi there".to_string(),
        }
    }

    #[test]
    fn test_mailto_encodes_subject_and_body() {
        let url = message().mailto("me@example.com").unwrap();
        assert_eq!(
            url,
            "mailto:me@example.com?subject=Message%20from%20Ada\
             &body=From%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0AHi%20there"
        );
    }

    #[test]
    fn test_encode_component_keeps_plus_literal() {
        assert_eq!(encode_component("a+b c"), "a%2Bb%20c");
    }

    #[test]
    fn test_validate_requires_every_field() {
        let mut msg = message();
        msg.name = "  ".to_string();
        assert_eq!(msg.validate(), Err(ContactError::MissingName));

        let mut msg = message();
        msg.email.clear();
        assert_eq!(msg.validate(), Err(ContactError::MissingEmail));

        let mut msg = message();
        msg.email = "not-an-address".to_string();
        assert_eq!(msg.validate(), Err(ContactError::InvalidEmail));

        let mut msg = message();
        msg.message = "\n".to_string();
        assert_eq!(msg.validate(), Err(ContactError::MissingMessage));

        assert_eq!(message().validate(), Ok(()));
    }

    #[test]
    fn test_mailto_rejects_invalid_message() {
        let msg = ContactMessage::default();
        assert!(msg.mailto("me@example.com").is_err());
    }
}

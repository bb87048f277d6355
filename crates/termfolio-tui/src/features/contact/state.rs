//! Contact form state.

use termfolio_core::contact::{ContactError, ContactMessage};

use crate::input::LineBuffer;

/// Focusable parts of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
    Send,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
        ContactField::Send,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "NAME:",
            ContactField::Email => "EMAIL:",
            ContactField::Message => "MESSAGE:",
            ContactField::Send => "[SEND TRANSMISSION]",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Enter your name",
            ContactField::Email => "your@email.com",
            ContactField::Message => "Enter your message...",
            ContactField::Send => "",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Send,
            ContactField::Send => ContactField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ContactField::Name => ContactField::Send,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
            ContactField::Send => ContactField::Message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Editing,
    /// Last submit failed validation.
    Invalid(ContactError),
    /// Mail client launched; waiting for the reset timer.
    Sending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: LineBuffer,
    pub email: LineBuffer,
    pub message: LineBuffer,
    pub field: ContactField,
    pub status: ContactStatus,
    /// Bumped on every reset and send; reset timers carry the value they
    /// were armed with.
    pub generation: u64,
}

impl ContactFormState {
    pub fn buffer(&self, field: ContactField) -> Option<&LineBuffer> {
        match field {
            ContactField::Name => Some(&self.name),
            ContactField::Email => Some(&self.email),
            ContactField::Message => Some(&self.message),
            ContactField::Send => None,
        }
    }

    pub fn buffer_mut(&mut self, field: ContactField) -> Option<&mut LineBuffer> {
        match field {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Message => Some(&mut self.message),
            ContactField::Send => None,
        }
    }

    pub fn message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.text().trim().to_string(),
            email: self.email.text().trim().to_string(),
            message: self.message.text().to_string(),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }

    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::default()
        };
    }

    /// Marks the form as sent, returning the generation for the reset timer.
    pub fn start_send(&mut self) -> u64 {
        self.generation += 1;
        self.status = ContactStatus::Sending;
        self.generation
    }

    /// Resets the form only if no reset or send happened since `generation`.
    pub fn expire_send(&mut self, generation: u64) {
        if self.generation == generation {
            self.reset();
        }
    }
}

//! Contact form record and its validation error map

use std::collections::BTreeMap;

use crate::config;
use crate::net::SubmissionPayload;
use crate::validate::{
    strip_html, validate_email, validate_inquiry, validate_message, validate_name,
};

/// Validatable form fields. Variant order is the canonical declared order
/// of the controls, which is also the focus order for the first invalid
/// field — `Ord` derives from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
    Inquiry,
}

impl Field {
    /// The `name` attribute of the corresponding form control.
    pub fn control_name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
            Field::Inquiry => "type",
        }
    }
}

/// Per-field validation messages. A field absent from the map is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: String) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Drop a single field's entry. Called when the user edits that field;
    /// no re-validation happens until the next submit.
    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First invalid field in canonical focus order.
    pub fn first_invalid(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }
}

/// The contact form record. Every field is always a `String`, never
/// absent; `website` is the honeypot and stays empty for humans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub inquiry: String,
    pub clinic_name: String,
    pub message: String,
    pub website: String,
}

impl ContactForm {
    /// Write one validatable field's raw value.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
            Field::Inquiry => self.inquiry = value,
        }
    }

    pub fn set_clinic_name(&mut self, value: String) {
        self.clinic_name = value;
    }

    pub fn set_website(&mut self, value: String) {
        self.website = value;
    }

    /// Run every validator and collect the full error map. Never
    /// fail-fast: each field reports independently.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if let Some(message) = validate_name(&self.name) {
            errors.insert(Field::Name, message);
        }
        if let Some(message) = validate_email(&self.email) {
            errors.insert(Field::Email, message);
        }
        if let Some(message) = validate_message(&self.message) {
            errors.insert(Field::Message, message);
        }
        if let Some(message) = validate_inquiry(&self.inquiry) {
            errors.insert(Field::Inquiry, message);
        }
        errors
    }

    /// Build the transmission payload: trimmed and normalized values, the
    /// message stripped of tag shapes, plus the fixed form identifier.
    pub fn to_payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            form_name: config::FORM_NAME.to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            inquiry: self.inquiry.clone(),
            clinic: self.clinic_name.trim().to_string(),
            message: strip_html(self.message.trim()),
            website: self.website.clone(),
        }
    }

    /// Whether the required fields have any content at all. Gates the
    /// submit button; real validation happens on submit.
    pub fn required_present(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.inquiry.is_empty()
            && !self.message.is_empty()
    }
}

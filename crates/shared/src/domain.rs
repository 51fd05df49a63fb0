use std::{collections::BTreeMap, fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Company,
        FieldName::Service,
        FieldName::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Company => "company",
            FieldName::Service => "service",
            FieldName::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == raw)
            .ok_or_else(|| UnknownField(raw.to_string()))
    }
}

/// Contact form input. Every field is free text and defaults to empty;
/// which fields are required is decided by [`FormFields::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Company => &self.company,
            FieldName::Service => &self.service,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Company => &mut self.company,
            FieldName::Service => &mut self.service,
            FieldName::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.into_iter().all(|field| self.get(field).is_empty())
    }

    /// Computes the full error mapping for the current values. The result
    /// depends only on `self`; phone and company are never checked.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(FieldName::Name, "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.insert(FieldName::Email, "Email is required");
        } else if !email_shape().is_match(&self.email) {
            errors.insert(FieldName::Email, "Email is invalid");
        }

        if self.message.trim().is_empty() {
            errors.insert(FieldName::Message, "Message is required");
        }

        // closed option list, so no trimming
        if self.service.is_empty() {
            errors.insert(FieldName::Service, "Please select a service");
        }

        errors
    }
}

fn email_shape() -> &'static Regex {
    static EMAIL_SHAPE: OnceLock<Regex> = OnceLock::new();
    EMAIL_SHAPE.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

/// Field name to message. A missing key means the field is currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FieldName, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

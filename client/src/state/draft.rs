//! Patient registration draft held by the registration form.
//!
//! DESIGN
//! ======
//! The draft is a plain value. The page wraps it in an `RwSignal` and mutates
//! it one field at a time from input events, so every operation here is a
//! synchronous, side-effect free edit that is easy to test without a DOM.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::{Deserialize, Serialize};

/// One of the three fields captured by the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
}

impl DraftField {
    /// All fields in form order.
    pub const ALL: [Self; 3] = [Self::FirstName, Self::LastName, Self::Email];

    /// The HTML `name` attribute used for this field's input.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
        }
    }

    /// Parse an input `name` attribute. Names outside the known three yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "firstName" => Some(Self::FirstName),
            "lastName" => Some(Self::LastName),
            "email" => Some(Self::Email),
            _ => None,
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
        }
    }

    /// The HTML input `type` for this field.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::FirstName | Self::LastName => "text",
            Self::Email => "email",
        }
    }
}

/// In-progress registration data. Serializes with camelCase keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl PatientDraft {
    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
        }
    }

    /// Replace one field's value, leaving the other two untouched.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::FirstName => &mut self.first_name,
            DraftField::LastName => &mut self.last_name,
            DraftField::Email => &mut self.email,
        };
        *slot = value.into();
    }

    /// Apply an input change addressed by the input's `name` attribute.
    ///
    /// Returns `false` and leaves the draft unchanged when `name` is not one of
    /// the known fields.
    pub fn apply_change(&mut self, name: &str, value: impl Into<String>) -> bool {
        match DraftField::from_name(name) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => false,
        }
    }

    /// Fields whose value is empty, in form order.
    ///
    /// Mirrors HTML `required`: whitespace-only values count as present.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

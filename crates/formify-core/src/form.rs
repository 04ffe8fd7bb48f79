//! Shapes shared with form components: field values, per-field state, the
//! form-state contract and the HTML input type enumeration.

use crate::issues::FieldError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// A value an input element can hold.
///
/// Deserialization tries the variants in declaration order, so an RFC 3339
/// string becomes a `Date` and any other string stays `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Bool(bool),
    Number(f64),
    Date(DateTime<Utc>),
    Text(String),
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for FormValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub value: FormValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FormField {
    pub fn new(value: impl Into<FormValue>) -> Self {
        Self {
            value: value.into(),
            error: None,
        }
    }
}

/// Field name to field state.
pub type FormElement = BTreeMap<String, FormField>;

/// The contract a form-state container exposes to form components.
///
/// Nothing in this workspace implements it; containers live with the
/// rendering layer.
pub trait FormState {
    type Values;
    type Errors;

    fn values(&self) -> &Self::Values;

    fn errors(&self) -> &Self::Errors;

    /// Sets or clears (`None`) the error shown for `name`.
    fn set_error(&mut self, name: &str, error: Option<String>);

    fn reset(&mut self);

    /// Pushes every error into the form in order, keyed by flattened path.
    fn apply_field_errors(&mut self, errors: &[FieldError]) {
        for error in errors {
            self.set_error(&error.key, Some(error.message.clone()));
        }
    }
}

/// The `type` attribute of an HTML `<input>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    Button,
    Checkbox,
    Color,
    Date,
    DatetimeLocal,
    Email,
    File,
    Hidden,
    Image,
    Month,
    Number,
    Password,
    Radio,
    Range,
    Reset,
    Search,
    Submit,
    Tel,
    Text,
    Time,
    Url,
    Week,
}

impl InputType {
    pub const ALL: [InputType; 22] = [
        InputType::Button,
        InputType::Checkbox,
        InputType::Color,
        InputType::Date,
        InputType::DatetimeLocal,
        InputType::Email,
        InputType::File,
        InputType::Hidden,
        InputType::Image,
        InputType::Month,
        InputType::Number,
        InputType::Password,
        InputType::Radio,
        InputType::Range,
        InputType::Reset,
        InputType::Search,
        InputType::Submit,
        InputType::Tel,
        InputType::Text,
        InputType::Time,
        InputType::Url,
        InputType::Week,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Button => "button",
            InputType::Checkbox => "checkbox",
            InputType::Color => "color",
            InputType::Date => "date",
            InputType::DatetimeLocal => "datetime-local",
            InputType::Email => "email",
            InputType::File => "file",
            InputType::Hidden => "hidden",
            InputType::Image => "image",
            InputType::Month => "month",
            InputType::Number => "number",
            InputType::Password => "password",
            InputType::Radio => "radio",
            InputType::Range => "range",
            InputType::Reset => "reset",
            InputType::Search => "search",
            InputType::Submit => "submit",
            InputType::Tel => "tel",
            InputType::Text => "text",
            InputType::Time => "time",
            InputType::Url => "url",
            InputType::Week => "week",
        }
    }
}

impl Display for InputType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("unknown input type `{0}`")]
pub struct UnknownInputType(pub String);

impl std::str::FromStr for InputType {
    type Err = UnknownInputType;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        InputType::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == input)
            .ok_or_else(|| UnknownInputType(input.to_string()))
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;

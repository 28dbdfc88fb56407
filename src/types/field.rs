//! Custom field values attached to project items

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::github::graphql::RawFieldValue;

/// A named custom field value from a project board row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldValue {
    /// Name of the custom field this value belongs to
    pub field_name: String,

    /// The typed payload
    pub payload: FieldPayload,
}

/// The four mutually-exclusive field payload kinds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPayload {
    Date(NaiveDate),
    Text(String),
    SingleSelect(String),
    Number(f64),
}

impl FieldValue {
    /// Convert a raw GraphQL field value, dropping empty values and the
    /// value kinds this server does not consume (iterations, labels, ...).
    pub fn from_raw(raw: RawFieldValue) -> Option<Self> {
        match raw {
            RawFieldValue::Date { date, field } => Some(Self {
                field_name: field.and_then(|f| f.name).unwrap_or_default(),
                payload: FieldPayload::Date(date?),
            }),
            RawFieldValue::Text { text, field } => Some(Self {
                field_name: field.and_then(|f| f.name).unwrap_or_default(),
                payload: FieldPayload::Text(text?),
            }),
            RawFieldValue::SingleSelect { name, field } => Some(Self {
                field_name: field.and_then(|f| f.name).unwrap_or_default(),
                payload: FieldPayload::SingleSelect(name?),
            }),
            RawFieldValue::Number { number, field } => Some(Self {
                field_name: field.and_then(|f| f.name).unwrap_or_default(),
                payload: FieldPayload::Number(number?),
            }),
            RawFieldValue::Other => None,
        }
    }

    /// The date payload, if this value carries one
    pub fn date(&self) -> Option<NaiveDate> {
        match self.payload {
            FieldPayload::Date(d) => Some(d),
            _ => None,
        }
    }

    /// The single-select option name, if this value carries one
    pub fn select_name(&self) -> Option<&str> {
        match &self.payload {
            FieldPayload::SingleSelect(name) => Some(name),
            _ => None,
        }
    }
}

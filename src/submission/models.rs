use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Value of a single submitted form field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    /// Multi-select fields; `null` entries are skipped when displayed.
    List(Vec<Option<String>>),
    Null,
    /// Numbers, booleans or nested JSON, displayed with their JSON text.
    Other(Value),
}

impl FieldValue {
    /// Display text: arrays joined with `", "`, null as empty string.
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items
                .iter()
                .flatten()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Null => String::new(),
            Self::Other(value) => value.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A submitted field in body order.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedField {
    pub key: String,
    pub value: FieldValue,
}

impl SubmittedField {
    /// Keys starting with `_` carry form metadata and are never rendered.
    pub fn is_metadata(&self) -> bool {
        self.key.starts_with('_')
    }
}

/// The raw form submission, preserving the order keys arrived in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    fields: Vec<SubmittedField>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. A repeated key keeps its first position and takes the
    /// new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|field| field.key == key) {
            Some(existing) => existing.value = value,
            None => self.fields.push(SubmittedField { key, value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| &field.value)
    }

    /// All fields, metadata included.
    pub fn fields(&self) -> impl Iterator<Item = &SubmittedField> {
        self.fields.iter()
    }

    /// Fields that take part in the report.
    pub fn data_fields(&self) -> impl Iterator<Item = &SubmittedField> {
        self.fields.iter().filter(|field| !field.is_metadata())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Submitter name used in the email subject.
    pub fn applicant_name(&self) -> Option<String> {
        self.get("FullName")
            .map(FieldValue::display)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Submission::new();
        for (key, value) in iter {
            submission.insert(key, value);
        }
        submission
    }
}

struct SubmissionVisitor;

impl<'de> Visitor<'de> for SubmissionVisitor {
    type Value = Submission;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object of form field names to values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut submission = Submission::new();
        while let Some((key, value)) = access.next_entry::<String, FieldValue>()? {
            submission.insert(key, value);
        }
        Ok(submission)
    }
}

impl<'de> Deserialize<'de> for Submission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SubmissionVisitor)
    }
}

/// JSON envelope returned by the submit endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

impl SubmitResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }

    pub fn failed(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

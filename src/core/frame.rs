use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::core::Field;
use crate::error::{PanelError, PanelResult};

/// A named collection of equal-length typed fields.
///
/// `name`, `meta` and `extra` are identity/display data owned by the host and
/// are never interpreted here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub length: usize,
    /// `None` when the key is absent; an explicit `null` is `Some(Value::Null)`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub meta: Option<Value>,
    /// Host keys this crate does not model (`refId`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DataFrame {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Appends a field. The first field added defines `length`.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        if self.fields.is_empty() {
            self.length = field.len();
        }
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Checks that every field holds exactly `length` values.
    ///
    /// Transforms never call this; it guards data entering from the host.
    pub fn validate(&self) -> PanelResult<()> {
        for field in &self.fields {
            if field.len() != self.length {
                return Err(PanelError::FieldLengthMismatch {
                    field: field.name.clone(),
                    expected: self.length,
                    actual: field.len(),
                });
            }
        }
        Ok(())
    }

    /// First and last instants of the first time field, in row order.
    ///
    /// After a reversal `first` is later than `last`.
    #[must_use]
    pub fn time_span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let time_field = self.fields.iter().find(|field| field.is_time())?;
        let last_row = time_field.len().checked_sub(1)?;
        Some((time_field.time_at(0)?, time_field.time_at(last_row)?))
    }
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

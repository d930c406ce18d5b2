use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Opaque per-field display configuration (unit, decimals, color, ...).
pub type FieldConfig = Map<String, Value>;

/// Ordered label set attached to a field (`{"sensor": "A"}`).
pub type Labels = IndexMap<String, String>;

/// Semantic type tag of a field.
///
/// Tags outside the modeled set are kept verbatim in [`FieldType::Other`] so
/// they survive a decode/encode cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Time,
    Number,
    String,
    Boolean,
    Other(String),
}

impl FieldType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Time => "time",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Other(tag) => tag.as_str(),
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "time" => Self::Time,
            "number" => Self::Number,
            "string" => Self::String,
            "boolean" => Self::Boolean,
            _ => Self::Other(tag),
        }
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Other(tag) => tag,
            modeled => modeled.as_str().to_owned(),
        }
    }
}

/// One named, typed column of a [`crate::core::DataFrame`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub config: FieldConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    #[serde(default)]
    pub values: Vec<Value>,
    /// Host keys this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            field_type,
            config: FieldConfig::new(),
            labels: None,
            values,
            extra: Map::new(),
        }
    }

    /// Time field holding epoch milliseconds.
    #[must_use]
    pub fn time(name: impl Into<String>, epoch_millis: impl IntoIterator<Item = i64>) -> Self {
        let values = epoch_millis.into_iter().map(Value::from).collect();
        Self::new(name, FieldType::Time, values)
    }

    /// Numeric field. Non-finite samples become `null`, matching JSON.
    #[must_use]
    pub fn number(name: impl Into<String>, samples: impl IntoIterator<Item = f64>) -> Self {
        let values = samples
            .into_iter()
            .map(|sample| Number::from_f64(sample).map_or(Value::Null, Value::Number))
            .collect();
        Self::new(name, FieldType::Number, values)
    }

    #[must_use]
    pub fn string<S: Into<String>>(
        name: impl Into<String>,
        samples: impl IntoIterator<Item = S>,
    ) -> Self {
        let values = samples
            .into_iter()
            .map(|sample| Value::String(sample.into()))
            .collect();
        Self::new(name, FieldType::String, values)
    }

    /// Sets one display config entry, e.g. `("unit", "celsius")`.
    #[must_use]
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = Some(labels);
        self
    }

    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(Labels::new)
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn is_time(&self) -> bool {
        self.field_type == FieldType::Time
    }

    /// Reads row `row` of a time field as a UTC instant.
    ///
    /// Returns `None` for non-time fields, out-of-range rows, nulls and
    /// values that are not epoch milliseconds.
    #[must_use]
    pub fn time_at(&self, row: usize) -> Option<DateTime<Utc>> {
        if !self.is_time() {
            return None;
        }
        let value = self.values.get(row)?;
        let millis = match value.as_i64() {
            Some(millis) => millis,
            None => {
                let millis = value.as_f64()?;
                if !millis.is_finite() {
                    return None;
                }
                millis as i64
            }
        };
        DateTime::from_timestamp_millis(millis)
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PanelError, PanelResult};

/// Axis that carries time when the panel renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeAxisOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Direction in which time advances along a vertical time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimeDirection {
    #[default]
    TopToBottom,
    BottomToTop,
}

/// Panel options read from the host, in the host's camelCase layout.
///
/// Only the axis flags are interpreted. Legend, tooltip, timezone and any
/// other host option is kept in `extra` so a decode/encode cycle is lossless.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelOptions {
    #[serde(default)]
    pub vertical_time_axis: bool,
    /// Only meaningful while `vertical_time_axis` is set.
    #[serde(default)]
    pub invert_time_direction: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PanelOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_vertical_time_axis(mut self, enabled: bool) -> Self {
        self.vertical_time_axis = enabled;
        self
    }

    #[must_use]
    pub fn with_invert_time_direction(mut self, enabled: bool) -> Self {
        self.invert_time_direction = enabled;
        self
    }

    #[must_use]
    pub fn time_axis_orientation(&self) -> TimeAxisOrientation {
        if self.vertical_time_axis {
            TimeAxisOrientation::Vertical
        } else {
            TimeAxisOrientation::Horizontal
        }
    }

    /// Whether series rows must be reversed before rendering.
    ///
    /// The inversion flag is ignored unless the time axis is vertical.
    #[must_use]
    pub fn inversion_enabled(&self) -> bool {
        self.vertical_time_axis && self.invert_time_direction
    }

    #[must_use]
    pub fn time_direction(&self) -> TimeDirection {
        if self.inversion_enabled() {
            TimeDirection::BottomToTop
        } else {
            TimeDirection::TopToBottom
        }
    }

    /// Serializes options to pretty JSON.
    pub fn to_json_pretty(&self) -> PanelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PanelError::InvalidData(format!("failed to serialize options: {e}")))
    }

    /// Deserializes options from JSON.
    pub fn from_json_str(input: &str) -> PanelResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PanelError::InvalidData(format!("failed to parse options: {e}")))
    }
}

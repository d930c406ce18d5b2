use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::core::DataFrame;
use crate::error::{PanelError, PanelResult};

pub const FRAMES_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope around a batch of frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramesJsonContractV1 {
    pub schema_version: u32,
    pub frames: Vec<DataFrame>,
}

/// Envelope as read from the wire; frames stay raw until admitted.
#[derive(Debug, Deserialize)]
struct FramesEnvelopeWire {
    schema_version: u32,
    frames: Vec<Value>,
}

impl DataFrame {
    /// Parses and validates one frame.
    ///
    /// A frame without a `length` key takes it from its first field. An
    /// explicit `length` is kept and must match every field.
    pub fn from_json_str(input: &str) -> PanelResult<Self> {
        let raw: Value = serde_json::from_str(input)
            .map_err(|e| PanelError::InvalidData(format!("failed to parse frame: {e}")))?;
        admit_frame(raw)
    }

    pub fn to_json_pretty(&self) -> PanelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PanelError::InvalidData(format!("failed to serialize frame: {e}")))
    }
}

/// Parses a bare JSON array of frames.
pub fn frames_from_json_str(input: &str) -> PanelResult<Vec<DataFrame>> {
    let raw: Vec<Value> = serde_json::from_str(input)
        .map_err(|e| PanelError::InvalidData(format!("failed to parse frames: {e}")))?;
    admit_frames(raw)
}

pub fn frames_to_json_pretty(frames: &[DataFrame]) -> PanelResult<String> {
    serde_json::to_string_pretty(frames)
        .map_err(|e| PanelError::InvalidData(format!("failed to serialize frames: {e}")))
}

pub fn frames_to_json_contract_v1_pretty(frames: &[DataFrame]) -> PanelResult<String> {
    let payload = FramesJsonContractV1 {
        schema_version: FRAMES_JSON_SCHEMA_V1,
        frames: frames.to_vec(),
    };
    serde_json::to_string_pretty(&payload).map_err(|e| {
        PanelError::InvalidData(format!("failed to serialize frames contract v1: {e}"))
    })
}

/// Parses either a bare frame array or a [`FramesJsonContractV1`] envelope.
pub fn frames_from_json_compat_str(input: &str) -> PanelResult<Vec<DataFrame>> {
    let raw: Value = serde_json::from_str(input)
        .map_err(|e| PanelError::InvalidData(format!("failed to parse frames json payload: {e}")))?;

    if let Value::Array(frames) = raw {
        return admit_frames(frames);
    }

    let payload: FramesEnvelopeWire = serde_json::from_value(raw).map_err(|e| {
        PanelError::InvalidData(format!(
            "frames json payload is neither an array nor a v1 envelope: {e}"
        ))
    })?;
    if payload.schema_version != FRAMES_JSON_SCHEMA_V1 {
        return Err(PanelError::InvalidData(format!(
            "unsupported frames schema version: {}",
            payload.schema_version
        )));
    }
    admit_frames(payload.frames)
}

fn admit_frames(raw: Vec<Value>) -> PanelResult<Vec<DataFrame>> {
    let frames = raw
        .into_iter()
        .map(admit_frame)
        .collect::<PanelResult<Vec<_>>>()?;
    debug!(frame_count = frames.len(), "decoded frames");
    Ok(frames)
}

fn admit_frame(raw: Value) -> PanelResult<DataFrame> {
    let has_length = raw.get("length").is_some();
    let mut frame: DataFrame = serde_json::from_value(raw)
        .map_err(|e| PanelError::InvalidData(format!("failed to parse frame: {e}")))?;
    if !has_length {
        if let Some(first) = frame.fields.first() {
            trace!(length = first.len(), "inferring frame length from first field");
            frame.length = first.len();
        }
    }
    frame.validate()?;
    Ok(frame)
}

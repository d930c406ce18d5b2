//! timeseries-panel: data preparation for a time-series panel.
//!
//! The crate is host-agnostic: frames come in from a query pipeline, are
//! optionally row-reversed according to the panel's axis options, and go
//! back out to whatever renderer the host uses.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{PanelOptions, prepare_series};
pub use crate::core::{DataFrame, Field, FieldType, has_time_field, reverse_frame, reverse_frames};
pub use error::{PanelError, PanelResult};

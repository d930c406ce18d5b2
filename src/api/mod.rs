mod json_contract;
mod panel_options;
mod series;

pub use json_contract::{
    FRAMES_JSON_SCHEMA_V1, FramesJsonContractV1, frames_from_json_compat_str,
    frames_from_json_str, frames_to_json_contract_v1_pretty, frames_to_json_pretty,
};
pub use panel_options::{PanelOptions, TimeAxisOrientation, TimeDirection};
pub use series::{PreparedSeries, prepare_series, prepare_series_report};

use tracing::{debug, trace};

use crate::core::{DataFrame, has_time_field, reverse_frames};

use super::{PanelOptions, TimeDirection};

/// Series handed to the renderer together with the decision that shaped them.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries {
    pub frames: Vec<DataFrame>,
    pub direction: TimeDirection,
    pub inverted: bool,
}

/// Returns the series the renderer should draw for `options`.
///
/// Rows are reversed only when both the vertical-axis and inversion flags
/// are set; otherwise the frames are returned in their original order and
/// the transform is not invoked.
#[must_use]
pub fn prepare_series(frames: &[DataFrame], options: &PanelOptions) -> Vec<DataFrame> {
    prepare_series_report(frames, options).frames
}

/// Same as [`prepare_series`], also reporting the applied time direction.
#[must_use]
pub fn prepare_series_report(frames: &[DataFrame], options: &PanelOptions) -> PreparedSeries {
    let inverted = options.inversion_enabled();
    debug!(
        frame_count = frames.len(),
        vertical_time_axis = options.vertical_time_axis,
        invert_time_direction = options.invert_time_direction,
        inverted,
        "prepare panel series"
    );

    let frames = if inverted {
        let untimed = frames.iter().filter(|frame| !has_time_field(frame)).count();
        if untimed > 0 {
            trace!(untimed, "reversing frames without a time field");
        }
        reverse_frames(frames)
    } else {
        frames.to_vec()
    };

    PreparedSeries {
        frames,
        direction: options.time_direction(),
        inverted,
    }
}

use crate::core::{DataFrame, Field};

/// Returns a copy of `frame` with the row order reversed.
///
/// Every field is reversed in lock-step regardless of its type, so row `i`
/// of the input becomes row `length - 1 - i` of the output in all fields.
/// Field name/type/config/labels and frame name/meta are carried through.
/// The input is left untouched; value vectors are always freshly allocated.
///
/// Fields whose length disagrees with `frame.length` are reversed as-is
/// without any check.
#[must_use]
pub fn reverse_frame(frame: &DataFrame) -> DataFrame {
    DataFrame {
        name: frame.name.clone(),
        fields: frame.fields.iter().map(reverse_field).collect(),
        length: frame.length,
        meta: frame.meta.clone(),
        extra: frame.extra.clone(),
    }
}

/// Applies [`reverse_frame`] to each frame, keeping batch order.
#[must_use]
pub fn reverse_frames(frames: &[DataFrame]) -> Vec<DataFrame> {
    #[cfg(feature = "parallel-transform")]
    {
        use rayon::prelude::*;
        frames.par_iter().map(reverse_frame).collect()
    }

    #[cfg(not(feature = "parallel-transform"))]
    {
        frames.iter().map(reverse_frame).collect()
    }
}

/// Returns `true` when at least one field carries the time type tag.
#[must_use]
pub fn has_time_field(frame: &DataFrame) -> bool {
    frame.fields.iter().any(Field::is_time)
}

fn reverse_field(field: &Field) -> Field {
    Field {
        name: field.name.clone(),
        field_type: field.field_type.clone(),
        config: field.config.clone(),
        labels: field.labels.clone(),
        values: field.values.iter().rev().cloned().collect(),
        extra: field.extra.clone(),
    }
}

pub mod field;
pub mod frame;
pub mod transform;

pub use field::{Field, FieldConfig, FieldType, Labels};
pub use frame::DataFrame;
pub use transform::{has_time_field, reverse_frame, reverse_frames};

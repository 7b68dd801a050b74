mod config;
mod fields;
mod mapping;

pub use self::config::{Config, SubmitMode};
pub use self::fields::{
    CONFIRM_IDX, DATE_IDX, FIELD_COUNT, FIELDS, FieldDescriptor, HOURS_IDX, ISSUE_LINK_IDX,
    PROGRESS_IDX, PROJECT_IDX, field, format_display_date, validate_hours,
};
pub use self::mapping::{FieldMapping, FormField};

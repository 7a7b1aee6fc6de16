#![deny(rust_2018_idioms)]

mod app;
mod domain;
mod form;
mod io;
mod presentation;

pub use app::{
    Clock, ConfirmAnswer, ConfirmState, DEFAULT_OUTPUT_FILE, DEFAULT_STATUS_TIMEOUT, DEFAULT_TITLE,
    DataEntryUI, EXIT_QUESTION, EXIT_TITLE, FormController, HEADING, KeyAction, ManualClock,
    RunSummary, SAVED_STATUS, Scheduler, StatusBoard, StatusKind, SystemClock, TimerHandle,
    TimerQueue, TimerTask, UiOptions, classify,
};
pub use domain::{FieldDefinition, FieldSet, parse_labels};
pub use form::{
    EXEMPT_FIELD_INDEX, FieldState, Focus, FormState, SaveError, ValidationError, validate_row,
};
pub use io::{AppendOutcome, ColumnFormat, DEFAULT_COLUMN_WIDTH, OutputFile, Overflow};

pub mod prelude {
    pub use super::{ColumnFormat, DataEntryUI, FieldSet, Overflow, UiOptions, parse_labels};
}

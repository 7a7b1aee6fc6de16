mod confirm;
mod controller;
mod data_entry;
mod input;
mod keymap;
mod options;
mod runtime;
mod scheduler;
mod status;
mod terminal;

pub use confirm::{ConfirmAnswer, ConfirmState, EXIT_QUESTION, EXIT_TITLE};
pub use controller::FormController;
pub use data_entry::{DEFAULT_OUTPUT_FILE, DataEntryUI};
pub use input::{KeyAction, classify};
pub use options::{DEFAULT_STATUS_TIMEOUT, DEFAULT_TITLE, UiOptions};
pub use runtime::{HEADING, RunSummary};
pub use scheduler::{
    Clock, ManualClock, Scheduler, SystemClock, TimerHandle, TimerQueue, TimerTask,
};
pub use status::{SAVED_STATUS, StatusBoard, StatusKind};

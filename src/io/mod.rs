mod format;
mod output;

pub use format::{ColumnFormat, DEFAULT_COLUMN_WIDTH, Overflow};
pub use output::{AppendOutcome, OutputFile};

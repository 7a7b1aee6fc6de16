use std::time::Duration;

use crate::io::ColumnFormat;

pub const DEFAULT_TITLE: &str = "Data Entry GUI";
pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub status_timeout: Duration,
    pub confirm_exit: bool,
    pub show_help: bool,
    pub title: String,
    pub column_format: ColumnFormat,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            status_timeout: DEFAULT_STATUS_TIMEOUT,
            confirm_exit: true,
            show_help: true,
            title: DEFAULT_TITLE.to_string(),
            column_format: ColumnFormat::default(),
        }
    }
}

impl UiOptions {
    pub fn with_status_timeout(mut self, timeout: Duration) -> Self {
        self.status_timeout = timeout;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_column_format(mut self, format: ColumnFormat) -> Self {
        self.column_format = format;
        self
    }
}

pub const SAVED_STATUS: &str = "Data saved successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// The two status lines under the form. Only one of them holds text at a time.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    success: String,
    error: String,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, kind: StatusKind, msg: impl Into<String>) {
        let msg = msg.into();
        match kind {
            StatusKind::Success => {
                self.success = msg;
                self.error.clear();
            }
            StatusKind::Error => {
                self.error = msg;
                self.success.clear();
            }
        }
    }

    pub fn clear(&mut self) {
        self.success.clear();
        self.error.clear();
    }

    pub fn success(&self) -> &str {
        &self.success
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_clear(&self) -> bool {
        self.success.is_empty() && self.error.is_empty()
    }
}

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::domain::FieldSet;

use super::{
    controller::FormController,
    options::UiOptions,
    runtime::{App, RunSummary},
};

pub const DEFAULT_OUTPUT_FILE: &str = "data.txt";

/// Entry point: a form over `fields` that appends rows to `output_path`.
#[derive(Debug)]
pub struct DataEntryUI {
    fields: FieldSet,
    output_path: PathBuf,
    options: UiOptions,
}

impl DataEntryUI {
    pub fn new(fields: FieldSet) -> Self {
        Self {
            fields,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            options: UiOptions::default(),
        }
    }

    pub fn with_output_file(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Run until the user confirms exit.
    pub fn run(self) -> Result<RunSummary> {
        let DataEntryUI {
            fields,
            output_path,
            options,
        } = self;

        info!(
            fields = fields.len(),
            output = %output_path.display(),
            "starting data entry form"
        );
        let controller = FormController::new(fields, output_path, &options);
        let mut app = App::new(controller, options);
        app.run()
    }
}

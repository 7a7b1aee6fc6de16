use std::path::Path;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{
    domain::FieldSet,
    form::{Focus, FormState, SaveError, validate_row},
    io::OutputFile,
};

use super::{
    confirm::{ConfirmAnswer, ConfirmState},
    options::UiOptions,
    scheduler::{Scheduler, TimerHandle, TimerQueue, TimerTask},
    status::{SAVED_STATUS, StatusBoard, StatusKind},
};

/// Owns the form values and drives save, status and exit handling.
///
/// All methods run on the UI thread; the runtime forwards user actions here
/// and draws whatever state results.
#[derive(Debug)]
pub struct FormController<S: Scheduler = TimerQueue> {
    form: FormState,
    output: OutputFile,
    status: StatusBoard,
    scheduler: S,
    pending_clear: Option<TimerHandle>,
    status_timeout: Duration,
    confirm_exit: bool,
    exit_prompt: Option<ConfirmState>,
    should_quit: bool,
    rows_saved: usize,
}

impl FormController<TimerQueue> {
    pub fn new(fields: FieldSet, output_path: impl AsRef<Path>, options: &UiOptions) -> Self {
        Self::with_scheduler(fields, output_path, options, TimerQueue::new())
    }
}

impl<S: Scheduler> FormController<S> {
    pub fn with_scheduler(
        fields: FieldSet,
        output_path: impl AsRef<Path>,
        options: &UiOptions,
        scheduler: S,
    ) -> Self {
        Self {
            form: FormState::new(fields),
            output: OutputFile::new(output_path).with_format(options.column_format),
            status: StatusBoard::new(),
            scheduler,
            pending_clear: None,
            status_timeout: options.status_timeout,
            confirm_exit: options.confirm_exit,
            exit_prompt: None,
            should_quit: false,
            rows_saved: 0,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn output(&self) -> &OutputFile {
        &self.output
    }

    pub fn status(&self) -> &StatusBoard {
        &self.status
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn exit_prompt(&self) -> Option<&ConfirmState> {
        self.exit_prompt.as_ref()
    }

    pub fn exit_prompt_mut(&mut self) -> Option<&mut ConfirmState> {
        self.exit_prompt.as_mut()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn rows_saved(&self) -> usize {
        self.rows_saved
    }

    /// Validate the current values and append them to the output file.
    ///
    /// Success clears the inputs; any failure leaves them untouched. Either way
    /// the outcome is shown on the status lines.
    pub fn save(&mut self) -> Result<(), SaveError> {
        match self.try_save() {
            Ok(()) => {
                self.form.clear_values();
                self.form.set_focus(Focus::Field(0));
                self.rows_saved += 1;
                self.show_status(StatusKind::Success, SAVED_STATUS);
                Ok(())
            }
            Err(err) => {
                self.show_status(StatusKind::Error, err.to_string());
                Err(err)
            }
        }
    }

    fn try_save(&self) -> Result<(), SaveError> {
        let values = self.form.values();
        let fields = self.form.fields();
        let row = validate_row(fields, &values).inspect_err(|err| {
            debug!(label = %err.label, index = err.index, "row rejected");
        })?;
        let header = fields.labels();
        let path = self.output.path();
        match self.output.append(header.as_slice(), row) {
            Ok(outcome) => {
                info!(
                    path = %path.display(),
                    header_written = outcome.header_written,
                    bytes = outcome.bytes_written,
                    "row appended"
                );
                Ok(())
            }
            Err(source) => {
                warn!(path = %path.display(), error = %source, "failed to append row");
                Err(SaveError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    pub fn clear_status(&mut self) {
        if let Some(handle) = self.pending_clear.take() {
            self.scheduler.cancel(handle);
        }
        if !self.status.is_clear() {
            debug!("status cleared");
        }
        self.status.clear();
    }

    /// Set a status line and restart the countdown that clears it.
    fn show_status(&mut self, kind: StatusKind, msg: impl Into<String>) {
        let msg = msg.into();
        debug!(?kind, %msg, "status set");
        self.status.set(kind, msg);
        if let Some(handle) = self.pending_clear.take() {
            self.scheduler.cancel(handle);
        }
        let handle = self
            .scheduler
            .schedule(self.status_timeout, TimerTask::ClearStatus);
        self.pending_clear = Some(handle);
    }

    /// Run timers whose deadline has passed.
    pub fn tick(&mut self) {
        for task in self.scheduler.take_due() {
            match task {
                TimerTask::ClearStatus => {
                    debug!("status timed out");
                    self.pending_clear = None;
                    self.status.clear();
                }
            }
        }
    }

    /// Time the event loop may sleep before `tick` has work to do.
    pub fn until_next_timer(&self) -> Option<Duration> {
        self.scheduler.until_next()
    }

    pub fn request_exit(&mut self) {
        if !self.confirm_exit {
            self.should_quit = true;
            return;
        }
        if self.exit_prompt.is_none() {
            debug!("exit requested");
            self.exit_prompt = Some(ConfirmState::exit());
        }
    }

    /// Resolve the open exit prompt; `None` dismisses it like "no".
    pub fn answer_exit(&mut self, answer: Option<ConfirmAnswer>) {
        if self.exit_prompt.take().is_none() {
            return;
        }
        if answer == Some(ConfirmAnswer::Yes) {
            info!(rows_saved = self.rows_saved, "exit confirmed");
            self.should_quit = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::scheduler::ManualClock;
    use std::{
        fs, io,
        sync::{Arc, Mutex},
    };

    fn controller(dir: &tempfile::TempDir) -> FormController<TimerQueue<ManualClock>> {
        let fields = FieldSet::new(["ID", "Name", "Age"]).expect("fields");
        FormController::with_scheduler(
            fields,
            dir.path().join("data.txt"),
            &UiOptions::default(),
            TimerQueue::with_clock(ManualClock::new()),
        )
    }

    fn fill(controller: &mut FormController<TimerQueue<ManualClock>>, values: &[&str]) {
        for (index, value) in values.iter().enumerate() {
            controller.form_mut().set_value(index, *value);
        }
    }

    #[test]
    fn failed_validation_keeps_values_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(&dir);
        fill(&mut controller, &["", "", "30"]);

        let err = controller.save().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(controller.status().error(), "Name must not be empty");
        assert_eq!(controller.form().values(), vec!["", "", "30"]);
        assert!(!controller.output().path().exists());
    }

    #[test]
    fn successful_save_clears_inputs_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(&dir);
        fill(&mut controller, &["1", "Ann", "30"]);
        controller.form_mut().set_focus(Focus::Save);

        controller.save().unwrap();
        assert_eq!(controller.status().success(), SAVED_STATUS);
        assert!(!controller.form().is_dirty());
        assert_eq!(controller.form().focus(), Focus::Field(0));
        assert_eq!(controller.rows_saved(), 1);
        let contents = fs::read_to_string(controller.output().path()).unwrap();
        assert!(contents.ends_with("1              \tAnn            \t30             \n"));
    }

    #[test]
    fn io_failure_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let fields = FieldSet::new(["ID", "Name"]).expect("fields");
        let mut controller = FormController::with_scheduler(
            fields,
            dir.path(),
            &UiOptions::default(),
            TimerQueue::with_clock(ManualClock::new()),
        );
        controller.form_mut().set_value(1, "Ann");

        let err = controller.save().unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
        assert!(
            controller
                .status()
                .error()
                .starts_with("An unexpected error occurred: ")
        );
        assert_eq!(controller.form().value(1), Some("Ann"));
        assert_eq!(controller.rows_saved(), 0);
    }

    #[test]
    fn status_clears_after_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(&dir);
        fill(&mut controller, &["1", "Ann", "30"]);
        controller.save().unwrap();
        let clock = controller.scheduler().clock().clone();

        clock.advance(Duration::from_millis(2999));
        controller.tick();
        assert_eq!(controller.status().success(), SAVED_STATUS);

        clock.advance(Duration::from_millis(1));
        controller.tick();
        assert!(controller.status().is_clear());
        assert_eq!(controller.until_next_timer(), None);
    }

    #[test]
    fn new_status_supersedes_pending_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(&dir);
        let clock = controller.scheduler().clock().clone();

        let _ = controller.save();
        clock.advance(Duration::from_millis(2000));
        fill(&mut controller, &["1", "Ann", "30"]);
        controller.save().unwrap();
        assert_eq!(controller.scheduler().len(), 1);

        clock.advance(Duration::from_millis(1500));
        controller.tick();
        assert_eq!(controller.status().success(), SAVED_STATUS);

        clock.advance(Duration::from_millis(1500));
        controller.tick();
        assert!(controller.status().is_clear());
    }

    #[test]
    fn exit_prompt_yes_quits_and_no_keeps_running() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(&dir);
        fill(&mut controller, &["1", "Ann", ""]);

        controller.request_exit();
        assert!(controller.exit_prompt().is_some());
        controller.answer_exit(Some(ConfirmAnswer::No));
        assert!(controller.exit_prompt().is_none());
        assert!(!controller.should_quit());
        assert_eq!(controller.form().values(), vec!["1", "Ann", ""]);

        controller.request_exit();
        controller.answer_exit(None);
        assert!(!controller.should_quit());

        controller.request_exit();
        controller.answer_exit(Some(ConfirmAnswer::Yes));
        assert!(controller.should_quit());
    }

    #[test]
    fn exit_without_confirmation_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let fields = FieldSet::new(["ID"]).expect("fields");
        let options = UiOptions::default().with_confirm_exit(false);
        let mut controller = FormController::with_scheduler(
            fields,
            dir.path().join("data.txt"),
            &options,
            TimerQueue::with_clock(ManualClock::new()),
        );
        controller.request_exit();
        assert!(controller.exit_prompt().is_none());
        assert!(controller.should_quit());
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn status_changes_are_logged_at_debug() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = controller(&dir);
        let clock = controller.scheduler().clock().clone();
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _ = controller.save();
            controller.clear_status();
            fill(&mut controller, &["1", "Ann", "30"]);
            controller.save().unwrap();
            clock.advance(Duration::from_millis(3000));
            controller.tick();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("status set"));
        assert!(output.contains("Name must not be empty"));
        assert!(output.contains("status cleared"));
        assert!(output.contains("status timed out"));
    }
}

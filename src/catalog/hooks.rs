//! Optional UI collaborators invoked around a product submission.

use std::fmt;
use std::sync::{Arc, Mutex};

type Signal = Box<dyn Fn() + Send + Sync>;
type Notify = Box<dyn Fn(&str) + Send + Sync>;

/// Named callback slots, each independently optional. Notifications without
/// a registered handler go to the alert sink.
pub struct SubmitHooks {
    pub on_loading_start: Option<Signal>,
    pub on_loading_end: Option<Signal>,
    pub on_success: Option<Notify>,
    pub on_error: Option<Notify>,
    /// Called after a successful submission so the caller can clear its form
    /// and image preview.
    pub on_reset: Option<Signal>,
    trigger: Option<Arc<Mutex<SaveTrigger>>>,
    alert: Notify,
}

impl Default for SubmitHooks {
    fn default() -> Self {
        Self {
            on_loading_start: None,
            on_loading_end: None,
            on_success: None,
            on_error: None,
            on_reset: None,
            trigger: None,
            alert: Box::new(|message| eprintln!("{message}")),
        }
    }
}

impl fmt::Debug for SubmitHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitHooks")
            .field("on_loading_start", &self.on_loading_start.is_some())
            .field("on_loading_end", &self.on_loading_end.is_some())
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_reset", &self.on_reset.is_some())
            .field("trigger", &self.trigger)
            .finish_non_exhaustive()
    }
}

impl SubmitHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_loading_start(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_loading_start = Some(Box::new(hook));
        self
    }

    pub fn on_loading_end(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_loading_end = Some(Box::new(hook));
        self
    }

    pub fn on_success(mut self, hook: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(hook));
        self
    }

    pub fn on_error(mut self, hook: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(hook));
        self
    }

    pub fn on_reset(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_reset = Some(Box::new(hook));
        self
    }

    /// Replaces the fallback used when no success or error notifier is set.
    pub fn with_alert(mut self, alert: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.alert = Box::new(alert);
        self
    }

    /// Drives `trigger` through the submission phases.
    pub fn with_trigger(mut self, trigger: Arc<Mutex<SaveTrigger>>) -> Self {
        self.trigger = Some(trigger);
        self
    }

    fn update_trigger(&self, apply: impl FnOnce(&mut SaveTrigger)) {
        if let Some(trigger) = &self.trigger {
            if let Ok(mut trigger) = trigger.lock() {
                apply(&mut trigger);
            }
        }
    }

    pub(crate) fn loading_started(&self) {
        self.update_trigger(SaveTrigger::begin);
        if let Some(hook) = &self.on_loading_start {
            hook();
        }
    }

    pub(crate) fn loading_ended(&self) {
        self.update_trigger(SaveTrigger::settle);
        if let Some(hook) = &self.on_loading_end {
            hook();
        }
    }

    pub(crate) fn succeeded(&self, message: &str) {
        self.update_trigger(|trigger| trigger.finish(true));
        match &self.on_success {
            Some(hook) => hook(message),
            None => (self.alert)(message),
        }
    }

    pub(crate) fn failed(&self, message: &str) {
        self.update_trigger(|trigger| trigger.finish(false));
        match &self.on_error {
            Some(hook) => hook(message),
            None => (self.alert)(message),
        }
    }

    pub(crate) fn reset(&self) {
        if let Some(hook) = &self.on_reset {
            hook();
        }
    }
}

/// Phases of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Keeps the loading indicator on for as long as it lives. Dropping it,
/// on any path, fires the loading-end hook.
pub(crate) struct LoadingGuard<'a> {
    hooks: &'a SubmitHooks,
}

impl<'a> LoadingGuard<'a> {
    pub(crate) fn start(hooks: &'a SubmitHooks) -> Self {
        hooks.loading_started();
        Self { hooks }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.hooks.loading_ended();
    }
}

/// A trigger such as a save button: disabled with a busy label while a
/// submission is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTrigger {
    idle_label: String,
    busy_label: String,
    phase: SubmitPhase,
}

impl Default for SaveTrigger {
    fn default() -> Self {
        Self::new("SAVE PRODUCT", "Saving...")
    }
}

impl SaveTrigger {
    pub fn new(idle_label: impl Into<String>, busy_label: impl Into<String>) -> Self {
        Self {
            idle_label: idle_label.into(),
            busy_label: busy_label.into(),
            phase: SubmitPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_enabled(&self) -> bool {
        self.phase != SubmitPhase::Submitting
    }

    pub fn label(&self) -> &str {
        match self.phase {
            SubmitPhase::Submitting => &self.busy_label,
            _ => &self.idle_label,
        }
    }

    pub fn begin(&mut self) {
        self.phase = SubmitPhase::Submitting;
    }

    /// Records the outcome of the submission that just finished.
    pub fn finish(&mut self, succeeded: bool) {
        self.phase = if succeeded {
            SubmitPhase::Succeeded
        } else {
            SubmitPhase::Failed
        };
    }

    /// Returns to `Idle`, restoring the idle label.
    pub fn settle(&mut self) {
        self.phase = SubmitPhase::Idle;
    }
}

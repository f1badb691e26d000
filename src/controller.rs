use crate::config::CONFIG;
use crate::error::FormError;
use crate::models::FieldKey;
use crate::services::{NavigationService, SubmitService};
use crate::state::{apply_completion, apply_field_edit, apply_submit, FormState, Transition};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Owns one form instance: its state cell, the pending completion and the
/// capabilities used to send and to leave.
///
/// Clones share the same instance. Call [`dispose`](Self::dispose) when the
/// view goes away so a pending completion cannot land afterwards.
pub struct SupportFormController<S: SubmitService, N: NavigationService> {
    state: Arc<watch::Sender<FormState>>,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
    disposed: Arc<AtomicBool>,
    submit_service: S,
    navigation: N,
    dashboard_route: String,
}

impl<S: SubmitService, N: NavigationService> Clone for SupportFormController<S, N> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            pending: self.pending.clone(),
            disposed: self.disposed.clone(),
            submit_service: self.submit_service.clone(),
            navigation: self.navigation.clone(),
            dashboard_route: self.dashboard_route.clone(),
        }
    }
}

impl<S: SubmitService, N: NavigationService> SupportFormController<S, N> {
    pub fn new(submit_service: S, navigation: N) -> Self {
        Self::with_dashboard_route(submit_service, navigation, CONFIG.dashboard_route.clone())
    }

    pub fn with_dashboard_route(
        submit_service: S,
        navigation: N,
        dashboard_route: impl Into<String>,
    ) -> Self {
        let (tx, _rx) = watch::channel(FormState::default());
        Self {
            state: Arc::new(tx),
            pending: Arc::new(Mutex::new(None)),
            disposed: Arc::new(AtomicBool::new(false)),
            submit_service,
            navigation,
            dashboard_route: dashboard_route.into(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    pub fn edit(&self, field: FieldKey, value: &str) -> Result<(), FormError> {
        self.edit_field(field.as_str(), value)
    }

    /// Writes one field while the form is idle. Edits in any other phase are dropped.
    pub fn edit_field(&self, field_name: &str, value: &str) -> Result<(), FormError> {
        let current = self.state();
        match apply_field_edit(&current, field_name, value)? {
            Transition::Applied(next) => {
                debug!("Field {} updated", field_name);
                self.state.send_replace(next);
            }
            Transition::Ignored => {
                debug!(
                    "Ignoring edit of {} while {:?}",
                    field_name, current.submission
                );
            }
        }
        Ok(())
    }

    /// Starts sending the request. Returns `Ok(false)` when a submit is
    /// already in flight or done, and a validation error when required
    /// fields are empty.
    pub fn submit(&self) -> Result<bool, FormError> {
        if self.is_disposed() {
            return Ok(false);
        }

        let current = self.state();
        let next = match apply_submit(&current) {
            Ok(Transition::Applied(next)) => next,
            Ok(Transition::Ignored) => {
                debug!("Ignoring submit while {:?}", current.submission);
                return Ok(false);
            }
            Err(e) => {
                warn!("Support request rejected: {}", e);
                return Err(e);
            }
        };

        let fields = next.fields.clone();
        self.state.send_replace(next);
        info!("Submitting support request ({})", fields.urgency);

        let service = self.submit_service.clone();
        let state = self.state.clone();
        let disposed = self.disposed.clone();
        let handle = tokio::spawn(async move {
            let receipt = service.submit(fields).await;
            state.send_if_modified(|current| {
                if disposed.load(Ordering::SeqCst) {
                    debug!("Dropping completion for disposed form");
                    return false;
                }
                match apply_completion(current, receipt) {
                    Transition::Applied(next) => {
                        info!("Support request submitted");
                        *current = next;
                        true
                    }
                    Transition::Ignored => {
                        debug!("Dropping stale completion while {:?}", current.submission);
                        false
                    }
                }
            });
        });

        *self.pending.lock().unwrap_or_else(|e| e.into_inner()) = Some(handle);
        Ok(true)
    }

    /// Leaves the confirmation screen for the dashboard. Only valid once submitted.
    pub fn acknowledge_and_return(&self) -> bool {
        if !self.state.borrow().is_submitted() {
            debug!("Acknowledge ignored before submission completed");
            return false;
        }
        self.navigation.navigate_to(&self.dashboard_route);
        true
    }

    /// Back button; available in every phase and leaves state untouched.
    pub fn go_back(&self) {
        self.navigation.navigate_to(&self.dashboard_route);
    }

    /// Cancels any pending completion. Later completions and submits are dropped.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        let handle = self.pending.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(handle) = handle {
            if !handle.is_finished() {
                debug!("Cancelling pending support request completion");
            }
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubmissionState;
    use crate::services::SimulatedSubmitService;
    use std::time::Duration;

    const DELAY: Duration = Duration::from_millis(2000);

    #[derive(Clone)]
    struct NoNavigation;

    impl NavigationService for NoNavigation {
        fn navigate_to(&self, _destination: &str) {}
    }

    fn filled() -> SupportFormController<SimulatedSubmitService, NoNavigation> {
        let controller = SupportFormController::with_dashboard_route(
            SimulatedSubmitService::new(DELAY),
            NoNavigation,
            "/dashboard",
        );
        for (field, value) in [
            ("name", "Jane Doe"),
            ("email", "jane@x.com"),
            ("subject", "Help"),
            ("message", "My transfer is delayed"),
        ] {
            controller.edit_field(field, value).unwrap();
        }
        controller
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_cancels_after_pending_lock_poisoned() {
        let controller = filled();
        let pending = controller.pending.clone();
        let _ = std::thread::spawn(move || {
            let _guard = pending.lock().unwrap();
            panic!("poison pending slot");
        })
        .join();
        assert!(controller.pending.is_poisoned());

        assert_eq!(controller.submit(), Ok(true));
        assert!(controller
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some());

        controller.dispose();
        assert!(controller
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_none());

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(controller.state().submission, SubmissionState::Submitting);
    }
}

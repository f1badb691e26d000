use crate::components::toast::ToastManager;
use crate::controller::SupportFormController;
use crate::error::FormError;
use crate::models::FieldKey;
use crate::services::{NavigationService, RouterNavigation, SimulatedSubmitService, SubmitService};
use crate::state::FormState;
use dioxus::prelude::*;

/// Signals of a mounted support form plus the actions the view can take.
pub struct SupportFormState<S: SubmitService, N: NavigationService> {
    pub form: Signal<FormState>,
    /// Required fields the last rejected submit found empty.
    pub missing: Signal<Vec<FieldKey>>,
    controller: CopyValue<SupportFormController<S, N>>,
    toasts: ToastManager,
}

impl<S: SubmitService, N: NavigationService> Clone for SupportFormState<S, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: SubmitService, N: NavigationService> Copy for SupportFormState<S, N> {}

impl<S: SubmitService, N: NavigationService> SupportFormState<S, N> {
    pub fn edit(&self, field: FieldKey, value: String) {
        let mut missing = self.missing;
        let result = self.controller.read().edit(field, &value);
        match result {
            Ok(()) => {
                if !value.is_empty() && missing.peek().contains(&field) {
                    missing.write().retain(|key| *key != field);
                }
            }
            Err(e @ FormError::InvalidField(_)) => {
                tracing::error!("Support form wiring error: {}", e);
            }
            Err(e) => {
                let mut toasts = self.toasts;
                toasts.show_error(&e);
            }
        }
        self.sync();
    }

    pub fn submit(&self) {
        let mut missing = self.missing;
        let result = self.controller.read().submit();
        match result {
            Ok(_) => missing.set(Vec::new()),
            Err(e) => {
                if let FormError::Validation { missing: keys } = &e {
                    missing.set(keys.clone());
                }
                let mut toasts = self.toasts;
                toasts.show_error(&e);
            }
        }
        self.sync();
    }

    pub fn acknowledge_and_return(&self) {
        self.controller.read().acknowledge_and_return();
    }

    pub fn go_back(&self) {
        self.controller.read().go_back();
    }

    fn sync(&self) {
        let mut form = self.form;
        let latest = self.controller.read().state();
        if *form.peek() != latest {
            form.set(latest);
        }
    }
}

/// Support form wired to the simulated transport and the app router.
pub fn use_support_form() -> SupportFormState<SimulatedSubmitService, RouterNavigation> {
    let nav = use_navigator();
    let submit_service = use_hook(SimulatedSubmitService::default);
    use_support_form_with_service(submit_service, RouterNavigation::new(nav))
}

pub fn use_support_form_with_service<S: SubmitService, N: NavigationService>(
    submit_service: S,
    navigation: N,
) -> SupportFormState<S, N> {
    let inner = use_hook(move || SupportFormController::new(submit_service, navigation));
    let controller = use_hook({
        let inner = inner.clone();
        move || CopyValue::new(inner)
    });
    let mut form = use_signal(|| controller.read().state());
    let missing = use_signal(Vec::new);
    let toasts = use_context::<ToastManager>();

    // Completion lands from a background task; mirror it into the signal.
    use_future(move || {
        let mut rx = controller.read().subscribe();
        let mut toasts = toasts;
        async move {
            while rx.changed().await.is_ok() {
                let latest = rx.borrow_and_update().clone();
                if *form.peek() == latest {
                    continue;
                }
                let receipt = match latest.receipt.as_ref() {
                    Some(receipt) if !form.peek().is_submitted() => Some(receipt.clone()),
                    _ => None,
                };
                form.set(latest);
                if let Some(receipt) = receipt {
                    toasts.show_sent(&receipt);
                }
            }
        }
    });

    use_drop(move || inner.dispose());

    SupportFormState {
        form,
        missing,
        controller,
        toasts,
    }
}

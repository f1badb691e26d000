#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use support_desk::controller::SupportFormController;
use support_desk::models::{FormFields, SubmissionReceipt};
use support_desk::services::{NavigationService, SimulatedSubmitService, SubmitService};

pub const DELAY: Duration = Duration::from_millis(2000);

/// Simulated transport that also counts how often it was asked to send.
#[derive(Clone)]
pub struct CountingSubmitService {
    inner: SimulatedSubmitService,
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<FormFields>>>,
}

impl CountingSubmitService {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: SimulatedSubmitService::new(delay),
            calls: Arc::new(AtomicUsize::new(0)),
            last: Arc::new(Mutex::new(None)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<FormFields> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmitService for CountingSubmitService {
    async fn submit(&self, fields: FormFields) -> SubmissionReceipt {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(fields.clone());
        self.inner.submit(fields).await
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigation {
    destinations: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigation {
    pub fn destinations(&self) -> Vec<String> {
        self.destinations.lock().unwrap().clone()
    }
}

impl NavigationService for RecordingNavigation {
    fn navigate_to(&self, destination: &str) {
        self.destinations.lock().unwrap().push(destination.to_string());
    }
}

pub type TestController = SupportFormController<CountingSubmitService, RecordingNavigation>;

pub fn controller() -> (TestController, CountingSubmitService, RecordingNavigation) {
    let service = CountingSubmitService::new(DELAY);
    let navigation = RecordingNavigation::default();
    let controller = SupportFormController::with_dashboard_route(
        service.clone(),
        navigation.clone(),
        "/dashboard",
    );
    (controller, service, navigation)
}

pub fn fill(controller: &TestController, values: &[(&str, &str)]) {
    for (field, value) in values {
        controller.edit_field(field, value).unwrap();
    }
}

pub const JANE: &[(&str, &str)] = &[
    ("name", "Jane Doe"),
    ("email", "jane@x.com"),
    ("subject", "Help"),
    ("message", "My transfer is delayed"),
    ("urgency", "high"),
];

/// Transport that runs a hook right before handing back the receipt.
#[derive(Clone, Default)]
pub struct HookedSubmitService {
    on_receipt: Arc<Mutex<Option<Box<dyn Fn() + Send + Sync>>>>,
}

impl HookedSubmitService {
    pub fn on_receipt(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.on_receipt.lock().unwrap() = Some(Box::new(hook));
    }
}

#[async_trait]
impl SubmitService for HookedSubmitService {
    async fn submit(&self, fields: FormFields) -> SubmissionReceipt {
        let receipt = SimulatedSubmitService::new(DELAY).submit(fields).await;
        if let Some(hook) = self.on_receipt.lock().unwrap().as_ref() {
            hook();
        }
        receipt
    }
}

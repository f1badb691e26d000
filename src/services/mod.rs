pub mod navigation;
pub mod submit;

use crate::models::{FormFields, SubmissionReceipt};
use async_trait::async_trait;

pub use navigation::RouterNavigation;
pub use submit::SimulatedSubmitService;

/// Transport for a frozen support request.
///
/// The returned future is the completion signal: it resolves once the
/// request has been delivered. There is no failure branch.
#[async_trait]
pub trait SubmitService: Clone + Send + Sync + 'static {
    async fn submit(&self, fields: FormFields) -> SubmissionReceipt;
}

/// Leaves the form for another part of the app.
pub trait NavigationService: Clone + 'static {
    fn navigate_to(&self, destination: &str);
}

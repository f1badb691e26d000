use super::SubmitService;
use crate::config::CONFIG;
use crate::models::{FormFields, SubmissionReceipt};
use async_trait::async_trait;
use chrono::Utc;
use rand::RngCore;
use std::time::Duration;
use tracing::info;

/// Stand-in transport that waits a fixed delay and always succeeds.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedSubmitService {
    delay: Duration,
}

impl SimulatedSubmitService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitService {
    fn default() -> Self {
        Self::new(CONFIG.submit_delay)
    }
}

#[async_trait]
impl SubmitService for SimulatedSubmitService {
    async fn submit(&self, fields: FormFields) -> SubmissionReceipt {
        let payload_len = serde_json::to_vec(&fields).map(|b| b.len()).unwrap_or(0);
        info!(
            "Sending support request ({} bytes, urgency {})",
            payload_len, fields.urgency
        );

        tokio::time::sleep(self.delay).await;

        let receipt = SubmissionReceipt {
            reference: generate_reference(),
            submitted_at: Utc::now().timestamp(),
        };
        info!("Support request delivered as {}", receipt.reference);
        receipt
    }
}

/// Support ID in the `XXXX-XXXX-XXXX` form shown on the confirmation screen.
pub fn generate_reference() -> String {
    let mut bytes = [0u8; 6];
    rand::thread_rng().fill_bytes(&mut bytes);
    let encoded = hex::encode_upper(bytes);
    format!("{}-{}-{}", &encoded[0..4], &encoded[4..8], &encoded[8..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_format() {
        let reference = generate_reference();
        assert_eq!(reference.len(), 14);
        let groups: Vec<&str> = reference.split('-').collect();
        assert_eq!(groups.len(), 3);
        for group in groups {
            assert_eq!(group.len(), 4);
            assert!(group
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submit_waits_for_delay() {
        let service = SimulatedSubmitService::new(Duration::from_millis(2000));
        let started = tokio::time::Instant::now();
        let receipt = service.submit(FormFields::default()).await;
        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(receipt.reference.len(), 14);
    }
}

//! Assistant Service - delivers heuristic explanations after a fixed latency.
//!
//! Each request is spawned on the tokio runtime, sleeps for the configured
//! latency, runs the classifier and hands the reply to the caller's callback.
//! Requests are numbered; a reply whose number is older than the latest
//! issued request is flagged `superseded` but still delivered.

use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use syscalc_core::assistant::{AssistantReply, AssistantTrait, ReplyCallback};

use crate::heuristics;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the assistant service.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Artificial delay before every reply.
    pub latency: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(1500),
        }
    }
}

// ============================================================================
// Service Implementation
// ============================================================================

/// Assistant service implementation.
pub struct AssistantService {
    config: AssistantConfig,
    issued: Arc<AtomicU64>,
}

impl AssistantService {
    /// Create a new assistant service.
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            config,
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of requests issued so far.
    pub fn issued_requests(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

impl Default for AssistantService {
    fn default() -> Self {
        Self::new(AssistantConfig::default())
    }
}

impl AssistantTrait for AssistantService {
    fn explain(&self, input: &str, module_name: &str) -> String {
        heuristics::analyze(input, module_name)
    }

    fn request_explanation(
        &self,
        input: &str,
        module_name: &str,
        on_ready: ReplyCallback,
    ) -> JoinHandle<()> {
        let request_id = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let issued = self.issued.clone();
        let latency = self.config.latency;
        let input = input.to_string();
        let module_name = module_name.to_string();

        debug!(
            "Assistant request {} for module {} queued ({:?} latency)",
            request_id, module_name, latency
        );

        tokio::spawn(async move {
            tokio::time::sleep(latency).await;

            let explanation = heuristics::analyze(&input, &module_name);
            let latest = issued.load(Ordering::SeqCst);
            let superseded = latest > request_id;
            if superseded {
                warn!(
                    "Assistant request {} delivered after newer request {}",
                    request_id, latest
                );
            }

            on_ready(AssistantReply {
                request_id,
                explanation,
                superseded,
            });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::time::Instant;

    use crate::heuristics::{EMPTY_INPUT, FINANCE_EXPLANATION};

    type Inbox = Arc<Mutex<Vec<AssistantReply>>>;

    fn collector(inbox: &Inbox) -> ReplyCallback {
        let inbox = inbox.clone();
        Box::new(move |reply| inbox.lock().unwrap().push(reply))
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_is_delivered_after_latency() {
        let service = AssistantService::default();
        let inbox: Inbox = Arc::default();
        let start = Instant::now();

        service
            .request_explanation("", "Basic", collector(&inbox))
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1500));
        let replies = inbox.lock().unwrap();
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].explanation, EMPTY_INPUT);
        assert_eq!(replies[0].request_id, 1);
        assert!(!replies[0].superseded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_is_delivered_before_latency() {
        let service = AssistantService::default();
        let inbox: Inbox = Arc::default();

        let handle = service.request_explanation("1000,10,5", "Finance", collector(&inbox));
        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(inbox.lock().unwrap().is_empty());

        handle.await.unwrap();
        assert_eq!(inbox.lock().unwrap()[0].explanation, FINANCE_EXPLANATION);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_requests_both_deliver() {
        let service = AssistantService::new(AssistantConfig {
            latency: Duration::from_millis(200),
        });
        let inbox: Inbox = Arc::default();

        let first = service.request_explanation("2+2", "Basic", collector(&inbox));
        let second = service.request_explanation("3+3", "Basic", collector(&inbox));
        first.await.unwrap();
        second.await.unwrap();

        let mut replies = inbox.lock().unwrap().clone();
        replies.sort_by_key(|r| r.request_id);
        assert_eq!(replies.len(), 2);
        assert!(replies[0].superseded);
        assert!(!replies[1].superseded);
        assert!(replies[1].explanation.ends_with("6"));
        assert_eq!(service.issued_requests(), 2);
    }

    #[test]
    fn test_explain_is_synchronous() {
        let service = AssistantService::default();
        assert_eq!(service.explain("1000,10,5", "Finance"), FINANCE_EXPLANATION);
    }
}

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

/// An explanation delivered for one assistance request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReply {
    /// Sequence number of the request, starting at 1.
    pub request_id: u64,
    pub explanation: String,
    /// A newer request was issued before this one was delivered.
    pub superseded: bool,
}

/// Callback invoked once with the reply. Runs on the runtime worker; callers
/// that own a single-threaded UI must forward the reply to it.
pub type ReplyCallback = Box<dyn FnOnce(AssistantReply) + Send + 'static>;

/// Heuristic explanation of user input.
pub trait AssistantTrait: Send + Sync {
    /// Classifies `input` in the context of the named module. Never fails.
    fn explain(&self, input: &str, module_name: &str) -> String;

    /// Schedules an explanation and delivers it through `on_ready` after the
    /// configured latency. Pending requests are never cancelled.
    ///
    /// Must be called from within a tokio runtime.
    fn request_explanation(
        &self,
        input: &str,
        module_name: &str,
        on_ready: ReplyCallback,
    ) -> JoinHandle<()>;
}

use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::assistant::{AssistantReply, AssistantTrait};
use crate::errors::Result;
use crate::history::{HistoryEntry, HistoryLog};
use crate::modules::{CalcModuleTrait, ModuleKind, ModuleRegistry};

/// What a calculation hands back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationOutcome {
    pub display_text: String,
    pub history_entry: HistoryEntry,
}

/// Application controller for one user session.
///
/// Holds the active module, the pending input buffer and the history. Every
/// calculation attempt, successful or not, appends exactly one history entry.
pub struct CalculatorSession {
    registry: ModuleRegistry,
    assistant: Arc<dyn AssistantTrait>,
    history: HistoryLog,
    active: ModuleKind,
    input: String,
}

impl CalculatorSession {
    pub fn new(registry: ModuleRegistry, assistant: Arc<dyn AssistantTrait>) -> Self {
        Self::with_history(registry, assistant, HistoryLog::new())
    }

    pub fn with_history(
        registry: ModuleRegistry,
        assistant: Arc<dyn AssistantTrait>,
        history: HistoryLog,
    ) -> Self {
        Self {
            registry,
            assistant,
            history,
            active: ModuleKind::Basic,
            input: String::new(),
        }
    }

    pub fn active_module(&self) -> Arc<dyn CalcModuleTrait> {
        self.registry.get(self.active)
    }

    pub fn active_kind(&self) -> ModuleKind {
        self.active
    }

    /// Switches the active module, clears the input buffer and returns the
    /// module's input hint.
    pub fn set_active_module(&mut self, name: &str) -> Result<&'static str> {
        let module = self.registry.resolve(name)?;
        self.active = module.kind();
        self.input.clear();
        info!("Active module: {}", module.name());
        Ok(module.hint())
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Runs the named module on `input` and records the attempt.
    ///
    /// Only an unknown module name is an error; calculation failures are part
    /// of the outcome's display text.
    pub fn calculate(&mut self, module_name: &str, input: &str) -> Result<CalculationOutcome> {
        let module = self.registry.resolve(module_name)?;
        Ok(self.run(module.as_ref(), input))
    }

    /// Runs the active module on the input buffer.
    pub fn calculate_active(&mut self) -> CalculationOutcome {
        let module = self.active_module();
        let input = self.input.clone();
        self.run(module.as_ref(), &input)
    }

    fn run(&mut self, module: &dyn CalcModuleTrait, input: &str) -> CalculationOutcome {
        let display_text = module.calculate(input);
        debug!("{}: {:?} -> {:?}", module.name(), input, display_text);
        let history_entry = self.history.add_record(module.name(), input, &display_text);
        CalculationOutcome {
            display_text,
            history_entry,
        }
    }

    /// Fires off a delayed assistant explanation. No history is recorded.
    pub fn request_assistance<F>(&self, module_name: &str, input: &str, on_ready: F) -> JoinHandle<()>
    where
        F: FnOnce(AssistantReply) + Send + 'static,
    {
        self.assistant
            .request_explanation(input, module_name, Box::new(on_ready))
    }

    /// Requests assistance for the input buffer in the context of the active module.
    pub fn request_active_assistance<F>(&self, on_ready: F) -> JoinHandle<()>
    where
        F: FnOnce(AssistantReply) + Send + 'static,
    {
        self.request_assistance(self.active_module().name(), &self.input, on_ready)
    }

    /// History, most-recent-first.
    pub fn history_snapshot(&self) -> Vec<HistoryEntry> {
        self.history.snapshot()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::history::FixedClock;
    use chrono::NaiveTime;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    /// Replies immediately with the module name and input it was asked about.
    #[derive(Default)]
    struct EchoAssistant {
        next_id: AtomicU64,
    }

    impl AssistantTrait for EchoAssistant {
        fn explain(&self, input: &str, module_name: &str) -> String {
            format!("{}|{}", module_name, input)
        }

        fn request_explanation(
            &self,
            input: &str,
            module_name: &str,
            on_ready: crate::assistant::ReplyCallback,
        ) -> JoinHandle<()> {
            let reply = AssistantReply {
                request_id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                explanation: self.explain(input, module_name),
                superseded: false,
            };
            tokio::spawn(async move { on_ready(reply) })
        }
    }

    fn session() -> CalculatorSession {
        let time = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        CalculatorSession::with_history(
            ModuleRegistry::default(),
            Arc::new(EchoAssistant::default()),
            HistoryLog::with_clock(Arc::new(FixedClock(time))),
        )
    }

    #[test]
    fn test_default_module_is_basic() {
        let session = session();
        assert_eq!(session.active_kind(), ModuleKind::Basic);
    }

    #[test]
    fn test_set_active_module_returns_hint_and_clears_input() {
        let mut session = session();
        session.set_input("1000,10,5");
        let hint = session.set_active_module("finance").unwrap();
        assert_eq!(hint, ModuleKind::Finance.hint());
        assert_eq!(session.active_kind(), ModuleKind::Finance);
        assert_eq!(session.input(), "");
    }

    #[test]
    fn test_unknown_module_leaves_selection_untouched() {
        let mut session = session();
        session.set_input("2+2");
        assert!(matches!(
            session.set_active_module("chemistry"),
            Err(Error::UnknownModule(_))
        ));
        assert_eq!(session.active_kind(), ModuleKind::Basic);
        assert_eq!(session.input(), "2+2");
    }

    #[test]
    fn test_every_calculation_appends_one_entry() {
        let mut session = session();
        let inputs = [
            ("basic", "2+2*2"),
            ("basic", "4/0"),
            ("finance", "1000,10"),
            ("engineering", "50,45"),
        ];
        for (i, (module, input)) in inputs.iter().enumerate() {
            session.calculate(module, input).unwrap();
            assert_eq!(session.history_snapshot().len(), i + 1);
        }
    }

    #[test]
    fn test_outcome_carries_recorded_entry() {
        let mut session = session();
        let outcome = session.calculate("engineering", "-5,45").unwrap();
        assert_eq!(outcome.display_text, "Error: Speed must not be negative, got -5");
        assert_eq!(outcome.history_entry.module_name, "Engineering (Ballistics)");
        assert_eq!(outcome.history_entry.result_text, outcome.display_text);
        assert_eq!(session.history_snapshot()[0], outcome.history_entry);
    }

    #[test]
    fn test_calculate_active_uses_input_buffer() {
        let mut session = session();
        session.set_active_module("Engineering (Ballistics)").unwrap();
        session.set_input("50,45");
        let outcome = session.calculate_active();
        assert_eq!(outcome.display_text, "Range: 254.8 m | Height: 63.7 m");
    }

    #[test]
    fn test_calculate_unknown_module_records_nothing() {
        let mut session = session();
        assert!(session.calculate("astrology", "1").is_err());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_snapshot_order() {
        let mut session = session();
        session.calculate("basic", "1+1").unwrap();
        session.calculate("basic", "2+2").unwrap();
        let snapshot = session.history_snapshot();
        assert_eq!(snapshot[0].input_text, "2+2");
        assert_eq!(snapshot[1].input_text, "1+1");
    }

    #[tokio::test]
    async fn test_request_assistance_has_no_history_side_effect() {
        let mut session = session();
        session.set_active_module("finance").unwrap();
        session.set_input("1,2,3");

        let received = Arc::new(Mutex::new(None));
        let sink = received.clone();
        session
            .request_active_assistance(move |reply| {
                *sink.lock().unwrap() = Some(reply);
            })
            .await
            .unwrap();

        let reply = received.lock().unwrap().take().unwrap();
        assert_eq!(reply.explanation, "Finance|1,2,3");
        assert!(session.history().is_empty());
    }
}

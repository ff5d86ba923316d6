//! End-to-end tests wiring the assistant service into a calculator session.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use syscalc_assistant::heuristics::{BALLISTICS_HINT, EMPTY_INPUT};
use syscalc_assistant::{AssistantConfig, AssistantService};
use syscalc_core::{AssistantReply, CalculatorSession, ModuleRegistry};
use tokio::time::Instant;

fn session() -> CalculatorSession {
    CalculatorSession::new(
        ModuleRegistry::default(),
        Arc::new(AssistantService::new(AssistantConfig::default())),
    )
}

#[tokio::test(start_paused = true)]
async fn empty_input_prompt_arrives_after_delay_without_history() {
    let session = session();
    let received: Arc<Mutex<Option<AssistantReply>>> = Arc::default();
    let sink = received.clone();
    let start = Instant::now();

    session
        .request_assistance("Basic", "", move |reply| {
            *sink.lock().unwrap() = Some(reply);
        })
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_millis(1500));
    let reply = received.lock().unwrap().take().unwrap();
    assert_eq!(reply.explanation, EMPTY_INPUT);
    assert!(session.history_snapshot().is_empty());
}

#[tokio::test(start_paused = true)]
async fn active_module_provides_context() {
    let mut session = session();
    session.set_active_module("engineering").unwrap();
    session.set_input("50");

    let received: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = received.clone();
    session
        .request_active_assistance(move |reply| sink.lock().unwrap().push(reply.explanation))
        .await
        .unwrap();

    assert_eq!(*received.lock().unwrap(), vec![BALLISTICS_HINT.to_string()]);
}

#[tokio::test(start_paused = true)]
async fn calculation_and_assistance_are_independent() {
    let mut session = session();
    let outcome = session.calculate("basic", "2+2*2").unwrap();
    assert_eq!(outcome.display_text, "6");

    let handle = session.request_assistance("basic", "2+2*2", |_| {});
    session.calculate("basic", "4/0").unwrap();
    handle.await.unwrap();

    let snapshot = session.history_snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].result_text, "Error: Division by zero");
    assert_eq!(snapshot[1].result_text, "6");
}

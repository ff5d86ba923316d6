use std::sync::Arc;

use syscalc_assistant::{AssistantConfig, AssistantService};
use syscalc_core::{CalculatorSession, ModuleRegistry};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Logs go to stderr so they never interleave with the interactive output.
pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_session(config: &Config) -> CalculatorSession {
    let registry = ModuleRegistry::new(&config.settings);
    let assistant = Arc::new(AssistantService::new(AssistantConfig {
        latency: config.assistant_latency,
    }));
    tracing::info!(
        "Modules registered: {:?}; assistant latency {:?}",
        registry.kinds(),
        config.assistant_latency
    );
    CalculatorSession::new(registry, assistant)
}

use std::time::Duration;

use syscalc_core::CalculatorSettings;

const DEFAULT_ASSISTANT_DELAY_MS: u64 = 1500;

pub struct Config {
    pub settings: CalculatorSettings,
    pub assistant_latency: Duration,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = CalculatorSettings::default();
        let settings = CalculatorSettings {
            currency: var("SYSCALC_CURRENCY").unwrap_or(defaults.currency),
            distance_unit: var("SYSCALC_DISTANCE_UNIT").unwrap_or(defaults.distance_unit),
        };
        settings.validate()?;

        let delay_ms: u64 = var("SYSCALC_ASSISTANT_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ASSISTANT_DELAY_MS);
        let log_format = var("SYSCALC_LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        Ok(Self {
            settings,
            assistant_latency: Duration::from_millis(delay_ms),
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.settings, CalculatorSettings::default());
        assert_eq!(config.assistant_latency, Duration::from_millis(1500));
        assert_eq!(config.log_format, "text");
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("SYSCALC_CURRENCY", "EUR"),
            ("SYSCALC_ASSISTANT_DELAY_MS", "10"),
            ("SYSCALC_LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.settings.currency, "EUR");
        assert_eq!(config.assistant_latency, Duration::from_millis(10));
        assert_eq!(config.log_format, "json");
    }

    #[test]
    fn test_unparseable_delay_falls_back() {
        let config = config(&[("SYSCALC_ASSISTANT_DELAY_MS", "soon")]).unwrap();
        assert_eq!(config.assistant_latency, Duration::from_millis(1500));
    }

    #[test]
    fn test_blank_unit_is_rejected() {
        assert!(config(&[("SYSCALC_DISTANCE_UNIT", " ")]).is_err());
    }
}

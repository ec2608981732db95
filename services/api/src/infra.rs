use metrics_exporter_prometheus::PrometheusHandle;
use name_match::config::MatchingConfig;
use name_match::matching::{DuplicateThreshold, NameMatcher};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_threshold(raw: &str) -> Result<DuplicateThreshold, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))?;
    DuplicateThreshold::new(value).map_err(|err| err.to_string())
}

/// Command-line overrides win over the configured threshold.
pub(crate) fn matcher_for(
    config: &MatchingConfig,
    threshold: Option<DuplicateThreshold>,
) -> NameMatcher {
    NameMatcher::new(threshold.unwrap_or(config.duplicate_threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_threshold_validates_range() {
        assert_eq!(parse_threshold(" 0.65 ").map(|t| t.value()), Ok(0.65));
        assert!(parse_threshold("1.01").is_err());
        let err = parse_threshold("most").expect_err("not a number");
        assert!(err.contains("'most'"));
    }

    #[test]
    fn override_replaces_configured_threshold() {
        let config = MatchingConfig::default();
        assert_eq!(matcher_for(&config, None).threshold().value(), 0.7);

        let strict = DuplicateThreshold::new(0.9).expect("valid");
        assert_eq!(matcher_for(&config, Some(strict)).threshold(), strict);
    }
}

use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 3000;
pub const DEFAULT_REPORT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub analysis_delay: Duration,
    pub report_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS),
            report_limit: DEFAULT_REPORT_LIMIT,
        }
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(value) = lookup("SWINGAI_ANALYSIS_DELAY_MS") {
            let millis: u64 = value.trim().parse().with_context(|| {
                format!("SWINGAI_ANALYSIS_DELAY_MS must be milliseconds, got {value:?}")
            })?;
            settings.analysis_delay = Duration::from_millis(millis);
        }

        if let Some(value) = lookup("SWINGAI_REPORT_LIMIT") {
            settings.report_limit = value
                .trim()
                .parse()
                .with_context(|| format!("SWINGAI_REPORT_LIMIT must be a count, got {value:?}"))?;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.analysis_delay, Duration::from_secs(3));
    }

    #[test]
    fn reads_overrides() {
        let settings = Settings::from_lookup(|key| match key {
            "SWINGAI_ANALYSIS_DELAY_MS" => Some("250".to_string()),
            "SWINGAI_REPORT_LIMIT" => Some(" 10 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(settings.analysis_delay, Duration::from_millis(250));
        assert_eq!(settings.report_limit, 10);
    }

    #[test]
    fn rejects_garbage_values() {
        let err = Settings::from_lookup(|key| {
            (key == "SWINGAI_ANALYSIS_DELAY_MS").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("SWINGAI_ANALYSIS_DELAY_MS"));
    }
}

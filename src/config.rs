use crate::error::ConfigError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Minimum milliseconds between full classification passes.
    pub eval_interval_ms: u64,
    /// Delay before a repetition's feedback reverts to the detecting placeholder.
    pub feedback_revert_ms: u64,
    pub frame_buffer_size: usize,
    pub output_buffer_size: usize,
    pub enable_metrics: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            eval_interval_ms: 800,
            feedback_revert_ms: 2000,
            frame_buffer_size: 60,
            output_buffer_size: 10,
            enable_metrics: false,
        }
    }
}

impl Configuration {
    /// Layers an optional config file and `FORMCHECK_*` environment
    /// variables over the built-in defaults.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("FORMCHECK"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_cadence() {
        let configuration = Configuration::default();
        assert_eq!(configuration.eval_interval_ms, 800);
        assert_eq!(configuration.feedback_revert_ms, 2000);
        assert_eq!(configuration.frame_buffer_size, 60);
        assert!(!configuration.enable_metrics);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let configuration =
            Configuration::load("does-not-exist").expect("load should tolerate a missing file");
        assert_eq!(configuration.eval_interval_ms, 800);
    }

    #[test]
    fn environment_layer_overrides_defaults() {
        // Injected source instead of std::env so parallel tests cannot race.
        let mut vars = config::Map::new();
        vars.insert("FORMCHECK_EVAL_INTERVAL_MS".to_owned(), "500".to_owned());
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("FORMCHECK").source(Some(vars)))
            .build()
            .expect("environment source should build");
        let configuration: Configuration = settings
            .try_deserialize()
            .expect("overrides should deserialize");
        assert_eq!(configuration.eval_interval_ms, 500);
        assert_eq!(configuration.feedback_revert_ms, 2000);
    }
}

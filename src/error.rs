use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Pipeline Error: {0}")]
    Pipeline(#[from] PipelineError),
    #[error("Config Error: {0}")]
    Config(#[from] ConfigError),
}

// Pipeline Error Type
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Classification step failed: {0}")]
    Classify(String),
    #[error("Classification step timed out")]
    Timeout,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

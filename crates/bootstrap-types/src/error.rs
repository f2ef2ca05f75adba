use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Numerical domain error: {field} = {value}")]
    DomainError { field: &'static str, value: f64 },

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BootstrapResult<T> = Result<T, BootstrapError>;

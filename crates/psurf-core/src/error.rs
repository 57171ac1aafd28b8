use thiserror::Error;

#[derive(Debug, Error)]
pub enum PsurfError {
    #[error("Parametric function is undefined at (u={u}, v={v})")]
    InvalidSample { u: f64, v: f64 },

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Invalid interval: [{a}, {b}]")]
    InvalidInterval { a: f64, b: f64 },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, PsurfError>;

use derive_more::Display;

/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    #[display(fmt = "Network Error: {}", _0)]
    NetworkError(String),
    #[display(fmt = "Parse Error: {}", _0)]
    ParseError(String),
    #[display(fmt = "Validation Error: {}", _0)]
    ValidationError(String),
}

impl std::error::Error for AppError {}

// Simple convenience type aliases
pub type NetworkResult<T> = Result<T, AppError>;
pub type ParseResult<T> = Result<T, AppError>;

use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Define an enum to represent the two error kinds of the context layer
#[derive(Debug, Error)]
pub enum ContextError {
    // Variant for fragments with the wrong shape or malformed field values
    #[error("parse error: {0}")]
    Parse(String),

    // Variant for parsed input that fails validation at build time
    #[error("validation error: {0}")]
    Validation(String),
}

// Type alias for results that use `ContextError` as the error type
pub type Result<T> = std::result::Result<T, ContextError>;

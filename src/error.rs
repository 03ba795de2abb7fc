use thiserror::Error;

/// Errors that can occur around ingredient rendering
///
/// Rendering itself never fails; these cover configuration and input handling.
#[derive(Error, Debug)]
pub enum IngredientTextError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Ingredient JSON could not be decoded
    #[error("Invalid ingredient JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid command-line or builder input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecgenError {
    #[error("Product idea is required")]
    MissingIdea,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

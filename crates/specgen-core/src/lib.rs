pub mod error;
pub mod options;
pub mod request;

pub use error::SpecgenError;
pub use options::{DetailLevel, Language};
pub use request::{ErrorResponse, GenerateBody, GenerationRequest, GenerationResult};

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
}

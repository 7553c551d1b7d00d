use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Zone parse error: {0}")]
    ZoneParse(String),

    #[error("Zone file exceeds the maximum size of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

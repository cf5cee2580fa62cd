use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

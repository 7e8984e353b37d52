use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerationError>;

/// Errors that abort a generation run. There is no partial-failure mode: a
/// failed run yields no trajectory at all rather than a truncated one.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The journey plan or sampling policy is unusable. Raised before any
    /// random draws are made for the offending leg.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The geodesic projector received input it cannot project, e.g. a
    /// non-finite coordinate. Indicates a broken upstream contract.
    #[error("projection failure: {0}")]
    ProjectionFailure(String),
}

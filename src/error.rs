use grid_util::point::Point;
use thiserror::Error;

/// Errors raised when building grids or when a search is requested with bad endpoints.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathfindingError {
    #[error("invalid grid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid endpoint {point}: {reason}")]
    InvalidInput { point: Point, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, PathfindingError>;

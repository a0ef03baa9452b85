use thiserror::Error;

#[derive(Debug, Error)]
pub enum LatheError {
    #[error("cubic B-spline needs at least 4 control points, got {0}")]
    InsufficientControlPoints(usize),

    #[error("control point capacity of {0} reached")]
    CapacityExceeded(usize),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("corrupt control point file: {0}")]
    CorruptPersistedState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LatheError>;

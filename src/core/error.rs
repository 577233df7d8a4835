use thiserror::Error;

/// Failures surfaced by the particle morph engine and its host.
///
/// Everything inside a frame is plain arithmetic over validated buffers, so
/// these only occur at construction time or on misuse of a torn-down handle.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("render surface unavailable: {0}")]
    Surface(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("expected {expected} landmark floats, got {got}")]
    InvalidLandmarks { expected: usize, got: usize },
    #[error("engine has been torn down")]
    TornDown,
}

use plumb_core::ParameterError;

/// Errors that can end a run.
///
/// These are configuration mistakes, fatal to the run; there is no retry or
/// recovery path because the simulation touches no external resources.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum RunError {
    #[error("invalid parameter: {0}")]
    Parameter(#[from] ParameterError),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodeGenError {
    #[error("Internal error: {0}")]
    InternalError(String),
    #[error("Error during code generation")]
    GenerationError(miette::Report),
}

impl CodeGenError {
    /// A shape carried a retryable marker but is attributed to neither the
    /// client nor the server. The upstream model validator should have
    /// rejected this; generation aborts rather than guessing.
    pub fn unattributed_fault(shape_id: &str) -> Self {
        CodeGenError::GenerationError(miette::miette!(
            help = "every error shape must be marked as either a client or a server fault",
            "error shape `{}` has no fault attribution",
            shape_id
        ))
    }
}

pub type CodeGenResult<T> = Result<T, CodeGenError>;

/// Which flavor of code is being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodegenTarget {
    Client,
    Server,
}

use model::{ErrorShape, FaultSource};

use crate::{
    CodeGenError, CodeGenResult,
    config::CodeGenConfig,
    writer::{Writable, writable},
};

/// Retry classification of an error shape, as understood by the runtime's
/// retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryKind {
    Throttling,
    Client,
    Server,
}

impl RetryKind {
    fn runtime_variant(self) -> &'static str {
        match self {
            RetryKind::Throttling => "ThrottlingError",
            RetryKind::Client => "ClientError",
            RetryKind::Server => "ServerError",
        }
    }

    /// Fragment emitting the runtime `ErrorKind` path for this classification.
    pub fn writable(self, config: &CodeGenConfig) -> Writable<'static> {
        let path = format!("{}::{}", config.error_kind_path(), self.runtime_variant());
        writable(move |w| {
            w.write(&path);
            Ok(())
        })
    }
}

/// Returns the retry classification for `shape`.
///
/// `Ok(None)` when the shape carries no retryable marker. Once a marker is
/// present, throttling takes precedence over fault attribution. A retryable
/// shape attributed to neither side aborts generation.
pub fn modeled_retry_kind(shape: &ErrorShape) -> CodeGenResult<Option<RetryKind>> {
    let Some(marker) = shape.retryable() else {
        return Ok(None);
    };
    if marker.throttling {
        return Ok(Some(RetryKind::Throttling));
    }
    match shape.fault() {
        FaultSource::Client => Ok(Some(RetryKind::Client)),
        FaultSource::Server => Ok(Some(RetryKind::Server)),
        FaultSource::Unattributed => Err(CodeGenError::unattributed_fault(shape.id())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::SourceWriter;

    #[test]
    fn throttling_takes_precedence_over_fault_attribution() {
        for fault in [FaultSource::Client, FaultSource::Server, FaultSource::Unattributed] {
            let shape = ErrorShape::new("ThrottledRequest", fault).with_retryable(true);
            assert_eq!(modeled_retry_kind(&shape).unwrap(), Some(RetryKind::Throttling));
        }
    }

    #[test]
    fn non_throttling_marker_follows_fault_attribution() {
        let client = ErrorShape::new("BadRequest", FaultSource::Client).with_retryable(false);
        assert_eq!(modeled_retry_kind(&client).unwrap(), Some(RetryKind::Client));

        let server = ErrorShape::new("Unavailable", FaultSource::Server).with_retryable(false);
        assert_eq!(modeled_retry_kind(&server).unwrap(), Some(RetryKind::Server));
    }

    #[test]
    fn shape_without_marker_is_not_retryable() {
        let shape = ErrorShape::new("NotFound", FaultSource::Client);
        assert_eq!(modeled_retry_kind(&shape).unwrap(), None);
    }

    #[test]
    fn unattributed_retryable_shape_aborts_generation() {
        let shape = ErrorShape::new("Mystery", FaultSource::Unattributed).with_retryable(false);
        let err = modeled_retry_kind(&shape).unwrap_err();
        match err {
            CodeGenError::GenerationError(report) => {
                assert!(report.to_string().contains("Mystery"));
            }
            other => panic!("expected a generation error, got: {:?}", other),
        }
    }

    #[test]
    fn writable_emits_runtime_error_kind_path() {
        let config = CodeGenConfig::default();
        let mut w = SourceWriter::new();
        RetryKind::Throttling.writable(&config)(&mut w).unwrap();
        assert_eq!(w.finish(), "solder_runtime::retry::ErrorKind::ThrottlingError");
    }
}

mod codegen;
mod combined;
mod config;
mod error_shape;
mod python;
mod retry;
mod types;
mod writer;

#[cfg(test)]
mod test_utils;

pub use codegen::CodeGen;
pub use combined::CombinedErrorGenerator;
pub use config::CodeGenConfig;
pub use error_shape::ErrorShapeGenerator;
pub use python::PythonServerErrorGenerator;
pub use retry::{RetryKind, modeled_retry_kind};
pub use types::{CodeGenError, CodeGenResult, CodegenTarget};
pub use writer::{Slot, SourceWriter, Writable, writable};

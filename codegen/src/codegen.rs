use model::{ErrorShape, OperationShape, SymbolProvider};

use crate::{
    CodeGenResult, CodegenTarget,
    combined::CombinedErrorGenerator,
    config::CodeGenConfig,
    error_shape::ErrorShapeGenerator,
    python::PythonServerErrorGenerator,
    writer::SourceWriter,
};

/// Entry points for the error generation pass.
///
/// Each call owns its own sink and either returns the complete rendered
/// artifact or the first fatal error. No partial output is ever returned.
#[derive(Debug, Clone)]
pub struct CodeGen;

impl CodeGen {
    /// Renders the impls for one error shape.
    pub fn generate_error_shape(
        shape: &ErrorShape,
        symbols: &dyn SymbolProvider,
        target: CodegenTarget,
        config: &CodeGenConfig,
    ) -> CodeGenResult<String> {
        let mut w = SourceWriter::new();
        ErrorShapeGenerator::new(symbols, shape, target, config).render(&mut w)?;
        Ok(w.finish())
    }

    /// Renders the combined error enum for one operation, including the
    /// Python exception conversion when configured.
    pub fn generate_operation_errors(
        operation: &OperationShape,
        symbols: &dyn SymbolProvider,
        config: &CodeGenConfig,
    ) -> CodeGenResult<String> {
        let mut w = SourceWriter::new();
        if config.python_bindings {
            PythonServerErrorGenerator::new(symbols, operation).render(&mut w)?;
        } else {
            CombinedErrorGenerator::new(symbols, operation).render(&mut w)?;
        }
        Ok(w.finish())
    }
}

use model::{ErrorShape, FaultSource, Member, OperationShape, RustSymbols};

use crate::{CodegenTarget, combined::CombinedErrorGenerator, config::CodeGenConfig, error_shape::ErrorShapeGenerator, writer::SourceWriter};

/// An error shape with an optional `message: string` member.
pub fn shape_with_message(id: &str, fault: FaultSource) -> ErrorShape {
    ErrorShape::new(id, fault).with_member(Member::new("message", "string"))
}

/// Renders one shape with the default symbol provider and configuration.
pub fn render_shape(shape: &ErrorShape, target: CodegenTarget) -> String {
    let symbols = RustSymbols::new();
    let config = CodeGenConfig::default();
    let mut w = SourceWriter::new();
    ErrorShapeGenerator::new(&symbols, shape, target, &config)
        .render(&mut w)
        .unwrap();
    w.finish()
}

/// Renders one operation's combined error enum with the default symbol provider.
pub fn render_operation(operation: &OperationShape) -> String {
    let symbols = RustSymbols::new();
    let mut w = SourceWriter::new();
    CombinedErrorGenerator::new(&symbols, operation).render(&mut w).unwrap();
    w.finish()
}

use model::{OperationShape, Symbol, SymbolProvider};

use crate::{
    CodeGenResult,
    writer::{Slot, SourceWriter},
};

/// Emits the combined error enum for one operation: one variant per declared
/// error shape, in declaration order, plus the internal fallback variant.
///
/// Extensions render the base enum first and then append their own fragments
/// to the same sink.
pub struct CombinedErrorGenerator<'a> {
    symbols: &'a dyn SymbolProvider,
    operation: &'a OperationShape,
}

impl<'a> CombinedErrorGenerator<'a> {
    pub fn new(symbols: &'a dyn SymbolProvider, operation: &'a OperationShape) -> Self {
        Self { symbols, operation }
    }

    /// Variant symbols in declaration order, fallback last. A declared error
    /// whose resolved type is the fallback type itself contributes no extra
    /// variant.
    fn variant_symbols(&self) -> Vec<Symbol> {
        let fallback = self.symbols.fallback_symbol();
        let mut variants: Vec<Symbol> = self
            .operation
            .errors()
            .iter()
            .map(|shape| self.symbols.error_symbol(shape))
            .filter(|symbol| symbol.full_path() != fallback.full_path())
            .collect();
        variants.push(fallback);
        variants
    }

    pub fn render(&self, w: &mut SourceWriter) -> CodeGenResult<()> {
        log::debug!("generating combined error enum for operation `{}`", self.operation.id());
        let error_symbol = self.symbols.operation_error_symbol(self.operation);
        let variants = self.variant_symbols();

        w.writeln(format!(
            "/// All possible error types for the `{}` operation.",
            self.operation.id()
        ));
        w.writeln("#[derive(Debug)]");
        w.writeln(format!("pub enum {} {{", error_symbol.name()));
        for variant in &variants {
            w.writeln(format!("    {}({}),", variant.name(), variant.full_path()));
        }
        w.writeln("}");
        w.writeln("");

        w.writeln(format!("impl std::fmt::Display for {} {{", error_symbol.name()));
        w.writeln("    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
        w.writeln("        match self {");
        for variant in &variants {
            w.writeln(format!(
                "            {}::{}(inner) => write!(f, \"{{}}\", inner),",
                error_symbol.name(),
                variant.name()
            ));
        }
        w.writeln("        }");
        w.writeln("    }");
        w.writeln("}");
        w.writeln("");

        w.writeln(format!("impl std::error::Error for {} {{}}", error_symbol.name()));
        w.writeln("");

        for variant in &variants {
            w.template(
                r#"impl From<#{variant_type}> for #{error} {
    fn from(variant: #{variant_type}) -> #{error} {
        #{error}::#{variant}(variant)
    }
}

"#,
                &[
                    ("variant_type", Slot::Text(variant.full_path().to_string())),
                    ("variant", Slot::Text(variant.name().to_string())),
                    ("error", Slot::Text(error_symbol.name().to_string())),
                ],
            )?;
        }

        Ok(())
    }
}

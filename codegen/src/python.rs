use model::{OperationShape, SymbolProvider};

use crate::{
    CodeGenResult,
    combined::CombinedErrorGenerator,
    writer::{Slot, SourceWriter, Writable, writable},
};

/// Combined error generator for operations served through the Python binding.
///
/// Renders the base enum, then a `From<pyo3::PyErr>` conversion that narrows
/// the Python exception back into the typed enum. The conversion checks the
/// operation's declared errors in declaration order and falls back to
/// `InternalServerError` carrying the exception's message.
pub struct PythonServerErrorGenerator<'a> {
    symbols: &'a dyn SymbolProvider,
    operation: &'a OperationShape,
    base: CombinedErrorGenerator<'a>,
}

impl<'a> PythonServerErrorGenerator<'a> {
    pub fn new(symbols: &'a dyn SymbolProvider, operation: &'a OperationShape) -> Self {
        Self {
            symbols,
            operation,
            base: CombinedErrorGenerator::new(symbols, operation),
        }
    }

    pub fn render(&self, w: &mut SourceWriter) -> CodeGenResult<()> {
        self.base.render(w)?;
        self.render_from_pyerr(w)
    }

    fn render_from_pyerr(&self, w: &mut SourceWriter) -> CodeGenResult<()> {
        let error_symbol = self.symbols.operation_error_symbol(self.operation);
        w.template(
            r#"impl From<pyo3::PyErr> for #{error} {
    fn from(variant: pyo3::PyErr) -> #{error} {
        pyo3::Python::with_gil(|py| {
            let error = variant.value(py);
#{cast}            #{fallback} { message: error.to_string() }.into()
        })
    }
}

"#,
            &[
                ("error", Slot::Text(error_symbol.name().to_string())),
                ("cast", Slot::Writable(self.cast_pyerr())),
                (
                    "fallback",
                    Slot::Text(self.symbols.fallback_symbol().full_path().to_string()),
                ),
            ],
        )
    }

    /// Downcast cascade over the operation's declared errors, in declaration
    /// order, first match wins. The fallback type is excluded: it is the
    /// terminal case of the conversion, so checking for it would be redundant.
    fn cast_pyerr(&self) -> Writable<'_> {
        writable(move |w| {
            let fallback = self.symbols.fallback_symbol();
            for shape in self.operation.errors() {
                let symbol = self.symbols.error_symbol(shape);
                if symbol.full_path() == fallback.full_path() {
                    log::trace!("skipping fallback type `{}` in cast cascade", shape.id());
                    continue;
                }
                w.writeln(format!(
                    "            if let Ok(error) = error.extract::<{}>() {{",
                    symbol.full_path()
                ));
                w.writeln("                return error.into();");
                w.writeln("            }");
            }
            Ok(())
        })
    }
}

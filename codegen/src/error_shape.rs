use model::{ErrorShape, SymbolProvider};

use crate::{
    CodeGenResult, CodegenTarget,
    config::CodeGenConfig,
    retry::modeled_retry_kind,
    writer::{Slot, SourceWriter},
};

/// Emits the error-specific impls for one error shape: the retry
/// classification accessor, the message accessor, the server-only `name`
/// accessor, `Display`, and the `std::error::Error` conformance.
///
/// The struct definition itself is emitted elsewhere; this generator only
/// augments it.
pub struct ErrorShapeGenerator<'a> {
    symbols: &'a dyn SymbolProvider,
    shape: &'a ErrorShape,
    target: CodegenTarget,
    config: &'a CodeGenConfig,
}

impl<'a> ErrorShapeGenerator<'a> {
    pub fn new(
        symbols: &'a dyn SymbolProvider,
        shape: &'a ErrorShape,
        target: CodegenTarget,
        config: &'a CodeGenConfig,
    ) -> Self {
        Self {
            symbols,
            shape,
            target,
            config,
        }
    }

    pub fn render(&self, w: &mut SourceWriter) -> CodeGenResult<()> {
        log::debug!("generating error impls for shape `{}`", self.shape.id());
        self.render_inherent_impl(w)?;
        self.render_display(w)?;
        let symbol = self.symbols.error_symbol(self.shape);
        w.writeln(format!("impl std::error::Error for {} {{}}", symbol.name()));
        w.writeln("");
        Ok(())
    }

    fn render_inherent_impl(&self, w: &mut SourceWriter) -> CodeGenResult<()> {
        let symbol = self.symbols.error_symbol(self.shape);
        w.writeln(format!("impl {} {{", symbol.name()));

        if let Some(kind) = modeled_retry_kind(self.shape)? {
            w.template(
                r#"    /// Returns `Some(ErrorKind)` if the error is retryable. Otherwise, returns `None`.
    pub fn retryable_error_kind(&self) -> #{error_kind} {
        #{kind}
    }
"#,
                &[
                    ("error_kind", Slot::Text(self.config.error_kind_path())),
                    ("kind", Slot::Writable(kind.writable(self.config))),
                ],
            )?;
        }

        if let Some(member) = self.shape.message_member() {
            let field = self.symbols.member_name(member);
            let (return_type, body) = if self.symbols.member_symbol(member).is_optional() {
                ("Option<&str>", format!("self.{}.as_deref()", field))
            } else {
                ("&str", format!("self.{}.as_ref()", field))
            };
            w.writeln("    /// Returns the error message.");
            w.writeln(format!("    pub fn message(&self) -> {} {{", return_type));
            w.writeln(format!("        {}", body));
            w.writeln("    }");
        }

        if self.target == CodegenTarget::Server {
            // Lets the runtime record which error type was encountered (e.g.
            // inside `http::Extensions`) without compile-time type information.
            w.writeln("    #[doc(hidden)]");
            w.writeln("    /// Returns the error name.");
            w.writeln("    pub fn name(&self) -> &'static str {");
            w.writeln(format!("        \"{}\"", self.shape.id()));
            w.writeln("    }");
        }

        w.writeln("}");
        w.writeln("");
        Ok(())
    }

    fn render_display(&self, w: &mut SourceWriter) -> CodeGenResult<()> {
        let symbol = self.symbols.error_symbol(self.shape);
        // When the Rust name and the model identity diverge, print both so the
        // raw identity stays greppable.
        let error_desc = if symbol.name() != self.shape.id() {
            format!("{} [{}]", symbol.name(), self.shape.id())
        } else {
            symbol.name().to_string()
        };

        w.writeln(format!("impl std::fmt::Display for {} {{", symbol.name()));
        w.writeln("    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
        w.writeln(format!("        write!(f, \"{}\")?;", error_desc));
        if let Some(member) = self.shape.message_member() {
            let field = self.symbols.member_name(member);
            if self.symbols.member_symbol(member).is_optional() {
                w.writeln(format!("        if let Some(inner) = &self.{} {{", field));
                w.writeln("            write!(f, \": {}\", inner)?;");
                w.writeln("        }");
            } else {
                w.writeln(format!("        write!(f, \": {{}}\", &self.{})?;", field));
            }
        }
        w.writeln("        Ok(())");
        w.writeln("    }");
        w.writeln("}");
        w.writeln("");
        Ok(())
    }
}

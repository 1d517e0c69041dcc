use std::collections::BTreeMap;

use convert_case::{Case, Casing};

use crate::{ErrorShape, Member, OperationShape};

/// A resolved target-language type for a shape or member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    name: String,
    full_path: String,
    optional: bool,
}

impl Symbol {
    pub fn new(name: impl Into<String>, full_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_path: full_path.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The bare Rust type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fully qualified path used when referring to the type from generated code.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Whether the resolved storage for this symbol is wrapped in `Option`.
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// Maps model shapes to Rust symbols.
pub trait SymbolProvider {
    /// Resolved symbol for an error shape.
    fn error_symbol(&self, shape: &ErrorShape) -> Symbol;

    /// Resolved symbol for a member, including whether it is stored as an `Option`.
    fn member_symbol(&self, member: &Member) -> Symbol;

    /// Rust field name for a member.
    fn member_name(&self, member: &Member) -> String;

    /// Symbol of the combined error enum for an operation.
    fn operation_error_symbol(&self, operation: &OperationShape) -> Symbol;

    /// Symbol of the catch-all internal error type.
    fn fallback_symbol(&self) -> Symbol;
}

/// Default symbol provider for the Rust backends.
///
/// Shape identities are kept Pascal-cased, member names snake-cased, and all
/// error types live under a single module (`crate::error` unless configured
/// otherwise). Renames are stored in a `BTreeMap` so resolution is
/// deterministic across runs.
pub struct RustSymbols {
    error_module: String,
    renames: BTreeMap<String, String>,
}

impl RustSymbols {
    pub fn new() -> Self {
        Self {
            error_module: "crate::error".to_string(),
            renames: BTreeMap::new(),
        }
    }

    pub fn with_error_module(mut self, error_module: impl Into<String>) -> Self {
        self.error_module = error_module.into();
        self
    }

    /// Registers a rename from a raw shape identity to a Rust type name.
    pub fn with_rename(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.renames.insert(id.into(), name.into());
        self
    }

    fn qualify(&self, name: &str) -> String {
        format!("{}::{}", self.error_module, name)
    }
}

impl Default for RustSymbols {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolProvider for RustSymbols {
    fn error_symbol(&self, shape: &ErrorShape) -> Symbol {
        let name = self
            .renames
            .get(shape.id())
            .cloned()
            .unwrap_or_else(|| shape.id().to_case(Case::Pascal));
        let full_path = self.qualify(&name);
        Symbol::new(name, full_path)
    }

    fn member_symbol(&self, member: &Member) -> Symbol {
        let name = match member.target() {
            "string" => "String".to_string(),
            "integer" => "i32".to_string(),
            "long" => "i64".to_string(),
            "float" => "f32".to_string(),
            "double" => "f64".to_string(),
            "boolean" => "bool".to_string(),
            other => other.to_case(Case::Pascal),
        };
        let symbol = Symbol::new(name.clone(), name);
        if member.is_required() { symbol } else { symbol.optional() }
    }

    fn member_name(&self, member: &Member) -> String {
        member.name().to_case(Case::Snake)
    }

    fn operation_error_symbol(&self, operation: &OperationShape) -> Symbol {
        let name = format!("{}Error", operation.id().to_case(Case::Pascal));
        let full_path = self.qualify(&name);
        Symbol::new(name, full_path)
    }

    fn fallback_symbol(&self) -> Symbol {
        Symbol::new("InternalServerError", self.qualify("InternalServerError"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FaultSource;

    #[test]
    fn error_symbol_keeps_raw_identity_by_default() {
        let symbols = RustSymbols::new();
        let shape = ErrorShape::new("NotFoundException", FaultSource::Client);
        let symbol = symbols.error_symbol(&shape);
        assert_eq!(symbol.name(), "NotFoundException");
        assert_eq!(symbol.full_path(), "crate::error::NotFoundException");
    }

    #[test]
    fn error_symbol_honors_renames() {
        let symbols = RustSymbols::new().with_rename("NotFoundException", "NotFound");
        let shape = ErrorShape::new("NotFoundException", FaultSource::Client);
        let symbol = symbols.error_symbol(&shape);
        assert_eq!(symbol.name(), "NotFound");
        assert_eq!(symbol.full_path(), "crate::error::NotFound");
    }

    #[test]
    fn member_symbol_tracks_requiredness() {
        let symbols = RustSymbols::new();
        let optional = symbols.member_symbol(&Member::new("message", "string"));
        assert!(optional.is_optional());
        assert_eq!(optional.name(), "String");

        let mandatory = symbols.member_symbol(&Member::new("message", "string").required());
        assert!(!mandatory.is_optional());
    }

    #[test]
    fn operation_error_symbol_appends_error_suffix() {
        let symbols = RustSymbols::new().with_error_module("crate::errors");
        let operation = OperationShape::new("GetUser");
        let symbol = symbols.operation_error_symbol(&operation);
        assert_eq!(symbol.name(), "GetUserError");
        assert_eq!(symbol.full_path(), "crate::errors::GetUserError");
    }
}

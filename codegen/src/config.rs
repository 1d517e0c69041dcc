use model::RustSymbols;
use serde::Deserialize;

/// Configuration for the error generation pass.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CodeGenConfig {
    /// Crate the generated code resolves runtime types from.
    pub runtime_crate: String,
    /// Module path under which the generated error types live.
    pub error_module: String,
    /// Whether combined errors get a `From<pyo3::PyErr>` conversion for the
    /// Python server binding.
    pub python_bindings: bool,
}

impl Default for CodeGenConfig {
    fn default() -> Self {
        Self {
            runtime_crate: "solder_runtime".to_string(),
            error_module: "crate::error".to_string(),
            python_bindings: false,
        }
    }
}

impl CodeGenConfig {
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Symbol provider wired to this configuration.
    pub fn symbols(&self) -> RustSymbols {
        RustSymbols::new().with_error_module(self.error_module.clone())
    }

    pub(crate) fn error_kind_path(&self) -> String {
        format!("{}::retry::ErrorKind", self.runtime_crate)
    }
}

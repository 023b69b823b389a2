//! Printer configuration
//!
//! Defaults reproduce the interop conventions of the runtime support headers; overriding the namespaces is
//! only useful when targeting a differently-named runtime.

use clangprint_core::lang::conventions;
use clangprint_core::lang::dialect::Dialect;

use super::writer::DEFAULT_INDENT_WIDTH;

/// Configuration options for the syntax printer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Dialect whose reserved words identifiers are sanitized against
    pub dialect: Dialect,
    /// Namespace of the runtime support API (`swift`)
    pub runtime_namespace: String,
    /// Implementation namespace nested in the runtime namespace (`_impl`)
    pub impl_namespace: String,
    /// Opaque value storage class of the support headers
    pub opaque_storage_class: String,
    /// Requirement count a metadata accessor takes directly (3)
    pub max_direct_metadata_args: usize,
    /// Spaces per indentation level in assembled headers
    pub indent_width: usize,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            runtime_namespace: conventions::RUNTIME_NAMESPACE.to_string(),
            impl_namespace: conventions::IMPL_NAMESPACE.to_string(),
            opaque_storage_class: conventions::OPAQUE_STORAGE_CLASS.to_string(),
            max_direct_metadata_args: conventions::MAX_DIRECT_METADATA_ACCESS_ARGS,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl PrinterConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_runtime_namespace(mut self, name: impl Into<String>) -> Self {
        self.runtime_namespace = name.into();
        self
    }

    pub fn with_impl_namespace(mut self, name: impl Into<String>) -> Self {
        self.impl_namespace = name.into();
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clangprint_core::lang::dialect::CxxStandard;

    #[test]
    fn test_default_config() {
        let config = PrinterConfig::default();
        assert_eq!(config.dialect, Dialect::Clang);
        assert_eq!(config.runtime_namespace, "swift");
        assert_eq!(config.impl_namespace, "_impl");
        assert_eq!(config.max_direct_metadata_args, 3);
        assert_eq!(config.indent_width, 2);
    }

    #[test]
    fn test_builder_chain() {
        let config = PrinterConfig::new()
            .with_dialect(Dialect::Cxx(CxxStandard::Cxx20))
            .with_runtime_namespace("rt")
            .with_impl_namespace("detail")
            .with_indent_width(4);
        assert_eq!(config.dialect, Dialect::Cxx(CxxStandard::Cxx20));
        assert_eq!(config.runtime_namespace, "rt");
        assert_eq!(config.impl_namespace, "detail");
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn test_builder_override() {
        let config = PrinterConfig::new().with_indent_width(8).with_indent_width(2);
        assert_eq!(config.indent_width, 2);
    }
}

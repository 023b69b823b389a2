//! Identifier sanitization.
//!
//! A native name that collides with a reserved word of the target dialect gets a single trailing underscore
//! (`class` -> `class_`). Names are otherwise printed verbatim.

use crate::model::{Module, NativeSymbol};

use super::SyntaxPrinter;

impl SyntaxPrinter<'_> {
    /// Whether `name` is reserved in the configured dialect. Case-sensitive; the empty name is never reserved.
    pub fn is_keyword(&self, name: &str) -> bool {
        self.ctx.keywords().contains(name)
    }

    /// Print `name`, appending `_` iff it is a reserved word.
    pub fn print_identifier(&mut self, name: &str) {
        self.out.write(name);
        if self.is_keyword(name) {
            self.out.write("_");
        }
    }

    /// Print the C++ name of a native declaration.
    ///
    /// # Panics
    /// If the declaration has a compound name (`f(x:)`): only simple names have a C++ spelling.
    pub fn print_base_name(&mut self, symbol: &NativeSymbol) {
        assert!(
            symbol.name.is_simple(),
            "INVARIANT: base name requested for compound name `{}`",
            symbol.name
        );
        self.print_identifier(symbol.name.base());
    }

    /// Print the sanitized name of a module (as used for its C++ namespace).
    pub fn print_module_name(&mut self, module: &Module) {
        self.print_identifier(module.name());
    }

    /// Print `<Module>_`, the prefix of C-level symbols exported by `module`.
    pub fn print_module_name_c_prefix(&mut self, module: &Module) {
        self.out.write(module.name());
        self.out.write("_");
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{DeclName, Module, NativeSymbol, SymbolKind};
    use crate::printer::PrinterConfig;
    use crate::printer::test_support::{render, render_with};
    use clangprint_core::lang::dialect::{CStandard, Dialect};

    fn native(name: DeclName) -> NativeSymbol {
        NativeSymbol::new(name, Module::new("Shapes"), SymbolKind::Struct)
    }

    // ========================================
    // Keyword lookup
    // ========================================

    #[test]
    fn test_is_keyword() {
        render(|p| {
            assert!(p.is_keyword("class"));
            assert!(!p.is_keyword("widget"));
            assert!(!p.is_keyword("Class"));
            assert!(!p.is_keyword(""));
        });
    }

    #[test]
    fn test_keyword_lookup_follows_dialect() {
        render_with(
            &crate::model::DetachedModel,
            PrinterConfig::new().with_dialect(Dialect::C(CStandard::C11)),
            |p| {
                assert!(p.is_keyword("_Atomic"));
                assert!(!p.is_keyword("template"));
            },
        );
    }

    // ========================================
    // Identifier printing
    // ========================================

    #[test]
    fn test_print_identifier_sanitizes_keywords() {
        assert_eq!(render(|p| p.print_identifier("class")), "class_");
        assert_eq!(render(|p| p.print_identifier("widget")), "widget");
        assert_eq!(render(|p| p.print_identifier("")), "");
    }

    #[test]
    fn test_print_base_name() {
        assert_eq!(render(|p| p.print_base_name(&native(DeclName::simple("Circle")))), "Circle");
        assert_eq!(render(|p| p.print_base_name(&native(DeclName::simple("namespace")))), "namespace_");
    }

    #[test]
    #[should_panic(expected = "INVARIANT")]
    fn test_print_base_name_rejects_compound_names() {
        render(|p| p.print_base_name(&native(DeclName::compound("move", ["to"]))));
    }

    #[test]
    fn test_module_c_prefix_is_not_sanitized() {
        assert_eq!(render(|p| p.print_module_name_c_prefix(&Module::new("Shapes"))), "Shapes_");
        assert_eq!(render(|p| p.print_module_name(&Module::new("export"))), "export_");
    }
}

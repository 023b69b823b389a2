//! Qualified references.
//!
//! Native types live in a namespace named after their module and are qualified only when referenced from a
//! different module. Foreign types are qualified with every enclosing scope a reference from the translation
//! unit has to spell out.

use crate::model::{ForeignSymbol, Module, NativeSymbol, Symbol};

use super::SyntaxPrinter;

impl SyntaxPrinter<'_> {
    /// Print `<owner>::` unless `owner` is the module being printed.
    pub fn print_namespace_qualifier_if_needed(&mut self, owner: &Module, current: &Module) {
        if owner == current {
            return;
        }
        self.print_module_name(owner);
        self.out.write("::");
    }

    /// Print a reference to `symbol` as seen from inside `current`'s namespace.
    ///
    /// Generic native types are referenced with their innermost parameters: `Pair<T_0_0, T_0_1>`.
    pub fn print_symbol_reference(&mut self, symbol: &Symbol, current: &Module) {
        match symbol {
            Symbol::Foreign(foreign) => self.print_foreign_reference(foreign),
            Symbol::Native(native) => {
                self.print_namespace_qualifier_if_needed(&native.module, current);
                self.print_base_name(native);
                if let Some(signature) = &native.generic_signature {
                    self.print_generic_signature_params(signature);
                }
            }
        }
    }

    /// Print a foreign declaration with the qualification clang requires from the translation unit.
    ///
    /// Linkage specifications, unscoped enums, function bodies and anonymous namespaces are skipped. Template
    /// arguments are appended verbatim when there is at least one.
    pub fn print_foreign_reference(&mut self, symbol: &ForeignSymbol) {
        assert!(!symbol.name.is_empty(), "INVARIANT: foreign reference to an unnamed declaration");
        for qualifier in symbol.scopes.iter().filter_map(|scope| scope.required_qualifier()) {
            self.out.write(qualifier);
            self.out.write("::");
        }
        self.out.write(&symbol.name);
        if !symbol.template_args.is_empty() {
            self.out.write("<");
            self.interleave_comma(&symbol.template_args, |p, arg| p.out.write(arg));
            self.out.write(">");
        }
    }

    /// A symbol reference followed by `::`, for naming members.
    pub fn print_qualified_symbol_prefix(&mut self, symbol: &Symbol, current: &Module) {
        self.print_symbol_reference(symbol, current);
        self.out.write("::");
    }

    /// Module qualifier and base name, without generic arguments.
    pub fn print_primary_type_name(&mut self, symbol: &NativeSymbol, current: &Module) {
        self.print_namespace_qualifier_if_needed(&symbol.module, current);
        self.print_base_name(symbol);
    }

    /// `swift::_impl::`
    pub fn print_impl_qualifier(&mut self) {
        let config = self.ctx.config();
        self.out.write(&config.runtime_namespace);
        self.out.write("::");
        self.out.write(&config.impl_namespace);
        self.out.write("::");
    }

    /// `swift::`
    pub(crate) fn print_runtime_qualifier(&mut self) {
        self.out.write(&self.ctx.config().runtime_namespace);
        self.out.write("::");
    }
}

//! Composite emitters: namespaces, language guards, metadata accessors and declaration annotations.

use clangprint_core::lang::conventions::{
    CALL_MACRO, EXTERN_MACRO, MANGLED_NAME_CONSTANT, METADATA_REQUEST_TYPE, METADATA_RESPONSE_TYPE, NOEXCEPT_MACRO,
    PRIVATE_ATTRIBUTE, PTRAUTH_TARGET_MACRO, SYMBOL_MACRO, SYMBOL_MODULE_MACRO, VALUE_WITNESS_TABLE_DISCRIMINATOR,
    VALUE_WITNESS_TABLE_TYPE,
};
use clangprint_core::lang::nullability::{NullabilityKind, NullabilityPrintKind};

use crate::model::{GenericRequirement, Module, NativeSymbol};

use super::SyntaxPrinter;

/// Extra tokens after a namespace name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamespaceTrivia {
    #[default]
    None,
    /// `__attribute__((swift_private))`: hide the namespace from the host language's importer.
    AttributeSwiftPrivate,
}

/// What a symbol annotation identifies.
#[derive(Debug, Clone, Copy)]
pub enum UsrSubject<'s> {
    Module(&'s Module),
    Decl(&'s NativeSymbol),
}

impl SyntaxPrinter<'_> {
    // ========================================================================
    // Namespaces
    // ========================================================================

    /// `namespace <Module> __attribute__((swift_private)) SWIFT_SYMBOL_MODULE("<Module>") {`
    pub fn print_module_namespace_start(&mut self, module: &Module) {
        self.out.write("namespace ");
        self.print_module_name(module);
        self.out.write(" ");
        self.out.write(PRIVATE_ATTRIBUTE);
        self.print_symbol_usr_attribute(UsrSubject::Module(module));
        self.out.write(" {\n");
    }

    /// A namespace whose name is printed by `name` (called once for the opening line, once for the closing
    /// comment). `body` runs exactly once between the braces.
    pub fn print_namespace_with(
        &mut self,
        mut name: impl FnMut(&mut Self),
        body: impl FnOnce(&mut Self),
        trivia: NamespaceTrivia,
        module: Option<&Module>,
    ) {
        self.out.write("namespace ");
        name(self);
        if trivia == NamespaceTrivia::AttributeSwiftPrivate {
            self.out.write(" ");
            self.out.write(PRIVATE_ATTRIBUTE);
        }
        if let Some(module) = module {
            self.print_symbol_usr_attribute(UsrSubject::Module(module));
        }
        self.out.write(" {\n\n");
        body(self);
        self.out.write("\n} // namespace ");
        name(self);
        self.out.write("\n\n");
    }

    pub fn print_namespace(&mut self, name: &str, body: impl FnOnce(&mut Self), trivia: NamespaceTrivia) {
        self.print_namespace_with(|p| p.out.write(name), body, trivia, None);
    }

    // ========================================================================
    // Language guards
    // ========================================================================

    /// Declarations with C linkage when compiled as C++, plain declarations under C.
    pub fn print_extern_c(&mut self, body: impl FnOnce(&mut Self)) {
        self.out.write("#ifdef __cplusplus\n");
        self.out.write("extern \"C\" {\n");
        self.out.write("#endif\n\n");
        body(self);
        self.out.write("\n#ifdef __cplusplus\n");
        self.out.write("}\n");
        self.out.write("#endif\n");
    }

    /// Body visible only to the Objective-C front end.
    pub fn print_objc_block(&mut self, body: impl FnOnce(&mut Self)) {
        self.out.write("#if defined(__OBJC__)\n");
        body(self);
        self.out.write("\n#endif\n");
    }

    // ========================================================================
    // Annotations
    // ========================================================================

    /// ` SWIFT_SYMBOL_MODULE("<Module>")` or ` SWIFT_SYMBOL("<usr>")`.
    ///
    /// Declarations without a USR get no annotation.
    pub fn print_symbol_usr_attribute(&mut self, subject: UsrSubject<'_>) {
        match subject {
            UsrSubject::Module(module) => {
                self.out.write(&format!(" {SYMBOL_MODULE_MACRO}(\""));
                self.print_module_name(module);
                self.out.write("\")");
            }
            UsrSubject::Decl(symbol) => {
                let Some(usr) = self.ctx.model().symbol_usr(symbol).filter(|usr| !usr.is_empty()) else {
                    return;
                };
                self.out.write(&format!(" {SYMBOL_MACRO}(\"{usr}\")"));
            }
        }
    }

    pub fn print_nullability(&mut self, kind: Option<NullabilityKind>, print_kind: NullabilityPrintKind) {
        let Some(kind) = kind else {
            return;
        };
        match print_kind {
            NullabilityPrintKind::ContextSensitive => {
                self.out.write(kind.context_sensitive());
                self.out.write(" ");
            }
            NullabilityPrintKind::Before => {
                self.out.write(kind.qualifier());
                self.out.write(" ");
            }
            NullabilityPrintKind::After => {
                self.out.write(" ");
                self.out.write(kind.qualifier());
            }
        }
    }

    /// The C primitive a native type maps to, e.g. `int32_t` or `void * _Null_unspecified`.
    ///
    /// # Panics
    /// If the Program Model has no C mapping for `symbol`.
    pub fn print_known_c_type(&mut self, symbol: &NativeSymbol) {
        let Some(info) = self.ctx.model().known_c_type(symbol) else {
            panic!("INVARIANT: `{}` is not a known C type", symbol.name);
        };
        self.out.write(&info.name);
        if info.can_be_nullable {
            self.out.write(" ");
            self.out.write(NullabilityKind::Unspecified.qualifier());
        }
    }

    /// Members that let the debugger recover the host-language type of a C++ class.
    pub fn print_mangled_name_for_debugger(&mut self, symbol: &NativeSymbol) {
        let mangled = self.ctx.model().mangle_type_for_debugger(symbol);
        self.print_ignored_cxx17_extension_diagnostic_block(|p| {
            if mangled.is_empty() {
                return;
            }
            p.out.write(&format!("  typedef char {mangled};\n"));
            p.out.write(&format!("  static inline constexpr {mangled} {MANGLED_NAME_CONSTANT} = 0;\n"));
        });
    }

    // ========================================================================
    // Runtime metadata
    // ========================================================================

    /// Extern declaration of a type's metadata accessor.
    ///
    /// Accessors take at most `max_direct_metadata_args` requirements directly; longer lists are still
    /// declared, and the emitted `static_assert` fails when the header is compiled.
    pub fn print_type_metadata_accessor_decl(
        &mut self,
        symbol: &NativeSymbol,
        func_name: &str,
        requirements: &[GenericRequirement],
    ) {
        let max = self.ctx.config().max_direct_metadata_args;
        if !requirements.is_empty() {
            if requirements.len() > max {
                tracing::warn!(
                    type_name = %symbol.name,
                    requirements = requirements.len(),
                    max,
                    "metadata accessor has more generic requirements than can be passed directly"
                );
            }
            self.out.write(&format!(
                "static_assert({} <= {max}, \"unsupported generic requirement list for metadata func\");\n",
                requirements.len()
            ));
        }
        self.out.write(&format!("// Type metadata accessor for {}\n", symbol.name));
        self.out.write(EXTERN_MACRO);
        self.out.write(" ");
        self.print_impl_qualifier();
        self.out.write(METADATA_RESPONSE_TYPE);
        self.out.write(" ");
        self.out.write(func_name);
        self.out.write("(");
        self.print_impl_qualifier();
        self.out.write(METADATA_REQUEST_TYPE);
        if !requirements.is_empty() {
            self.out.write(", ");
        }
        self.interleave_comma(requirements, |p, _| {
            p.out.write("void * ");
            p.out.write(NullabilityKind::NonNull.qualifier());
        });
        self.out.write(&format!(") {NOEXCEPT_MACRO} {CALL_MACRO};\n\n"));
    }

    /// Statements loading the value witness table of the type whose metadata is in `metadata_variable` into a
    /// new variable `vw_table_variable`.
    ///
    /// On arm64e the table pointer is signed and must be authenticated before use.
    pub fn print_value_witness_table_access_sequence(
        &mut self,
        metadata_variable: &str,
        vw_table_variable: &str,
        indent: usize,
    ) {
        let pad = " ".repeat(indent);

        self.out.write(&pad);
        self.out.write("auto *vwTableAddr = reinterpret_cast<");
        self.print_impl_qualifier();
        self.out.write(&format!("{VALUE_WITNESS_TABLE_TYPE} **>({metadata_variable}._0) - 1;\n"));
        self.out.write(&format!("#ifdef {PTRAUTH_TARGET_MACRO}\n"));

        self.out.write(&pad);
        self.out.write(&format!("auto *{vw_table_variable} = reinterpret_cast<"));
        self.print_impl_qualifier();
        self.out.write(&format!("{VALUE_WITNESS_TABLE_TYPE} *>(ptrauth_auth_data("));
        self.out.write("reinterpret_cast<void *>(*vwTableAddr), ptrauth_key_process_independent_data, ");
        self.out.write(&format!(
            "ptrauth_blend_discriminator(vwTableAddr, {VALUE_WITNESS_TABLE_DISCRIMINATOR})));\n"
        ));
        self.out.write("#else\n");

        self.out.write(&pad);
        self.out.write(&format!("auto *{vw_table_variable} = *vwTableAddr;\n"));
        self.out.write("#endif\n");
    }
}

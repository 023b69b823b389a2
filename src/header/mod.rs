//! Header assembly
//!
//! Turns a validated [`ManifestModel`] into a complete C++ interop header for its current module, using only
//! [`SyntaxPrinter`] operations. The layout is:
//!
//! 1. include guard and the support-header include cascade
//! 2. the module namespace, containing
//!    - an `_impl` namespace with aliases for referenced C++ types and an `extern "C"` block of metadata
//!      accessor declarations
//!    - aliases for types that map to C primitives
//!    - one class stub per remaining local type
//! 3. `swift::TypeMetadataTrait` specializations for non-generic types with an accessor
//!
//! ## Notes
//! - Types owned by other modules are never declared here; they only appear qualified.
//! - Protocols have no C++ representation at this level and are skipped.
//! - Class stubs carry opaque storage and a value witness table accessor; member functions are out of scope.

use clangprint_core::lang::conventions::{
    GENERIC_CONTEXT_TRAIT, SUPPORT_HEADER, TYPE_METADATA_TRAIT, VALUE_WITNESS_TABLE_TYPE,
};
use clangprint_core::lang::nullability::{NullabilityKind, NullabilityPrintKind};

use crate::model::manifest::{ManifestModel, TypeEntry};
use crate::model::{Module, ProgramModel};
use crate::printer::{CodeWriter, NamespaceTrivia, PrintContext, PrinterConfig, SyntaxPrinter, UsrSubject};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds a header for the current module of a manifest.
pub struct HeaderAssembler<'m> {
    manifest: &'m ManifestModel,
    ctx: PrintContext<'m>,
}

impl<'m> HeaderAssembler<'m> {
    pub fn new(manifest: &'m ManifestModel, config: PrinterConfig) -> Self {
        let model: &'m dyn ProgramModel = manifest;
        Self {
            manifest,
            ctx: PrintContext::new(config, model),
        }
    }

    /// Emit the whole header.
    #[tracing::instrument(skip_all, fields(module = self.manifest.current_module().name(), types = self.manifest.types().len()))]
    pub fn assemble(&self) -> String {
        let mut out = CodeWriter::with_indent_width(self.ctx.config().indent_width);
        let mut p = SyntaxPrinter::new(&mut out, &self.ctx);
        let module = self.manifest.current_module();
        let guard = include_guard(module);
        let protocols = self.manifest.local_types().filter(|e| !e.symbol.kind.has_class_stub()).count();
        if protocols > 0 {
            tracing::debug!(protocols, "protocols have no C++ declaration");
        }

        p.write(&format!("// Interop header for module `{}`, generated by clangprint {VERSION}.\n", module.name()));
        p.write(&format!("#ifndef {guard}\n"));
        p.print_define(&guard);
        p.write("\n");
        p.print_include_for_shim_header(SUPPORT_HEADER);
        p.write("\n");

        p.print_namespace_with(
            |p| p.print_module_name(module),
            |p| self.print_module_body(p),
            NamespaceTrivia::AttributeSwiftPrivate,
            Some(module),
        );
        self.print_metadata_traits(&mut p);

        p.write(&format!("#endif // {guard}\n"));
        let header = out.finish();
        tracing::info!(bytes = header.len(), "header assembled");
        header
    }

    /// Local types that get a C++ declaration.
    fn declared_types(&self) -> impl Iterator<Item = &'m TypeEntry> {
        self.manifest.local_types().filter(|entry| entry.symbol.kind.has_class_stub())
    }

    fn print_module_body(&self, p: &mut SyntaxPrinter<'_>) {
        let impl_namespace = self.ctx.config().impl_namespace.clone();
        p.print_namespace(&impl_namespace, |p| self.print_impl_body(p), NamespaceTrivia::None);

        let mut stubs = self.declared_types().peekable();
        while let Some(entry) = stubs.next() {
            if self.manifest.known_c_type(&entry.symbol).is_some() {
                p.write("using ");
                p.print_base_name(&entry.symbol);
                p.write(" = ");
                p.print_known_c_type(&entry.symbol);
                p.write(";\n");
            } else {
                self.print_class_stub(p, entry);
            }
            if stubs.peek().is_some() {
                p.write("\n");
            }
        }
    }

    fn print_impl_body(&self, p: &mut SyntaxPrinter<'_>) {
        let foreign = self.manifest.foreign_types();
        for symbol in foreign {
            p.write("using ");
            p.print_identifier(&symbol.name);
            p.write(" = ");
            p.print_foreign_reference(symbol);
            p.write(";\n");
        }
        if !foreign.is_empty() {
            p.write("\n");
        }

        p.print_extern_c(|p| {
            for entry in self.declared_types() {
                let Some(accessor) = &entry.accessor else {
                    continue;
                };
                if self.manifest.known_c_type(&entry.symbol).is_some() {
                    continue;
                }
                tracing::debug!(type_name = %entry.symbol.name, accessor = accessor.as_str(), "metadata accessor");
                p.print_type_metadata_accessor_decl(&entry.symbol, accessor, &entry.requirements);
            }
        });
    }

    fn print_class_stub(&self, p: &mut SyntaxPrinter<'_>, entry: &TypeEntry) {
        let symbol = &entry.symbol;
        tracing::debug!(type_name = %symbol.name, generic = symbol.is_generic(), "class stub");

        let is_simple = p.print_type_template_specifiers(symbol);
        p.write("class");
        p.print_symbol_usr_attribute(UsrSubject::Decl(symbol));
        p.write(" ");
        p.print_base_name(symbol);
        p.write(" final {\n");
        p.write("public:\n");
        p.writer().indent();
        if !is_simple {
            p.print_type_inner_static_asserts(symbol);
        }
        if let Some(accessor) = &entry.accessor {
            self.print_value_witness_table_getter(p, accessor, entry);
        }
        p.writer().dedent();

        let storage = self.ctx.config().opaque_storage_class.clone();
        p.write("private:\n");
        p.writer().indent();
        p.print_impl_qualifier();
        p.write(&format!("{storage} _storage;\n"));
        p.writer().dedent();
        p.print_mangled_name_for_debugger(symbol);
        p.write("};\n");
    }

    fn print_value_witness_table_getter(&self, p: &mut SyntaxPrinter<'_>, accessor: &str, entry: &TypeEntry) {
        p.write("static ");
        p.print_inline_for_thunk();
        p.print_impl_qualifier();
        p.write(VALUE_WITNESS_TABLE_TYPE);
        p.write(" *");
        p.print_nullability(Some(NullabilityKind::NonNull), NullabilityPrintKind::After);
        p.write(" getValueWitnessTable() noexcept {\n");
        p.writer().indent();
        p.write(&format!("auto metadata = {}::", self.ctx.config().impl_namespace));
        p.print_metadata_access_function_call(accessor, &entry.requirements);
        p.write(";\n");
        p.print_value_witness_table_access_sequence("metadata", "vwTable", 0);
        p.write("return vwTable;\n");
        p.writer().dedent();
        p.write("}\n");
    }

    /// Specializations that make non-generic types usable as generic arguments.
    fn print_metadata_traits(&self, p: &mut SyntaxPrinter<'_>) {
        let traits: Vec<(&TypeEntry, &String)> = self
            .declared_types()
            .filter(|e| !e.symbol.is_generic() && self.manifest.known_c_type(&e.symbol).is_none())
            .filter_map(|e| e.accessor.as_ref().map(|a| (e, a)))
            .collect();
        if traits.is_empty() {
            return;
        }

        let runtime = Module::new(self.ctx.config().runtime_namespace.clone());
        let impl_namespace = self.ctx.config().impl_namespace.clone();
        p.print_namespace(
            runtime.name(),
            |p| {
                for (i, (entry, accessor)) in traits.iter().enumerate() {
                    if i > 0 {
                        p.write("\n");
                    }
                    p.print_ignored_cxx17_extension_diagnostic_block(|p| {
                        p.write(&format!("template<>\nstatic inline const constexpr bool {GENERIC_CONTEXT_TRAIT}<"));
                        p.print_primary_type_name(&entry.symbol, &runtime);
                        p.write("> = true;\n");
                    });
                    p.write(&format!("template<>\nstruct {TYPE_METADATA_TRAIT}<"));
                    p.print_primary_type_name(&entry.symbol, &runtime);
                    p.write("> {\n");
                    p.writer().indent();
                    p.write("static ");
                    p.print_inline_for_thunk();
                    p.write("void *");
                    p.print_nullability(Some(NullabilityKind::NonNull), NullabilityPrintKind::After);
                    p.write(" getTypeMetadata() {\n");
                    p.writer().indent();
                    p.write("return ");
                    p.print_namespace_qualifier_if_needed(&entry.symbol.module, &runtime);
                    p.write(&format!("{impl_namespace}::"));
                    p.print_metadata_access_function_call(accessor, &entry.requirements);
                    p.write("._0;\n");
                    p.writer().dedent();
                    p.write("}\n");
                    p.writer().dedent();
                    p.write("};\n");
                }
            },
            NamespaceTrivia::AttributeSwiftPrivate,
        );
    }
}

/// `SHAPES_CXX_H` for module `Shapes`.
fn include_guard(module: &Module) -> String {
    let stem: String = module
        .name()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    format!("{stem}_CXX_H")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(json: &str) -> String {
        let manifest = ManifestModel::from_json("test.json", json).unwrap();
        HeaderAssembler::new(&manifest, PrinterConfig::default()).assemble()
    }

    #[test]
    fn test_include_guard() {
        assert_eq!(include_guard(&Module::new("Shapes")), "SHAPES_CXX_H");
        assert_eq!(include_guard(&Module::new("my-lib.core")), "MY_LIB_CORE_CXX_H");
    }

    #[test]
    fn test_empty_module() {
        let header = assemble(r#"{ "modules": [{ "name": "Empty", "current": true }] }"#);
        assert!(header.starts_with("// Interop header for module `Empty`"));
        assert!(header.contains("#ifndef EMPTY_CXX_H\n#define EMPTY_CXX_H\n"));
        assert!(header.contains(
            "namespace Empty __attribute__((swift_private)) SWIFT_SYMBOL_MODULE(\"Empty\") {\n\n"
        ));
        assert!(header.contains("} // namespace Empty\n"));
        assert!(!header.contains("namespace swift"));
        assert!(header.ends_with("#endif // EMPTY_CXX_H\n"));
    }

    #[test]
    fn test_namespaces_are_balanced() {
        let header = assemble(
            r#"{ "modules": [{ "name": "Shapes", "current": true }],
                 "types": [{ "name": "Circle", "module": "Shapes", "accessor": "$s6Shapes6CircleVMa" }] }"#,
        );
        let opened = header.lines().filter(|l| l.starts_with("namespace ")).count();
        let closed = header.lines().filter(|l| l.starts_with("} // namespace ")).count();
        assert_eq!(opened, 3);
        assert_eq!(opened, closed);
    }

    #[test]
    fn test_known_c_types_become_aliases() {
        let header = assemble(
            r#"{ "modules": [{ "name": "Shapes", "current": true }],
                 "types": [{ "name": "Handle", "module": "Shapes", "accessor": "h",
                             "c_type": { "name": "void *", "nullable": true } }] }"#,
        );
        assert!(header.contains("using Handle = void * _Null_unspecified;\n"));
        assert!(!header.contains("class"));
        assert!(!header.contains("SWIFT_EXTERN"));
    }

    #[test]
    fn test_protocols_are_not_declared() {
        let header = assemble(
            r#"{ "modules": [{ "name": "Shapes", "current": true }],
                 "types": [{ "name": "Drawable", "module": "Shapes", "kind": "protocol", "accessor": "$s6Shapes8DrawableMp" },
                           { "name": "Circle", "module": "Shapes", "kind": "enum", "accessor": "c" }] }"#,
        );
        assert!(!header.contains("Drawable"));
        assert!(header.contains("class Circle final {\n"));
    }

    #[test]
    fn test_tagged_foreign_scopes_are_qualified() {
        let header = assemble(
            r#"{ "modules": [{ "name": "Shapes", "current": true }],
                 "foreign_types": [{ "name": "Red", "scopes": ["gfx", { "kind": "unscoped_enum", "name": "Color" }] }] }"#,
        );
        assert!(header.contains("using Red = gfx::Red;\n"));
    }

    #[test]
    fn test_types_of_other_modules_are_not_declared() {
        let header = assemble(
            r#"{ "modules": [{ "name": "Shapes", "current": true }, { "name": "Geometry" }],
                 "types": [{ "name": "Point", "module": "Geometry", "accessor": "p" }] }"#,
        );
        assert!(!header.contains("Point"));
    }
}

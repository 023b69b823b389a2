//! Template headers for generic types.
//!
//! A generic native type is declared in C++ as a class template whose parameters must satisfy
//! `swift::isUsableInGenericContext`. Compilers with concepts check that in a `requires` clause; older ones
//! get the same check as `static_assert`s inside the class body. The two forms are guarded by
//! `#ifdef __cpp_concepts` and `#ifndef __cpp_concepts`, so exactly one of them is ever compiled.
//!
//! ## Notes
//! - Only the innermost parameters of a signature are printed.
//! - A generic type with no parameters still gets `template<>`; the constraint forms are then omitted.
//!
//! ## Examples
//! ```text
//! template<class T_0_0, class T_0_1>
//! #ifdef __cpp_concepts
//! requires swift::isUsableInGenericContext<T_0_0> && swift::isUsableInGenericContext<T_0_1>
//! #endif // __cpp_concepts
//! ```

use clangprint_core::lang::conventions::{
    CONCEPTS_FEATURE_MACRO, GENERIC_CONTEXT_ASSERT_MESSAGE, GENERIC_CONTEXT_TRAIT,
};

use crate::model::{GenericParam, GenericSignature, NativeSymbol};

use super::SyntaxPrinter;

impl SyntaxPrinter<'_> {
    /// `T_<depth>_<index>`
    pub fn print_generic_param_name(&mut self, param: GenericParam) {
        self.out.write(&param.cxx_name());
    }

    /// `swift::isUsableInGenericContext<T_d_i>`
    fn print_generic_context_check(&mut self, param: GenericParam) {
        self.print_runtime_qualifier();
        self.out.write(GENERIC_CONTEXT_TRAIT);
        self.out.write("<");
        self.print_generic_param_name(param);
        self.out.write(">");
    }

    /// `template<class ...>` plus the concepts-guarded `requires` clause.
    pub fn print_generic_signature(&mut self, signature: &GenericSignature) {
        let params = signature.innermost_params();
        self.out.write("template<");
        self.interleave_comma(params, |p, &param| {
            p.out.write("class ");
            p.print_generic_param_name(param);
        });
        self.out.write(">\n");
        if params.is_empty() {
            return;
        }

        self.out.write(&format!("#ifdef {CONCEPTS_FEATURE_MACRO}\n"));
        self.out.write("requires ");
        self.interleave(params, " && ", |p, &param| p.print_generic_context_check(param));
        self.out.write(&format!("\n#endif // {CONCEPTS_FEATURE_MACRO}\n"));
    }

    /// One `static_assert` per parameter, active only without concepts support.
    pub fn print_generic_signature_inner_static_asserts(&mut self, signature: &GenericSignature) {
        let params = signature.innermost_params();
        if params.is_empty() {
            return;
        }

        self.out.write(&format!("#ifndef {CONCEPTS_FEATURE_MACRO}\n"));
        self.interleave(params, "\n", |p, &param| {
            p.out.write("static_assert(");
            p.print_generic_context_check(param);
            p.out.write(&format!(", \"{GENERIC_CONTEXT_ASSERT_MESSAGE}\");"));
        });
        self.out.write(&format!("\n#endif // {CONCEPTS_FEATURE_MACRO}\n"));
    }

    /// `<T_0_0, T_0_1>`
    pub fn print_generic_signature_params(&mut self, signature: &GenericSignature) {
        self.out.write("<");
        self.interleave_comma(signature.innermost_params(), |p, &param| p.print_generic_param_name(param));
        self.out.write(">");
    }

    /// Template header for a type declared outside its member declarations.
    ///
    /// Returns `true` when the type is not generic and nothing was printed.
    pub fn print_type_template_specifiers(&mut self, symbol: &NativeSymbol) -> bool {
        match &symbol.generic_signature {
            None => true,
            Some(signature) => {
                self.print_generic_signature(signature);
                false
            }
        }
    }

    /// Static-assert fallback for a type's template header.
    ///
    /// Returns `true` when the type is not generic and nothing was printed.
    pub fn print_type_inner_static_asserts(&mut self, symbol: &NativeSymbol) -> bool {
        match &symbol.generic_signature {
            None => true,
            Some(signature) => {
                self.print_generic_signature_inner_static_asserts(signature);
                false
            }
        }
    }
}

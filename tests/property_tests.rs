//! Property-based tests for the syntax printer
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use std::collections::HashSet;

use clangprint::model::{DetachedModel, GenericParam, GenericRequirement, GenericSignature};
use clangprint::printer::LeadingTrivia;
use clangprint::{CodeWriter, PrintContext, PrinterConfig, SyntaxPrinter};
use clangprint_core::lang::dialect::{ALL_DIALECTS, Dialect};
use clangprint_core::lang::keywords::{self, KeywordSet};
use proptest::prelude::*;

fn print_in(dialect: Dialect, f: impl FnOnce(&mut SyntaxPrinter<'_>)) -> String {
    let ctx = PrintContext::new(PrinterConfig::new().with_dialect(dialect), &DetachedModel);
    let mut out = CodeWriter::new();
    f(&mut SyntaxPrinter::new(&mut out, &ctx));
    out.finish()
}

fn identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z_][A-Za-z0-9_]{0,12}",
        prop::sample::select(keywords::KEYWORDS.iter().map(|k| k.spelling.to_string()).collect::<Vec<_>>()),
    ]
}

fn dialect() -> impl Strategy<Value = Dialect> {
    prop::sample::select(ALL_DIALECTS.to_vec())
}

// =============================================================================
// Identifier Properties
// =============================================================================

proptest! {
    /// Property: output is the name, plus `_` exactly when the name is reserved
    #[test]
    fn identifier_sanitization(name in identifier(), dialect in dialect()) {
        let reserved = KeywordSet::new(dialect).contains(&name);
        let out = print_in(dialect, |p| p.print_identifier(&name));
        if reserved {
            prop_assert_eq!(out, format!("{name}_"));
        } else {
            prop_assert_eq!(out, name);
        }
    }

    /// Property: repeated lookups agree
    #[test]
    fn keyword_lookup_is_stable(name in identifier(), dialect in dialect()) {
        let set = KeywordSet::new(dialect);
        prop_assert_eq!(set.contains(&name), set.contains(&name));
        prop_assert_eq!(set.contains(&name), KeywordSet::new(dialect).contains(&name));
    }

    /// Property: sanitized names are never reserved themselves
    #[test]
    fn sanitized_names_are_not_reserved(name in identifier()) {
        let out = print_in(Dialect::Clang, |p| p.print_identifier(&name));
        prop_assert!(!KeywordSet::default().contains(&out));
    }
}

// =============================================================================
// Generic Parameter Properties
// =============================================================================

proptest! {
    /// Property: names are `T_<d>_<i>` and distinct coordinates give distinct names
    #[test]
    fn generic_param_names_are_unique(coords in prop::collection::hash_set((0u32..50, 0u32..50), 0..40)) {
        let mut names = HashSet::new();
        for &(depth, index) in &coords {
            let name = GenericParam::new(depth, index).cxx_name();
            prop_assert_eq!(&name, &format!("T_{depth}_{index}"));
            prop_assert_eq!(&name, &GenericParam::new(depth, index).cxx_name());
            names.insert(name);
        }
        prop_assert_eq!(names.len(), coords.len());
    }

    /// Property: the bracketed list names exactly the innermost parameters, in order
    #[test]
    fn bracketed_params_match_innermost(count in 0u32..8, outer in 0u32..4) {
        let sig = GenericSignature::new(
            (0..outer).map(|i| GenericParam::new(0, i)).chain((0..count).map(|i| GenericParam::new(1, i))),
        );
        let out = print_in(Dialect::Clang, |p| p.print_generic_signature_params(&sig));
        let expected_depth = if count > 0 { 1 } else { 0 };
        let expected: Vec<String> = sig.innermost_params().iter().map(|p| p.cxx_name()).collect();
        prop_assert_eq!(out, format!("<{}>", expected.join(", ")));
        prop_assert!(sig.innermost_params().iter().all(|p| p.depth == expected_depth));
    }
}

// =============================================================================
// Requirement Properties
// =============================================================================

proptest! {
    /// Property: leading-comma lists print nothing when empty and start with `, ` otherwise
    #[test]
    fn leading_comma_only_for_non_empty_lists(count in 0u32..6) {
        let reqs: Vec<GenericRequirement> = (0..count).map(|i| GenericRequirement::metadata(GenericParam::new(0, i))).collect();
        let out = print_in(Dialect::Clang, |p| p.print_generic_requirements_instantiations(&reqs, LeadingTrivia::Comma));
        if count == 0 {
            prop_assert!(out.is_empty());
        } else {
            prop_assert!(out.starts_with(", "));
            prop_assert_eq!(out.matches("::getTypeMetadata()").count(), count as usize);
        }
    }
}

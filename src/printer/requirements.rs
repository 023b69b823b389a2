//! Metadata arguments for generic requirements.
//!
//! Each requirement of a generic type becomes one argument to its metadata accessor:
//! `swift::TypeMetadataTrait<T_0_0>::getTypeMetadata()`.

use clangprint_core::lang::conventions::TYPE_METADATA_TRAIT;

use crate::model::{GenericRequirement, RequirementKind};

use super::SyntaxPrinter;

/// What to print before a requirement list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadingTrivia {
    #[default]
    None,
    /// `, ` when the list is non-empty, for lists appended to existing arguments.
    Comma,
}

impl SyntaxPrinter<'_> {
    /// Print the metadata argument for one requirement.
    ///
    /// # Panics
    /// On witness-table requirements and on requirements whose subject is not a plain generic parameter.
    pub fn print_generic_requirement_instantiation(&mut self, requirement: &GenericRequirement) {
        if let RequirementKind::WitnessTable { protocol } = &requirement.kind {
            unimplemented!(
                "INVARIANT: witness table argument for `{}: {protocol}` in a metadata-only requirement list",
                requirement.subject
            );
        }
        let Some(param) = requirement.subject.as_param() else {
            panic!(
                "INVARIANT: metadata requirement on `{}`, which is not a generic parameter",
                requirement.subject
            );
        };
        self.print_runtime_qualifier();
        self.out.write(TYPE_METADATA_TRAIT);
        self.out.write("<");
        self.print_generic_param_name(param);
        self.out.write(">::getTypeMetadata()");
    }

    /// Comma-joined metadata arguments for `requirements`.
    pub fn print_generic_requirements_instantiations(
        &mut self,
        requirements: &[GenericRequirement],
        trivia: LeadingTrivia,
    ) {
        if requirements.is_empty() {
            return;
        }
        if trivia == LeadingTrivia::Comma {
            self.out.write(", ");
        }
        self.interleave_comma(requirements, |p, r| p.print_generic_requirement_instantiation(r));
    }

    /// `name(0, <metadata args>)`: a metadata request for the complete state of a type.
    pub fn print_metadata_access_function_call(&mut self, name: &str, requirements: &[GenericRequirement]) {
        self.out.write(name);
        self.out.write("(0");
        self.print_generic_requirements_instantiations(requirements, LeadingTrivia::Comma);
        self.out.write(")");
    }
}

#[cfg(test)]
mod tests {
    use super::LeadingTrivia;
    use crate::model::{GenericParam, GenericRequirement, TypeParameter};
    use crate::printer::test_support::render;

    fn reqs(n: u32) -> Vec<GenericRequirement> {
        (0..n).map(|i| GenericRequirement::metadata(GenericParam::new(0, i))).collect()
    }

    #[test]
    fn test_single_instantiation() {
        let out = render(|p| p.print_generic_requirement_instantiation(&reqs(1)[0]));
        assert_eq!(out, "swift::TypeMetadataTrait<T_0_0>::getTypeMetadata()");
    }

    #[test]
    fn test_instantiations_are_comma_joined() {
        let out = render(|p| p.print_generic_requirements_instantiations(&reqs(2), LeadingTrivia::None));
        assert_eq!(
            out,
            "swift::TypeMetadataTrait<T_0_0>::getTypeMetadata(), swift::TypeMetadataTrait<T_0_1>::getTypeMetadata()"
        );
    }

    #[test]
    fn test_leading_comma_only_when_non_empty() {
        assert_eq!(render(|p| p.print_generic_requirements_instantiations(&[], LeadingTrivia::Comma)), "");
        let out = render(|p| p.print_generic_requirements_instantiations(&reqs(1), LeadingTrivia::Comma));
        assert!(out.starts_with(", swift::"));
    }

    #[test]
    fn test_metadata_access_call() {
        assert_eq!(render(|p| p.print_metadata_access_function_call("$s6Shapes6CircleVMa", &[])), "$s6Shapes6CircleVMa(0)");
        let out = render(|p| p.print_metadata_access_function_call("$s6Shapes4PairVMa", &reqs(1)));
        assert_eq!(out, "$s6Shapes4PairVMa(0, swift::TypeMetadataTrait<T_0_0>::getTypeMetadata())");
    }

    #[test]
    #[should_panic(expected = "INVARIANT")]
    fn test_witness_table_requirement_panics() {
        let r = GenericRequirement::witness_table(TypeParameter::Param(GenericParam::new(0, 0)), "Hashable");
        render(|p| p.print_generic_requirement_instantiation(&r));
    }

    #[test]
    #[should_panic(expected = "not a generic parameter")]
    fn test_dependent_member_subject_panics() {
        let r = GenericRequirement {
            kind: crate::model::RequirementKind::Metadata,
            subject: TypeParameter::DependentMember {
                base: Box::new(TypeParameter::Param(GenericParam::new(0, 0))),
                name: "Element".to_string(),
            },
        };
        render(|p| p.print_generic_requirement_instantiation(&r));
    }
}

//! Generic signatures and requirements.
//!
//! ## Notes
//! - Parameters are identified structurally by `(depth, index)`. Depth 0 is the outermost generic context.
//! - The printer only ever spells the innermost parameters (greatest depth); outer parameters belong to the
//!   enclosing declaration's template header.

use std::fmt;

use clangprint_core::lang::conventions::generic_param_name;

/// One generic type parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenericParam {
    pub depth: u32,
    pub index: u32,
}

impl GenericParam {
    pub fn new(depth: u32, index: u32) -> Self {
        Self { depth, index }
    }

    /// The emitted C++ name, `T_<depth>_<index>`.
    pub fn cxx_name(self) -> String {
        generic_param_name(self.depth, self.index)
    }
}

impl fmt::Display for GenericParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cxx_name())
    }
}

/// Ordered list of generic parameters of one declaration (including those of enclosing contexts).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericSignature {
    params: Vec<GenericParam>,
}

impl GenericSignature {
    /// Build a signature; parameters are kept in `(depth, index)` order and deduplicated.
    pub fn new(params: impl IntoIterator<Item = GenericParam>) -> Self {
        let mut params: Vec<GenericParam> = params.into_iter().collect();
        params.sort_unstable();
        params.dedup();
        Self { params }
    }

    /// Convenience for the common single-level case: `count` parameters at depth 0.
    pub fn with_params(count: u32) -> Self {
        Self::new((0..count).map(|index| GenericParam::new(0, index)))
    }

    pub fn params(&self) -> &[GenericParam] {
        &self.params
    }

    /// Parameters introduced by the innermost generic context.
    pub fn innermost_params(&self) -> &[GenericParam] {
        let Some(last) = self.params.last() else {
            return &[];
        };
        let start = self.params.partition_point(|p| p.depth < last.depth);
        &self.params[start..]
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// The subject of a requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeParameter {
    Param(GenericParam),
    /// An associated type reached through a parameter, e.g. `T.Element`.
    DependentMember { base: Box<TypeParameter>, name: String },
}

impl TypeParameter {
    pub fn as_param(&self) -> Option<GenericParam> {
        match self {
            TypeParameter::Param(param) => Some(*param),
            TypeParameter::DependentMember { .. } => None,
        }
    }
}

impl fmt::Display for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeParameter::Param(param) => write!(f, "{param}"),
            TypeParameter::DependentMember { base, name } => write!(f, "{base}.{name}"),
        }
    }
}

/// What a requirement asks the caller to pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementKind {
    /// Type metadata of the subject.
    Metadata,
    /// Protocol witness table proving the subject conforms to `protocol`.
    WitnessTable { protocol: String },
}

/// One entry of a generic declaration's runtime requirement list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericRequirement {
    pub kind: RequirementKind,
    pub subject: TypeParameter,
}

impl GenericRequirement {
    /// Metadata requirement on a plain parameter.
    pub fn metadata(param: GenericParam) -> Self {
        Self {
            kind: RequirementKind::Metadata,
            subject: TypeParameter::Param(param),
        }
    }

    pub fn witness_table(subject: TypeParameter, protocol: impl Into<String>) -> Self {
        Self {
            kind: RequirementKind::WitnessTable {
                protocol: protocol.into(),
            },
            subject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_innermost_params_take_greatest_depth() {
        let sig = GenericSignature::new([
            GenericParam::new(1, 0),
            GenericParam::new(0, 1),
            GenericParam::new(0, 0),
            GenericParam::new(1, 1),
        ]);
        assert_eq!(sig.innermost_params(), &[GenericParam::new(1, 0), GenericParam::new(1, 1)]);
        assert_eq!(sig.params().len(), 4);
    }

    #[test]
    fn test_empty_signature_has_no_innermost_params() {
        let sig = GenericSignature::default();
        assert!(sig.is_empty());
        assert!(sig.innermost_params().is_empty());
    }

    #[test]
    fn test_param_names() {
        assert_eq!(GenericParam::new(0, 0).to_string(), "T_0_0");
        assert_eq!(GenericParam::new(2, 13).cxx_name(), "T_2_13");
    }

    #[test]
    fn test_dependent_member_display() {
        let member = TypeParameter::DependentMember {
            base: Box::new(TypeParameter::Param(GenericParam::new(0, 0))),
            name: "Element".to_string(),
        };
        assert_eq!(member.to_string(), "T_0_0.Element");
        assert_eq!(member.as_param(), None);
    }
}

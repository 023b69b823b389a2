//! Nullability qualifier vocabulary.
//!
//! Clang spells nullability two ways: context-sensitive keywords inside Objective-C property and method
//! declarations (`nonnull`), and type-qualifier keywords anywhere a pointer appears (`_Nonnull`).
//!
//! ## Examples
//! ```rust
//! use clangprint_core::lang::nullability::NullabilityKind;
//!
//! assert_eq!(NullabilityKind::Nullable.qualifier(), "_Nullable");
//! assert_eq!(NullabilityKind::Nullable.context_sensitive(), "nullable");
//! ```

/// Whether a pointer may be null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullabilityKind {
    NonNull,
    Nullable,
    /// Nullability is not known (implicitly unwrapped values).
    Unspecified,
}

/// Where a nullability annotation is printed relative to the pointer it qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullabilityPrintKind {
    /// `nonnull ` (Objective-C declaration contexts). Followed by a space.
    ContextSensitive,
    /// `_Nonnull ` before the declarator. Followed by a space.
    Before,
    /// ` _Nonnull` after the pointer. Preceded by a space.
    After,
}

impl NullabilityKind {
    /// Context-sensitive keyword spelling.
    pub fn context_sensitive(self) -> &'static str {
        match self {
            NullabilityKind::NonNull => "nonnull",
            NullabilityKind::Nullable => "nullable",
            NullabilityKind::Unspecified => "null_unspecified",
        }
    }

    /// Type-qualifier spelling.
    pub fn qualifier(self) -> &'static str {
        match self {
            NullabilityKind::NonNull => "_Nonnull",
            NullabilityKind::Nullable => "_Nullable",
            NullabilityKind::Unspecified => "_Null_unspecified",
        }
    }
}

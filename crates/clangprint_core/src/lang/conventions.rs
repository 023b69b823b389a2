//! Shared interop conventions (well-known identifiers in generated headers).
//!
//! These names are part of the contract with the runtime support headers, so the printer spells them from here
//! instead of repeating literals.

/// Namespace holding the runtime's public C++ support API.
pub const RUNTIME_NAMESPACE: &str = "swift";

/// Implementation-detail namespace nested inside [`RUNTIME_NAMESPACE`].
pub const IMPL_NAMESPACE: &str = "_impl";

/// Class name of opaque value storage in the support headers.
pub const OPAQUE_STORAGE_CLASS: &str = "OpaqueStorage";

/// Prefix of every emitted generic parameter name (`T_<depth>_<index>`).
pub const GENERIC_PARAM_PREFIX: &str = "T_";

/// Trait (variable template) checked for every generic argument.
pub const GENERIC_CONTEXT_TRAIT: &str = "isUsableInGenericContext";

/// Message of the fallback `static_assert` for [`GENERIC_CONTEXT_TRAIT`].
pub const GENERIC_CONTEXT_ASSERT_MESSAGE: &str = "type cannot be used in a Swift generic context";

/// Trait whose `getTypeMetadata()` produces metadata for a generic argument.
pub const TYPE_METADATA_TRAIT: &str = "TypeMetadataTrait";

/// Feature-test macro for inline `requires` clauses.
pub const CONCEPTS_FEATURE_MACRO: &str = "__cpp_concepts";

/// Target macro for pointer-authentication capable CPUs.
pub const PTRAUTH_TARGET_MACRO: &str = "__arm64e__";

/// Pointer-auth discriminator blended with the address of a value witness table slot.
pub const VALUE_WITNESS_TABLE_DISCRIMINATOR: u16 = 0x2e3f;

/// Number of generic requirements a metadata accessor takes as direct arguments.
pub const MAX_DIRECT_METADATA_ACCESS_ARGS: usize = 3;

/// Diagnostic group silenced around C++17-only constructs.
pub const CXX17_EXTENSIONS_DIAGNOSTIC: &str = "c++17-extensions";

/// Name of the constant that carries a type's debugger mangled name.
pub const MANGLED_NAME_CONSTANT: &str = "$__swift_mangled_name";

/// Directory of the interop support headers inside the toolchain.
pub const SHIM_HEADER_DIR: &str = "swiftToCxx";

/// Support header every generated interop header includes.
pub const SUPPORT_HEADER: &str = "_SwiftCxxInteroperability.h";

/// Attribute marking a declaration private to the host language.
pub const PRIVATE_ATTRIBUTE: &str = "__attribute__((swift_private))";

/// Always-inline spelling used for thunks.
pub const INLINE_THUNK_ATTRIBUTE: &str = "inline __attribute__((always_inline))";

// Support-header macros
pub const EXTERN_MACRO: &str = "SWIFT_EXTERN";
pub const NOEXCEPT_MACRO: &str = "SWIFT_NOEXCEPT";
pub const CALL_MACRO: &str = "SWIFT_CALL";
pub const SYMBOL_MACRO: &str = "SWIFT_SYMBOL";
pub const SYMBOL_MODULE_MACRO: &str = "SWIFT_SYMBOL_MODULE";

// Runtime types referenced through the implementation namespace
pub const METADATA_RESPONSE_TYPE: &str = "MetadataResponseTy";
pub const METADATA_REQUEST_TYPE: &str = "MetadataRequestTy";
pub const VALUE_WITNESS_TABLE_TYPE: &str = "ValueWitnessTable";

/// Canonical name of the generic parameter at `(depth, index)`.
///
/// ## Examples
/// ```rust
/// use clangprint_core::lang::conventions::generic_param_name;
///
/// assert_eq!(generic_param_name(0, 2), "T_0_2");
/// ```
pub fn generic_param_name(depth: u32, index: u32) -> String {
    format!("{GENERIC_PARAM_PREFIX}{depth}_{index}")
}

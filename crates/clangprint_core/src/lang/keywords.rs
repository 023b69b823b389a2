//! Define the reserved-word vocabulary of the C family, as clang tokenizes it.
//!
//! This module is the single source of truth for spellings that generated identifiers must not collide with: a
//! const metadata table ([`KEYWORDS`]) that records each spelling, a coarse category and where it is reserved,
//! plus [`KeywordSet`], the per-dialect lookup structure the printer is constructed with.
//!
//! ## Notes
//! - Lookup is **case-sensitive**: `Class` is not reserved, `class` is.
//! - The table mirrors the `KEYWORD`, `CXX_KEYWORD_OPERATOR` and type-trait entries of clang 17's
//!   `TokenKinds.def` (core words, C++ operator spellings, GNU/Microsoft/OpenCL/CUDA and clang extensions).
//!   Extensions are reserved in every mode because clang recognizes them everywhere. HLSL-only keywords and
//!   `ALIAS` spellings are not part of it.
//! - Entries that appear in both languages from different revisions use [`Reserved::Both`].
//!
//! ## Examples
//! ```rust
//! use clangprint_core::lang::dialect::{CStandard, Dialect};
//! use clangprint_core::lang::keywords::KeywordSet;
//!
//! let c11 = KeywordSet::new(Dialect::C(CStandard::C11));
//! assert!(c11.contains("restrict"));
//! assert!(!c11.contains("class"));
//!
//! let clang = KeywordSet::default();
//! assert!(clang.contains("class"));
//! assert!(!clang.contains(""));
//! ```

use std::collections::HashSet;

use super::dialect::{CStandard, CxxStandard, Dialect, Reserved};

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Statement,
    Declaration,
    Type,
    Qualifier,
    Literal,
    Operator,
    /// Compiler-specific spelling (GNU, Microsoft, OpenCL, clang builtins and type traits).
    Extension,
}

/// Metadata for a reserved word.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub spelling: &'static str,
    pub category: KeywordCategory,
    pub reserved: Reserved,
}

use CStandard::*;
use CxxStandard::*;
use KeywordCategory::*;

/// Registry of all reserved words.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Core words shared by every C and C++ revision
    kw("auto", Qualifier, Reserved::Always),
    kw("break", Statement, Reserved::Always),
    kw("case", Statement, Reserved::Always),
    kw("char", Type, Reserved::Always),
    kw("const", Qualifier, Reserved::Always),
    kw("continue", Statement, Reserved::Always),
    kw("default", Statement, Reserved::Always),
    kw("do", Statement, Reserved::Always),
    kw("double", Type, Reserved::Always),
    kw("else", Statement, Reserved::Always),
    kw("enum", Declaration, Reserved::Always),
    kw("extern", Qualifier, Reserved::Always),
    kw("float", Type, Reserved::Always),
    kw("for", Statement, Reserved::Always),
    kw("goto", Statement, Reserved::Always),
    kw("if", Statement, Reserved::Always),
    kw("int", Type, Reserved::Always),
    kw("long", Type, Reserved::Always),
    kw("register", Qualifier, Reserved::Always),
    kw("return", Statement, Reserved::Always),
    kw("short", Type, Reserved::Always),
    kw("signed", Type, Reserved::Always),
    kw("sizeof", Operator, Reserved::Always),
    kw("static", Qualifier, Reserved::Always),
    kw("struct", Declaration, Reserved::Always),
    kw("switch", Statement, Reserved::Always),
    kw("typedef", Declaration, Reserved::Always),
    kw("union", Declaration, Reserved::Always),
    kw("unsigned", Type, Reserved::Always),
    kw("void", Type, Reserved::Always),
    kw("volatile", Qualifier, Reserved::Always),
    kw("while", Statement, Reserved::Always),
    // C99 / C11 underscore spellings (clang accepts them in every mode)
    kw("inline", Qualifier, Reserved::Both { c: C99, cxx: Cxx98 }),
    kw("restrict", Qualifier, Reserved::C(C99)),
    kw("_Bool", Type, Reserved::Always),
    kw("_Complex", Type, Reserved::Always),
    kw("_Imaginary", Type, Reserved::Always),
    kw("_Alignas", Declaration, Reserved::Always),
    kw("_Alignof", Operator, Reserved::Always),
    kw("_Atomic", Qualifier, Reserved::Always),
    kw("_Generic", Operator, Reserved::Always),
    kw("_Noreturn", Qualifier, Reserved::Always),
    kw("_Static_assert", Declaration, Reserved::Always),
    kw("_Thread_local", Qualifier, Reserved::Always),
    // C23
    kw("typeof", Operator, Reserved::C(C23)),
    kw("typeof_unqual", Operator, Reserved::C(C23)),
    kw("_BitInt", Type, Reserved::Always),
    kw("_Decimal32", Type, Reserved::Always),
    kw("_Decimal64", Type, Reserved::Always),
    kw("_Decimal128", Type, Reserved::Always),
    // C++98
    kw("asm", Statement, Reserved::Cxx(Cxx98)),
    kw("bool", Type, Reserved::Both { c: C23, cxx: Cxx98 }),
    kw("catch", Statement, Reserved::Cxx(Cxx98)),
    kw("class", Declaration, Reserved::Cxx(Cxx98)),
    kw("const_cast", Operator, Reserved::Cxx(Cxx98)),
    kw("delete", Operator, Reserved::Cxx(Cxx98)),
    kw("dynamic_cast", Operator, Reserved::Cxx(Cxx98)),
    kw("explicit", Qualifier, Reserved::Cxx(Cxx98)),
    kw("export", Declaration, Reserved::Cxx(Cxx98)),
    kw("false", Literal, Reserved::Both { c: C23, cxx: Cxx98 }),
    kw("friend", Declaration, Reserved::Cxx(Cxx98)),
    kw("mutable", Qualifier, Reserved::Cxx(Cxx98)),
    kw("namespace", Declaration, Reserved::Cxx(Cxx98)),
    kw("new", Operator, Reserved::Cxx(Cxx98)),
    kw("operator", Declaration, Reserved::Cxx(Cxx98)),
    kw("private", Qualifier, Reserved::Cxx(Cxx98)),
    kw("protected", Qualifier, Reserved::Cxx(Cxx98)),
    kw("public", Qualifier, Reserved::Cxx(Cxx98)),
    kw("reinterpret_cast", Operator, Reserved::Cxx(Cxx98)),
    kw("static_cast", Operator, Reserved::Cxx(Cxx98)),
    kw("template", Declaration, Reserved::Cxx(Cxx98)),
    kw("this", Literal, Reserved::Cxx(Cxx98)),
    kw("throw", Statement, Reserved::Cxx(Cxx98)),
    kw("true", Literal, Reserved::Both { c: C23, cxx: Cxx98 }),
    kw("try", Statement, Reserved::Cxx(Cxx98)),
    kw("typeid", Operator, Reserved::Cxx(Cxx98)),
    kw("typename", Declaration, Reserved::Cxx(Cxx98)),
    kw("using", Declaration, Reserved::Cxx(Cxx98)),
    kw("virtual", Qualifier, Reserved::Cxx(Cxx98)),
    kw("wchar_t", Type, Reserved::Cxx(Cxx98)),
    // C++11 (several were adopted by C23)
    kw("alignas", Declaration, Reserved::Both { c: C23, cxx: Cxx11 }),
    kw("alignof", Operator, Reserved::Both { c: C23, cxx: Cxx11 }),
    kw("char16_t", Type, Reserved::Cxx(Cxx11)),
    kw("char32_t", Type, Reserved::Cxx(Cxx11)),
    kw("constexpr", Qualifier, Reserved::Both { c: C23, cxx: Cxx11 }),
    kw("decltype", Operator, Reserved::Cxx(Cxx11)),
    kw("noexcept", Qualifier, Reserved::Cxx(Cxx11)),
    kw("nullptr", Literal, Reserved::Both { c: C23, cxx: Cxx11 }),
    kw("static_assert", Declaration, Reserved::Both { c: C23, cxx: Cxx11 }),
    kw("thread_local", Qualifier, Reserved::Both { c: C23, cxx: Cxx11 }),
    // C++20
    kw("char8_t", Type, Reserved::Cxx(Cxx20)),
    kw("concept", Declaration, Reserved::Cxx(Cxx20)),
    kw("requires", Declaration, Reserved::Cxx(Cxx20)),
    kw("co_await", Operator, Reserved::Cxx(Cxx20)),
    kw("co_return", Statement, Reserved::Cxx(Cxx20)),
    kw("co_yield", Operator, Reserved::Cxx(Cxx20)),
    kw("consteval", Qualifier, Reserved::Cxx(Cxx20)),
    kw("constinit", Qualifier, Reserved::Cxx(Cxx20)),
    // C++ alternative operator spellings
    kw("and", Operator, Reserved::Cxx(Cxx98)),
    kw("and_eq", Operator, Reserved::Cxx(Cxx98)),
    kw("bitand", Operator, Reserved::Cxx(Cxx98)),
    kw("bitor", Operator, Reserved::Cxx(Cxx98)),
    kw("compl", Operator, Reserved::Cxx(Cxx98)),
    kw("not", Operator, Reserved::Cxx(Cxx98)),
    kw("not_eq", Operator, Reserved::Cxx(Cxx98)),
    kw("or", Operator, Reserved::Cxx(Cxx98)),
    kw("or_eq", Operator, Reserved::Cxx(Cxx98)),
    kw("xor", Operator, Reserved::Cxx(Cxx98)),
    kw("xor_eq", Operator, Reserved::Cxx(Cxx98)),
    // GNU extensions
    ext("__alignof"),
    ext("__alignof__"),
    ext("__asm"),
    ext("__asm__"),
    ext("__attribute"),
    ext("__attribute__"),
    ext("__auto_type"),
    ext("__builtin_offsetof"),
    ext("__builtin_types_compatible_p"),
    ext("__builtin_va_arg"),
    ext("__complex"),
    ext("__complex__"),
    ext("__const"),
    ext("__const__"),
    ext("__decltype"),
    ext("__extension__"),
    ext("__func__"),
    ext("__FUNCTION__"),
    ext("__PRETTY_FUNCTION__"),
    ext("__imag"),
    ext("__imag__"),
    ext("__inline"),
    ext("__inline__"),
    ext("__int128"),
    ext("__label__"),
    ext("__null"),
    ext("__real"),
    ext("__real__"),
    ext("__restrict"),
    ext("__restrict__"),
    ext("__signed"),
    ext("__signed__"),
    ext("__thread"),
    ext("__typeof"),
    ext("__typeof__"),
    ext("__volatile"),
    ext("__volatile__"),
    // Floating-point extension types
    ext("_Float16"),
    ext("__bf16"),
    ext("__fp16"),
    ext("__float128"),
    ext("__ibm128"),
    ext("half"),
    // Microsoft extensions
    ext("__int8"),
    ext("__int16"),
    ext("__int32"),
    ext("__int64"),
    ext("__cdecl"),
    ext("__declspec"),
    ext("__except"),
    ext("__fastcall"),
    ext("__finally"),
    ext("__forceinline"),
    ext("__leave"),
    ext("__ptr32"),
    ext("__ptr64"),
    ext("__regcall"),
    ext("__sptr"),
    ext("__stdcall"),
    ext("__super"),
    ext("__thiscall"),
    ext("__try"),
    ext("__unaligned"),
    ext("__uptr"),
    ext("__uuidof"),
    ext("__vectorcall"),
    ext("__w64"),
    // OpenCL address spaces and access qualifiers
    ext("__constant"),
    ext("__generic"),
    ext("__global"),
    ext("__kernel"),
    ext("__local"),
    ext("__private"),
    ext("__read_only"),
    ext("__read_write"),
    ext("__write_only"),
    ext("addrspace_cast"),
    ext("pipe"),
    // CUDA
    ext("__noinline__"),
    // Embedded-C fixed point
    ext("_Accum"),
    ext("_Fract"),
    ext("_Sat"),
    // AltiVec / z vector
    ext("__bool"),
    ext("__pixel"),
    ext("__vector"),
    // Clang extensions
    ext("_Nonnull"),
    ext("_Nullable"),
    ext("_Nullable_result"),
    ext("_Null_unspecified"),
    ext("__builtin_astype"),
    ext("__builtin_available"),
    ext("__builtin_bit_cast"),
    ext("__builtin_convertvector"),
    ext("__builtin_COLUMN"),
    ext("__builtin_FILE"),
    ext("__builtin_FUNCTION"),
    ext("__builtin_LINE"),
    ext("__builtin_omp_required_simd_align"),
    ext("__builtin_source_location"),
    ext("__builtin_sycl_unique_stable_name"),
    ext("__module_private__"),
    ext("__objc_no"),
    ext("__objc_yes"),
    ext("__private_extern__"),
    ext("__ptrauth"),
    ext("__unknown_anytype"),
    // Clang type traits
    ext("__array_extent"),
    ext("__array_rank"),
    ext("__has_nothrow_assign"),
    ext("__has_nothrow_constructor"),
    ext("__has_nothrow_copy"),
    ext("__has_trivial_assign"),
    ext("__has_trivial_constructor"),
    ext("__has_trivial_copy"),
    ext("__has_trivial_destructor"),
    ext("__has_virtual_destructor"),
    ext("__is_abstract"),
    ext("__is_base_of"),
    ext("__is_class"),
    ext("__is_constructible"),
    ext("__is_convertible_to"),
    ext("__is_empty"),
    ext("__is_enum"),
    ext("__is_final"),
    ext("__is_literal_type"),
    ext("__is_lvalue_expr"),
    ext("__is_pod"),
    ext("__is_polymorphic"),
    ext("__is_rvalue_expr"),
    ext("__is_same"),
    ext("__is_standard_layout"),
    ext("__is_trivial"),
    ext("__is_trivially_assignable"),
    ext("__is_trivially_constructible"),
    ext("__is_trivially_copyable"),
    ext("__is_union"),
    ext("__can_pass_in_regs"),
    ext("__has_unique_object_representations"),
    ext("__is_aggregate"),
    ext("__is_arithmetic"),
    ext("__is_array"),
    ext("__is_assignable"),
    ext("__is_bounded_array"),
    ext("__is_complete_type"),
    ext("__is_compound"),
    ext("__is_const"),
    ext("__is_convertible"),
    ext("__is_destructible"),
    ext("__is_floating_point"),
    ext("__is_function"),
    ext("__is_fundamental"),
    ext("__is_integral"),
    ext("__is_interface_class"),
    ext("__is_layout_compatible"),
    ext("__is_lvalue_reference"),
    ext("__is_member_function_pointer"),
    ext("__is_member_object_pointer"),
    ext("__is_member_pointer"),
    ext("__is_nothrow_assignable"),
    ext("__is_nothrow_constructible"),
    ext("__is_nothrow_destructible"),
    ext("__is_nullptr"),
    ext("__is_object"),
    ext("__is_pointer"),
    ext("__is_pointer_interconvertible_base_of"),
    ext("__is_reference"),
    ext("__is_referenceable"),
    ext("__is_rvalue_reference"),
    ext("__is_scalar"),
    ext("__is_scoped_enum"),
    ext("__is_sealed"),
    ext("__is_signed"),
    ext("__is_trivially_relocatable"),
    ext("__is_unbounded_array"),
    ext("__is_unsigned"),
    ext("__is_void"),
    ext("__is_volatile"),
    ext("__reference_binds_to_temporary"),
    ext("__underlying_type"),
    // Clang type transformations
    ext("__add_lvalue_reference"),
    ext("__add_pointer"),
    ext("__add_rvalue_reference"),
    ext("__decay"),
    ext("__make_signed"),
    ext("__make_unsigned"),
    ext("__remove_all_extents"),
    ext("__remove_const"),
    ext("__remove_cv"),
    ext("__remove_cvref"),
    ext("__remove_extent"),
    ext("__remove_pointer"),
    ext("__remove_reference_t"),
    ext("__remove_restrict"),
    ext("__remove_volatile"),
];

/// Full metadata for a spelling, if it is in the registry.
///
/// ## Notes
/// - This does not consult a dialect; use [`KeywordSet`] to ask “is this reserved *here*”.
pub fn info_for(spelling: &str) -> Option<&'static KeywordInfo> {
    KEYWORDS.iter().find(|k| k.spelling == spelling)
}

/// Reserved words of one dialect.
///
/// Built once from [`KEYWORDS`] and immutable afterwards. The printer is constructed with a reference to one of
/// these, so there is no process-wide cache.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    dialect: Dialect,
    spellings: HashSet<&'static str>,
}

impl KeywordSet {
    /// Build the reserved-word set for `dialect`.
    pub fn new(dialect: Dialect) -> Self {
        let spellings = KEYWORDS
            .iter()
            .filter(|k| dialect.admits(k.reserved))
            .map(|k| k.spelling)
            .collect();
        Self { dialect, spellings }
    }

    /// Check whether `name` collides with a reserved word. The empty name is never reserved.
    pub fn contains(&self, name: &str) -> bool {
        !name.is_empty() && self.spellings.contains(name)
    }

    /// The dialect this set was built for.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(Dialect::Clang)
    }
}

// --- helpers -----------------------------------------------------------------

const fn kw(spelling: &'static str, category: KeywordCategory, reserved: Reserved) -> KeywordInfo {
    KeywordInfo {
        spelling,
        category,
        reserved,
    }
}

const fn ext(spelling: &'static str) -> KeywordInfo {
    kw(spelling, Extension, Reserved::Always)
}

//! Language dialects and standard revisions.
//!
//! Every reserved word in [`crate::lang::keywords`] records *where* it is reserved via [`Reserved`]. A
//! [`Dialect`] then decides whether a given entry applies.
//!
//! ## Notes
//! - [`Dialect::Clang`] is the union of every spelling clang's token table knows about, independent of the
//!   language mode. It is the safe choice for headers that are consumed from several modes at once.
//! - Standards derive `Ord`, so “reserved since C++11” is a plain comparison.
//!
//! ## Examples
//! ```rust
//! use clangprint_core::lang::dialect::{CxxStandard, Dialect, Reserved};
//!
//! let cxx17 = Dialect::Cxx(CxxStandard::Cxx17);
//! assert!(cxx17.admits(Reserved::Cxx(CxxStandard::Cxx11)));
//! assert!(!cxx17.admits(Reserved::Cxx(CxxStandard::Cxx20)));
//! assert_eq!("c++17".parse::<Dialect>().ok(), Some(cxx17));
//! ```

use std::fmt;
use std::str::FromStr;

/// ISO C revisions, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CStandard {
    C89,
    C99,
    C11,
    C17,
    C23,
}

/// ISO C++ revisions, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CxxStandard {
    Cxx98,
    Cxx11,
    Cxx14,
    Cxx17,
    Cxx20,
    Cxx23,
}

/// Where a spelling is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reserved {
    /// Reserved in every C and C++ mode (core words and compiler extensions).
    Always,
    /// Reserved in C since the given revision; never in C++.
    C(CStandard),
    /// Reserved in C++ since the given revision; never in C.
    Cxx(CxxStandard),
    /// Reserved in both languages, from different revisions.
    Both { c: CStandard, cxx: CxxStandard },
}

/// The text dialect generated code is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    C(CStandard),
    Cxx(CxxStandard),
    /// Every spelling clang reserves in any mode.
    #[default]
    Clang,
}

impl Dialect {
    /// Check whether a registry entry reserved as `reserved` applies in this dialect.
    pub fn admits(self, reserved: Reserved) -> bool {
        match (self, reserved) {
            (Dialect::Clang, _) | (_, Reserved::Always) => true,
            (Dialect::C(std), Reserved::C(since)) => std >= since,
            (Dialect::C(std), Reserved::Both { c, .. }) => std >= c,
            (Dialect::C(_), Reserved::Cxx(_)) => false,
            (Dialect::Cxx(std), Reserved::Cxx(since)) => std >= since,
            (Dialect::Cxx(std), Reserved::Both { cxx, .. }) => std >= cxx,
            (Dialect::Cxx(_), Reserved::C(_)) => false,
        }
    }

    /// The canonical command-line spelling (e.g. `c++17`).
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Clang => "clang",
            Dialect::C(CStandard::C89) => "c89",
            Dialect::C(CStandard::C99) => "c99",
            Dialect::C(CStandard::C11) => "c11",
            Dialect::C(CStandard::C17) => "c17",
            Dialect::C(CStandard::C23) => "c23",
            Dialect::Cxx(CxxStandard::Cxx98) => "c++98",
            Dialect::Cxx(CxxStandard::Cxx11) => "c++11",
            Dialect::Cxx(CxxStandard::Cxx14) => "c++14",
            Dialect::Cxx(CxxStandard::Cxx17) => "c++17",
            Dialect::Cxx(CxxStandard::Cxx20) => "c++20",
            Dialect::Cxx(CxxStandard::Cxx23) => "c++23",
        }
    }
}

/// Every dialect, in command-line listing order.
pub const ALL_DIALECTS: &[Dialect] = &[
    Dialect::Clang,
    Dialect::C(CStandard::C89),
    Dialect::C(CStandard::C99),
    Dialect::C(CStandard::C11),
    Dialect::C(CStandard::C17),
    Dialect::C(CStandard::C23),
    Dialect::Cxx(CxxStandard::Cxx98),
    Dialect::Cxx(CxxStandard::Cxx11),
    Dialect::Cxx(CxxStandard::Cxx14),
    Dialect::Cxx(CxxStandard::Cxx17),
    Dialect::Cxx(CxxStandard::Cxx20),
    Dialect::Cxx(CxxStandard::Cxx23),
];

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a dialect spelling is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDialect(pub String);

impl fmt::Display for UnknownDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = ALL_DIALECTS.iter().map(|d| d.as_str()).collect();
        write!(f, "unknown dialect '{}' (expected one of: {})", self.0, known.join(", "))
    }
}

impl std::error::Error for UnknownDialect {}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    /// Parse a dialect spelling. `gnu` prefixes and `cxx`/`cpp` aliases are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let normalized = lowered
            .replacen("gnu++", "c++", 1)
            .replacen("gnu", "c", 1)
            .replacen("cxx", "c++", 1)
            .replacen("cpp", "c++", 1);
        ALL_DIALECTS
            .iter()
            .copied()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| UnknownDialect(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // admits tests
    // ========================================

    #[test]
    fn test_clang_admits_everything() {
        assert!(Dialect::Clang.admits(Reserved::C(CStandard::C23)));
        assert!(Dialect::Clang.admits(Reserved::Cxx(CxxStandard::Cxx23)));
    }

    #[test]
    fn test_c_dialect_rejects_cxx_only_words() {
        assert!(!Dialect::C(CStandard::C23).admits(Reserved::Cxx(CxxStandard::Cxx98)));
    }

    #[test]
    fn test_both_uses_language_specific_revision() {
        let shared = Reserved::Both {
            c: CStandard::C23,
            cxx: CxxStandard::Cxx11,
        };
        assert!(Dialect::Cxx(CxxStandard::Cxx11).admits(shared));
        assert!(!Dialect::Cxx(CxxStandard::Cxx98).admits(shared));
        assert!(Dialect::C(CStandard::C23).admits(shared));
        assert!(!Dialect::C(CStandard::C17).admits(shared));
    }

    // ========================================
    // parsing tests
    // ========================================

    #[test]
    fn test_parse_round_trips_canonical_spellings() {
        for dialect in ALL_DIALECTS {
            assert_eq!(dialect.as_str().parse::<Dialect>(), Ok(*dialect));
        }
    }

    #[test]
    fn test_parse_accepts_aliases() {
        assert_eq!("gnu++20".parse::<Dialect>(), Ok(Dialect::Cxx(CxxStandard::Cxx20)));
        assert_eq!("gnu11".parse::<Dialect>(), Ok(Dialect::C(CStandard::C11)));
        assert_eq!("CXX17".parse::<Dialect>(), Ok(Dialect::Cxx(CxxStandard::Cxx17)));
    }

    #[test]
    fn test_parse_unknown_lists_choices() {
        let err = "pascal".parse::<Dialect>().unwrap_err();
        assert!(err.to_string().contains("c++20"));
    }
}

//! C/C++ vocabulary registries.
//!
//! This module is the “front door” for dialect vocabulary: reserved words, runtime naming conventions and
//! nullability spellings.
//!
//! The design goal is to avoid stringly-typed checks scattered across the printer. Callers go through the
//! registry tables and the [`keywords::KeywordSet`] built from them instead of matching on literals.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no program-model types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use clangprint_core::lang::dialect::{CxxStandard, Dialect};
//! use clangprint_core::lang::keywords::KeywordSet;
//!
//! let keywords = KeywordSet::new(Dialect::Cxx(CxxStandard::Cxx20));
//! assert!(keywords.contains("requires"));
//! assert!(!keywords.contains("widget"));
//! ```

pub mod conventions;
pub mod dialect;
pub mod keywords;
pub mod nullability;

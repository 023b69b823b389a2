//! Provide the pure C/C++ vocabulary shared by the clangprint emitter and its tooling.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic tables and helpers that both:
//! - the syntax printer uses to sanitize identifiers and spell well-known runtime names, and
//! - the CLI/tests use to reason about which spellings a given C or C++ dialect reserves.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no program-model types.
//! - Current scope: reserved-word registry per dialect, runtime naming conventions, nullability spellings.

pub mod lang;

pub use lang::dialect::{CStandard, CxxStandard, Dialect};
pub use lang::keywords::KeywordSet;
pub use lang::nullability::{NullabilityKind, NullabilityPrintKind};

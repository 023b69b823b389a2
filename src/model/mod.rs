//! Program Model boundary.
//!
//! The printer never resolves names, checks types or mangles anything itself. Everything it knows about the program
//! arrives through the types in this module:
//!
//! - [`symbols`]: modules, native and foreign symbols (the tagged union the emitters match on)
//! - [`generics`]: generic parameters, signatures and requirements
//! - [`services`]: the [`ProgramModel`] trait (USR lookup, known C types, debugger mangling)
//! - [`manifest`]: a JSON description of a module, used by the CLI to drive the printer without a host compiler
//!
//! ## Notes
//! - All values are read-only inputs. The printer borrows them for the duration of one call.

pub mod generics;
pub mod manifest;
pub mod services;
pub mod symbols;

pub use generics::{GenericParam, GenericRequirement, GenericSignature, RequirementKind, TypeParameter};
pub use services::{DetachedModel, KnownCType, ProgramModel, StaticModel};
pub use symbols::{
    DeclName, ForeignScope, ForeignScopeKind, ForeignSymbol, Module, NativeSymbol, Symbol, SymbolKind,
};

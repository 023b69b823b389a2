#![forbid(unsafe_code)]
//! clangprint: C/C++ syntax emitter for interop headers
//!
//! Given facts about a program that a host compiler has already resolved (types, modules, generic signatures), this
//! crate prints the C/C++ fragments an interop header is built from, and can assemble a complete header from a JSON
//! manifest.
//!
//! - [`model`]: the Program Model boundary (symbols, generic signatures, compiler services, manifests)
//! - [`printer`]: the syntax printer
//! - [`header`]: header assembly on top of the printer
//! - [`cli`]: the `clangprint` command line
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: The printer trusts its inputs. A violated precondition is a bug in the caller and panics
//!   with an `INVARIANT:` message. User-supplied input (manifests) is validated before it reaches the printer.

pub mod cli;
pub mod header;
pub mod model;
pub mod printer;

pub use header::HeaderAssembler;
pub use model::manifest::{ManifestError, ManifestModel};
pub use model::{ProgramModel, Symbol};
pub use printer::{CodeWriter, PrintContext, PrinterConfig, SyntaxPrinter};

//! C/C++ syntax printer
//!
//! Emits the textual fragments interop headers are assembled from: sanitized identifiers, qualified type
//! references, template headers for generic types, metadata accessor declarations, namespace and preprocessor
//! blocks. Every operation appends to a caller-owned [`CodeWriter`]; nothing is ever rewritten.
//!
//! ## Layers
//!
//! - [`identifiers`]: reserved-word sanitization
//! - [`qualifiers`]: module qualifiers and foreign (C/C++) references
//! - [`generics`]: template headers, static-assert fallbacks, bracketed parameter lists
//! - [`requirements`]: metadata arguments for generic requirements
//! - [`decls`]: composite emitters (namespaces, guards, accessors, annotations)
//! - [`directives`]: one-line macro and pragma primitives
//!
//! ## Panics
//!
//! Inputs are trusted. A violated precondition (a compound name where a simple one is required, a witness-table
//! requirement, a type without a known C mapping) is a bug in the caller and panics with an `INVARIANT:` message.
//!
//! ## Examples
//! ```rust
//! use clangprint::model::DetachedModel;
//! use clangprint::printer::{CodeWriter, PrintContext, PrinterConfig, SyntaxPrinter};
//!
//! let ctx = PrintContext::new(PrinterConfig::default(), &DetachedModel);
//! let mut out = CodeWriter::new();
//! let mut printer = SyntaxPrinter::new(&mut out, &ctx);
//! printer.print_identifier("class");
//! printer.print_identifier("widget");
//! assert_eq!(out.finish(), "class_widget");
//! ```

pub mod config;
pub mod decls;
pub mod directives;
pub mod generics;
pub mod identifiers;
pub mod qualifiers;
pub mod requirements;
pub mod writer;

pub use config::PrinterConfig;
pub use decls::{NamespaceTrivia, UsrSubject};
pub use requirements::LeadingTrivia;
pub use writer::CodeWriter;

use clangprint_core::lang::keywords::KeywordSet;

use crate::model::ProgramModel;

/// Everything a printer needs besides its output: configuration, the reserved-word set for the configured
/// dialect, and the Program Model services.
///
/// Build one per header; the keyword set is computed here once and never changes afterwards.
pub struct PrintContext<'m> {
    config: PrinterConfig,
    keywords: KeywordSet,
    model: &'m dyn ProgramModel,
}

impl<'m> PrintContext<'m> {
    pub fn new(config: PrinterConfig, model: &'m dyn ProgramModel) -> Self {
        let keywords = KeywordSet::new(config.dialect);
        tracing::debug!(dialect = %config.dialect, reserved = keywords.len(), "print context ready");
        Self {
            config,
            keywords,
            model,
        }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn model(&self) -> &'m dyn ProgramModel {
        self.model
    }
}

/// Appends C/C++ syntax to a [`CodeWriter`].
///
/// The printer itself is stateless; operations are split across the submodules of this module as
/// `impl SyntaxPrinter` blocks.
pub struct SyntaxPrinter<'a> {
    out: &'a mut CodeWriter,
    ctx: &'a PrintContext<'a>,
}

impl<'a> SyntaxPrinter<'a> {
    pub fn new(out: &'a mut CodeWriter, ctx: &'a PrintContext<'a>) -> Self {
        Self { out, ctx }
    }

    pub fn context(&self) -> &'a PrintContext<'a> {
        self.ctx
    }

    /// Raw access to the output, for callers emitting text the printer has no operation for.
    pub fn writer(&mut self) -> &mut CodeWriter {
        self.out
    }

    /// Append `text` verbatim.
    pub fn write(&mut self, text: &str) {
        self.out.write(text);
    }

    /// Print each item with `each`, writing `separator` between consecutive items.
    pub(crate) fn interleave<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        separator: &str,
        mut each: impl FnMut(&mut Self, T),
    ) {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.out.write(separator);
            }
            each(self, item);
        }
    }

    /// `interleave` with `", "` between items.
    pub(crate) fn interleave_comma<T>(&mut self, items: impl IntoIterator<Item = T>, each: impl FnMut(&mut Self, T)) {
        self.interleave(items, ", ", each);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::render;

    #[test]
    fn test_interleave_separators() {
        let out = render(|p| p.interleave(["a", "b", "c"], " && ", |p, s| p.write(s)));
        assert_eq!(out, "a && b && c");
    }

    #[test]
    fn test_interleave_comma_empty() {
        let out = render(|p| p.interleave_comma(Vec::<&str>::new(), |p, s| p.write(s)));
        assert_eq!(out, "");
    }
}

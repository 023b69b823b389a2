//! Symbols as the printer sees them.
//!
//! A [`Symbol`] is either native (declared in the host language and translated by us) or foreign (declared in
//! C/C++ and merely referenced). The split is decided once at the Program Model boundary; emitters pattern-match
//! on it instead of inspecting declarations at run time.

use std::fmt;

use super::generics::GenericSignature;

/// A module of the host language. Two modules are the same module iff their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Module {
    name: String,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Declaration name: a simple identifier, or a compound name with argument labels (`move(from:to:)`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclName {
    base: String,
    argument_labels: Option<Vec<String>>,
}

impl DeclName {
    pub fn simple(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            argument_labels: None,
        }
    }

    pub fn compound(base: impl Into<String>, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            base: base.into(),
            argument_labels: Some(labels.into_iter().map(Into::into).collect()),
        }
    }

    pub fn is_simple(&self) -> bool {
        self.argument_labels.is_none()
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl fmt::Display for DeclName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        if let Some(labels) = &self.argument_labels {
            f.write_str("(")?;
            for label in labels {
                let label = if label.is_empty() { "_" } else { label.as_str() };
                write!(f, "{label}:")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// What kind of entity a native symbol is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Struct,
    Enum,
    Class,
    Protocol,
}

impl SymbolKind {
    /// Types with a concrete layout get class stubs and metadata accessors. Protocols have neither.
    pub fn has_class_stub(self) -> bool {
        matches!(self, SymbolKind::Struct | SymbolKind::Enum | SymbolKind::Class)
    }
}

/// A declaration of the host language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeSymbol {
    pub name: DeclName,
    pub module: Module,
    pub kind: SymbolKind,
    /// Present iff the declaration is generic. A generic declaration may have zero parameters.
    pub generic_signature: Option<GenericSignature>,
}

impl NativeSymbol {
    pub fn new(name: DeclName, module: Module, kind: SymbolKind) -> Self {
        Self {
            name,
            module,
            kind,
            generic_signature: None,
        }
    }

    /// Mark the symbol as generic over `signature`.
    pub fn with_generic_signature(mut self, signature: GenericSignature) -> Self {
        self.generic_signature = Some(signature);
        self
    }

    pub fn is_generic(&self) -> bool {
        self.generic_signature.is_some()
    }
}

/// Kind of a lexical scope enclosing a foreign declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForeignScopeKind {
    Namespace,
    /// `struct`/`class`/`union`, possibly a template specialization.
    Record,
    /// `extern "C"` / `extern "C++"`: transparent for lookup.
    LinkageSpec,
    /// Unscoped enumeration: transparent for lookup.
    UnscopedEnum,
    /// Function or method body.
    Function,
}

/// One enclosing scope of a foreign declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignScope {
    pub kind: ForeignScopeKind,
    /// `None` for anonymous namespaces and unnamed transparent contexts.
    pub name: Option<String>,
}

impl ForeignScope {
    pub fn namespace(name: impl Into<String>) -> Self {
        Self {
            kind: ForeignScopeKind::Namespace,
            name: Some(name.into()),
        }
    }

    pub fn anonymous_namespace() -> Self {
        Self {
            kind: ForeignScopeKind::Namespace,
            name: None,
        }
    }

    /// A record scope; `spelling` is printed verbatim and may carry template arguments.
    pub fn record(spelling: impl Into<String>) -> Self {
        Self {
            kind: ForeignScopeKind::Record,
            name: Some(spelling.into()),
        }
    }

    pub fn linkage_spec() -> Self {
        Self {
            kind: ForeignScopeKind::LinkageSpec,
            name: None,
        }
    }

    pub fn unscoped_enum(name: impl Into<String>) -> Self {
        Self {
            kind: ForeignScopeKind::UnscopedEnum,
            name: Some(name.into()),
        }
    }

    /// Body of the function `name`; local declarations cannot be named from outside it.
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            kind: ForeignScopeKind::Function,
            name: Some(name.into()),
        }
    }

    /// The scope's name when it must be spelled out in a qualified reference from the translation unit.
    ///
    /// Transparent contexts, function bodies and anonymous namespaces contribute nothing.
    pub fn required_qualifier(&self) -> Option<&str> {
        match self.kind {
            ForeignScopeKind::Namespace | ForeignScopeKind::Record => self.name.as_deref().filter(|n| !n.is_empty()),
            ForeignScopeKind::LinkageSpec | ForeignScopeKind::UnscopedEnum | ForeignScopeKind::Function => None,
        }
    }
}

/// A C/C++ declaration referenced from generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignSymbol {
    /// Identifier of the declaration. Must not be empty.
    pub name: String,
    /// Enclosing lexical scopes, outermost first.
    pub scopes: Vec<ForeignScope>,
    /// Already-printed template arguments when the declaration is a class template specialization.
    pub template_args: Vec<String>,
}

impl ForeignSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scopes: Vec::new(),
            template_args: Vec::new(),
        }
    }

    pub fn in_scope(mut self, scope: ForeignScope) -> Self {
        self.scopes.push(scope);
        self
    }

    pub fn with_template_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.template_args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// A symbol handed to the printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Native(NativeSymbol),
    Foreign(ForeignSymbol),
}

impl From<NativeSymbol> for Symbol {
    fn from(symbol: NativeSymbol) -> Self {
        Symbol::Native(symbol)
    }
}

impl From<ForeignSymbol> for Symbol {
    fn from(symbol: ForeignSymbol) -> Self {
        Symbol::Foreign(symbol)
    }
}

//! Services the printer queries on the host compiler.
//!
//! The printer depends on three black boxes: the USR of a declaration, the C primitive a native type maps to,
//! and the debugger mangling of a type. [`ProgramModel`] is the seam; [`StaticModel`] is a table-backed
//! implementation for tools and tests, and [`DetachedModel`] answers "nothing known" to every query.

use std::collections::HashMap;

use super::symbols::NativeSymbol;

/// A C primitive a native type is known to map to (e.g. `Int32` -> `int32_t`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownCType {
    pub name: String,
    /// Whether the primitive is a pointer-like type that can carry a nullability qualifier.
    pub can_be_nullable: bool,
}

impl KnownCType {
    pub fn new(name: impl Into<String>, can_be_nullable: bool) -> Self {
        Self {
            name: name.into(),
            can_be_nullable,
        }
    }
}

/// Queries the printer makes against the program.
pub trait ProgramModel {
    /// Unified symbol resolution identifier. `None` or an empty string means "no annotation".
    fn symbol_usr(&self, symbol: &NativeSymbol) -> Option<String>;

    /// The C primitive `symbol` maps to, if any.
    fn known_c_type(&self, symbol: &NativeSymbol) -> Option<KnownCType>;

    /// Mangled name the debugger uses to find the type. May be empty.
    fn mangle_type_for_debugger(&self, symbol: &NativeSymbol) -> String;
}

/// A model that knows nothing: no USRs, no C mappings, no mangled names.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedModel;

impl ProgramModel for DetachedModel {
    fn symbol_usr(&self, _symbol: &NativeSymbol) -> Option<String> {
        None
    }

    fn known_c_type(&self, _symbol: &NativeSymbol) -> Option<KnownCType> {
        None
    }

    fn mangle_type_for_debugger(&self, _symbol: &NativeSymbol) -> String {
        String::new()
    }
}

/// Table-backed model keyed by `(module, base name)`.
#[derive(Debug, Clone, Default)]
pub struct StaticModel {
    usrs: HashMap<SymbolKey, String>,
    c_types: HashMap<SymbolKey, KnownCType>,
    mangled: HashMap<SymbolKey, String>,
}

type SymbolKey = (String, String);

fn key_of(symbol: &NativeSymbol) -> SymbolKey {
    (symbol.module.name().to_string(), symbol.name.base().to_string())
}

fn key(module: &str, name: &str) -> SymbolKey {
    (module.to_string(), name.to_string())
}

impl StaticModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_usr(mut self, module: &str, name: &str, usr: impl Into<String>) -> Self {
        self.usrs.insert(key(module, name), usr.into());
        self
    }

    pub fn with_c_type(mut self, module: &str, name: &str, c_type: KnownCType) -> Self {
        self.c_types.insert(key(module, name), c_type);
        self
    }

    pub fn with_mangled_name(mut self, module: &str, name: &str, mangled: impl Into<String>) -> Self {
        self.mangled.insert(key(module, name), mangled.into());
        self
    }
}

impl ProgramModel for StaticModel {
    fn symbol_usr(&self, symbol: &NativeSymbol) -> Option<String> {
        self.usrs.get(&key_of(symbol)).cloned()
    }

    fn known_c_type(&self, symbol: &NativeSymbol) -> Option<KnownCType> {
        self.c_types.get(&key_of(symbol)).cloned()
    }

    fn mangle_type_for_debugger(&self, symbol: &NativeSymbol) -> String {
        self.mangled.get(&key_of(symbol)).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::symbols::{DeclName, Module, SymbolKind};

    fn symbol(module: &str, name: &str) -> NativeSymbol {
        NativeSymbol::new(DeclName::simple(name), Module::new(module), SymbolKind::Struct)
    }

    #[test]
    fn test_static_model_lookups_are_module_scoped() {
        let model = StaticModel::new()
            .with_usr("Shapes", "Circle", "s:6Shapes6CircleV")
            .with_mangled_name("Shapes", "Circle", "$s6Shapes6CircleVD");

        assert_eq!(model.symbol_usr(&symbol("Shapes", "Circle")).as_deref(), Some("s:6Shapes6CircleV"));
        assert_eq!(model.symbol_usr(&symbol("Other", "Circle")), None);
        assert_eq!(model.mangle_type_for_debugger(&symbol("Shapes", "Circle")), "$s6Shapes6CircleVD");
        assert_eq!(model.mangle_type_for_debugger(&symbol("Shapes", "Square")), "");
    }

    #[test]
    fn test_detached_model_knows_nothing() {
        let s = symbol("Shapes", "Circle");
        assert_eq!(DetachedModel.symbol_usr(&s), None);
        assert_eq!(DetachedModel.known_c_type(&s), None);
        assert!(DetachedModel.mangle_type_for_debugger(&s).is_empty());
    }
}

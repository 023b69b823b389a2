//! JSON manifest describing one module's interop surface.
//!
//! A manifest stands in for the host compiler: it lists the modules, the native types to expose (with the facts
//! the compiler would otherwise compute: USR, debugger mangling, metadata accessor name, generic requirements) and
//! the foreign types they reference. [`ManifestModel`] validates it and implements [`ProgramModel`] over it.
//!
//! ## Examples
//! ```json
//! {
//!   "modules": [{ "name": "Shapes", "current": true }, { "name": "Geometry" }],
//!   "types": [
//!     { "name": "Circle", "module": "Shapes", "kind": "struct",
//!       "usr": "s:6Shapes6CircleV", "accessor": "$s6Shapes6CircleVMa" },
//!     { "name": "Box", "module": "Shapes", "kind": "struct",
//!       "generic_params": 1, "requirements": [{ "param": [0, 0] }] }
//!   ],
//!   "foreign_types": [{ "name": "vector", "scopes": ["std"], "template_args": ["int"] }]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

use super::generics::{GenericParam, GenericRequirement, GenericSignature, TypeParameter};
use super::services::{KnownCType, ProgramModel, StaticModel};
use super::symbols::{DeclName, ForeignScope, ForeignSymbol, Module, NativeSymbol, SymbolKind};

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while loading or validating a manifest.
#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("failed to read manifest `{path}`")]
    #[diagnostic(code(clangprint::manifest::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest: {message}")]
    #[diagnostic(code(clangprint::manifest::parse), help("manifests are JSON objects with `modules` and `types`"))]
    Parse {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("type `{type_name}` refers to undeclared module `{module}`")]
    #[diagnostic(code(clangprint::manifest::unknown_module), help("add `{module}` to the `modules` list"))]
    UnknownModule { type_name: String, module: String },

    #[error("type `{name}` is declared more than once in module `{module}`")]
    #[diagnostic(code(clangprint::manifest::duplicate_type))]
    DuplicateType { module: String, name: String },

    #[error("modules `{first}` and `{second}` are both marked as current")]
    #[diagnostic(code(clangprint::manifest::multiple_current), help("exactly one module is printed per header"))]
    MultipleCurrentModules { first: String, second: String },

    #[error("no module is marked as current")]
    #[diagnostic(code(clangprint::manifest::no_current), help("set `\"current\": true` on the module to print"))]
    NoCurrentModule,

    #[error("type `{type_name}` has unsupported requirement on `{subject}`: {reason}")]
    #[diagnostic(code(clangprint::manifest::unsupported_requirement))]
    UnsupportedRequirement {
        type_name: String,
        subject: String,
        reason: &'static str,
    },

    #[error("type name `{name}` in module `{module}` is not a C identifier")]
    #[diagnostic(
        code(clangprint::manifest::invalid_type_name),
        help("names must be non-empty and use only ASCII letters, digits and `_`, not starting with a digit")
    )]
    InvalidTypeName { module: String, name: String },

    #[error("module name `{name}` is not a C identifier")]
    #[diagnostic(code(clangprint::manifest::invalid_module_name))]
    InvalidModuleName { name: String },

    #[error("foreign type name `{name}` is not a C identifier")]
    #[diagnostic(code(clangprint::manifest::invalid_foreign_name))]
    InvalidForeignName { name: String },

    #[error("foreign type `{name}` is declared more than once")]
    #[diagnostic(
        code(clangprint::manifest::duplicate_foreign_type),
        help("foreign types are aliased by their unqualified name, so each name may appear once")
    )]
    DuplicateForeignType { name: String },

    #[error("foreign type `{type_name}` has an unnamed {kind} scope")]
    #[diagnostic(code(clangprint::manifest::unnamed_scope))]
    UnnamedScope { type_name: String, kind: &'static str },
}

pub type ManifestResult<T> = Result<T, ManifestError>;

// ============================================================================
// Raw (serde) shape
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    modules: Vec<RawModule>,
    #[serde(default)]
    types: Vec<RawType>,
    #[serde(default)]
    foreign_types: Vec<RawForeignType>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModule {
    name: String,
    #[serde(default)]
    current: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawType {
    name: String,
    module: String,
    #[serde(default = "default_kind")]
    kind: RawKind,
    /// Number of depth-0 parameters. Absent means not generic; `0` means generic with no parameters.
    generic_params: Option<u32>,
    #[serde(default)]
    requirements: Vec<RawRequirement>,
    accessor: Option<String>,
    usr: Option<String>,
    mangled_name: Option<String>,
    c_type: Option<RawCType>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawKind {
    Struct,
    Enum,
    Class,
    Protocol,
}

fn default_kind() -> RawKind {
    RawKind::Struct
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRequirement {
    param: (u32, u32),
    /// Associated type name, e.g. `Element` for `T_0_0.Element`.
    member: Option<String>,
    /// Present for witness-table requirements.
    protocol: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCType {
    name: String,
    #[serde(default)]
    nullable: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawForeignType {
    name: String,
    /// Enclosing scopes, outermost first.
    #[serde(default)]
    scopes: Vec<RawScope>,
    #[serde(default)]
    template_args: Vec<String>,
}

/// A plain string is a namespace (`""` for an anonymous one); other scopes use the tagged form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawScope {
    Namespace(String),
    Tagged(RawTaggedScope),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTaggedScope {
    kind: RawScopeKind,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawScopeKind {
    Namespace,
    Record,
    LinkageSpec,
    UnscopedEnum,
    Function,
}

// ============================================================================
// Validated model
// ============================================================================

/// A native type to expose, with everything the header assembler needs.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub symbol: NativeSymbol,
    /// C symbol of the type metadata accessor, if the type exports one.
    pub accessor: Option<String>,
    pub requirements: Vec<GenericRequirement>,
}

/// Validated manifest; answers Program Model queries from its tables.
#[derive(Debug, Clone)]
pub struct ManifestModel {
    current: Module,
    types: Vec<TypeEntry>,
    foreign_types: Vec<ForeignSymbol>,
    services: StaticModel,
}

impl ManifestModel {
    /// Read and validate a manifest file.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let source = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&path.display().to_string(), &source)
    }

    /// Parse and validate manifest text. `name` labels diagnostics.
    #[tracing::instrument(skip_all, fields(name = name, source_len = source.len()))]
    pub fn from_json(name: &str, source: &str) -> ManifestResult<Self> {
        let raw: RawManifest = serde_json::from_str(source).map_err(|err| ManifestError::Parse {
            message: err.to_string(),
            span: (offset_of(source, err.line(), err.column()), 0).into(),
            src: NamedSource::new(name, source.to_string()),
        })?;
        let model = Self::validate(raw)?;
        tracing::debug!(
            module = model.current.name(),
            types = model.types.len(),
            foreign_types = model.foreign_types.len(),
            "manifest loaded"
        );
        Ok(model)
    }

    fn validate(raw: RawManifest) -> ManifestResult<Self> {
        let mut current: Option<Module> = None;
        let mut modules = Vec::with_capacity(raw.modules.len());
        for m in raw.modules {
            if !is_identifier(&m.name) {
                return Err(ManifestError::InvalidModuleName { name: m.name });
            }
            let module = Module::new(m.name);
            if m.current {
                if let Some(first) = &current {
                    return Err(ManifestError::MultipleCurrentModules {
                        first: first.name().to_string(),
                        second: module.name().to_string(),
                    });
                }
                current = Some(module.clone());
            }
            modules.push(module);
        }
        let current = current.ok_or(ManifestError::NoCurrentModule)?;

        let mut services = StaticModel::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut types = Vec::with_capacity(raw.types.len());
        for t in raw.types {
            let Some(module) = modules.iter().find(|m| m.name() == t.module).cloned() else {
                return Err(ManifestError::UnknownModule {
                    type_name: t.name,
                    module: t.module,
                });
            };
            if !is_identifier(&t.name) {
                return Err(ManifestError::InvalidTypeName {
                    module: t.module,
                    name: t.name,
                });
            }
            if !seen.insert((t.module.clone(), t.name.clone())) {
                return Err(ManifestError::DuplicateType {
                    module: t.module,
                    name: t.name,
                });
            }

            let mut symbol = NativeSymbol::new(DeclName::simple(&t.name), module, t.kind.into());
            if let Some(count) = t.generic_params {
                symbol = symbol.with_generic_signature(GenericSignature::with_params(count));
            }
            let requirements = t
                .requirements
                .into_iter()
                .map(|r| convert_requirement(&t.name, t.generic_params.unwrap_or(0), r))
                .collect::<ManifestResult<Vec<_>>>()?;

            if let Some(usr) = t.usr {
                services = services.with_usr(&t.module, &t.name, usr);
            }
            if let Some(mangled) = t.mangled_name {
                services = services.with_mangled_name(&t.module, &t.name, mangled);
            }
            if let Some(c_type) = t.c_type {
                services = services.with_c_type(&t.module, &t.name, KnownCType::new(c_type.name, c_type.nullable));
            }

            types.push(TypeEntry {
                symbol,
                accessor: t.accessor.filter(|a| !a.is_empty()),
                requirements,
            });
        }

        let mut foreign_names: HashSet<String> = HashSet::new();
        let mut foreign_types = Vec::with_capacity(raw.foreign_types.len());
        for f in raw.foreign_types {
            if !is_identifier(&f.name) {
                return Err(ManifestError::InvalidForeignName { name: f.name });
            }
            if !foreign_names.insert(f.name.clone()) {
                return Err(ManifestError::DuplicateForeignType { name: f.name });
            }
            let mut symbol = ForeignSymbol::new(f.name.as_str());
            for scope in f.scopes {
                symbol = symbol.in_scope(convert_scope(&f.name, scope)?);
            }
            foreign_types.push(symbol.with_template_args(f.template_args));
        }

        Ok(Self {
            current,
            types,
            foreign_types,
            services,
        })
    }

    /// The module being printed.
    pub fn current_module(&self) -> &Module {
        &self.current
    }

    /// Types in declaration order.
    pub fn types(&self) -> &[TypeEntry] {
        &self.types
    }

    /// Types owned by the current module.
    pub fn local_types(&self) -> impl Iterator<Item = &TypeEntry> {
        self.types.iter().filter(|t| t.symbol.module == self.current)
    }

    pub fn foreign_types(&self) -> &[ForeignSymbol] {
        &self.foreign_types
    }
}

impl ProgramModel for ManifestModel {
    fn symbol_usr(&self, symbol: &NativeSymbol) -> Option<String> {
        self.services.symbol_usr(symbol)
    }

    fn known_c_type(&self, symbol: &NativeSymbol) -> Option<KnownCType> {
        self.services.known_c_type(symbol)
    }

    fn mangle_type_for_debugger(&self, symbol: &NativeSymbol) -> String {
        self.services.mangle_type_for_debugger(symbol)
    }
}

impl From<RawKind> for SymbolKind {
    fn from(kind: RawKind) -> Self {
        match kind {
            RawKind::Struct => SymbolKind::Struct,
            RawKind::Enum => SymbolKind::Enum,
            RawKind::Class => SymbolKind::Class,
            RawKind::Protocol => SymbolKind::Protocol,
        }
    }
}

/// Only metadata requirements on declared parameters can be printed; reject the rest here, where the input is
/// still user data.
fn convert_requirement(type_name: &str, param_count: u32, raw: RawRequirement) -> ManifestResult<GenericRequirement> {
    let (depth, index) = raw.param;
    let param = GenericParam::new(depth, index);
    let subject = match raw.member {
        Some(name) => TypeParameter::DependentMember {
            base: Box::new(TypeParameter::Param(param)),
            name,
        },
        None => TypeParameter::Param(param),
    };
    let unsupported = |reason| ManifestError::UnsupportedRequirement {
        type_name: type_name.to_string(),
        subject: subject.to_string(),
        reason,
    };

    if depth != 0 || index >= param_count {
        return Err(unsupported("parameter is not declared by the type"));
    }
    if raw.protocol.is_some() {
        return Err(unsupported("witness table requirements are not supported"));
    }
    if subject.as_param().is_none() {
        return Err(unsupported("requirement subject must be a generic parameter"));
    }
    Ok(GenericRequirement::metadata(param))
}

fn convert_scope(type_name: &str, raw: RawScope) -> ManifestResult<ForeignScope> {
    let (kind, name) = match raw {
        RawScope::Namespace(name) => (RawScopeKind::Namespace, Some(name)),
        RawScope::Tagged(RawTaggedScope { kind, name }) => (kind, name),
    };
    let name = name.filter(|n| !n.is_empty());
    let unnamed = |kind| ManifestError::UnnamedScope {
        type_name: type_name.to_string(),
        kind,
    };
    Ok(match kind {
        RawScopeKind::Namespace => name.map_or_else(ForeignScope::anonymous_namespace, ForeignScope::namespace),
        RawScopeKind::LinkageSpec => ForeignScope::linkage_spec(),
        RawScopeKind::Record => ForeignScope::record(name.ok_or_else(|| unnamed("record"))?),
        RawScopeKind::UnscopedEnum => ForeignScope::unscoped_enum(name.ok_or_else(|| unnamed("enum"))?),
        RawScopeKind::Function => ForeignScope::function(name.ok_or_else(|| unnamed("function"))?),
    })
}

/// ASCII C identifier: a letter or `_`, then letters, digits or `_`. Reserved words are fine; the printer
/// sanitizes them.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Byte offset of a 1-based `(line, column)` position reported by serde_json.
fn offset_of(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source.split_inclusive('\n').take(line.saturating_sub(1)).map(str::len).sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPES: &str = r#"{
        "modules": [{ "name": "Shapes", "current": true }, { "name": "Geometry" }],
        "types": [
            { "name": "Circle", "module": "Shapes", "usr": "s:6Shapes6CircleV", "accessor": "$s6Shapes6CircleVMa" },
            { "name": "Pair", "module": "Shapes", "generic_params": 2,
              "requirements": [{ "param": [0, 0] }, { "param": [0, 1] }] },
            { "name": "Point", "module": "Geometry", "kind": "struct" }
        ],
        "foreign_types": [{ "name": "vector", "scopes": ["std"], "template_args": ["int"] }]
    }"#;

    #[test]
    fn test_loads_valid_manifest() {
        let model = ManifestModel::from_json("shapes.json", SHAPES).unwrap();
        assert_eq!(model.current_module().name(), "Shapes");
        assert_eq!(model.types().len(), 3);
        assert_eq!(model.local_types().count(), 2);
        assert_eq!(model.foreign_types()[0].template_args, vec!["int".to_string()]);

        let pair = &model.types()[1];
        assert!(pair.symbol.is_generic());
        assert_eq!(pair.requirements.len(), 2);

        let circle = &model.types()[0].symbol;
        assert_eq!(model.symbol_usr(circle).as_deref(), Some("s:6Shapes6CircleV"));
    }

    #[test]
    fn test_rejects_unknown_module() {
        let json = r#"{ "modules": [{ "name": "A", "current": true }], "types": [{ "name": "T", "module": "B" }] }"#;
        let err = ManifestModel::from_json("m.json", json).unwrap_err();
        assert!(matches!(err, ManifestError::UnknownModule { ref module, .. } if module == "B"));
    }

    #[test]
    fn test_rejects_duplicate_type() {
        let json = r#"{ "modules": [{ "name": "A", "current": true }],
            "types": [{ "name": "T", "module": "A" }, { "name": "T", "module": "A" }] }"#;
        let err = ManifestModel::from_json("m.json", json).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateType { .. }));
    }

    #[test]
    fn test_requires_exactly_one_current_module() {
        let none = r#"{ "modules": [{ "name": "A" }] }"#;
        assert!(matches!(
            ManifestModel::from_json("m.json", none).unwrap_err(),
            ManifestError::NoCurrentModule
        ));

        let two = r#"{ "modules": [{ "name": "A", "current": true }, { "name": "B", "current": true }] }"#;
        assert!(matches!(
            ManifestModel::from_json("m.json", two).unwrap_err(),
            ManifestError::MultipleCurrentModules { .. }
        ));
    }

    #[test]
    fn test_rejects_witness_table_requirement() {
        let json = r#"{ "modules": [{ "name": "A", "current": true }],
            "types": [{ "name": "Set", "module": "A", "generic_params": 1,
                        "requirements": [{ "param": [0, 0], "protocol": "Hashable" }] }] }"#;
        let err = ManifestModel::from_json("m.json", json).unwrap_err();
        assert!(matches!(err, ManifestError::UnsupportedRequirement { .. }));
    }

    #[test]
    fn test_rejects_requirement_on_undeclared_param() {
        let json = r#"{ "modules": [{ "name": "A", "current": true }],
            "types": [{ "name": "Box", "module": "A", "generic_params": 1,
                        "requirements": [{ "param": [0, 1] }] }] }"#;
        let err = ManifestModel::from_json("m.json", json).unwrap_err();
        assert!(err.to_string().contains("T_0_1"));
    }

    #[test]
    fn test_parse_error_points_into_source() {
        let json = "{\n  \"modules\": [,]\n}";
        let err = ManifestModel::from_json("bad.json", json).unwrap_err();
        match err {
            ManifestError::Parse { span, .. } => {
                let open = json.find('[').unwrap();
                let close = json.find(']').unwrap();
                assert!((open..=close + 1).contains(&span.offset()), "offset {} outside `[,]`", span.offset());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_duplicate_foreign_names() {
        let json = r#"{ "modules": [{ "name": "A", "current": true }],
            "foreign_types": [
                { "name": "vector", "scopes": ["std"], "template_args": ["int"] },
                { "name": "vector", "scopes": ["std"], "template_args": ["float"] }
            ] }"#;
        let err = ManifestModel::from_json("m.json", json).unwrap_err();
        assert!(matches!(err, ManifestError::DuplicateForeignType { ref name } if name == "vector"));
    }

    #[test]
    fn test_rejects_names_that_are_not_identifiers() {
        for name in ["", "2d", "my-type", "Box<T>"] {
            let json = format!(
                r#"{{ "modules": [{{ "name": "A", "current": true }}],
                     "types": [{{ "name": "{name}", "module": "A", "accessor": "f" }}] }}"#
            );
            let err = ManifestModel::from_json("m.json", &json).unwrap_err();
            assert!(matches!(err, ManifestError::InvalidTypeName { .. }), "`{name}` accepted");
        }

        let module = r#"{ "modules": [{ "name": "my-lib", "current": true }] }"#;
        assert!(matches!(
            ManifestModel::from_json("m.json", module).unwrap_err(),
            ManifestError::InvalidModuleName { .. }
        ));

        let foreign = r#"{ "modules": [{ "name": "A", "current": true }], "foreign_types": [{ "name": "" }] }"#;
        assert!(matches!(
            ManifestModel::from_json("m.json", foreign).unwrap_err(),
            ManifestError::InvalidForeignName { .. }
        ));
    }

    #[test]
    fn test_keyword_type_names_are_accepted() {
        let json = r#"{ "modules": [{ "name": "A", "current": true }], "types": [{ "name": "class", "module": "A" }] }"#;
        assert!(ManifestModel::from_json("m.json", json).is_ok());
    }

    #[test]
    fn test_tagged_foreign_scopes() {
        let json = r#"{ "modules": [{ "name": "A", "current": true }],
            "foreign_types": [{ "name": "Red", "scopes": [
                "gfx", "", { "kind": "linkage_spec" }, { "kind": "record", "name": "Palette<int>" },
                { "kind": "unscoped_enum", "name": "Color" }, { "kind": "function", "name": "paint" }
            ] }] }"#;
        let model = ManifestModel::from_json("m.json", json).unwrap();
        let red = &model.foreign_types()[0];
        assert_eq!(
            red.scopes,
            vec![
                ForeignScope::namespace("gfx"),
                ForeignScope::anonymous_namespace(),
                ForeignScope::linkage_spec(),
                ForeignScope::record("Palette<int>"),
                ForeignScope::unscoped_enum("Color"),
                ForeignScope::function("paint"),
            ]
        );
    }

    #[test]
    fn test_record_scope_needs_a_name() {
        let json = r#"{ "modules": [{ "name": "A", "current": true }],
            "foreign_types": [{ "name": "Inner", "scopes": [{ "kind": "record" }] }] }"#;
        let err = ManifestModel::from_json("m.json", json).unwrap_err();
        assert!(matches!(err, ManifestError::UnnamedScope { kind: "record", .. }));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("_Storage2"));
        assert!(is_identifier("class"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier("a b"));
    }

    #[test]
    fn test_offset_of_clamps_to_source() {
        assert_eq!(offset_of("ab\ncd", 2, 2), 4);
        assert_eq!(offset_of("ab", 9, 9), 2);
    }
}

//! Schema loading: compilation and unification of the embedded sources.
//!
//! Two sources are bundled into the binary at build time: a module-identity
//! declaration and the preset definitions. Each is compiled in isolation,
//! then the two are unified into a single validated [`UnifiedSchema`] that
//! every lookup in a run goes through.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result, SchemaInput};
use crate::registry::PresetRegistry;
use crate::resolve::resolve_definition;

const MODULE_SOURCE: &str = include_str!("../assets/module.json");
const DEFINITIONS_SOURCE: &str = include_str!("../assets/presets.json");

/// Named definitions as compiled from the definitions source.
pub type DefinitionMap = BTreeMap<String, PresetDef>;

/// Compiled module-identity declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleDecl {
    /// Module path identifying this schema
    pub module: String,
    /// Schema format version
    pub version: u32,
}

/// One named definition from the definitions source.
///
/// A definition is either a root (carries `document`) or derived (carries
/// `extends` plus `overrides`); the registry rejects any other shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PresetDef {
    /// Parent definition this one overrides
    #[serde(default)]
    pub extends: Option<String>,
    /// Full configuration document (roots only)
    #[serde(default)]
    pub document: Option<Value>,
    /// Delta applied over the resolved parent (derived definitions only)
    #[serde(default)]
    pub overrides: Option<Value>,
    /// Marker for user-selectable, listable presets
    #[serde(default)]
    pub selectable: bool,
}

/// The compiled definitions source: an optional module echo plus the preset
/// table.
#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionsDoc {
    /// Module path these definitions target, if declared
    #[serde(default)]
    pub module: Option<String>,
    /// Schema version these definitions target, if declared
    #[serde(default)]
    pub version: Option<u32>,
    /// Named preset definitions
    pub presets: DefinitionMap,
}

/// The unified, validated schema value.
///
/// Immutable once constructed; the single source of truth for every preset
/// lookup in a run. Construct it once (see [`compile_and_unify`]) and reuse
/// it across resolutions.
#[derive(Debug, Clone)]
pub struct UnifiedSchema {
    module: ModuleDecl,
    presets: PresetRegistry,
}

impl UnifiedSchema {
    /// The module identity this schema was compiled from.
    pub fn module(&self) -> &ModuleDecl {
        &self.module
    }

    /// The validated preset registry.
    pub fn registry(&self) -> &PresetRegistry {
        &self.presets
    }

    /// Whether `name` is a user-selectable preset.
    pub fn is_selectable(&self, name: &str) -> bool {
        self.presets.is_selectable(name)
    }
}

/// Compile the module source in isolation.
pub fn compile_module(source: &str) -> Result<ModuleDecl> {
    serde_json::from_str(source).map_err(|source| Error::Compile {
        input: SchemaInput::Module,
        source,
    })
}

/// Compile the definitions source in isolation.
pub fn compile_definitions(source: &str) -> Result<DefinitionsDoc> {
    serde_json::from_str(source).map_err(|source| Error::Compile {
        input: SchemaInput::Definitions,
        source,
    })
}

/// Unify a compiled module and compiled definitions into one validated
/// schema value.
///
/// Unification fails if the definitions echo a module path or version that
/// conflicts with the module declaration. Validation then runs a
/// closed-world check: registry structure (parents exist, no cycles, no
/// incomplete or conflicting definitions, at least one selectable entry) and
/// full pre-resolution of every definition, so a later lookup can never hit
/// an unresolvable node.
pub fn unify(module: ModuleDecl, definitions: DefinitionsDoc) -> Result<UnifiedSchema> {
    if let Some(target) = &definitions.module {
        if *target != module.module {
            return Err(Error::Unify {
                message: format!(
                    "definitions target module {target:?} but the module declares {:?}",
                    module.module
                ),
            });
        }
    }
    if let Some(version) = definitions.version {
        if version != module.version {
            return Err(Error::Unify {
                message: format!(
                    "definitions target schema version {version} but the module declares {}",
                    module.version
                ),
            });
        }
    }

    let presets = PresetRegistry::from_definitions(definitions.presets)?;
    for name in presets.names() {
        resolve_definition(&presets, name)?;
    }

    Ok(UnifiedSchema { module, presets })
}

/// Compile both embedded sources and unify them.
///
/// Pure compilation over static inputs; any failure is fatal for the run.
/// The result may be reused for multiple resolutions in one process.
pub fn compile_and_unify() -> Result<UnifiedSchema> {
    let module = compile_module(MODULE_SOURCE)?;
    tracing::debug!(module = %module.module, version = module.version, "compiled module schema");

    let definitions = compile_definitions(DEFINITIONS_SOURCE)?;
    tracing::debug!(
        definitions = definitions.presets.len(),
        "compiled preset definitions"
    );

    unify(module, definitions)
}

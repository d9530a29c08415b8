//! Typed preset registry.
//!
//! The registry is an ordered table mapping each preset name to its
//! override-chain definition. The `selectable` flag on a definition is an
//! explicit, machine-checked marker distinguishing user-facing presets from
//! shared base definitions; nothing scans documentation text.

use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::{DefinitionMap, PresetDef};

/// Ordered mapping from preset name to definition, validated on
/// construction.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    entries: DefinitionMap,
}

impl PresetRegistry {
    /// Build a registry from compiled definitions.
    ///
    /// Validates the structural invariants: each definition is either a root
    /// (a full document, no parent) or derived (a parent plus overrides),
    /// every parent exists, the extends graph is acyclic, and at least one
    /// definition is selectable. Whether each definition also resolves to a
    /// concrete document is checked separately during unification.
    pub(crate) fn from_definitions(entries: DefinitionMap) -> Result<Self> {
        let registry = Self { entries };
        registry.validate()?;
        Ok(registry)
    }

    fn validate(&self) -> Result<()> {
        for (name, def) in &self.entries {
            match (&def.document, &def.extends, &def.overrides) {
                (Some(_), None, None) => {}
                (None, Some(parent), Some(_)) => {
                    if !self.entries.contains_key(parent) {
                        return Err(Error::UnknownParent {
                            name: name.clone(),
                            parent: parent.clone(),
                        });
                    }
                }
                (None, None, _) => {
                    return Err(Error::Incomplete {
                        name: name.clone(),
                        message: "defines neither a document nor an extends parent".into(),
                    });
                }
                (None, Some(_), None) => {
                    return Err(Error::Incomplete {
                        name: name.clone(),
                        message: "extends a parent but carries no overrides".into(),
                    });
                }
                (Some(_), _, _) => {
                    return Err(Error::Conflicting {
                        name: name.clone(),
                        message: "a root document cannot be combined with extends or overrides"
                            .into(),
                    });
                }
            }
        }

        // Walking every chain surfaces cycles; parent existence is already
        // established above.
        for name in self.entries.keys() {
            self.chain(name)?;
        }

        if !self.entries.values().any(|def| def.selectable) {
            return Err(Error::NoSelectablePresets);
        }

        Ok(())
    }

    /// Walk the extends chain from `name` up to its root.
    ///
    /// Returns the chain root-first: the root definition, then each derived
    /// definition down to `name` itself.
    pub(crate) fn chain(&self, name: &str) -> Result<Vec<&PresetDef>> {
        let mut chain = Vec::new();
        let mut seen = BTreeSet::new();
        let mut current = name;
        loop {
            let def = self
                .entries
                .get(current)
                .ok_or_else(|| Error::UnknownPreset {
                    name: current.to_string(),
                })?;
            if !seen.insert(current.to_string()) {
                return Err(Error::Cycle {
                    name: name.to_string(),
                });
            }
            chain.push(def);
            match &def.extends {
                Some(parent) => current = parent,
                None => break,
            }
        }
        chain.reverse();
        Ok(chain)
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<&PresetDef> {
        self.entries.get(name)
    }

    /// Whether `name` is defined at all (selectable or not).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Whether `name` is defined and carries the user-selectable marker.
    pub fn is_selectable(&self, name: &str) -> bool {
        self.entries.get(name).is_some_and(|def| def.selectable)
    }

    /// All definition names, sorted ascending.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// The names carrying the user-selectable marker, sorted ascending.
    pub fn selectable_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, def)| def.selectable)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Number of definitions in the registry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root(document: serde_json::Value) -> PresetDef {
        PresetDef {
            extends: None,
            document: Some(document),
            overrides: None,
            selectable: false,
        }
    }

    fn derived(parent: &str, overrides: serde_json::Value, selectable: bool) -> PresetDef {
        PresetDef {
            extends: Some(parent.to_string()),
            document: None,
            overrides: Some(overrides),
            selectable,
        }
    }

    #[test]
    fn test_valid_registry() {
        let mut entries = DefinitionMap::new();
        entries.insert("base".into(), root(json!({"a": 1})));
        entries.insert("owl".into(), derived("base", json!({"b": 2}), true));

        let registry = PresetRegistry::from_definitions(entries).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("base"));
        assert!(!registry.is_selectable("base"));
        assert!(registry.is_selectable("owl"));
        assert_eq!(registry.selectable_names(), vec!["owl"]);
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let mut entries = DefinitionMap::new();
        entries.insert("owl".into(), derived("ghost", json!({}), true));

        let err = PresetRegistry::from_definitions(entries).unwrap_err();
        assert!(matches!(err, Error::UnknownParent { ref name, ref parent }
            if name == "owl" && parent == "ghost"));
    }

    #[test]
    fn test_cycle_rejected() {
        let mut entries = DefinitionMap::new();
        entries.insert("a".into(), derived("b", json!({}), true));
        entries.insert("b".into(), derived("a", json!({}), false));

        let err = PresetRegistry::from_definitions(entries).unwrap_err();
        assert!(matches!(err, Error::Cycle { .. }));
    }

    #[test]
    fn test_empty_definition_rejected() {
        let mut entries = DefinitionMap::new();
        entries.insert(
            "hollow".into(),
            PresetDef {
                extends: None,
                document: None,
                overrides: None,
                selectable: true,
            },
        );

        let err = PresetRegistry::from_definitions(entries).unwrap_err();
        assert!(matches!(err, Error::Incomplete { ref name, .. } if name == "hollow"));
    }

    #[test]
    fn test_extends_without_overrides_rejected() {
        let mut entries = DefinitionMap::new();
        entries.insert("base".into(), root(json!({})));
        entries.insert(
            "bare".into(),
            PresetDef {
                extends: Some("base".into()),
                document: None,
                overrides: None,
                selectable: true,
            },
        );

        let err = PresetRegistry::from_definitions(entries).unwrap_err();
        assert!(matches!(err, Error::Incomplete { ref name, .. } if name == "bare"));
    }

    #[test]
    fn test_document_with_extends_rejected() {
        let mut entries = DefinitionMap::new();
        entries.insert("base".into(), root(json!({})));
        entries.insert(
            "both".into(),
            PresetDef {
                extends: Some("base".into()),
                document: Some(json!({})),
                overrides: None,
                selectable: true,
            },
        );

        let err = PresetRegistry::from_definitions(entries).unwrap_err();
        assert!(matches!(err, Error::Conflicting { ref name, .. } if name == "both"));
    }

    #[test]
    fn test_no_selectable_rejected() {
        let mut entries = DefinitionMap::new();
        entries.insert("base".into(), root(json!({})));

        let err = PresetRegistry::from_definitions(entries).unwrap_err();
        assert!(matches!(err, Error::NoSelectablePresets));
    }

    #[test]
    fn test_chain_is_root_first() {
        let mut entries = DefinitionMap::new();
        entries.insert("base".into(), root(json!({"depth": 0})));
        entries.insert("mid".into(), derived("base", json!({"depth": 1}), false));
        entries.insert("leaf".into(), derived("mid", json!({"depth": 2}), true));

        let registry = PresetRegistry::from_definitions(entries).unwrap();
        let chain = registry.chain("leaf").unwrap();
        assert_eq!(chain.len(), 3);
        assert!(chain[0].document.is_some());
        assert_eq!(chain[2].overrides, Some(json!({"depth": 2})));
    }

    #[test]
    fn test_chain_unknown_name() {
        let mut entries = DefinitionMap::new();
        entries.insert("base".into(), root(json!({})));
        entries.insert("owl".into(), derived("base", json!({}), true));

        let registry = PresetRegistry::from_definitions(entries).unwrap();
        let err = registry.chain("giraffe").unwrap_err();
        assert!(matches!(err, Error::UnknownPreset { ref name } if name == "giraffe"));
    }
}

//! Preset resolution: from the unified schema value to concrete documents.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::merge::deep_merge;
use crate::registry::PresetRegistry;
use crate::render::render_text;
use crate::schema::UnifiedSchema;

/// A fully concrete configuration document: string keys mapped to
/// JSON-compatible values, ready for serialization.
pub type Document = serde_json::Map<String, Value>;

/// One preset's rendered output, split into lines for line-oriented
/// display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetListing {
    /// Preset name
    pub name: String,
    /// Rendered configuration, one entry per line
    pub lines: Vec<String>,
}

impl UnifiedSchema {
    /// Resolve a named preset into a concrete document.
    ///
    /// The name must be a single flat identifier defined in the schema;
    /// resolution walks its extends chain from the root document down,
    /// deep-merging each override delta in turn. Abstract definitions that
    /// are not user-selectable still resolve here — hiding them is the
    /// caller's policy.
    pub fn resolve(&self, name: &str) -> Result<Document> {
        let document = resolve_definition(self.registry(), name)?;
        tracing::debug!(preset = name, keys = document.len(), "resolved preset");
        Ok(document)
    }

    /// Resolve and render every selectable preset, ordered by name.
    ///
    /// A convenience composition over resolution and rendering; the
    /// formatting is exactly the per-preset rendering, split into lines.
    pub fn list_all(&self) -> Result<Vec<PresetListing>> {
        let mut listings = Vec::new();
        for name in self.registry().selectable_names() {
            let document = self.resolve(name)?;
            let text = render_text(&document)?;
            listings.push(PresetListing {
                name: name.to_string(),
                lines: text.lines().map(String::from).collect(),
            });
        }
        Ok(listings)
    }
}

/// Resolve one definition against the registry.
///
/// Seeds the value with the chain root's document, then folds the override
/// deltas back down in chain order. The merged result must decode to an
/// object; anything else means the definition never concretized to a valid
/// configuration.
pub(crate) fn resolve_definition(registry: &PresetRegistry, name: &str) -> Result<Document> {
    let chain = registry.chain(name)?;

    let mut value = Value::Object(Document::new());
    for def in chain {
        if let Some(document) = &def.document {
            value = document.clone();
        }
        if let Some(overrides) = &def.overrides {
            deep_merge(&mut value, overrides);
        }
    }

    match value {
        Value::Object(document) => Ok(document),
        other => Err(Error::Decode {
            name: name.to_string(),
            message: format!("resolved to {} instead of an object", value_kind(&other)),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

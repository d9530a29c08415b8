//! Error types for warren-presets

/// Result type for preset-pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two embedded schema sources an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaInput {
    /// The module-identity declaration (`module.json`)
    Module,
    /// The preset definitions (`presets.json`)
    Definitions,
}

impl std::fmt::Display for SchemaInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Module => write!(f, "module"),
            Self::Definitions => write!(f, "definitions"),
        }
    }
}

/// Errors that can occur in the preset pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One of the embedded sources failed to compile
    #[error("error compiling {input} schema: {source}")]
    Compile {
        input: SchemaInput,
        #[source]
        source: serde_json::Error,
    },

    /// The two compiled sources impose conflicting constraints
    #[error("error unifying schemas: {message}")]
    Unify { message: String },

    /// A definition extends a name that does not exist
    #[error("definition {name:?} extends unknown definition {parent:?}")]
    UnknownParent { name: String, parent: String },

    /// A definition's extends chain loops back on itself
    #[error("definition {name:?} participates in an extends cycle")]
    Cycle { name: String },

    /// A definition is missing a required part
    #[error("incomplete definition {name:?}: {message}")]
    Incomplete { name: String, message: String },

    /// A definition carries parts that contradict each other
    #[error("conflicting definition {name:?}: {message}")]
    Conflicting { name: String, message: String },

    /// The definitions declare no user-selectable presets
    #[error("schema defines no selectable presets")]
    NoSelectablePresets,

    /// A lookup named a preset absent from the unified schema
    #[error("unknown preset {name:?}")]
    UnknownPreset { name: String },

    /// A resolved preset could not be decoded into a document
    #[error("error decoding preset {name:?}: {message}")]
    Decode { name: String, message: String },

    /// Serialization failed for a resolved document.
    ///
    /// The resolver only ever produces JSON-representable documents, so this
    /// is an internal invariant violation, not an expected failure.
    #[error("internal serialization failure: {0}")]
    Render(#[from] serde_json::Error),
}

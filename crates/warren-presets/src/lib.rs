//! Preset resolution and deterministic rendering for warren.
//!
//! This crate is the core pipeline behind the `warren` CLI: it compiles the
//! two embedded schema sources into one validated value, resolves named
//! presets into concrete Renovate configuration documents, and renders them
//! to canonical JSON.
//!
//! ```
//! let schema = warren_presets::compile_and_unify()?;
//! let document = schema.resolve("owl")?;
//! let bytes = warren_presets::render(&document)?;
//! assert!(bytes.ends_with(b"\n"));
//! # Ok::<(), warren_presets::Error>(())
//! ```

pub mod error;
pub mod merge;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod schema;

pub use error::{Error, Result};
pub use registry::PresetRegistry;
pub use render::render;
pub use resolve::{Document, PresetListing};
pub use schema::{UnifiedSchema, compile_and_unify};

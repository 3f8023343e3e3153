//! Configuration types for the graph model and algorithm engine.
//!
//! This module provides configuration structures for:
//! - Edge weight derivation and step emission (EngineConfig)
//! - Preset graph generators (PresetConfig)
//!
//! All configs are plain serde structs with `Default` values and a
//! fail-fast `validate()`.

mod engine;
mod presets;

pub use self::engine::EngineConfig;
pub use self::presets::{
    CompletePreset, GridPreset, PresetConfig, StarPreset, TreePreset,
};

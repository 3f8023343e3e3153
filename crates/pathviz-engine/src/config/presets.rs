//! Preset graph configuration.
//!
//! Defaults reproduce the example graphs of the interactive editor:
//! a 3x4 grid, a 6-leaf star, a 3-level binary tree and K5.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::Position;

/// Rectangular grid: nodes row by row, edges to the right and downward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridPreset {
    pub rows: usize,
    pub cols: usize,
    pub spacing: f64,
    /// Position of the top-left node.
    pub origin: Position,
}

impl Default for GridPreset {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 4,
            spacing: 80.0,
            origin: Position::new(100.0, 100.0),
        }
    }
}

/// Star: one center node connected to `leaves` nodes on a circle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StarPreset {
    pub leaves: usize,
    pub radius: f64,
}

impl Default for StarPreset {
    fn default() -> Self {
        Self {
            leaves: 6,
            radius: 100.0,
        }
    }
}

/// Complete binary tree laid out level by level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreePreset {
    /// Number of levels including the root.
    pub levels: usize,
    pub spacing: f64,
    /// Vertical position of the root; horizontally the tree is centered.
    pub root_y: f64,
}

impl Default for TreePreset {
    fn default() -> Self {
        Self {
            levels: 3,
            spacing: 80.0,
            root_y: 50.0,
        }
    }
}

/// Complete graph with nodes on a circle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletePreset {
    pub nodes: usize,
    pub radius: f64,
}

impl Default for CompletePreset {
    fn default() -> Self {
        Self {
            nodes: 5,
            radius: 100.0,
        }
    }
}

impl GridPreset {
    /// # Errors
    /// Returns `GraphError::InvalidConfig` for an empty grid or bad spacing.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GraphError::InvalidConfig(format!(
                "grid must have at least one row and column (got {}x{})",
                self.rows, self.cols
            )));
        }
        check_length("grid.spacing", self.spacing)
    }
}

impl StarPreset {
    /// # Errors
    /// Returns `GraphError::InvalidConfig` for a bad radius.
    pub fn validate(&self) -> Result<(), GraphError> {
        check_length("star.radius", self.radius)
    }
}

impl TreePreset {
    /// Largest accepted level count; the last level holds 2^(levels - 1) nodes.
    pub const MAX_LEVELS: usize = 16;

    /// # Errors
    /// Returns `GraphError::InvalidConfig` for zero or too many levels, or
    /// bad spacing.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.levels == 0 {
            return Err(GraphError::InvalidConfig(
                "tree.levels must be positive (got 0)".to_string(),
            ));
        }
        if self.levels > Self::MAX_LEVELS {
            return Err(GraphError::InvalidConfig(format!(
                "tree.levels must be <= {} (got {})",
                Self::MAX_LEVELS,
                self.levels
            )));
        }
        check_length("tree.spacing", self.spacing)
    }
}

impl CompletePreset {
    /// # Errors
    /// Returns `GraphError::InvalidConfig` for a bad radius.
    pub fn validate(&self) -> Result<(), GraphError> {
        check_length("complete.radius", self.radius)
    }
}

/// Parameters for all preset generators.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PresetConfig {
    pub grid: GridPreset,
    pub star: StarPreset,
    pub tree: TreePreset,
    pub complete: CompletePreset,
}

impl PresetConfig {
    /// Validate all preset parameters.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidConfig` for the FIRST invalid parameter.
    pub fn validate(&self) -> Result<(), GraphError> {
        self.grid.validate()?;
        self.star.validate()?;
        self.tree.validate()?;
        self.complete.validate()
    }
}

fn check_length(name: &str, value: f64) -> Result<(), GraphError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GraphError::InvalidConfig(format!(
            "{name} must be finite and > 0 (got {value})"
        )));
    }
    Ok(())
}

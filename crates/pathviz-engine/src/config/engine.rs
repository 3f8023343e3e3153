//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Configuration shared by the graph model and the algorithm runs.
///
/// # Example
/// ```
/// use pathviz_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.emit_relaxations);
/// assert_eq!(config.min_derived_weight, 1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Emit `EdgeRelaxed` steps in addition to `NodeVisited` steps.
    /// Drivers that only animate node visits can turn this off.
    pub emit_relaxations: bool,

    /// Lower bound for weights derived from Euclidean distance.
    /// Rounding can produce 0 for (nearly) coincident endpoints, which
    /// would break the weight > 0 invariant.
    pub min_derived_weight: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            emit_relaxations: true,
            min_derived_weight: 1.0,
        }
    }
}

impl EngineConfig {
    /// Builder: set whether relaxation steps are emitted.
    #[must_use]
    pub fn emit_relaxations(mut self, emit: bool) -> Self {
        self.emit_relaxations = emit;
        self
    }

    /// Builder: set the lower bound for derived weights.
    #[must_use]
    pub fn min_derived_weight(mut self, weight: f64) -> Self {
        self.min_derived_weight = weight;
        self
    }

    /// Validate configuration parameters.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidConfig` if `min_derived_weight` is not a
    /// finite positive number.
    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.min_derived_weight.is_finite() || self.min_derived_weight <= 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "min_derived_weight must be finite and > 0 (got {})",
                self.min_derived_weight
            )));
        }
        Ok(())
    }
}

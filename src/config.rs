use serde::{Deserialize, Serialize};

use crate::errors::Result;


/// Settings for an AD* planner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Suboptimality bound used for the first pass at construction
    #[serde(default = "defaults::initial_epsilon")]
    pub initial_epsilon: f64,

    /// Edge attribute holding the cost, edges without it cost one
    #[serde(default = "defaults::weight_key")]
    pub weight_key: String,

    /// Hard bound on path extraction steps
    #[serde(default)]
    pub max_path_len: Option<usize>,
}

mod defaults {
    pub fn initial_epsilon() -> f64 {
        1000.0
    }

    pub fn weight_key() -> String {
        "weight".to_string()
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            initial_epsilon: defaults::initial_epsilon(),
            weight_key: defaults::weight_key(),
            max_path_len: None,
        }
    }
}

impl PlannerConfig {

    /// Parse from a TOML document, missing fields take their defaults
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_initial_epsilon(mut self, epsilon: f64) -> Self {
        self.initial_epsilon = epsilon;
        self
    }

    pub fn with_weight_key(mut self, key: impl Into<String>) -> Self {
        self.weight_key = key.into();
        self
    }

    pub fn with_max_path_len(mut self, max_path_len: usize) -> Self {
        self.max_path_len = Some(max_path_len);
        self
    }
}

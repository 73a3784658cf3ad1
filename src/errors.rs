use thiserror::Error;


#[derive(Error, Debug)]
pub enum PathPlannerError {
    #[error("node(s) not found in graph: {0}")]
    NodeNotFound(String), // start and/or goal missing at construction

    #[error("no edge between {from} and {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("invalid weight {weight} for edge {from} - {to}")]
    InvalidWeight { from: String, to: String, weight: String },

    #[error("epsilon must be >= 1, got {0}")]
    InvalidEpsilon(String),

    #[error("no search pass has been run yet")]
    NotComputed, // extract_path called before improve

    #[error("goal is unreachable from start")]
    Unreachable,

    #[error("cost estimates do not form a descent to the goal (stopped after {steps} steps)")]
    InconsistentState { steps: usize },

    #[error("kdtree error: {0}")]
    KdTreeError(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PathPlannerError>;


impl From<kdtree::ErrorKind> for PathPlannerError {
    fn from(error: kdtree::ErrorKind) -> Self {
        PathPlannerError::KdTreeError(error.to_string())
    }
}

impl From<toml::de::Error> for PathPlannerError {
    fn from(error: toml::de::Error) -> Self {
        PathPlannerError::Config(error.to_string())
    }
}

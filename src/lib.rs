//! Navigation modules in Rust
//!
//! Incremental, anytime path planning with Anytime Dynamic A* (AD*):
//!
//! - a bounded-suboptimal path comes back quickly from a first pass with a large epsilon
//! - `improve` with a smaller epsilon tightens it, reusing the earlier search
//! - `apply_edge_changes` repairs the solution after edge weights change
//!
//! ```rust,ignore
//! use navigate_adstar::{ADStar, PlannerConfig, UndirectedGraph};
//!
//! let mut graph = UndirectedGraph::new();
//! graph.add_weighted_edge("A", "B", 1.0);
//! graph.add_weighted_edge("B", "C", 1.0);
//!
//! let mut planner = ADStar::new("A", "C", graph, |_, _| 0.0, &PlannerConfig::default())?;
//! planner.improve(1.0)?;
//! assert_eq!(planner.extract_path()?, vec!["A", "B", "C"]);
//!
//! planner.apply_edge_changes([("A", "B", 10.0)])?;
//! planner.improve(1.0)?;
//! ```

pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
mod collections;

pub use config::PlannerConfig;
pub use errors::{PathPlannerError, Result};
pub use graph::{UndirectedGraph, WeightedGraph};
pub use graph_algos::{ADStar, Improvement};

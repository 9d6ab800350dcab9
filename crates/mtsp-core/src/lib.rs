//! Shared types and primitives for the depot-anchored multi-agent TSP.

pub mod complexity;
pub mod config;
pub mod distance;
mod error;
pub mod models;
pub mod partition;
pub mod tour;

pub use config::{PartitionMode, ScaleLimit, SolverConfig, HARD_MAX_EXACT_CITIES};
pub use distance::{DistanceMatrix, Euclidean, Manhattan, Metric};
pub use error::{Error, Result};
pub use models::{AgentRoute, Point, Solution, Tour, DEPOT};
pub use partition::{partition, partition_routes, validate_agents};
pub use tour::route_cost;

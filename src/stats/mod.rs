//! Graph topology statistics.

pub mod topology;

pub use topology::{compute_stats, density, NetworkStats, PathMetrics, TopologyMetrics};

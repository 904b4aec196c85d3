//! Person-centric collaboration networks built from people, credits and works tables.

pub mod aggregation;
pub mod config;
pub mod core;
pub mod data;
pub mod identity;
pub mod network;
pub mod observability;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    split_genres, CreditRecord, Error, IdentityQuery, Person, PersonId, Result, Role, Work,
    WorkId, WorkMetadata,
};

pub use crate::aggregation::{aggregate, AggregateRecord, CollaborationMap, RoleFilter};

pub use crate::config::{load_config, load_config_from, parse_config, CollabnetConfig};

pub use crate::data::{Dataset, GenreStatistics, RoleStatistics};

pub use crate::identity::IdentityResolver;

pub use crate::network::{
    assemble, build_work_network, merge, merge_pair, rank_collaborations, CollaborationEntry,
    CollaborationGraph, Edge, EdgeKey, MultiTargetNetwork, NetworkBuilder, Node, NodeKey,
    NodeKind, Origin, SkippedTarget, TargetCoverage, TargetRef, TargetSummary,
};

pub use crate::observability::{init_tracing, init_tracing_from};

pub use crate::stats::{compute_stats, NetworkStats, PathMetrics, TopologyMetrics};

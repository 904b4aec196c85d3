//! Topology metrics for collaboration graphs
//!
//! Size, density, clustering and connectivity measures. Path metrics are
//! computed on the whole graph when it is connected and on its largest
//! component otherwise, so they are always finite.

use crate::network::{CollaborationGraph, NodeKey};
use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Statistics for one graph. `topology` is absent for an empty graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub nodes: usize,
    pub edges: usize,
    #[serde(flatten)]
    pub topology: Option<TopologyMetrics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyMetrics {
    pub density: f64,
    pub is_connected: bool,
    pub average_clustering: f64,
    pub average_degree: f64,
    pub max_degree: usize,
    pub min_degree: usize,
    #[serde(flatten)]
    pub paths: PathMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathMetrics {
    Connected {
        diameter: usize,
        average_path_length: f64,
    },
    Disconnected {
        component_count: usize,
        largest_component_size: usize,
        largest_component_diameter: usize,
    },
}

/// Compute statistics for `graph`. Never fails; an empty graph reports only
/// its (zero) size.
pub fn compute_stats(graph: &CollaborationGraph) -> NetworkStats {
    let nodes = graph.node_count();
    let edges = graph.edge_count();
    if nodes == 0 {
        return NetworkStats {
            nodes,
            edges,
            topology: None,
        };
    }

    let ungraph = build_petgraph(graph);
    let degrees: Vec<usize> = ungraph
        .node_indices()
        .map(|idx| ungraph.neighbors(idx).count())
        .collect();

    let components = connected_components(&ungraph);
    let paths = if components.len() == 1 {
        let (diameter, average_path_length) = path_lengths(&ungraph, &components[0]);
        PathMetrics::Connected {
            diameter,
            average_path_length,
        }
    } else {
        let largest = components
            .iter()
            .fold(&components[0], |best, c| if c.len() > best.len() { c } else { best });
        let (largest_component_diameter, _) = path_lengths(&ungraph, largest);
        PathMetrics::Disconnected {
            component_count: components.len(),
            largest_component_size: largest.len(),
            largest_component_diameter,
        }
    };

    NetworkStats {
        nodes,
        edges,
        topology: Some(TopologyMetrics {
            density: density(nodes, edges),
            is_connected: components.len() == 1,
            average_clustering: average_clustering(&ungraph),
            average_degree: degrees.iter().sum::<usize>() as f64 / nodes as f64,
            max_degree: degrees.iter().copied().max().unwrap_or(0),
            min_degree: degrees.iter().copied().min().unwrap_or(0),
            paths,
        }),
    }
}

/// Undirected density: `2m / (n (n - 1))`, zero below two nodes.
pub fn density(nodes: usize, edges: usize) -> f64 {
    if nodes < 2 {
        return 0.0;
    }
    (2 * edges) as f64 / (nodes * (nodes - 1)) as f64
}

/// Mean local clustering coefficient; nodes with fewer than two neighbors count as zero.
fn average_clustering(graph: &UnGraph<NodeKey, ()>) -> f64 {
    let n = graph.node_count();
    if n == 0 {
        return 0.0;
    }

    let total: f64 = graph
        .node_indices()
        .map(|idx| {
            let neighbors: Vec<NodeIndex> = graph.neighbors(idx).collect();
            let k = neighbors.len();
            if k < 2 {
                return 0.0;
            }
            let mut links = 0usize;
            for i in 0..k {
                for j in (i + 1)..k {
                    if graph.contains_edge(neighbors[i], neighbors[j]) {
                        links += 1;
                    }
                }
            }
            (2 * links) as f64 / (k * (k - 1)) as f64
        })
        .sum();

    total / n as f64
}

/// Connected components in node-index order of their first member.
fn connected_components(graph: &UnGraph<NodeKey, ()>) -> Vec<Vec<NodeIndex>> {
    let mut seen: HashSet<NodeIndex> = HashSet::new();
    let mut components = Vec::new();
    for start in graph.node_indices() {
        if seen.contains(&start) {
            continue;
        }
        let mut component = Vec::new();
        let mut bfs = Bfs::new(graph, start);
        while let Some(node) = bfs.next(graph) {
            seen.insert(node);
            component.push(node);
        }
        components.push(component);
    }
    components
}

/// Diameter and average shortest path length within one component.
fn path_lengths(graph: &UnGraph<NodeKey, ()>, component: &[NodeIndex]) -> (usize, f64) {
    let n = component.len();
    if n < 2 {
        return (0, 0.0);
    }

    let mut diameter = 0usize;
    let mut total = 0usize;
    for &source in component {
        let distances = dijkstra(graph, source, None, |_| 1usize);
        for (&target, &distance) in &distances {
            if target != source {
                diameter = diameter.max(distance);
                total += distance;
            }
        }
    }

    (diameter, total as f64 / (n * (n - 1)) as f64)
}

fn build_petgraph(graph: &CollaborationGraph) -> UnGraph<NodeKey, ()> {
    let mut ungraph = UnGraph::new_undirected();
    let mut node_map: HashMap<&NodeKey, NodeIndex> = HashMap::new();

    for node in graph.nodes() {
        let idx = ungraph.add_node(node.key.clone());
        node_map.insert(&node.key, idx);
    }

    for edge in graph.edges() {
        if let (Some(&a), Some(&b)) = (
            node_map.get(edge.key.first()),
            node_map.get(edge.key.second()),
        ) {
            ungraph.add_edge(a, b, ());
        }
    }

    ungraph
}

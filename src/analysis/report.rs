use crate::analysis::components::{component_count, connected_components};
use crate::analysis::degree::{DegreeSummary, summarize, total_degrees};
use crate::core::graph::GraphBuilder;
use crate::core::ids::{NodeKey, NodeRegistry};
use crate::core::model::GraphDocument;
use crate::error::GraphError;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Shape and sanity summary of a graph document.
#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub nodes: usize,
    pub links: usize,
    pub duplicate_node_ids: usize,
    pub self_loops: usize,
    pub duplicate_links: usize,
    pub dangling_links: usize,
    pub components: usize,
    pub degree: DegreeSummary,
}

impl GraphReport {
    /// True when the graph has no self-loops, repeated pairs, unknown
    /// endpoints or repeated node ids.
    pub fn is_simple(&self) -> bool {
        self.duplicate_node_ids == 0
            && self.self_loops == 0
            && self.duplicate_links == 0
            && self.dangling_links == 0
    }
}

pub fn analyze(doc: &GraphDocument<NodeKey>) -> Result<GraphReport, GraphError> {
    let mut registry = NodeRegistry::new();
    let mut duplicate_node_ids = 0;
    for node in &doc.nodes {
        let (_, fresh) = registry
            .insert(node.id.clone())
            .ok_or(GraphError::TooManyNodes)?;
        if !fresh {
            duplicate_node_ids += 1;
        }
    }

    let mut builder = GraphBuilder::new(registry.len());
    let mut pairs = HashSet::new();
    let mut self_loops = 0;
    let mut duplicate_links = 0;
    let mut dangling_links = 0;
    for link in &doc.links {
        let (Some(src), Some(dst)) = (registry.get(&link.source), registry.get(&link.target))
        else {
            tracing::debug!(source = %link.source, target = %link.target, "dangling link");
            dangling_links += 1;
            continue;
        };
        if src == dst {
            self_loops += 1;
        } else if !pairs.insert((src.min(dst), src.max(dst))) {
            duplicate_links += 1;
        }
        builder.add_edge(src, dst);
    }

    let graph = builder.freeze();
    let labels = connected_components(&graph);

    Ok(GraphReport {
        nodes: doc.nodes.len(),
        links: doc.links.len(),
        duplicate_node_ids,
        self_loops,
        duplicate_links,
        dangling_links,
        components: component_count(&labels),
        degree: summarize(&total_degrees(&graph)),
    })
}

impl fmt::Display for GraphReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes:              {}", self.nodes)?;
        writeln!(f, "links:              {}", self.links)?;
        writeln!(f, "duplicate node ids: {}", self.duplicate_node_ids)?;
        writeln!(f, "self loops:         {}", self.self_loops)?;
        writeln!(f, "duplicate links:    {}", self.duplicate_links)?;
        writeln!(f, "dangling links:     {}", self.dangling_links)?;
        writeln!(f, "components:         {}", self.components)?;
        writeln!(f, "isolated nodes:     {}", self.degree.isolated)?;
        write!(
            f,
            "degree:             min {} / max {} / mean {:.2}",
            self.degree.min, self.degree.max, self.degree.mean
        )
    }
}

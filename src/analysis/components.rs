use crate::core::graph::Graph;
use crate::core::ids::NodeId;
use std::collections::HashMap;

struct DisjointSet {
    parent: Vec<NodeId>,
    size: Vec<u32>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size as NodeId).collect(),
            size: vec![1; size],
        }
    }

    fn find(&mut self, u: NodeId) -> NodeId {
        let mut root = u;
        while root != self.parent[root as usize] {
            root = self.parent[root as usize];
        }
        let mut v = u;
        while v != self.parent[v as usize] {
            let next = self.parent[v as usize];
            self.parent[v as usize] = root;
            v = next;
        }
        root
    }

    fn union(&mut self, u: NodeId, v: NodeId) {
        let ru = self.find(u) as usize;
        let rv = self.find(v) as usize;
        if ru == rv {
            return;
        }
        if self.size[ru] > self.size[rv] {
            self.parent[rv] = ru as NodeId;
            self.size[ru] += self.size[rv];
        } else {
            self.parent[ru] = rv as NodeId;
            self.size[rv] += self.size[ru];
        }
    }
}

/// Labels every node with its weakly connected component, numbered in order
/// of first appearance.
pub fn connected_components(graph: &Graph) -> Vec<u32> {
    let mut dsu = DisjointSet::new(graph.node_count());
    for u in 0..graph.node_count() as NodeId {
        for v in graph.successors(u) {
            dsu.union(u, *v);
        }
    }

    let mut clusters = HashMap::new();
    (0..graph.node_count() as NodeId)
        .map(|u| {
            let root = dsu.find(u);
            let next = clusters.len() as u32;
            *clusters.entry(root).or_insert(next)
        })
        .collect()
}

pub fn component_count(labels: &[u32]) -> usize {
    labels.iter().max().map_or(0, |max| *max as usize + 1)
}

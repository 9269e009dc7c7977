use crate::core::ids::NodeId;
use crate::core::model::{GraphDocument, Link};
use crate::generate::nodes::build_nodes;
use crate::generate::rng::RandomSource;
use std::collections::HashSet;

pub struct ConstrainedConfig {
    pub node_count: u32,
    pub max_degree: u32,
}

impl Default for ConstrainedConfig {
    fn default() -> Self {
        Self {
            node_count: 1024,
            max_degree: 5,
        }
    }
}

/// Gives every node between zero and `max_degree` outgoing links to distinct
/// peers, never linking a node to itself or to a peer it already shares a
/// link with in either direction.
pub fn generate_links<R: RandomSource>(cfg: &ConstrainedConfig, rng: &mut R) -> Vec<Link<NodeId>> {
    let mut links = Vec::new();
    let mut connected: Vec<HashSet<NodeId>> = vec![HashSet::new(); cfg.node_count as usize];

    for node in 0..cfg.node_count {
        let degree = rng.int_inclusive(0, cfg.max_degree) as usize;

        let existing = &connected[node as usize];
        let mut pool: Vec<NodeId> = (0..cfg.node_count)
            .filter(|peer| *peer != node && !existing.contains(peer))
            .collect();

        for _ in 0..degree.min(pool.len()) {
            // Vec::remove keeps the pool in id order, so draws map to the same peers
            let target = pool.remove(rng.index(pool.len()));
            connected[node as usize].insert(target);
            connected[target as usize].insert(node);
            links.push(Link::new(node, target));
        }
    }

    links
}

pub fn generate<R: RandomSource>(cfg: &ConstrainedConfig, rng: &mut R) -> GraphDocument<NodeId> {
    let nodes = build_nodes(cfg.node_count);
    let links = generate_links(cfg, rng);
    tracing::debug!(nodes = nodes.len(), links = links.len(), "constrained graph built");
    GraphDocument::new(nodes, links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::rng::{ScriptedSource, SeededRng};

    fn assert_simple(doc: &GraphDocument<NodeId>, node_count: u32) {
        let mut pairs = HashSet::new();
        for link in &doc.links {
            assert_ne!(link.source, link.target);
            assert!(link.source < node_count);
            assert!(link.target < node_count);
            let pair = (link.source.min(link.target), link.source.max(link.target));
            assert!(pairs.insert(pair), "repeated pair {pair:?}");
        }
    }

    #[test]
    fn test_default_graph_invariants() {
        let cfg = ConstrainedConfig::default();
        let doc = generate(&cfg, &mut SeededRng::new(42));

        assert_eq!(1024, doc.nodes.len());
        for (i, node) in doc.nodes.iter().enumerate() {
            assert_eq!(i as u32, node.id);
        }
        assert_simple(&doc, 1024);
        assert!(doc.links.len() <= 1024 * 5);

        let mut out = vec![0; 1024];
        for link in &doc.links {
            out[link.source as usize] += 1;
        }
        assert!(out.iter().all(|d| *d <= 5));
    }

    #[test]
    fn test_links_grouped_by_source_in_id_order() {
        let cfg = ConstrainedConfig::default();
        let links = generate_links(&cfg, &mut SeededRng::new(3));
        assert!(links.windows(2).all(|w| w[0].source <= w[1].source));
    }

    #[test]
    fn test_scripted_draws() {
        let cfg = ConstrainedConfig {
            node_count: 3,
            max_degree: 5,
        };
        // node 0: degree 2, picks pool[1] = 2 then pool[0] = 1
        // node 1: degree 5, only 2 remains
        // node 2: degree 3, already linked to both peers
        let mut rng = ScriptedSource::new(&[2, 1, 0, 5, 0, 3]);
        let links = generate_links(&cfg, &mut rng);

        assert_eq!(
            vec![Link::new(0, 2), Link::new(0, 1), Link::new(1, 2)],
            links
        );
        assert_eq!(0, rng.remaining());
    }

    #[test]
    fn test_reverse_links_excluded() {
        let cfg = ConstrainedConfig {
            node_count: 2,
            max_degree: 1,
        };
        // node 1 draws degree 1 but its only peer already links to it
        let mut rng = ScriptedSource::new(&[1, 0, 1]);
        let links = generate_links(&cfg, &mut rng);
        assert_eq!(vec![Link::new(0, 1)], links);
    }

    #[test]
    fn test_saturated_small_graph() {
        let cfg = ConstrainedConfig {
            node_count: 6,
            max_degree: 5,
        };
        for seed in 0..50 {
            let doc = generate(&cfg, &mut SeededRng::new(seed));
            assert_simple(&doc, 6);
            assert!(doc.links.len() <= 15);
        }
    }

    #[test]
    fn test_empty_and_single_node() {
        let mut rng = ScriptedSource::new(&[]);
        let empty = ConstrainedConfig {
            node_count: 0,
            max_degree: 5,
        };
        assert!(generate_links(&empty, &mut rng).is_empty());

        let mut rng = ScriptedSource::new(&[4]);
        let single = ConstrainedConfig {
            node_count: 1,
            max_degree: 5,
        };
        assert!(generate_links(&single, &mut rng).is_empty());
    }
}

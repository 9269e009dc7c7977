use crate::core::model::{GraphDocument, Link};
use crate::generate::nodes::build_string_nodes;
use crate::generate::rng::RandomSource;

pub struct UnconstrainedConfig {
    pub node_count: u32,
    pub iterations: u32,
}

impl Default for UnconstrainedConfig {
    fn default() -> Self {
        Self {
            node_count: 128,
            iterations: 256,
        }
    }
}

pub struct LinkDraws {
    pub links: Vec<Link<String>>,
    pub skipped: u32,
}

/// Draws `iterations` random endpoint pairs. Self pairs are dropped without a
/// retry; repeated and reversed pairs are kept.
pub fn generate_links<R: RandomSource>(cfg: &UnconstrainedConfig, rng: &mut R) -> LinkDraws {
    let mut draws = LinkDraws {
        links: Vec::with_capacity(cfg.iterations as usize),
        skipped: 0,
    };
    if cfg.node_count == 0 {
        return draws;
    }

    let last = cfg.node_count - 1;
    for _ in 0..cfg.iterations {
        let src = rng.int_inclusive(0, last);
        let dst = rng.int_inclusive(0, last);
        if src == dst {
            draws.skipped += 1;
            continue;
        }
        draws.links.push(Link::new(src.to_string(), dst.to_string()));
    }

    draws
}

pub fn generate<R: RandomSource>(cfg: &UnconstrainedConfig, rng: &mut R) -> GraphDocument<String> {
    let nodes = build_string_nodes(cfg.node_count);
    let draws = generate_links(cfg, rng);
    tracing::debug!(
        nodes = nodes.len(),
        links = draws.links.len(),
        skipped = draws.skipped,
        "unconstrained graph built"
    );
    GraphDocument::new(nodes, draws.links)
}

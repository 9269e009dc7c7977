use crate::core::graph::Graph;
use crate::core::ids::NodeId;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
pub struct DegreeSummary {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub isolated: usize,
}

/// Total degree (in + out) per node. Parallel links count once each.
pub fn total_degrees(graph: &Graph) -> Vec<usize> {
    (0..graph.node_count() as NodeId)
        .map(|n| graph.in_degree(n) + graph.out_degree(n))
        .collect()
}

pub fn summarize(degrees: &[usize]) -> DegreeSummary {
    if degrees.is_empty() {
        return DegreeSummary {
            min: 0,
            max: 0,
            mean: 0.0,
            isolated: 0,
        };
    }

    let total: usize = degrees.iter().sum();
    DegreeSummary {
        min: degrees.iter().copied().min().unwrap_or(0),
        max: degrees.iter().copied().max().unwrap_or(0),
        mean: total as f64 / degrees.len() as f64,
        isolated: degrees.iter().filter(|d| **d == 0).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graph::GraphBuilder;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_edges() {
        let g = GraphBuilder::new(2).freeze();

        let degrees = total_degrees(&g);
        assert_eq!(vec![0, 0], degrees);
        let summary = summarize(&degrees);
        assert_eq!(2, summary.isolated);
        assert_relative_eq!(0.0, summary.mean);
    }

    #[test]
    fn test_star_graph() {
        let mut gb = GraphBuilder::new(5);
        for leaf in 1..5 {
            gb.add_edge(0, leaf);
        }
        let g = gb.freeze();

        let degrees = total_degrees(&g);
        assert_eq!(vec![4, 1, 1, 1, 1], degrees);
        let summary = summarize(&degrees);
        assert_eq!(1, summary.min);
        assert_eq!(4, summary.max);
        assert_eq!(0, summary.isolated);
        assert_relative_eq!(1.6, summary.mean);
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&[]);
        assert_eq!(0, summary.max);
        assert_eq!(0, summary.isolated);
    }
}

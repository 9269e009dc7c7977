use crate::core::ids::NodeId;

pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new(node_count: usize) -> Self {
        Self {
            graph: Graph::new(node_count),
        }
    }

    pub fn add_edge(&mut self, src: NodeId, dst: NodeId) {
        self.graph.srcs_out.push(src);
        self.graph.dsts.push(dst);
    }

    pub fn freeze(mut self) -> Graph {
        if self.graph.edge_count() == 0 {
            return self.graph;
        }

        let node_count = self.graph.node_count;
        let edge_count = self.graph.edge_count();

        self.graph.offsets_in = offsets(node_count, &self.graph.dsts);
        self.graph.srcs_in = vec![0; edge_count];
        let mut buf = vec![0; node_count];
        for e in 0..edge_count {
            let dst = self.graph.dsts[e] as usize;
            self.graph.srcs_in[self.graph.offsets_in[dst] + buf[dst]] = self.graph.srcs_out[e];
            buf[dst] += 1;
        }

        self.graph.offsets_out = offsets(node_count, &self.graph.srcs_out);
        buf.fill(0);
        // stable bucket sort of destinations by source
        let mut sorted_dsts = vec![0; edge_count];
        for e in 0..edge_count {
            let src = self.graph.srcs_out[e] as usize;
            sorted_dsts[self.graph.offsets_out[src] + buf[src]] = self.graph.dsts[e];
            buf[src] += 1;
        }
        self.graph.dsts = sorted_dsts;
        self.graph.srcs_out.sort_unstable();

        self.graph
    }
}

fn offsets(node_count: usize, endpoints: &[NodeId]) -> Vec<usize> {
    let mut result = vec![0; node_count + 1];
    for node in endpoints {
        result[*node as usize + 1] += 1;
    }
    for i in 0..node_count {
        result[i + 1] += result[i];
    }
    result
}

/// Compressed adjacency of a directed graph, indexed both ways.
pub struct Graph {
    node_count: usize,
    srcs_out: Vec<NodeId>,
    srcs_in: Vec<NodeId>,
    dsts: Vec<NodeId>,
    offsets_out: Vec<usize>,
    offsets_in: Vec<usize>,
}

impl Graph {
    fn new(node_count: usize) -> Self {
        Self {
            node_count,
            srcs_out: vec![],
            srcs_in: vec![],
            dsts: vec![],
            offsets_out: vec![0; node_count + 1],
            offsets_in: vec![0; node_count + 1],
        }
    }

    pub fn edge_count(&self) -> usize {
        self.srcs_out.len()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn successors(&self, src: NodeId) -> &[NodeId] {
        let src = src as usize;
        &self.dsts[self.offsets_out[src]..self.offsets_out[src + 1]]
    }

    pub fn predecessors(&self, dst: NodeId) -> &[NodeId] {
        let dst = dst as usize;
        &self.srcs_in[self.offsets_in[dst]..self.offsets_in[dst + 1]]
    }

    pub fn in_degree(&self, dst: NodeId) -> usize {
        self.offsets_in[dst as usize + 1] - self.offsets_in[dst as usize]
    }

    pub fn out_degree(&self, src: NodeId) -> usize {
        self.offsets_out[src as usize + 1] - self.offsets_out[src as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_edges() {
        let gb = GraphBuilder::new(2);
        let g = gb.freeze();

        assert_eq!(3, g.offsets_out.len());
        assert!(g.offsets_out.iter().all(|off| *off == 0));
        assert_eq!(0, g.edge_count());
        assert!(g.successors(0).is_empty());
        assert!(g.successors(1).is_empty());
        assert!(g.predecessors(0).is_empty());
        assert!(g.predecessors(1).is_empty());
    }

    #[test]
    fn test_single_edge() {
        let mut gb = GraphBuilder::new(2);
        gb.add_edge(0, 1);
        let g = gb.freeze();

        assert_eq!(vec![0, 1, 1], g.offsets_out);
        assert_eq!(&[1], g.successors(0));
        assert!(g.successors(1).is_empty());
        assert_eq!(&[0], g.predecessors(1));
        assert!(g.predecessors(0).is_empty());
    }

    #[test]
    fn test_single_source_edges() {
        let mut gb = GraphBuilder::new(4);
        gb.add_edge(0, 1);
        gb.add_edge(0, 2);
        gb.add_edge(0, 3);
        let g = gb.freeze();

        assert_eq!(vec![0, 3, 3, 3, 3], g.offsets_out);
        assert_eq!(&[1, 2, 3], g.successors(0));
        assert_eq!(3, g.out_degree(0));
    }

    #[test]
    fn test_single_destination_edges() {
        let mut gb = GraphBuilder::new(4);
        gb.add_edge(1, 0);
        gb.add_edge(2, 0);
        gb.add_edge(3, 0);
        let g = gb.freeze();

        assert_eq!(vec![0, 3, 3, 3, 3], g.offsets_in);
        assert_eq!(&[1, 2, 3], g.predecessors(0));
        assert_eq!(3, g.in_degree(0));
    }

    #[test]
    fn test_multiple_edges() {
        let mut gb = GraphBuilder::new(3);
        gb.add_edge(0, 2);
        gb.add_edge(2, 0);
        gb.add_edge(0, 1);
        gb.add_edge(1, 2);
        let g = gb.freeze();

        assert_eq!(vec![0, 2, 3, 4], g.offsets_out);
        assert_eq!(vec![0, 1, 2, 4], g.offsets_in);
        assert_eq!(&[2, 1], g.successors(0));
        assert_eq!(&[2], g.successors(1));
        assert_eq!(&[0], g.successors(2));
        assert_eq!(&[2], g.predecessors(0));
        assert_eq!(&[0], g.predecessors(1));
        assert_eq!(&[0, 1], g.predecessors(2));
    }
}

use crate::core::ids::NodeId;
use crate::core::model::{Node, node_name};

pub fn build_nodes(count: u32) -> Vec<Node<NodeId>> {
    (0..count)
        .map(|i| Node {
            id: i,
            name: node_name(i),
        })
        .collect()
}

pub fn build_string_nodes(count: u32) -> Vec<Node<String>> {
    (0..count)
        .map(|i| Node {
            id: i.to_string(),
            name: node_name(i),
        })
        .collect()
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<I> {
    pub id: I,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link<I> {
    pub source: I,
    pub target: I,
}

impl<I> Link<I> {
    pub fn new(source: I, target: I) -> Self {
        Self { source, target }
    }
}

/// The `{nodes, links}` document consumed by the visualization front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument<I> {
    pub nodes: Vec<Node<I>>,
    pub links: Vec<Link<I>>,
}

impl<I> GraphDocument<I> {
    pub fn new(nodes: Vec<Node<I>>, links: Vec<Link<I>>) -> Self {
        Self { nodes, links }
    }
}

pub fn node_name(index: u32) -> String {
    format!("Node {index}")
}

//! Random fixture graphs for the force-graph front-end.
//!
//! [`constrained`] builds a simple graph (no self-loops, no repeated peers);
//! [`unconstrained`] draws random pairs and keeps duplicates.

pub mod constrained;
pub mod nodes;
pub mod rng;
pub mod unconstrained;

pub mod components;
pub mod degree;
pub mod report;

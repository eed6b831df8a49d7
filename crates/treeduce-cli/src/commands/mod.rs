pub mod langs;
pub mod reduce;
pub mod tree;

pub mod blelloch;
mod step;
pub mod tree;

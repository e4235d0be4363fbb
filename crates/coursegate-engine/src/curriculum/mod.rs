//! Curriculum assembly: merges separately fetched collections into ordered sections.

pub mod assembler;

pub use assembler::{assemble, assemble_snapshot, assemble_with, flatten, node_sort_key};

//! Checking founder sequences against the edges of a bidirected sequence graph.
//!
//! Founder sequences are walks through a sequence graph.
//! A set of founders reproduces the graph exactly if every edge of the graph is traversed by some founder, and every pair of consecutive founder steps is an edge of the graph.
//! This crate builds two edge sets, one from the GFA links (or GBZ edges) of the graph and one from the founder paths, and compares them.
//!
//! A bidirected edge can be written in two ways: as the edge itself or as its reverse complement.
//! Both sets store the [canonical](edge::canonicalize) encoding of each edge, which makes the comparison independent of the direction in which each source recorded the edge.

pub mod algorithms;
pub mod edge;

pub use algorithms::{ParseStats, gbz_edges, parse_founders, parse_gfa_links};
pub use edge::{Edge, EdgeSet, canonicalize};

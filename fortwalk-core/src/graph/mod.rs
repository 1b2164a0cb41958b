//! Walking-graph utilities shared by every planner.
//!
//! [`Adjacency`] expands an undirected edge list into per-location neighbour
//! lists. It answers the two questions a planner asks of a fort: which
//! locations can be reached at all under a difficulty ceiling, and what is
//! the quickest walk between two locations.

mod adjacency;
mod shortest_path;

pub use adjacency::{Adjacency, Neighbour};
pub use shortest_path::ShortestPath;

//! # grid_search
//!
//! The search core of a grid pathfinding visualizer. A fixed-size [PathingGrid] of nodes holds
//! walls painted by the user; a [GridSolver] explores it from the start node to the end node with
//! either [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) or
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and returns the
//! order in which nodes were visited. The shortest path is then recovered from the predecessor
//! links the search left behind with [reconstruct_path].
//!
//! Movement is 4-connected and every step costs 1, so both algorithms find paths of the same
//! length. Rendering and animation of the returned sequences is left to the caller;
//! [Visualizer] bundles the usual clear/search/reconstruct flow.
//!
//! Connected components of the open cells are maintained alongside the grid, so whether the end
//! is reachable can be checked without running a search.
pub mod config;
pub mod error;
pub mod node;
pub mod path;
pub mod pathing_grid;
pub mod solver;
pub mod visualizer;

/// Maximum number of orthogonal neighbours of a node.
pub const N_NEIGHBORS: usize = 4;

pub use config::GridConfig;
pub use error::{GridError, GridResult};
pub use node::{Node, UNREACHABLE};
pub use path::{is_contiguous, path_cost, reconstruct_path};
pub use pathing_grid::PathingGrid;
pub use solver::{bfs::BfsSolver, dijkstra::DijkstraSolver, Algorithm, GridSolver};
pub use visualizer::{SearchOutcome, Visualizer};

use crate::error::GridError;
use crate::path::reconstruct_path;
use crate::pathing_grid::PathingGrid;
use core::fmt;
use grid_util::point::Point;
use log::{info, warn};
use std::str::FromStr;

pub mod bfs;
pub mod dijkstra;

use bfs::BfsSolver;
use dijkstra::DijkstraSolver;

/// A search over a [PathingGrid] from a start node to an end node.
///
/// [search](GridSolver::search) expects the grid's search metadata to be cleared beforehand (see
/// [reset_search_state](PathingGrid::reset_search_state)). It marks nodes visited, records
/// distances and predecessor links in place, and returns the nodes in the order they were
/// visited. Exploration stops as soon as the end node is visited.
pub trait GridSolver {
    fn search(&self, grid: &mut PathingGrid, start: Point, end: Point) -> Vec<Point>;

    /// Clears the search state, runs [search](Self::search) and follows the predecessor links
    /// back from `end`. Returns [None] if the visited sequence does not end at `end`, which
    /// includes an `end` that is a wall.
    fn get_path_single_goal(
        &self,
        grid: &mut PathingGrid,
        start: Point,
        end: Point,
    ) -> Option<Vec<Point>> {
        grid.reset_search_state();
        let visited = self.search(grid, start, end);
        if visited.last() != Some(&end) {
            info!("{} is not reachable from {}", end, start);
            if grid.reachable(&start, &end) && !grid.components_dirty {
                warn!("Reachable goal could not be pathed to, are the components correct?");
            }
            return None;
        }
        Some(reconstruct_path(grid, &end))
    }
}

/// The search algorithms a caller can pick from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dijkstra];

    pub fn search(self, grid: &mut PathingGrid, start: Point, end: Point) -> Vec<Point> {
        match self {
            Algorithm::Bfs => BfsSolver.search(grid, start, end),
            Algorithm::Dijkstra => DijkstraSolver.search(grid, start, end),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "BFS"),
            Algorithm::Dijkstra => write!(f, "Dijkstra"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Algorithm, GridError> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            _ => Err(GridError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    #[test]
    fn parses_algorithm_names() {
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!("Dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!(
            "astar".parse::<Algorithm>(),
            Err(GridError::UnknownAlgorithm("astar".to_owned()))
        );
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn wall_goal_has_no_path() {
        // |S..|
        // |.#.|
        // |..E|
        let config = GridConfig::new(3, 3, (0, 0), (2, 2)).unwrap();
        let mut grid = PathingGrid::new(&config);
        grid.set_wall(1, 1, true).unwrap();
        grid.update();
        let (start, wall) = (grid.start(), Point::new(1, 1));
        assert!(BfsSolver
            .get_path_single_goal(&mut grid, start, wall)
            .is_none());
        assert!(DijkstraSolver
            .get_path_single_goal(&mut grid, start, wall)
            .is_none());

        let end = grid.end();
        let bfs_path = BfsSolver.get_path_single_goal(&mut grid, start, end).unwrap();
        let dijkstra_path = DijkstraSolver
            .get_path_single_goal(&mut grid, start, end)
            .unwrap();
        assert_eq!(bfs_path.len(), dijkstra_path.len());
        assert!(bfs_path
            .iter()
            .chain(&dijkstra_path)
            .all(|p| !grid.node(p).unwrap().is_wall));
    }
}

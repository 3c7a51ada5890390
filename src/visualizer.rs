use crate::config::GridConfig;
use crate::error::GridResult;
use crate::path::reconstruct_path;
use crate::pathing_grid::PathingGrid;
use crate::solver::Algorithm;
use grid_util::point::Point;
use log::{debug, info};

/// The result of one search run, ready to be handed to a renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    /// Nodes in the order the algorithm visited them.
    pub visited: Vec<Point>,
    /// Shortest path from start to end, empty if the end was not reached.
    pub path: Vec<Point>,
    pub found: bool,
    start: Point,
    end: Point,
}

impl SearchOutcome {
    fn is_endpoint(&self, point: &Point) -> bool {
        *point == self.start || *point == self.end
    }
    /// Visited nodes other than the start and end, i.e. the cells a renderer recolours.
    pub fn visited_cells(&self) -> impl Iterator<Item = &Point> + '_ {
        self.visited.iter().filter(|p| !self.is_endpoint(p))
    }
    /// Path nodes other than the start and end.
    pub fn path_cells(&self) -> impl Iterator<Item = &Point> + '_ {
        self.path.iter().filter(|p| !self.is_endpoint(p))
    }
    /// Number of steps along the path, [None] if no path was found.
    pub fn path_length(&self) -> Option<usize> {
        self.found.then(|| self.path.len().saturating_sub(1))
    }
}

/// Drives a [PathingGrid] the way a visualizer front end does: the user paints walls, clears the
/// path or the whole grid, and runs one of the [Algorithm]s between the configured start and end.
#[derive(Clone, Debug)]
pub struct Visualizer {
    grid: PathingGrid,
}

impl Default for Visualizer {
    fn default() -> Visualizer {
        Visualizer::new(GridConfig::default())
    }
}

impl Visualizer {
    pub fn new(config: GridConfig) -> Visualizer {
        Visualizer {
            grid: PathingGrid::new(&config),
        }
    }
    pub fn config(&self) -> &GridConfig {
        self.grid.config()
    }
    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }
    /// Flips the wall at `(row, col)`. Returns whether anything changed.
    pub fn toggle_wall(&mut self, row: usize, col: usize) -> GridResult<bool> {
        self.grid.toggle_wall(row, col)
    }
    /// Replaces the grid with a fresh one, removing all walls.
    pub fn clear_grid(&mut self) {
        debug!("Clearing grid");
        self.grid = PathingGrid::new(self.grid.config());
    }
    /// Clears the search state of the last run while keeping the walls.
    pub fn clear_path(&mut self) {
        self.grid.reset_search_state();
    }
    /// Whether the end can be reached from the start with the current walls.
    pub fn end_reachable(&mut self) -> bool {
        self.grid.update();
        self.grid.reachable(&self.grid.start(), &self.grid.end())
    }
    /// Clears the previous run, searches from start to end and reconstructs the path.
    pub fn visualize(&mut self, algorithm: Algorithm) -> SearchOutcome {
        self.clear_path();
        let (start, end) = (self.grid.start(), self.grid.end());
        let visited = algorithm.search(&mut self.grid, start, end);
        let found = visited.last() == Some(&end);
        let path = if found {
            reconstruct_path(&self.grid, &end)
        } else {
            info!("{}: {} is not reachable from {}", algorithm, end, start);
            Vec::new()
        };
        debug!(
            "{} visited {} nodes, path has {} nodes",
            algorithm,
            visited.len(),
            path.len()
        );
        SearchOutcome {
            algorithm,
            visited,
            path,
            found,
            start,
            end,
        }
    }
}

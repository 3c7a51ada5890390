use crate::config::GridConfig;
use crate::error::{GridError, GridResult};
use crate::node::Node;
use crate::N_NEIGHBORS;
use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Neighbour offsets as (row, col) deltas in the order the solvers expand them: up, down, left,
/// right. This order decides tie-breaking in both solvers.
const NEIGHBOR_OFFSETS: [(isize, isize); N_NEIGHBORS] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// [PathingGrid] owns a fixed `rows x cols` arena of [Node]s laid out row-major, so the node at
/// `(row, col)` lives at index `row * cols + col`. Besides the per-node wall flags and search
/// metadata it maintains a [UnionFind] over the open cells, which answers reachability queries
/// without running a search.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    config: GridConfig,
    nodes: Vec<Node>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::new(&GridConfig::default())
    }
}

impl PathingGrid {
    /// Allocates a fresh grid: no walls, cleared search metadata, and the start and end nodes
    /// flagged at the configured coordinates.
    pub fn new(config: &GridConfig) -> PathingGrid {
        let (start, end) = (config.start(), config.end());
        let nodes = iproduct!(0..config.rows(), 0..config.cols())
            .map(|(row, col)| Node::new(row, col, (row, col) == start, (row, col) == end))
            .collect::<Vec<Node>>();
        let mut grid = PathingGrid {
            config: *config,
            nodes,
            components: UnionFind::new(config.len()),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }
    pub fn config(&self) -> &GridConfig {
        &self.config
    }
    pub fn rows(&self) -> usize {
        self.config.rows()
    }
    pub fn cols(&self) -> usize {
        self.config.cols()
    }
    pub fn start(&self) -> Point {
        self.config.start_point()
    }
    pub fn end(&self) -> Point {
        self.config.end_point()
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    pub fn node_at(&self, row: usize, col: usize) -> Option<&Node> {
        self.get_ix(row, col).map(|ix| &self.nodes[ix])
    }
    pub fn node(&self, point: &Point) -> Option<&Node> {
        self.get_ix_point(point).map(|ix| &self.nodes[ix])
    }
    pub(crate) fn node_ix(&self, ix: usize) -> &Node {
        &self.nodes[ix]
    }
    pub(crate) fn node_ix_mut(&mut self, ix: usize) -> &mut Node {
        &mut self.nodes[ix]
    }
    pub fn point_in_bounds(&self, point: &Point) -> bool {
        self.get_ix_point(point).is_some()
    }
    pub fn get_ix(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows() && col < self.cols()).then(|| row * self.cols() + col)
    }
    pub fn get_ix_point(&self, point: &Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        self.get_ix(point.y as usize, point.x as usize)
    }
    pub fn ix_to_point(&self, ix: usize) -> Point {
        Point::new((ix % self.cols()) as i32, (ix / self.cols()) as i32)
    }
    fn checked_ix(&self, row: usize, col: usize) -> GridResult<usize> {
        self.get_ix(row, col).ok_or(GridError::OutOfBounds {
            row,
            col,
            rows: self.rows(),
            cols: self.cols(),
        })
    }

    /// Inverts the wall flag of the node at `(row, col)`. Returns whether the flag changed,
    /// which is never the case for the start and end nodes.
    pub fn toggle_wall(&mut self, row: usize, col: usize) -> GridResult<bool> {
        let ix = self.checked_ix(row, col)?;
        let blocked = !self.nodes[ix].is_wall;
        self.set_wall(row, col, blocked)
    }
    /// Sets the wall flag of the node at `(row, col)`. Joins newly connected components and flags
    /// the components as dirty if they are (potentially) broken apart into multiple.
    pub fn set_wall(&mut self, row: usize, col: usize, blocked: bool) -> GridResult<bool> {
        let ix = self.checked_ix(row, col)?;
        let node = &self.nodes[ix];
        if node.is_endpoint() || node.is_wall == blocked {
            return Ok(false);
        }
        if blocked {
            self.components_dirty = true;
        } else {
            for n in self.neighbor_indices(ix) {
                if !self.nodes[n].is_wall {
                    self.components.union(ix, n);
                }
            }
        }
        self.nodes[ix].is_wall = blocked;
        Ok(true)
    }
    /// Clears visited flags, distances and predecessor links while leaving walls and the start
    /// and end flags untouched.
    pub fn reset_search_state(&mut self) {
        self.nodes.iter_mut().for_each(Node::reset_search_state);
    }

    pub(crate) fn neighbor_indices(&self, ix: usize) -> SmallVec<[usize; N_NEIGHBORS]> {
        let (rows, cols) = (self.rows(), self.cols());
        let (row, col) = (ix / cols, ix % cols);
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < rows && c < cols).then(|| r * cols + c)
            })
            .collect()
    }
    /// Orthogonal in-bounds neighbours of `point` in the order up, down, left, right. Walls are
    /// included; skipping them is up to the solver.
    pub fn neighbors(&self, point: &Point) -> SmallVec<[Point; N_NEIGHBORS]> {
        match self.get_ix_point(point) {
            Some(ix) => self
                .neighbor_indices(ix)
                .into_iter()
                .map(|n| self.ix_to_point(n))
                .collect(),
            None => SmallVec::new(),
        }
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.get_ix_point(point).map(|ix| self.components.find(ix))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.get_ix_point(start), self.get_ix_point(goal)) {
            (Some(start_ix), Some(goal_ix)) => {
                self.nodes[start_ix].is_wall
                    || self.nodes[goal_ix].is_wall
                    || !self.components.equiv(start_ix, goal_ix)
            }
            _ => true,
        }
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.nodes.len());
        self.components_dirty = false;
        for ix in 0..self.nodes.len() {
            if self.nodes[ix].is_wall {
                continue;
            }
            // Linking to the neighbours below and to the right covers every edge once
            for n in self.neighbor_indices(ix) {
                if n > ix && !self.nodes[n].is_wall {
                    self.components.union(ix, n);
                }
            }
        }
    }

    fn cell_char(&self, node: &Node) -> char {
        if node.is_start {
            'S'
        } else if node.is_end {
            'E'
        } else if node.is_wall {
            '#'
        } else if node.is_visited {
            '*'
        } else {
            '.'
        }
    }
    /// Renders the grid like [Display](fmt::Display) but marks the cells of `path` with `o`.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut on_path = vec![false; self.nodes.len()];
        for ix in path.iter().filter_map(|p| self.get_ix_point(p)) {
            on_path[ix] = true;
        }
        let mut out = String::with_capacity(self.nodes.len() + self.rows());
        for row in self.nodes.chunks(self.cols()) {
            for node in row {
                let ix = node.row * self.cols() + node.col;
                out.push(if on_path[ix] && !node.is_endpoint() {
                    'o'
                } else {
                    self.cell_char(node)
                });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes.chunks(self.cols()) {
            let line = row.iter().map(|n| self.cell_char(n)).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> PathingGrid {
        PathingGrid::new(&GridConfig::new(3, 3, (0, 0), (2, 2)).unwrap())
    }

    #[test]
    fn creates_single_start_and_end() {
        let grid = PathingGrid::default();
        assert_eq!(grid.nodes().len(), 400);
        let starts = grid.nodes().iter().filter(|n| n.is_start).collect::<Vec<_>>();
        let ends = grid.nodes().iter().filter(|n| n.is_end).collect::<Vec<_>>();
        assert_eq!(starts.len(), 1);
        assert_eq!(ends.len(), 1);
        assert_eq!((starts[0].row, starts[0].col), (5, 5));
        assert_eq!((ends[0].row, ends[0].col), (15, 15));
        assert!(grid
            .nodes()
            .iter()
            .all(|n| !n.is_wall && !n.is_visited && n.previous.is_none()));
    }

    #[test]
    fn toggle_twice_restores_wall_state() {
        let mut grid = small_grid();
        assert_eq!(grid.toggle_wall(1, 1), Ok(true));
        assert!(grid.node_at(1, 1).unwrap().is_wall);
        assert_eq!(grid.toggle_wall(1, 1), Ok(true));
        assert!(!grid.node_at(1, 1).unwrap().is_wall);
    }

    #[test]
    fn endpoints_cannot_become_walls() {
        let mut grid = small_grid();
        assert_eq!(grid.toggle_wall(0, 0), Ok(false));
        assert_eq!(grid.toggle_wall(2, 2), Ok(false));
        assert_eq!(grid.set_wall(2, 2, true), Ok(false));
        let start = grid.node_at(0, 0).unwrap();
        assert!(start.is_start && !start.is_wall);
        let end = grid.node_at(2, 2).unwrap();
        assert!(end.is_end && !end.is_wall);
    }

    #[test]
    fn out_of_bounds_toggle_is_rejected() {
        let mut grid = small_grid();
        assert_eq!(
            grid.toggle_wall(3, 0),
            Err(GridError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                cols: 3
            })
        );
        assert!(grid.set_wall(0, 9, true).is_err());
    }

    #[test]
    fn neighbor_order_and_edges() {
        let grid = small_grid();
        let center = grid.neighbors(&Point::new(1, 1));
        assert_eq!(
            center.as_slice(),
            &[
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1)
            ]
        );
        assert_eq!(grid.neighbors(&Point::new(0, 0)).len(), 2);
        assert_eq!(grid.neighbors(&Point::new(1, 0)).len(), 3);
        assert!(grid.neighbors(&Point::new(-1, 0)).is_empty());
    }

    #[test]
    fn neighbors_include_walls() {
        let mut grid = small_grid();
        grid.set_wall(0, 1, true).unwrap();
        assert!(grid
            .neighbors(&Point::new(1, 1))
            .contains(&Point::new(1, 0)));
    }

    #[test]
    fn reset_keeps_walls_and_roles() {
        let mut grid = small_grid();
        grid.set_wall(1, 1, true).unwrap();
        let ix = grid.get_ix(0, 1).unwrap();
        let node = grid.node_ix_mut(ix);
        node.is_visited = true;
        node.distance = 1;
        node.previous = Some(0);
        grid.reset_search_state();
        let node = grid.node_at(0, 1).unwrap();
        assert!(!node.is_visited);
        assert_eq!(node.distance, crate::UNREACHABLE);
        assert_eq!(node.previous, None);
        assert!(grid.node_at(1, 1).unwrap().is_wall);
        assert!(grid.node_at(0, 0).unwrap().is_start);
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 3x3 grid:
        //  ___
        // |S# |
        // | # |
        // | #E|
        //  ___
        let mut grid = small_grid();
        for row in 0..3 {
            grid.set_wall(row, 1, true).unwrap();
        }
        assert!(grid.components_dirty);
        grid.update();
        assert!(!grid.components_dirty);
        assert!(grid.unreachable(&grid.start(), &grid.end()));
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(0, 2)));
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(1, 1)));

        // Opening a gap joins the two halves without a regeneration
        grid.set_wall(2, 1, false).unwrap();
        assert!(!grid.components_dirty);
        assert!(grid.reachable(&grid.start(), &grid.end()));
    }

    #[test]
    fn display_marks_cells() {
        let mut grid = small_grid();
        grid.set_wall(1, 1, true).unwrap();
        assert_eq!(grid.to_string(), "S..\n.#.\n..E\n");
        let path = [
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(2, 2),
        ];
        assert_eq!(grid.render_path(&path), "S..\no#.\nooE\n");
    }
}

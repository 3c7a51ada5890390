use grid_util::point::Point;

/// Distance value of a node that has not been reached by the current search.
pub const UNREACHABLE: u32 = u32::MAX;

/// A single cell of a [PathingGrid](crate::pathing_grid::PathingGrid).
///
/// Position and role flags are fixed when the grid is created. The search metadata
/// (`is_visited`, `distance`, `previous`) is written by the solvers and cleared by
/// [reset_search_state](crate::pathing_grid::PathingGrid::reset_search_state).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub row: usize,
    pub col: usize,
    pub is_start: bool,
    pub is_end: bool,
    pub is_wall: bool,
    pub is_visited: bool,
    pub distance: u32,
    /// Arena index of the node this one was first reached from.
    pub previous: Option<usize>,
}

impl Node {
    pub fn new(row: usize, col: usize, is_start: bool, is_end: bool) -> Node {
        Node {
            row,
            col,
            is_start,
            is_end,
            is_wall: false,
            is_visited: false,
            distance: UNREACHABLE,
            previous: None,
        }
    }
    pub fn point(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }
    /// Start and end nodes can never become walls.
    pub fn is_endpoint(&self) -> bool {
        self.is_start || self.is_end
    }
    pub fn reset_search_state(&mut self) {
        self.is_visited = false;
        self.distance = UNREACHABLE;
        self.previous = None;
    }
}

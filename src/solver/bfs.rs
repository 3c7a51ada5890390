use grid_util::point::Point;
use log::debug;
use std::collections::VecDeque;

use crate::{pathing_grid::PathingGrid, solver::GridSolver};

/// Breadth-first search over a FIFO frontier.
///
/// Nodes are marked visited when they are enqueued, so each node enters the frontier at most
/// once. Walls can be enqueued but are dropped when dequeued and never appear in the visited
/// sequence or get expanded.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn search(&self, grid: &mut PathingGrid, start: Point, end: Point) -> Vec<Point> {
        let mut visited = Vec::new();
        let (Some(start_ix), Some(end_ix)) = (grid.get_ix_point(&start), grid.get_ix_point(&end))
        else {
            return visited;
        };
        grid.node_ix_mut(start_ix).is_visited = true;
        let mut frontier = VecDeque::from([start_ix]);

        while let Some(ix) = frontier.pop_front() {
            if grid.node_ix(ix).is_wall {
                continue;
            }
            visited.push(grid.ix_to_point(ix));
            if ix == end_ix {
                debug!("BFS reached {} after visiting {} nodes", end, visited.len());
                return visited;
            }
            for n in grid.neighbor_indices(ix) {
                let neighbor = grid.node_ix_mut(n);
                if !neighbor.is_visited {
                    neighbor.is_visited = true;
                    neighbor.previous = Some(ix);
                    frontier.push_back(n);
                }
            }
        }
        debug!("BFS exhausted the frontier after visiting {} nodes", visited.len());
        visited
    }
}

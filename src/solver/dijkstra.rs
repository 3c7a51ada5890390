use grid_util::point::Point;
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{pathing_grid::PathingGrid, solver::GridSolver};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SmallestCostHolder {
    cost: u32,
    index: usize,
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest distance first, and among equal distances
        // the lowest (row-major) arena index
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Uniform-cost Dijkstra search with a binary heap.
///
/// Every edge has cost 1. Neighbours are relaxed even when they are walls, so a wall may end up
/// with a finite distance and a predecessor, but walls are discarded when extracted and never
/// expanded or marked visited. Nodes with equal distance are extracted in row-major order.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn search(&self, grid: &mut PathingGrid, start: Point, end: Point) -> Vec<Point> {
        let mut visited = Vec::new();
        let (Some(start_ix), Some(end_ix)) = (grid.get_ix_point(&start), grid.get_ix_point(&end))
        else {
            return visited;
        };
        let mut extracted = vec![false; grid.nodes().len()];
        grid.node_ix_mut(start_ix).distance = 0;
        let mut to_see = BinaryHeap::new();
        to_see.push(SmallestCostHolder {
            cost: 0,
            index: start_ix,
        });

        // Nodes left with an infinite distance are never pushed, so an empty heap means the rest
        // of the grid is unreachable.
        while let Some(SmallestCostHolder { cost, index }) = to_see.pop() {
            // A node may have been pushed several times if its distance improved. Only the first
            // (cheapest) extraction counts.
            if extracted[index] {
                continue;
            }
            extracted[index] = true;
            if grid.node_ix(index).is_wall {
                continue;
            }
            grid.node_ix_mut(index).is_visited = true;
            visited.push(grid.ix_to_point(index));
            if index == end_ix {
                debug!(
                    "Dijkstra reached {} at distance {} after visiting {} nodes",
                    end,
                    cost,
                    visited.len()
                );
                return visited;
            }
            let new_cost = cost + 1;
            for n in grid.neighbor_indices(index) {
                let neighbor = grid.node_ix_mut(n);
                if new_cost < neighbor.distance {
                    neighbor.distance = new_cost;
                    neighbor.previous = Some(index);
                    to_see.push(SmallestCostHolder {
                        cost: new_cost,
                        index: n,
                    });
                }
            }
        }
        debug!(
            "Dijkstra ran out of reachable nodes after visiting {} nodes",
            visited.len()
        );
        visited
    }
}

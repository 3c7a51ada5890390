use crate::pathing_grid::PathingGrid;
use grid_util::point::Point;
use itertools::Itertools;

/// Walks the predecessor links left by the last search backwards from `end` and returns the
/// nodes from the root of that chain up to and including `end`.
///
/// `end` is always part of the result, so if the search never reached it the result is just
/// `[end]`. Check that the visited sequence of the search ended at `end` to tell that apart from
/// a found path. A point outside the grid yields an empty path.
pub fn reconstruct_path(grid: &PathingGrid, end: &Point) -> Vec<Point> {
    let Some(end_ix) = grid.get_ix_point(end) else {
        return Vec::new();
    };
    let mut path = std::iter::successors(Some(end_ix), |&ix| grid.node_ix(ix).previous)
        .map(|ix| grid.ix_to_point(ix))
        .collect::<Vec<Point>>();
    path.reverse();
    path
}

/// Number of unit steps along a path.
pub fn path_cost(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Checks that consecutive points of `path` are orthogonally adjacent and that no point repeats.
pub fn is_contiguous(path: &[Point]) -> bool {
    let adjacent = path
        .iter()
        .tuple_windows()
        .all(|(a, b)| (a.x - b.x).abs() + (a.y - b.y).abs() == 1);
    adjacent && path.iter().all_unique()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn line_grid() -> PathingGrid {
        PathingGrid::new(&GridConfig::new(1, 4, (0, 0), (0, 3)).unwrap())
    }

    #[test]
    fn follows_predecessors_from_end() {
        let mut grid = line_grid();
        for ix in 1..4 {
            grid.node_ix_mut(ix).previous = Some(ix - 1);
        }
        let path = reconstruct_path(&grid, &grid.end());
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0)
            ]
        );
        assert_eq!(path_cost(&path), 3);
        assert!(is_contiguous(&path));
    }

    #[test]
    fn unreached_end_yields_only_itself() {
        let grid = line_grid();
        assert_eq!(reconstruct_path(&grid, &grid.end()), vec![grid.end()]);
        assert!(reconstruct_path(&grid, &Point::new(7, 0)).is_empty());
        assert_eq!(path_cost(&[]), 0);
    }

    #[test]
    fn detects_gaps_and_repeats() {
        let gap = [Point::new(0, 0), Point::new(2, 0)];
        let diagonal = [Point::new(0, 0), Point::new(1, 1)];
        let repeat = [Point::new(0, 0), Point::new(1, 0), Point::new(0, 0)];
        assert!(!is_contiguous(&gap));
        assert!(!is_contiguous(&diagonal));
        assert!(!is_contiguous(&repeat));
        assert!(is_contiguous(&[Point::new(4, 4)]));
    }
}

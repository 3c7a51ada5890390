use grid_search::{Algorithm, GridError, Visualizer};
use std::env;

// Runs the chosen algorithms on the default 20x20 grid with a wall that has a single gap, and
// prints the explored cells and the path for each.
//
//     cargo run --example compare_algorithms -- bfs dijkstra

fn main() -> Result<(), GridError> {
    let algorithms = env::args()
        .skip(1)
        .map(|arg| arg.parse::<Algorithm>())
        .collect::<Result<Vec<_>, _>>()?;
    let algorithms = if algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        algorithms
    };

    let mut visualizer = Visualizer::default();
    for col in 0..visualizer.config().cols() - 1 {
        visualizer.toggle_wall(10, col)?;
    }
    for algorithm in algorithms {
        let outcome = visualizer.visualize(algorithm);
        println!("{algorithm}:");
        println!("{}", visualizer.grid().render_path(&outcome.path));
        match outcome.path_length() {
            Some(length) => println!(
                "visited {} cells, path of {} steps\n",
                outcome.visited_cells().count(),
                length
            ),
            None => println!("visited {} cells, no path\n", outcome.visited.len()),
        }
    }
    Ok(())
}

use grid_search::{Algorithm, GridConfig, Visualizer};

// In this example a path is found on a 5x7 grid with shape
//  _______
// |S  #   |
// |   #   |
// |   #   |
// |      E|
// |       |
//  _______
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let config = GridConfig::new(5, 7, (0, 0), (3, 6)).unwrap();
    let mut visualizer = Visualizer::new(config);
    for row in 0..3 {
        visualizer.toggle_wall(row, 3).unwrap();
    }
    println!("{}", visualizer.grid());
    let outcome = visualizer.visualize(Algorithm::Bfs);
    println!("Visited {} nodes", outcome.visited.len());
    println!("{}", visualizer.grid().render_path(&outcome.path));
    println!("Path:");
    for p in outcome.path {
        println!("{:?}", p);
    }
}

use grid_astar::{astar, Grid, Heuristic, Point};

// In this example a path is found on a grid with shape
// S..
// ##.
// E..
// S marks the start
// E marks the end
fn main() {
    let mut grid = Grid::new(3, 3);
    grid.set_wall(Point::new(0, 1), true);
    grid.set_wall(Point::new(1, 1), true);
    grid.set_end(Point::new(0, 2));
    let result = astar(&mut grid, Heuristic::Manhattan, false);
    if result.success {
        println!("A path has been found:");
        for p in &result.path {
            println!("{}", p);
        }
        println!(
            "length {}, {} nodes explored",
            result.path_length, result.nodes_explored
        );
        println!("{}", grid);
    }
}

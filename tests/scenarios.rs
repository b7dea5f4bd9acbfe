use grid_astar::{astar, Grid, Heuristic, Point};

/// Asserts that consecutive path points differ by exactly one unit in
/// exactly one axis.
fn assert_contiguous(path: &[Point]) {
    for pair in path.windows(2) {
        let dx = (pair[0].x - pair[1].x).abs();
        let dy = (pair[0].y - pair[1].y).abs();
        assert_eq!(dx + dy, 1, "non-unit step between {} and {}", pair[0], pair[1]);
    }
}

#[test]
fn empty_grid_path_is_manhattan_optimal() {
    for (w, h) in [(5, 5), (8, 3), (2, 9)] {
        let mut grid = Grid::new(w, h);
        let manhattan = grid.start.manhattan_distance(&grid.end);
        let result = astar(&mut grid, Heuristic::Manhattan, false);
        assert!(result.success, "no path on empty {}x{} grid", w, h);
        assert_eq!(result.path.len() as f64 - 1.0, manhattan);
        // Unit steps make the Euclidean length equal the step count.
        assert_eq!(result.path_length, manhattan);
        assert_contiguous(&result.path);
    }
}

#[test]
fn five_by_five_baseline() {
    let mut grid = Grid::new(5, 5);
    let result = astar(&mut grid, Heuristic::Manhattan, false);
    assert!(result.success);
    assert_eq!(result.path_length, 8.0);
    assert_eq!(result.path.first(), Some(&Point::new(0, 0)));
    assert_eq!(result.path.last(), Some(&Point::new(4, 4)));
    assert!(result.nodes_explored >= 9);
    assert!(result.steps.is_none());
}

#[test]
fn wall_with_single_gap_routes_through_it() {
    let mut grid = Grid::new(5, 5);
    for y in 0..=3 {
        grid.set_wall(Point::new(2, y), true);
    }
    let result = astar(&mut grid, Heuristic::Manhattan, false);
    assert!(result.success, "gap at (2, 4) should be passable:\n{}", grid);
    assert!(result.path.contains(&Point::new(2, 4)));
    assert_contiguous(&result.path);
}

#[test]
fn full_partition_wall_means_no_path() {
    let mut grid = Grid::new(5, 5);
    for y in 0..5 {
        grid.set_wall(Point::new(2, y), true);
    }
    let result = astar(&mut grid, Heuristic::Manhattan, false);
    assert!(!result.success);
    assert!(result.path.is_empty());
    assert_eq!(result.path_length, 0.0);
    // The start-side component was still flooded.
    assert!(result.nodes_explored > 0);
}

#[test]
fn enclosed_end_means_no_path() {
    let mut grid = Grid::new(5, 5);
    for p in [Point::new(3, 4), Point::new(4, 3), Point::new(3, 3)] {
        grid.set_wall(p, true);
    }
    let result = astar(&mut grid, Heuristic::Euclidean, false);
    assert!(!result.success);
    assert!(result.path.is_empty());
    assert_eq!(result.path_length, 0.0);
    assert!(result.nodes_explored > 0);
}

#[test]
fn reset_leaves_no_state_behind() {
    let build = |grid: &mut Grid| {
        grid.set_wall(Point::new(1, 1), true);
        grid.set_wall(Point::new(3, 2), true);
    };
    let mut reused = Grid::new(5, 5);
    build(&mut reused);
    let first = astar(&mut reused, Heuristic::Manhattan, true);
    let second = astar(&mut reused, Heuristic::Manhattan, true);
    assert_eq!(first, second);

    let mut fresh = Grid::new(5, 5);
    build(&mut fresh);
    assert_eq!(astar(&mut fresh, Heuristic::Manhattan, true), second);
}

#[test]
fn explored_count_non_decreasing_with_grid_size() {
    let target = Point::new(4, 4);
    let mut previous = 0;
    for size in 5..=10 {
        let mut grid = Grid::new(size, size);
        grid.set_end(target);
        let result = astar(&mut grid, Heuristic::Manhattan, false);
        assert!(result.success);
        assert!(
            result.nodes_explored >= previous,
            "explored count dropped from {} to {} at size {}",
            previous,
            result.nodes_explored,
            size
        );
        previous = result.nodes_explored;
    }
}

#[test]
fn euclidean_heuristic_finds_a_path_too() {
    let mut grid = Grid::new(7, 7);
    grid.set_wall(Point::new(3, 2), true);
    grid.set_wall(Point::new(3, 3), true);
    grid.set_wall(Point::new(3, 4), true);
    let result = astar(&mut grid, Heuristic::Euclidean, false);
    assert!(result.success);
    assert_contiguous(&result.path);
    assert!(!result.path.iter().any(|&p| grid.cell(p).is_wall));
}

#[test]
fn repeated_searches_are_deterministic() {
    let mut grid = Grid::new(9, 9);
    for y in 1..8 {
        grid.set_wall(Point::new(4, y), true);
    }
    let first = astar(&mut grid, Heuristic::Manhattan, true);
    for _ in 0..3 {
        assert_eq!(astar(&mut grid, Heuristic::Manhattan, true), first);
    }
}

use core::fmt;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::point::Point;

/// Per-cell pathfinding state. The cost fields and flags other than
/// `is_wall`/`is_start`/`is_end` are owned by the search and cleared by
/// [Grid::reset] between runs; `parent` is only meaningful while `visited`
/// or `in_open_set` holds for the current search.
///
/// Fields absent from a serialized cell deserialize to their zero values, so
/// clients may send just the coordinate and layout flags.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell {
    pub point: Point,
    pub g: f64,
    pub h: f64,
    pub f: f64,
    #[serde(skip)]
    pub(crate) parent: Option<Point>,
    pub is_wall: bool,
    pub is_start: bool,
    pub is_end: bool,
    pub is_path: bool,
    pub visited: bool,
    pub in_open_set: bool,
}

/// A rectangular occupancy grid with designated start and end points.
/// `nodes` is indexed `[row][col]`, i.e. `nodes[y][x]`.
///
/// A grid is mutated in place by every search and must be exclusively owned
/// for the duration of one run, which the `&mut` receiver of
/// [astar](crate::search::astar) enforces. Callers are expected to validate
/// dimensions and start/end placement before searching; the engine itself
/// does not re-check them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub nodes: Vec<Vec<Cell>>,
    pub start: Point,
    pub end: Point,
}

impl Grid {
    /// Creates an all-open `width` x `height` grid with start `(0, 0)` and
    /// end `(width - 1, height - 1)`. Override walls and start/end placement
    /// before searching if a different layout is wanted.
    pub fn new(width: i32, height: i32) -> Grid {
        let nodes = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| Cell {
                        point: Point::new(x, y),
                        ..Cell::default()
                    })
                    .collect()
            })
            .collect();
        let mut grid = Grid {
            width,
            height,
            nodes,
            start: Point::new(0, 0),
            end: Point::new(width - 1, height - 1),
        };
        grid.cell_mut(grid.start).is_start = true;
        grid.cell_mut(grid.end).is_end = true;
        grid
    }

    pub fn cell(&self, p: Point) -> &Cell {
        &self.nodes[p.y as usize][p.x as usize]
    }

    pub fn cell_mut(&mut self, p: Point) -> &mut Cell {
        &mut self.nodes[p.y as usize][p.x as usize]
    }

    pub fn set_wall(&mut self, p: Point, wall: bool) {
        self.cell_mut(p).is_wall = wall;
    }

    /// Moves the start marker to `p`.
    pub fn set_start(&mut self, p: Point) {
        let old = self.start;
        self.cell_mut(old).is_start = false;
        self.start = p;
        self.cell_mut(p).is_start = true;
    }

    /// Moves the end marker to `p`.
    pub fn set_end(&mut self, p: Point) {
        let old = self.end;
        self.cell_mut(old).is_end = false;
        self.end = p;
        self.cell_mut(p).is_end = true;
    }

    /// Checks that `p` lies within `[0, width) x [0, height)`.
    pub fn is_valid(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// The in-bounds, non-wall points reachable from `p` with a unit
    /// 4-directional move, in the fixed order down, right, up, left.
    pub fn neighbors(&self, p: Point) -> SmallVec<[Point; 4]> {
        p.neumann_neighborhood()
            .into_iter()
            .filter(|&n| self.is_valid(n) && !self.cell(n).is_wall)
            .collect()
    }

    /// Clears all per-search cell state. Wall, start and end flags are kept.
    pub fn reset(&mut self) {
        for row in &mut self.nodes {
            for cell in row {
                cell.g = 0.0;
                cell.h = 0.0;
                cell.f = 0.0;
                cell.parent = None;
                cell.is_path = false;
                cell.visited = false;
                cell.in_open_set = false;
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.nodes {
            for cell in row {
                let c = if cell.is_start {
                    'S'
                } else if cell.is_end {
                    'E'
                } else if cell.is_wall {
                    '#'
                } else if cell.is_path {
                    '*'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

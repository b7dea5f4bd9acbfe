use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::heuristic::Heuristic;
use crate::point::Point;

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Outcome of one search. `success == false` means the frontier was
/// exhausted without reaching the end, which is a normal result, not a
/// fault. `steps` is `None` unless animation was requested; it is omitted
/// from the serialized form entirely rather than emitted as an empty list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub success: bool,
    pub path: Vec<Point>,
    pub explored_nodes: Vec<Point>,
    pub path_length: f64,
    pub nodes_explored: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

/// Snapshot taken at one expansion event, for animation playback. The final
/// step of a successful search additionally carries the reconstructed path
/// and sets `is_complete`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub current_node: Point,
    pub open_set: Vec<Point>,
    pub closed_set: Vec<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Point>>,
    pub is_complete: bool,
}

/// Runs A* over `grid` from `grid.start` to `grid.end` with unit edge costs
/// and 4-directional movement.
///
/// The grid's per-search state is reset first, then annotated in place as
/// the search runs, so the caller can inspect cell costs, visited flags and
/// the `is_path` markers afterwards. With `animate` set, a [Step] is
/// recorded before every expansion plus a final completed one; without it no
/// snapshot work happens at all.
///
/// The caller owes validation: positive dimensions, start and end in bounds
/// and not walls, matrix shape matching `width` x `height`. The one boundary
/// case the engine defines itself is `start == end`, which succeeds with the
/// single-node path.
///
/// When a relaxation finds a cheaper route to a cell already in the
/// frontier, its costs are updated in place but its frontier entry keeps the
/// old priority (see [Frontier]). A cell can therefore be expanded with a
/// stale priority, so the usual A* optimality argument applies only
/// approximately; paths are shortest in practice but not provably always.
pub fn astar(grid: &mut Grid, heuristic: Heuristic, animate: bool) -> SearchResult {
    debug_assert!(
        grid.is_valid(grid.start) && grid.is_valid(grid.end),
        "start and end must be in bounds"
    );
    grid.reset();
    let start = grid.start;
    let end = grid.end;

    let mut frontier = Frontier::new();
    let mut explored: FxIndexSet<Point> = FxIndexSet::default();
    let mut steps: Vec<Step> = Vec::new();

    let h = heuristic.estimate(&start, &end);
    {
        let cell = grid.cell_mut(start);
        cell.g = 0.0;
        cell.h = h;
        cell.f = h;
        cell.in_open_set = true;
    }
    frontier.push(start, h);

    while let Some(current) = frontier.pop() {
        {
            let cell = grid.cell_mut(current);
            cell.in_open_set = false;
            cell.visited = true;
        }
        explored.insert(current);

        if current == end {
            let path = reconstruct_path(grid, current);
            let path_length = path_length(&path);
            for &p in &path {
                if p != start && p != end {
                    grid.cell_mut(p).is_path = true;
                }
            }
            if animate {
                steps.push(Step {
                    current_node: current,
                    open_set: frontier.points(),
                    closed_set: explored.iter().copied().collect(),
                    path: Some(path.clone()),
                    is_complete: true,
                });
            }
            debug!(
                "path found: {} nodes, length {}, {} explored",
                path.len(),
                path_length,
                explored.len()
            );
            return SearchResult {
                success: true,
                path,
                explored_nodes: explored.iter().copied().collect(),
                path_length,
                nodes_explored: explored.len(),
                steps: animate.then_some(steps),
            };
        }

        if animate {
            steps.push(Step {
                current_node: current,
                open_set: frontier.points(),
                closed_set: explored.iter().copied().collect(),
                path: None,
                is_complete: false,
            });
        }

        for neighbor in grid.neighbors(current) {
            if explored.contains(&neighbor) {
                continue;
            }
            let tentative_g = grid.cell(current).g + 1.0;
            let cell = grid.cell_mut(neighbor);
            if !cell.in_open_set {
                cell.parent = Some(current);
                cell.g = tentative_g;
                cell.h = heuristic.estimate(&neighbor, &end);
                cell.f = cell.g + cell.h;
                cell.in_open_set = true;
                let f = cell.f;
                frontier.push(neighbor, f);
            } else if tentative_g < cell.g {
                // Cheaper route to a frontier cell: relax in place. The
                // existing frontier entry keeps its old priority.
                cell.parent = Some(current);
                cell.g = tentative_g;
                cell.f = cell.g + cell.h;
            }
        }
    }

    debug!("frontier exhausted, {} explored, no path", explored.len());
    SearchResult {
        success: false,
        path: Vec::new(),
        explored_nodes: explored.iter().copied().collect(),
        path_length: 0.0,
        nodes_explored: explored.len(),
        steps: animate.then_some(steps),
    }
}

/// Walks the parent back-references from `end` to the start and reverses the
/// result into a start-to-end path.
fn reconstruct_path(grid: &Grid, end: Point) -> Vec<Point> {
    let mut path: Vec<Point> = itertools::unfold(Some(end), |current| {
        current.take().map(|p| {
            *current = grid.cell(p).parent;
            p
        })
    })
    .collect();
    path.reverse();
    path
}

/// Sum of Euclidean distances between consecutive path points, rounded to 2
/// decimal places.
fn path_length(path: &[Point]) -> f64 {
    let length: f64 = path
        .windows(2)
        .map(|pair| pair[0].euclidean_distance(&pair[1]))
        .sum();
    (length * 100.0).round() / 100.0
}

/// Builds the combined CNF for a puzzle and drives the SAT solver,
/// discarding models that are not a single connected loop.
use crate::cell_constraints;
use crate::connectivity;
use crate::error::{Result, SlitherlinkError};
use crate::grid::Grid;
use crate::loop_constraints;
use crate::puzzle::ClueMatrix;
use varisat::Lit;

/// A single-loop solution: 0-based ON edge indices, ascending.
pub type Solution = Vec<usize>;

/// Builds the CNF for a puzzle: cell-count clauses in row-major cell order
/// followed by loop-local clauses in ascending vertex order.
pub fn build_clauses(grid: &Grid, clues: &ClueMatrix) -> Result<Vec<Vec<isize>>> {
    let mut clauses = Vec::new();

    for k in 0..grid.num_cells() {
        let r = k / grid.width;
        let c = k % grid.width;
        let Some(clue) = clues.get(r, c) else {
            continue;
        };
        let (upper, lower, left, right) = grid.cell_edges(k);
        let vars = [
            (upper + 1) as isize,
            (lower + 1) as isize,
            (left + 1) as isize,
            (right + 1) as isize,
        ];
        clauses.extend(cell_constraints::clauses(clue, vars));
    }

    for v in 0..grid.num_vertices() {
        let edges = grid.corner_edges(v);
        let vars: Vec<isize> = edges.iter().map(|&e| (e + 1) as isize).collect();
        clauses.extend(loop_constraints::clauses(&vars));
    }

    Ok(clauses)
}

fn positive_edges(model: &[Lit]) -> Vec<usize> {
    let mut edges: Vec<usize> = model
        .iter()
        .filter(|lit| lit.is_positive())
        .map(|lit| (lit.var().to_dimacs() as usize) - 1)
        .collect();
    edges.sort_unstable();
    edges
}

/// Enumerates SAT models lazily, accepting the first one whose ON edges form
/// a single connected loop. If `verify_unique` is set, continues searching
/// for a second accepted model and reports `MultipleSolutions` if one exists.
pub fn solve(grid: &Grid, clauses: &[Vec<isize>], verify_unique: bool) -> Result<Solution> {
    let iter = crate::find_all_solutions(clauses)
        .map_err(|e| SlitherlinkError::Solver(e.to_string()))?;

    let mut accepted: Option<Solution> = None;
    for model in iter {
        let edges = positive_edges(&model);
        if connectivity::is_single_component(grid, &edges) {
            match &accepted {
                None => {
                    accepted = Some(edges);
                    if !verify_unique {
                        break;
                    }
                }
                Some(_) => return Err(SlitherlinkError::MultipleSolutions),
            }
        }
    }

    accepted.ok_or(SlitherlinkError::NoSolution)
}

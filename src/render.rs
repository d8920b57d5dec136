/// ASCII rendering of an accepted loop atop its clue grid.
use crate::grid::Grid;
use crate::puzzle::ClueMatrix;
use std::collections::HashSet;

/// Draws the accepted 0-based `on_edges` over `clues` using `grid`'s layout.
/// Canvas is `(4*(H+1)+1)` rows by `(4*(W+1)+1)` columns.
pub fn draw(grid: &Grid, clues: &ClueMatrix, on_edges: &[usize]) -> String {
    let rows = 4 * (grid.height + 1) + 1;
    let cols = 4 * (grid.width + 1) + 1;
    let mut canvas = vec![vec![' '; cols]; rows];

    for r in 0..grid.height {
        for c in 0..grid.width {
            if let Some(v) = clues.get(r, c) {
                canvas[4 * r + 2][4 * c + 2] = (b'0' + v) as char;
            }
        }
    }

    let on: HashSet<usize> = on_edges.iter().copied().collect();

    // horizontal edges: r in 0..=H, c in 0..W, index r*W + c
    for r in 0..=grid.height {
        for c in 0..grid.width {
            let e = r * grid.width + c;
            if on.contains(&e) {
                for col in (4 * c)..=(4 * (c + 1)) {
                    canvas[4 * r][col] = '#';
                }
            }
        }
    }

    // vertical edges: r in 0..H, c in 0..=W, index num_horizontal + r*(W+1) + c
    for r in 0..grid.height {
        for c in 0..=grid.width {
            let e = grid.num_horizontal + r * (grid.width + 1) + c;
            if on.contains(&e) {
                for row in (4 * r)..=(4 * (r + 1)) {
                    canvas[row][4 * c] = '#';
                }
            }
        }
    }

    canvas
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{build_clauses, solve};

    #[test]
    fn canvas_has_expected_dimensions() {
        let clues = ClueMatrix::parse("33\n..").unwrap();
        let grid = Grid::new(clues.height, clues.width);
        let clauses = build_clauses(&grid, &clues).unwrap();
        let sol = solve(&grid, &clauses, false).unwrap();
        let canvas = draw(&grid, &clues, &sol);
        let lines: Vec<&str> = canvas.lines().collect();
        assert_eq!(lines.len(), 4 * (2 + 1) + 1);
        assert_eq!(lines[0].chars().count(), 4 * (2 + 1) + 1);
    }

    #[test]
    fn clue_digits_land_on_expected_cells() {
        let clues = ClueMatrix::parse("31\n13").unwrap();
        let grid = Grid::new(clues.height, clues.width);
        let canvas = draw(&grid, &clues, &[]);
        let lines: Vec<&str> = canvas.lines().collect();
        assert_eq!(lines[2].chars().nth(2), Some('3'));
        assert_eq!(lines[2].chars().nth(6), Some('1'));
        assert_eq!(lines[6].chars().nth(2), Some('1'));
        assert_eq!(lines[6].chars().nth(6), Some('3'));
    }
}

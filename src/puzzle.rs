/// The clue matrix: a rectangular grid of optional {0,1,2,3} clues, parsed
/// from the puzzle text format (one row per line, `.` for blank, `0`-`3`
/// for a clue).
use crate::error::{Result, SlitherlinkError};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueMatrix {
    pub height: usize,
    pub width: usize,
    cells: Vec<Option<u8>>,
}

impl ClueMatrix {
    pub fn get(&self, r: usize, c: usize) -> Option<u8> {
        self.cells[r * self.width + c]
    }

    /// Parses the puzzle text format: one line per row, `.` for blank, `0`-`3`
    /// for a clue. Leading/trailing whitespace on each line is stripped.
    /// Empty trailing lines are ignored; all kept rows must have equal width.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.is_empty() {
            return Err(SlitherlinkError::Parse("puzzle has no rows".to_string()));
        }

        let width = rows[0].len();
        let mut cells = Vec::with_capacity(rows.len() * width);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(SlitherlinkError::Parse(format!(
                    "row {r} has length {}, expected {width}",
                    row.len()
                )));
            }
            for ch in row.chars() {
                let clue = match ch {
                    '.' => None,
                    '0'..='3' => Some(ch.to_digit(10).unwrap() as u8),
                    other => {
                        return Err(SlitherlinkError::Parse(format!(
                            "invalid character '{other}' in puzzle"
                        )));
                    }
                };
                cells.push(clue);
            }
        }

        Ok(ClueMatrix {
            height: rows.len(),
            width,
            cells,
        })
    }

    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SlitherlinkError::Parse(format!("could not read puzzle file: {e}")))?;
        Self::parse(&content)
    }
}

impl fmt::Display for ClueMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.height {
            for c in 0..self.width {
                let ch = match self.get(r, c) {
                    None => '.',
                    Some(d) => (b'0' + d) as char,
                };
                write!(f, "{ch}")?;
            }
            if r + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dots_and_digits() {
        let m = ClueMatrix::parse("33\n..").unwrap();
        assert_eq!(m.height, 2);
        assert_eq!(m.width, 2);
        assert_eq!(m.get(0, 0), Some(3));
        assert_eq!(m.get(0, 1), Some(3));
        assert_eq!(m.get(1, 0), None);
        assert_eq!(m.get(1, 1), None);
    }

    #[test]
    fn rejects_invalid_character() {
        assert!(matches!(
            ClueMatrix::parse("3x\n.."),
            Err(SlitherlinkError::Parse(_))
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert!(matches!(
            ClueMatrix::parse("33\n.\n"),
            Err(SlitherlinkError::Parse(_))
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            ClueMatrix::parse("   \n\n"),
            Err(SlitherlinkError::Parse(_))
        ));
    }

    #[test]
    fn display_round_trips_clue_digits() {
        let text = "31\n13";
        let m = ClueMatrix::parse(text).unwrap();
        assert_eq!(m.to_string(), text);
    }
}

/// CNF for a clued cell: "exactly k of these four edge literals are true".
///
/// A pure function of `(clue, edge variables)` — no grid geometry is
/// consulted here.
use itertools::Itertools;

/// Emits the clauses satisfied iff exactly `clue` of `edges` are true.
/// `edges` are already signed 1-based SAT variables (positive literals).
/// `clue` must be in `0..=3`.
pub fn clauses(clue: u8, edges: [isize; 4]) -> Vec<Vec<isize>> {
    match clue {
        0 => edges.iter().map(|&e| vec![-e]).collect(),
        1 => {
            let mut out: Vec<Vec<isize>> = edges
                .iter()
                .combinations(2)
                .map(|pair| vec![-pair[0], -pair[1]])
                .collect();
            out.push(edges.to_vec());
            out
        }
        2 => {
            let mut out = Vec::with_capacity(8);
            for triple in edges.iter().combinations(3) {
                out.push(triple.iter().map(|&&e| e).collect());
                out.push(triple.iter().map(|&&e| -e).collect());
            }
            out
        }
        3 => {
            let mut out: Vec<Vec<isize>> = edges
                .iter()
                .combinations(2)
                .map(|pair| vec![*pair[0], *pair[1]])
                .collect();
            out.push(edges.iter().map(|&e| -e).collect());
            out
        }
        _ => panic!("clue must be 0..=3, got {clue}"),
    }
}

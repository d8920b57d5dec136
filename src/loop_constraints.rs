/// CNF forcing a vertex's incident ON-edge count into {0, 2}, never 1, 3 or 4.
///
/// Degree-local only — two disjoint cycles satisfy every clause here, so
/// global single-loop connectivity is enforced separately (see `connectivity`).
use itertools::Itertools;

/// Emits clauses for a vertex with the given incident (signed, 1-based)
/// edge variables. `vars.len()` must be 2, 3 or 4 (grid corner, edge or
/// interior vertex respectively).
pub fn clauses(vars: &[isize]) -> Vec<Vec<isize>> {
    match vars.len() {
        2 => {
            let (a, b) = (vars[0], vars[1]);
            vec![vec![-a, b], vec![a, -b]]
        }
        3 => {
            let (a, b, c) = (vars[0], vars[1], vars[2]);
            vec![
                vec![-a, -b, -c],
                vec![-a, b, c],
                vec![a, -b, c],
                vec![a, b, -c],
            ]
        }
        4 => {
            let mut out = Vec::with_capacity(8);
            for triple in vars.iter().combinations(3) {
                out.push(triple.iter().map(|&&v| -v).collect());
            }
            for triple in vars.iter().combinations(3) {
                // forbid "only this one true": the other three negated in the
                // sum=1 sense, i.e. for each single var ei, the clause
                // {-ei, ej, el, em} forbids "ei true, rest false".
                let rest: Vec<isize> = triple.iter().map(|&&v| v).collect();
                let singleton = vars.iter().find(|v| !rest.contains(v)).copied().unwrap();
                out.push(vec![-singleton, rest[0], rest[1], rest[2]]);
            }
            out
        }
        n => panic!("vertex degree must be 2, 3 or 4, got {n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn satisfies(clauses: &[Vec<isize>], vars: &[isize], assignment: &[bool]) -> bool {
        clauses.iter().all(|clause| {
            clause.iter().any(|&lit| {
                let var = lit.unsigned_abs() as isize;
                let idx = vars.iter().position(|&v| v == var).unwrap();
                if lit > 0 { assignment[idx] } else { !assignment[idx] }
            })
        })
    }

    #[test]
    fn degree_constraints_match_0_or_2_truth_table() {
        for n in [2usize, 3, 4] {
            let vars: Vec<isize> = (1..=n as isize).collect();
            let cl = clauses(&vars);
            for bits in 0u32..(1 << n) {
                let assignment: Vec<bool> = (0..n).map(|i| (bits >> i) & 1 != 0).collect();
                let count = assignment.iter().filter(|&&b| b).count();
                let expected = count == 0 || count == 2;
                let actual = satisfies(&cl, &vars, &assignment);
                assert_eq!(
                    actual, expected,
                    "n={n} assignment={assignment:?} expected={expected}"
                );
            }
        }
    }
}

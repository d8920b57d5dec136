/// Deterministic numbering of a Slitherlink grid's edges, cells and vertices.
///
/// Horizontal edges occupy indices `[0, num_horizontal)`, laid out
/// `r * width + c` for `0 <= r <= height`, `0 <= c < width`. Vertical edges
/// follow at `[num_horizontal, num_edges)`, laid out
/// `num_horizontal + r * (width + 1) + c` for `0 <= r < height`,
/// `0 <= c <= width`. Vertices are numbered `r * (width + 1) + c`.

#[derive(Debug, Clone)]
pub struct Grid {
    pub height: usize,
    pub width: usize,
    pub num_horizontal: usize,
    pub num_vertical: usize,
    /// edge index -> (vertex, vertex), precomputed so adjacency queries are O(1).
    endpoints: Vec<(usize, usize)>,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Self {
        let num_horizontal = width * (height + 1);
        let num_vertical = height * (width + 1);
        let mut endpoints = Vec::with_capacity(num_horizontal + num_vertical);

        for r in 0..=height {
            for c in 0..width {
                let v1 = r * (width + 1) + c;
                let v2 = v1 + 1;
                endpoints.push((v1, v2));
            }
        }
        for r in 0..height {
            for c in 0..=width {
                let v1 = r * (width + 1) + c;
                let v2 = (r + 1) * (width + 1) + c;
                endpoints.push((v1, v2));
            }
        }

        Grid {
            height,
            width,
            num_horizontal,
            num_vertical,
            endpoints,
        }
    }

    pub fn num_edges(&self) -> usize {
        self.num_horizontal + self.num_vertical
    }

    pub fn num_vertices(&self) -> usize {
        (self.height + 1) * (self.width + 1)
    }

    pub fn num_cells(&self) -> usize {
        self.height * self.width
    }

    /// The four 0-based edge indices bounding cell `k`, as (upper, lower, left, right).
    ///
    /// Panics if `k` is out of range: an out-of-bounds index here is always a
    /// caller bug, never a condition to recover from.
    pub fn cell_edges(&self, k: usize) -> (usize, usize, usize, usize) {
        assert!(
            k < self.num_cells(),
            "cell index {k} out of range for {}x{} grid",
            self.height,
            self.width
        );
        let r = k / self.width;
        let c = k % self.width;
        let upper = r * self.width + c;
        let lower = (r + 1) * self.width + c;
        let left = self.num_horizontal + r * (self.width + 1) + c;
        let right = left + 1;
        (upper, lower, left, right)
    }

    /// The 2-4 edges incident to vertex `v`, in (right, left, up, down) order
    /// where present. Panics if `v` is out of range.
    pub fn corner_edges(&self, v: usize) -> Vec<usize> {
        assert!(
            v < self.num_vertices(),
            "vertex index {v} out of range for {}x{} grid",
            self.height,
            self.width
        );
        let w = self.width;
        let h = self.height;
        let r = v / (w + 1);
        let c = v % (w + 1);
        let mut edges = Vec::with_capacity(4);
        if c < w {
            edges.push(r * w + c);
        }
        if c > 0 {
            edges.push(r * w + c - 1);
        }
        if r > 0 {
            edges.push(self.num_horizontal + (r - 1) * (w + 1) + c);
        }
        if r < h {
            edges.push(self.num_horizontal + r * (w + 1) + c);
        }
        edges
    }

    /// The two vertices an edge connects. Panics if `e` is out of range.
    pub fn edge_endpoints(&self, e: usize) -> (usize, usize) {
        assert!(
            e < self.num_edges(),
            "edge index {e} out of range for {}x{} grid",
            self.height,
            self.width
        );
        self.endpoints[e]
    }

    /// Up to 6 distinct edges sharing a vertex with `e`, excluding `e` itself.
    pub fn adjacent_edges(&self, e: usize) -> Vec<usize> {
        let (v1, v2) = self.edge_endpoints(e);
        let mut out = Vec::with_capacity(6);
        for v in [v1, v2] {
            for other in self.corner_edges(v) {
                if other != e && !out.contains(&other) {
                    out.push(other);
                }
            }
        }
        out
    }

    /// 2-4 vertices sharing at least one incident edge with `v`.
    pub fn adjacent_vertices(&self, v: usize) -> Vec<usize> {
        let mut out = Vec::with_capacity(4);
        for e in self.corner_edges(v) {
            let (a, b) = self.edge_endpoints(e);
            let other = if a == v { b } else { a };
            if !out.contains(&other) {
                out.push(other);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_and_vertex_counts() {
        let g = Grid::new(2, 3);
        assert_eq!(g.num_edges(), 3 * 3 + 2 * 4); // W*(H+1) + H*(W+1)
        assert_eq!(g.num_vertices(), 3 * 4);
        assert_eq!(g.num_cells(), 6);
    }

    #[test]
    fn cell_edges_are_distinct_and_in_range() {
        let g = Grid::new(3, 4);
        for k in 0..g.num_cells() {
            let (u, l, le, ri) = g.cell_edges(k);
            let set: std::collections::HashSet<_> = [u, l, le, ri].into_iter().collect();
            assert_eq!(set.len(), 4);
            for e in [u, l, le, ri] {
                assert!(e < g.num_edges());
            }
        }
    }

    #[test]
    fn every_edge_belongs_to_exactly_two_vertices() {
        let g = Grid::new(2, 2);
        let mut incidence = vec![0usize; g.num_edges()];
        for v in 0..g.num_vertices() {
            for e in g.corner_edges(v) {
                incidence[e] += 1;
            }
        }
        assert!(incidence.iter().all(|&count| count == 2));
    }

    #[test]
    fn corner_edges_report_v_as_an_endpoint() {
        let g = Grid::new(3, 3);
        for v in 0..g.num_vertices() {
            for e in g.corner_edges(v) {
                let (a, b) = g.edge_endpoints(e);
                assert!(a == v || b == v);
            }
        }
    }

    #[test]
    fn corner_edges_length_by_position() {
        let g = Grid::new(3, 3);
        // corners have degree 2
        for v in [0, 3, 12, 15] {
            assert_eq!(g.corner_edges(v).len(), 2);
        }
        // interior vertex has degree 4
        assert_eq!(g.corner_edges(5).len(), 4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn cell_edges_out_of_range_panics() {
        let g = Grid::new(2, 2);
        g.cell_edges(100);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn corner_edges_out_of_range_panics() {
        let g = Grid::new(2, 2);
        g.corner_edges(100);
    }
}

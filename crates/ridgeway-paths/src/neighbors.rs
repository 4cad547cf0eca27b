use ridgeway_core::Point;

/// Reusable buffer for cardinal neighbour queries.
///
/// Neighbours come back in probe order north, south, west, east, filtered by
/// a predicate (usually "inside the grid"). Diagonals and wraparound are
/// never produced.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Cardinal neighbours of `p` for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf.extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridgeway_core::Range;

    #[test]
    fn corner_has_two_neighbors() {
        let rng = Range::square(3);
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Point::new(0, 0), |q| rng.contains(q));
        assert_eq!(got, &[Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn interior_has_four_in_probe_order() {
        let rng = Range::square(3);
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Point::new(1, 1), |q| rng.contains(q));
        assert_eq!(
            got,
            &[
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2)
            ]
        );
    }
}

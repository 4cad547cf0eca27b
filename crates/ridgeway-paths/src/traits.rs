/// Edge-weight policy for the grid-to-graph transform.
pub trait EdgeCost {
    /// Weight of a step whose height change is `diff = h(to) - h(from)`.
    fn cost(&self, diff: i32) -> i32;

    /// Whether [`cost`](EdgeCost::cost) can return a negative weight.
    fn allows_negative(&self) -> bool;
}

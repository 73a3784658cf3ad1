use std::cmp::Ordering;
use num_traits::Float;


/// Priority of a state in the AD* open set
/// Compared lexicographically: primary first, secondary on ties, smaller is better
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Key<C> {
    pub primary: C,
    pub secondary: C,
}

impl<C: Float> Key<C> {

    /// Key of a state from its cost estimates
    /// g: declared cost to goal
    /// rhs: one step lookahead cost to goal
    /// h: heuristic from start to the state
    ///
    /// Overconsistent states (g > rhs) get the heuristic inflated by epsilon.
    /// Everything else is keyed on g with the plain heuristic so that cost
    /// increases are not pushed back behind inflated entries.
    pub fn new(g: C, rhs: C, h: C, epsilon: C) -> Self {
        if g > rhs {
            Key { primary: rhs + epsilon * h, secondary: rhs }
        } else {
            Key { primary: g + h, secondary: g }
        }
    }
}

impl<C: Float> Eq for Key<C> {}

impl<C: Float> Ord for Key<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // NaN never appears with non-negative weights, treat it as a tie
        self.primary
            .partial_cmp(&other.primary)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                self.secondary
                    .partial_cmp(&other.secondary)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl<C: Float> PartialOrd for Key<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

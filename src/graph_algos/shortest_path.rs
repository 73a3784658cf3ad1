use std::{fmt::Debug, hash::Hash};
use num_traits::Float;

use crate::collections::FxIndexSet;
use crate::errors::PathPlannerError;
use crate::graph::WeightedGraph;

/// Construct a path by greedy descent over cost-to-goal estimates
/// Returns the ordered path as a vector of nodes from start to goal
/// neighbors: NN - nodes adjacent to a node
/// step_cost: S - estimated cost to goal when stepping from a node to a neighbor
/// estimate: E - cost-to-goal estimate of a node, breaks step cost ties
/// max_steps: usize - give up after this many moves
///
/// At every node the unvisited neighbor with the smallest step cost is taken. Exact
/// ties go to the smaller estimate, then to the first neighbor. A node with no
/// unvisited neighbor, an infinite step or running out of steps means the
/// estimates do not descend to the goal.
pub(crate) fn greedy_descent<N, C, NN, S, E>(start: &N, goal: &N, neighbors: NN, step_cost: S, estimate: E, max_steps: usize) -> Result<Vec<N>, PathPlannerError>
where
    N: Eq + Hash + Clone + Debug,
    C: Float,
    NN: Fn(&N) -> Vec<N>,
    S: Fn(&N, &N) -> C,
    E: Fn(&N) -> C,
{
    let mut path = vec![start.clone()];
    let mut seen: FxIndexSet<N> = FxIndexSet::default();
    seen.insert(start.clone());

    let mut current = start.clone();
    while current != *goal {

        let steps = path.len() - 1;
        if steps >= max_steps {
            return Err(PathPlannerError::InconsistentState { steps });
        }

        // pick the cheapest neighbor not already on the path
        let mut best: Option<(N, C, C)> = None;
        for neighbor in neighbors(&current) {
            if seen.contains(&neighbor) {
                continue;
            }
            let cost = step_cost(&current, &neighbor);
            let rest = estimate(&neighbor);
            let better = match &best {
                None => true,
                Some((_, best_cost, best_rest)) => cost < *best_cost || (cost == *best_cost && rest < *best_rest),
            };
            if better {
                best = Some((neighbor, cost, rest));
            }
        }

        let Some((next, cost, _)) = best else {
            return Err(PathPlannerError::InconsistentState { steps });
        };
        if cost.is_infinite() {
            return Err(PathPlannerError::InconsistentState { steps });
        }

        seen.insert(next.clone());
        path.push(next.clone());
        current = next;
    }

    Ok(path)
}


/// Total weight of a path under edge attribute `key`
/// None if two consecutive nodes are not joined by an edge
pub fn path_weight<N, C, G>(graph: &G, path: &[N], key: &str) -> Option<C>
where
    C: Float,
    G: WeightedGraph<N, C> + ?Sized,
{
    path.windows(2).try_fold(C::zero(), |total, pair| {
        graph.edge_weight(&pair[0], &pair[1], key).map(|w| total + w)
    })
}

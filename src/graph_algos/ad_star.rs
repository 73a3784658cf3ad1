use crate::collections::{FxIndexMap, FxIndexSet, FxPriorityQueue};
use crate::config::PlannerConfig;
use crate::errors::{PathPlannerError, Result};
use crate::graph::WeightedGraph;
use super::key::Key;
use super::shortest_path::{greedy_descent, path_weight};

use std::{
    cmp::Reverse,
    fmt::Debug,
    hash::Hash,
};
use log::{debug, trace, warn};
use num_traits::Float;


/// Outcome of a single improvement pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Improvement {
    /// States popped from the open set during the pass
    pub expansions: usize,
    /// False when the pass stopped on its expansion budget before the bound was certified
    pub converged: bool,
}


/// Anytime Dynamic A* (AD*)
/// https://www.cs.cmu.edu/~maxim/files/ad_icaps05.pdf
///
/// Searches backwards from the goal, keeping for every state a cost-to-goal
/// estimate `g` and a one step lookahead `rhs`. The first pass runs with a large
/// epsilon to get a path quickly, later calls to `improve` with a smaller epsilon
/// tighten it. Edge weight changes only re-open the states they affect, so the
/// next pass repairs the previous solution instead of starting over.
///
/// N: Node - space on a graph
/// C: Cost - edge weights, cost estimates and epsilon
/// G: Graph - edge weight provider, owned or `&mut`
/// H: Heuristic - h(a, b) estimated cost between two nodes, should be consistent
pub struct ADStar<N, C, G, H> {
    start: N,
    goal: N,
    graph: G,
    heuristic: H,
    weight_key: String,
    max_path_len: Option<usize>,

    g: FxIndexMap<N, C>, // cost to goal, missing entries are infinite
    rhs: FxIndexMap<N, C>, // one step lookahead, missing entries are infinite
    open: FxPriorityQueue<N, Reverse<Key<C>>>, // inconsistent states waiting for this pass
    closed: FxIndexSet<N>, // expanded during this pass
    incons: FxIndexSet<N>, // went inconsistent after being closed, deferred to the next pass
    visited: FxIndexSet<N>, // every state ever popped

    epsilon: C,
    passes: usize,
}

impl<N, C, G, H> ADStar<N, C, G, H>
where
    N: Eq + Hash + Clone + Debug,
    C: Float + Debug,
    G: WeightedGraph<N, C>,
    H: Fn(&N, &N) -> C,
{

    /// Create a planner and run the first pass with `config.initial_epsilon`
    pub fn new(start: N, goal: N, graph: G, heuristic: H, config: &PlannerConfig) -> Result<Self> {
        let mut planner = Self::primed(start, goal, graph, heuristic, config)?;
        planner.improve(planner.epsilon)?;
        Ok(planner)
    }

    /// Create a planner with the goal queued but no search done yet
    pub fn primed(start: N, goal: N, graph: G, heuristic: H, config: &PlannerConfig) -> Result<Self> {

        let missing: Vec<String> = [&start, &goal]
            .into_iter()
            .filter(|node| !graph.contains_node(node))
            .map(|node| format!("{node:?}"))
            .collect();
        if !missing.is_empty() {
            return Err(PathPlannerError::NodeNotFound(missing.join(", ")));
        }

        let epsilon = C::from(config.initial_epsilon)
            .ok_or_else(|| PathPlannerError::InvalidEpsilon(format!("{}", config.initial_epsilon)))?;

        let mut planner = Self {
            start,
            goal: goal.clone(),
            graph,
            heuristic,
            weight_key: config.weight_key.clone(),
            max_path_len: config.max_path_len,
            g: FxIndexMap::default(),
            rhs: FxIndexMap::default(),
            open: FxPriorityQueue::with_default_hasher(),
            closed: FxIndexSet::default(),
            incons: FxIndexSet::default(),
            visited: FxIndexSet::default(),
            epsilon,
            passes: 0,
        };

        // the goal is the only state with a known lookahead
        planner.rhs.insert(goal.clone(), C::zero());
        let key = planner.key(&goal);
        planner.open.push(goal, Reverse(key));

        Ok(planner)
    }

    /// Run (or continue) the search until the path is within `epsilon` of optimal
    pub fn improve(&mut self, epsilon: C) -> Result<Improvement> {
        self.run_pass(epsilon, None)
    }

    /// Same as `improve` but stops after `max_expansions` pops
    /// An unconverged result leaves the best path found so far, without the bound
    pub fn improve_bounded(&mut self, epsilon: C, max_expansions: usize) -> Result<Improvement> {
        self.run_pass(epsilon, Some(max_expansions))
    }

    fn run_pass(&mut self, epsilon: C, budget: Option<usize>) -> Result<Improvement> {
        if epsilon.is_nan() || epsilon < C::one() {
            return Err(PathPlannerError::InvalidEpsilon(format!("{epsilon:?}")));
        }

        self.epsilon = epsilon;
        // the first pass runs on the frontier left by priming
        if self.passes > 0 {
            self.reprime();
        }
        self.passes += 1;

        debug!(
            "[ADStar] pass {}: epsilon={:?} open={} deferred={}",
            self.passes, epsilon, self.open.len(), self.incons.len()
        );

        let mut expansions = 0;
        loop {
            let Some((_, &Reverse(top))) = self.open.peek() else {
                break;
            };

            if !(top < self.key(&self.start)) && self.is_consistent(&self.start) {
                break;
            }

            if budget.is_some_and(|limit| expansions >= limit) {
                warn!(
                    "[ADStar] pass {} stopped after {} expansions, bound {:?} not certified",
                    self.passes, expansions, epsilon
                );
                return Ok(Improvement { expansions, converged: false });
            }

            let Some((state, _)) = self.open.pop() else {
                break;
            };
            self.visited.insert(state.clone());
            expansions += 1;

            let g = self.g(&state);
            let rhs = self.rhs(&state);
            trace!("[ADStar] expand {:?}: g={:?} rhs={:?}", state, g, rhs);

            if g > rhs {
                // overconsistent, accept the lookahead
                self.g.insert(state.clone(), rhs);
                self.closed.insert(state.clone());
                for neighbor in self.graph.neighbors(&state) {
                    self.reconcile(&neighbor);
                }
            } else {
                // underconsistent, invalidate and let the lookahead rebuild it
                self.g.insert(state.clone(), C::infinity());
                for neighbor in self.graph.neighbors(&state) {
                    self.reconcile(&neighbor);
                }
                self.reconcile(&state);
            }
        }

        debug!(
            "[ADStar] pass {} converged after {} expansions: g(start)={:?}",
            self.passes, expansions, self.g(&self.start)
        );
        Ok(Improvement { expansions, converged: true })
    }

    /// Recompute the lookahead of a state and requeue it if it is inconsistent
    fn reconcile(&mut self, state: &N) {

        if *state != self.goal {
            let lookahead = self.graph
                .neighbors(state)
                .iter()
                .map(|next| self.g(next) + self.cost(state, next))
                .fold(C::infinity(), C::min);
            self.rhs.insert(state.clone(), lookahead);
        }

        self.open.remove(state);

        if self.is_consistent(state) {
            self.incons.shift_remove(state);
            return;
        }
        if self.closed.contains(state) {
            // at most one expansion per state per pass
            self.incons.insert(state.clone());
        } else {
            let key = self.key(state);
            self.open.push(state.clone(), Reverse(key));
        }
    }

    /// Move deferred states back to open, rekey open under the current epsilon and reset closed
    fn reprime(&mut self) {
        let deferred = std::mem::take(&mut self.incons);
        let queued: Vec<N> = self.open.iter().map(|(state, _)| state.clone()).collect();

        self.open.clear();
        for state in queued.into_iter().chain(deferred) {
            let key = self.key(&state);
            self.open.push(state, Reverse(key));
        }
        self.closed.clear();
    }

    /// Change edge weights and queue the states whose lookahead moved
    /// changes: (u, v, weight), applied to both directions of the edge
    ///
    /// The whole batch is validated first: an unknown edge or a negative / NaN
    /// weight rejects it without touching the graph. Infinite weights are allowed.
    pub fn apply_edge_changes<I>(&mut self, changes: I) -> Result<()>
    where
        I: IntoIterator<Item = (N, N, C)>,
    {
        let changes: Vec<(N, N, C)> = changes.into_iter().collect();

        for (u, v, weight) in &changes {
            if self.graph.edge_weight(u, v, &self.weight_key).is_none()
                || self.graph.edge_weight(v, u, &self.weight_key).is_none()
            {
                return Err(PathPlannerError::EdgeNotFound {
                    from: format!("{u:?}"),
                    to: format!("{v:?}"),
                });
            }
            if weight.is_nan() || *weight < C::zero() {
                return Err(PathPlannerError::InvalidWeight {
                    from: format!("{u:?}"),
                    to: format!("{v:?}"),
                    weight: format!("{weight:?}"),
                });
            }
        }

        debug!("[ADStar] applying {} edge changes", changes.len());

        for (u, v, weight) in &changes {
            self.graph.set_edge_weight(u, v, &self.weight_key, *weight)?;
            self.graph.set_edge_weight(v, u, &self.weight_key, *weight)?;
            self.reconcile(u);
            self.reconcile(v);
        }

        self.reprime();
        Ok(())
    }

    /// Current best path from start to goal
    /// Only meaningful once a pass has converged for the epsilon of interest
    pub fn extract_path(&self) -> Result<Vec<N>> {
        if self.passes == 0 {
            return Err(PathPlannerError::NotComputed);
        }
        if self.g(&self.start).is_infinite() {
            return Err(PathPlannerError::Unreachable);
        }

        // a valid descent never visits a state twice, so finite g values bound its length
        let max_steps = self.max_path_len.unwrap_or_else(|| {
            self.g.values().filter(|g| g.is_finite()).count() + 1
        });

        greedy_descent(
            &self.start,
            &self.goal,
            |state| self.graph.neighbors(state),
            |state, next| self.g(next) + self.cost(state, next),
            |state| self.g(state),
            max_steps,
        )
    }

    /// Weight of a path under the planner's edge attribute
    pub fn path_weight(&self, path: &[N]) -> Option<C> {
        path_weight(&self.graph, path, &self.weight_key)
    }

    fn key(&self, state: &N) -> Key<C> {
        let h = (self.heuristic)(&self.start, state);
        Key::new(self.g(state), self.rhs(state), h, self.epsilon)
    }

    fn cost(&self, u: &N, v: &N) -> C {
        self.graph
            .edge_weight(u, v, &self.weight_key)
            .unwrap_or_else(C::infinity)
    }

    pub fn g(&self, state: &N) -> C {
        self.g.get(state).copied().unwrap_or_else(C::infinity)
    }

    pub fn rhs(&self, state: &N) -> C {
        self.rhs.get(state).copied().unwrap_or_else(C::infinity)
    }

    pub fn is_consistent(&self, state: &N) -> bool {
        self.g(state) == self.rhs(state)
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn goal(&self) -> &N {
        &self.goal
    }

    /// Epsilon of the latest pass
    pub fn epsilon(&self) -> C {
        self.epsilon
    }

    /// Number of passes run so far
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// States ever expanded, in first expansion order
    pub fn visited(&self) -> impl Iterator<Item = &N> {
        self.visited.iter()
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// States deferred to the next pass
    pub fn deferred_len(&self) -> usize {
        self.incons.len()
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn into_graph(self) -> G {
        self.graph
    }
}

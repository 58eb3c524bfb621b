use crate::errors::PathPlannerError;
use crate::collections::{FxIndexMap, PriorityQueue};
use super::{shortest_path::shortest_path, add_cost, edge_cost, Graph};

use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, trace, warn};


/// Where the heuristic is anchored when a neighbor is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeuristicAnchor {
    /// h = distance(neighbor, destination), the remaining-cost estimate
    #[default]
    Destination,
    /// h = distance(current, neighbor), the single step being taken
    Step,
}

/// Tuning knobs for a search
/// Defaults: heuristic anchored at the destination, no expansion bound
/// Use `HeuristicAnchor::Step` to score neighbors with the original
/// distance(current, neighbor) formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchConfig {
    pub heuristic: HeuristicAnchor,
    /// Give up after expanding this many nodes, unbounded when None
    pub max_expansions: Option<usize>,
}

impl SearchConfig {

    pub fn with_heuristic(mut self, heuristic: HeuristicAnchor) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }
}


/// Path found by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N, C> {
    /// Positions after the start, ending at the goal
    pub steps: Vec<N>,
    /// Sum of the edge costs along `steps`
    pub cost: C,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome<N, C> {
    Found(Path<N, C>),
    /// The start already satisfies the goal test
    AlreadyAtGoal,
}

impl<N, C> PathOutcome<N, C> {

    /// Steps of the path, empty when already at the goal
    pub fn into_steps(self) -> Vec<N> {
        match self {
            PathOutcome::Found(path) => path.steps,
            PathOutcome::AlreadyAtGoal => Vec::new(),
        }
    }
}


/// Node of the search tree, lives in an arena for one search
/// position: index into the best-cost table, which interns positions
/// parent: index of the parent node in the arena, None for the root
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode<C> {
    pub(crate) position: usize,
    pub(crate) parent: Option<usize>,
    pub(crate) g_cost: C, // Cost to reach this node
    pub(crate) h_cost: C, // Heuristic estimate, fixed at creation
}

/// Open list entry
struct OpenEntry<C> {
    node: usize,
    f_cost: C, // g_cost + h_cost
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchStats {
    pub(crate) expanded: usize,
    pub(crate) pushed: usize,
    pub(crate) stale: usize,
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// The graph is queried only, a planner can serve any number of searches
pub struct AStar<G: Graph> {
    graph: G,
    config: SearchConfig,
}

impl<G: Graph> AStar<G> {

    pub fn new(graph: G) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    pub fn with_config(graph: G, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// From start, traverse the graph until a position passes `Graph::is_finished`
    /// Returns the least-cost path when the heuristic is admissible and edge costs are non-negative
    /// Err(NoPathFound) if every reachable position was expanded without meeting the goal
    pub fn search(&self, start: &G::Position, destination: &G::Position) -> Result<PathOutcome<G::Position, G::Cost>, PathPlannerError> {
        debug!("a* search from {start:?} to {destination:?}");
        let (outcome, stats) = self.run(start, destination)?;
        debug!(
            "a* search finished: expanded={} pushed={} stale={}",
            stats.expanded, stats.pushed, stats.stale
        );
        Ok(outcome)
    }

    /// Positions from the first step after `start` to the goal
    /// Empty when there is no path, when start already meets the goal, or when the search fails
    /// Use `search` to tell those cases apart
    pub fn shortest_path(&self, start: &G::Position, destination: &G::Position) -> Vec<G::Position> {
        match self.search(start, destination) {
            Ok(outcome) => outcome.into_steps(),
            Err(PathPlannerError::NoPathFound) => Vec::new(),
            Err(error) => {
                warn!("a* search from {start:?} to {destination:?} failed: {error}");
                Vec::new()
            }
        }
    }

    fn run(&self, start: &G::Position, destination: &G::Position) -> Result<(PathOutcome<G::Position, G::Cost>, SearchStats), PathPlannerError> {
        let mut stats = SearchStats::default();

        // Open List
        // Nodes that need to be evaluated, sorted by f_cost (cost + heuristic)
        let mut open_list = PriorityQueue::new(|a: &OpenEntry<G::Cost>, b: &OpenEntry<G::Cost>| a.f_cost < b.f_cost);

        // Best known cost per position, also interns positions so nodes can refer to them by index
        let mut best_costs: FxIndexMap<G::Position, G::Cost> = FxIndexMap::default();

        // Search tree, parents are referenced by index
        let mut nodes: Vec<SearchNode<G::Cost>> = Vec::new();

        let start_index = best_costs.insert_full(start.clone(), Zero::zero()).0;
        nodes.push(SearchNode {
            position: start_index,
            parent: None,
            g_cost: Zero::zero(),
            h_cost: Zero::zero(),
        });
        open_list.enqueue(OpenEntry { node: 0, f_cost: Zero::zero() });

        while let Some(OpenEntry { node: node_index, .. }) = open_list.dequeue() {
            let node = nodes[node_index];

            // positions are only ever inserted, node indices stay valid
            let Some((current, &best)) = best_costs.get_index(node.position) else {
                continue;
            };

            // A cheaper path to this position was found after this entry was queued
            if node.g_cost > best {
                trace!("skip stale {current:?} g={:?} best={best:?}", node.g_cost);
                stats.stale += 1;
                continue;
            }

            // Check if we've reached the goal
            if self.graph.is_finished(current, destination) {
                let outcome = match node.parent {
                    None => PathOutcome::AlreadyAtGoal,
                    Some(_) => PathOutcome::Found(Path {
                        steps: shortest_path(&best_costs, &nodes, node_index),
                        cost: node.g_cost,
                    }),
                };
                return Ok((outcome, stats));
            }

            if let Some(limit) = self.config.max_expansions.filter(|limit| stats.expanded >= *limit) {
                return Err(PathPlannerError::ExpansionLimit(limit));
            }
            stats.expanded += 1;
            trace!("expand {current:?} g={:?} h={:?}", node.g_cost, node.h_cost);

            // best_costs is mutated below
            let current = current.clone();
            let heuristic = |neighbor: &G::Position| match self.config.heuristic {
                HeuristicAnchor::Destination => self.graph.distance(neighbor, destination),
                HeuristicAnchor::Step => self.graph.distance(&current, neighbor),
            };

            for neighbor in self.graph.neighbors(&current) {
                let move_cost = edge_cost(&self.graph, &current, &neighbor)?;

                // new cost to reach this node = edge cost + node cost
                let new_cost = add_cost(node.g_cost, move_cost)?;

                let (position, h_cost) = match best_costs.entry(neighbor) {
                    Vacant(e) => {
                        // This is the first time we're seeing this neighbor
                        let h_cost = heuristic(e.key());
                        let position = e.index();
                        e.insert(new_cost);
                        (position, h_cost)
                    }
                    Occupied(mut e) => {
                        if *e.get() <= new_cost {
                            // The existing path is at least as good, do nothing
                            continue;
                        }
                        let h_cost = heuristic(e.key());
                        e.insert(new_cost);
                        (e.index(), h_cost)
                    }
                };

                let f_cost = add_cost(new_cost, h_cost)?;
                nodes.push(SearchNode {
                    position,
                    parent: Some(node_index),
                    g_cost: new_cost,
                    h_cost,
                });
                open_list.enqueue(OpenEntry { node: nodes.len() - 1, f_cost });
                stats.pushed += 1;
            }
        }

        Err(PathPlannerError::NoPathFound)
    }
}

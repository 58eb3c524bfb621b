pub mod dijkstra;
pub mod a_star;
mod shortest_path;

use std::{fmt::Debug, hash::Hash};
use num_traits::{CheckedAdd, Zero};

use crate::collections::FxIndexMap;
use crate::errors::PathPlannerError;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Numeric cost usable by the planners
/// Needs a zero, a total order and overflow-checked addition
pub trait Cost: Zero + CheckedAdd + Ord + Copy + Debug {}

impl<T> Cost for T where T: Zero + CheckedAdd + Ord + Copy + Debug {}


/// Graph supplied by the caller
/// The planners only ever query it, every method must be free of side effects
pub trait Graph {
    /// Location on the graph
    type Position: Eq + Hash + Clone + Debug;
    /// Edge weight and heuristic unit
    type Cost: Cost;

    /// All positions directly reachable from `at`, may be empty
    fn neighbors(&self, at: &Self::Position) -> Vec<Self::Position>;

    /// Exact weight of the edge `from -> to`, must not be negative
    fn cost(&self, from: &Self::Position, to: &Self::Position) -> Self::Cost;

    /// Heuristic estimate of the cost between two positions
    /// Must never overestimate the true cost for A* to return optimal paths
    fn distance(&self, from: &Self::Position, to: &Self::Position) -> Self::Cost;

    /// Goal test, defaults to equality
    /// Override for region goals such as "any cell in this row"
    fn is_finished(&self, at: &Self::Position, destination: &Self::Position) -> bool {
        at == destination
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    type Position = G::Position;
    type Cost = G::Cost;

    fn neighbors(&self, at: &Self::Position) -> Vec<Self::Position> {
        (**self).neighbors(at)
    }

    fn cost(&self, from: &Self::Position, to: &Self::Position) -> Self::Cost {
        (**self).cost(from, to)
    }

    fn distance(&self, from: &Self::Position, to: &Self::Position) -> Self::Cost {
        (**self).distance(from, to)
    }

    fn is_finished(&self, at: &Self::Position, destination: &Self::Position) -> bool {
        (**self).is_finished(at, destination)
    }
}


/// Query the weight of an edge, rejecting negative weights
pub(crate) fn edge_cost<G: Graph>(graph: &G, from: &G::Position, to: &G::Position) -> Result<G::Cost, PathPlannerError> {
    let cost = graph.cost(from, to);
    if cost < G::Cost::zero() {
        return Err(PathPlannerError::NegativeEdgeCost {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            cost: format!("{cost:?}"),
        });
    }
    Ok(cost)
}

/// Overflow-checked cost addition
pub(crate) fn add_cost<C: Cost>(a: C, b: C) -> Result<C, PathPlannerError> {
    a.checked_add(&b).ok_or(PathPlannerError::CostOverflow)
}

use crate::errors::PathPlannerError;
use crate::collections::PriorityQueue;
use super::{add_cost, edge_cost, Graph, GraphNodeMap};

use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start, traverse through graph until a position passes `Graph::is_finished`
/// The heuristic is never consulted, which makes this the reference for A* results
/// Path excludes the start, like `AStar::shortest_path`
pub fn dijkstra<G: Graph>(graph: &G, start: &G::Position, destination: &G::Position) -> Result<Vec<G::Position>, PathPlannerError> {

    let (node_map, goal_index) = build_dijkstra_graph(graph, start, Some(destination))?;

    match goal_index {
        Some(goal_index) => dijkstra_path(&node_map, goal_index),
        None => Err(PathPlannerError::NoPathFound),
    }
}


/// Return a partial map of the graph up to the goal node
/// Nodes with lower cost than the goal node will be included
pub fn dijkstra_nodes_partial<G: Graph>(graph: &G, start: &G::Position, destination: &G::Position) -> Result<GraphNodeMap<G::Position, G::Cost>, PathPlannerError> {
    let (node_map, _) = build_dijkstra_graph(graph, start, Some(destination))?;
    Ok(node_map)
}

/// Returns a full map of the graph, includes all (reachable) nodes and costs
/// The start is always at index 0
pub fn dijkstra_nodes_full<G: Graph>(graph: &G, start: &G::Position) -> Result<GraphNodeMap<G::Position, G::Cost>, PathPlannerError> {
    let (node_map, _) = build_dijkstra_graph(graph, start, None)?;
    Ok(node_map)
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
/// Without a destination every reachable node is settled
fn build_dijkstra_graph<G: Graph>(graph: &G, start: &G::Position, destination: Option<&G::Position>) -> Result<(GraphNodeMap<G::Position, G::Cost>, Option<usize>), PathPlannerError> {

    // Nodes to visit as (index, cost from start), cheapest first
    let mut nodes_to_visit = PriorityQueue::new(|a: &(usize, G::Cost), b: &(usize, G::Cost)| a.1 < b.1);

    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut nodes_map: GraphNodeMap<G::Position, G::Cost> = GraphNodeMap::default();

    let start_index = nodes_map.insert_full(start.clone(), (usize::MAX, Zero::zero())).0;
    nodes_to_visit.enqueue((start_index, Zero::zero()));

    while let Some((index, cost)) = nodes_to_visit.dequeue() {

        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // superseded by a cheaper entry for the same node
        if cost > c {
            continue;
        }

        if destination.is_some_and(|destination| graph.is_finished(node, destination)) {
            debug!("dijkstra reached goal after settling {} nodes", nodes_map.len());
            return Ok((nodes_map, Some(index)));
        }

        let node = node.clone();
        for neighbor in graph.neighbors(&node) {
            let new_cost = add_cost(c, edge_cost(graph, &node, &neighbor)?)?;

            // record (parent, cost) when the neighbor is new or now cheaper
            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    let neighbor_index = e.index();
                    e.insert((index, new_cost));
                    neighbor_index
                }
                Occupied(mut e) if e.get().1 > new_cost => {
                    e.insert((index, new_cost));
                    e.index()
                }
                Occupied(_) => continue,
            };
            nodes_to_visit.enqueue((neighbor_index, new_cost));
        }
    }

    debug!("dijkstra exhausted graph with {} reachable nodes", nodes_map.len());
    Ok((nodes_map, None))
}


/// Construct the shortest path from the start node to the goal node
/// Returns the positions after the start, in order, up to the goal
pub fn dijkstra_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, PathPlannerError>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal, the start has no parent and is left out
    loop {
        let Some((node, &(parent_index, _))) = node_map.get_index(current_index) else {
            return Err(PathPlannerError::NoPathFound);
        };
        if parent_index == usize::MAX {
            break;
        }
        path.push(node.clone());
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    Ok(path)
}

use crate::collections::FxIndexMap;
use super::a_star::SearchNode;

/// Construct the path from the root of the search tree to `goal_node`
/// Returns positions ordered from the first step after the root up to the goal
/// The root (start) position is never part of the result
/// positions: interned positions, SearchNode::position indexes into it
/// nodes: search tree arena, parents always precede their children
pub(crate) fn shortest_path<N, C>(positions: &FxIndexMap<N, C>, nodes: &[SearchNode<C>], goal_node: usize) -> Vec<N>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current = Some(goal_node);

    // Trace back from goal, stopping before the root which has no parent
    while let Some(node) = current.and_then(|index| nodes.get(index)) {
        if node.parent.is_none() {
            break;
        }
        if let Some((position, _)) = positions.get_index(node.position) {
            path.push(position.clone());
        }
        current = node.parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;

    fn node(position: usize, parent: Option<usize>, g_cost: u32) -> SearchNode<u32> {
        SearchNode { position, parent, g_cost, h_cost: 0 }
    }

    #[test]
    fn test_path_reconstruction() {
        let mut positions: FxIndexMap<String, u32> = FxIndexMap::default();
        let a = positions.insert_full("A".to_string(), 0).0;
        let b = positions.insert_full("B".to_string(), 1).0;
        let c = positions.insert_full("C".to_string(), 3).0;
        let d = positions.insert_full("D".to_string(), 4).0;

        let nodes = vec![
            node(a, None, 0),    // 0
            node(b, Some(0), 1), // 1
            node(c, Some(0), 3), // 2
            node(d, Some(2), 4), // 3
        ];

        // A -> C -> D, start excluded
        assert_eq!(shortest_path(&positions, &nodes, 3), vec!["C".to_string(), "D".to_string()]);
        assert_eq!(shortest_path(&positions, &nodes, 1), vec!["B".to_string()]);
    }

    #[test]
    fn test_root_yields_empty_path() {
        let mut positions: FxIndexMap<&str, u32> = FxIndexMap::default();
        let a = positions.insert_full("A", 0).0;
        let nodes = vec![node(a, None, 0)];

        assert!(shortest_path(&positions, &nodes, 0).is_empty());
    }

    #[test]
    fn test_superseded_nodes_share_position() {
        // B was reached twice, the tree keeps both nodes pointing at one interned position
        let mut positions: FxIndexMap<&str, u32> = FxIndexMap::default();
        let a = positions.insert_full("A", 0).0;
        let b = positions.insert_full("B", 5).0;
        let c = positions.insert_full("C", 1).0;
        positions.insert("B", 2);

        let nodes = vec![
            node(a, None, 0),
            node(b, Some(0), 5),
            node(c, Some(0), 1),
            node(b, Some(2), 2),
        ];

        assert_eq!(shortest_path(&positions, &nodes, 3), vec!["C", "B"]);
        assert_eq!(shortest_path(&positions, &nodes, 1), vec!["B"]);
    }
}

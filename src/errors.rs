use thiserror::Error;


#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathPlannerError {
    /// Search space exhausted without reaching a goal
    #[error("no path found")]
    NoPathFound,

    /// Graph reported an edge cost below zero
    #[error("negative edge cost {cost} from {from} to {to}")]
    NegativeEdgeCost {
        from: String,
        to: String,
        cost: String,
    },

    /// Adding an edge cost or heuristic overflowed the cost type
    #[error("accumulated path cost overflowed")]
    CostOverflow,

    /// Configured expansion bound was hit before reaching a goal
    #[error("expansion limit of {0} nodes reached")]
    ExpansionLimit(usize),
}

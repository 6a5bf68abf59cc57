//! Error types produced while validating members or loading levels.

use thiserror::Error;

use crate::design::PointId;

/// Reason the validation engine rejected a proposed member.
///
/// Rejections are silent from the design's point of view: the mutation
/// simply does not happen, and no partial state is left behind. The variants
/// exist so callers can surface an "invalid" indicator if they wish.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum MemberRejection {
    /// An endpoint did not resolve to an anchor or a live joint.
    #[error("endpoint {0:?} does not resolve to an anchor or joint")]
    UnknownEndpoint(PointId),
    /// Both endpoints were the same point.
    #[error("a member cannot connect a point to itself")]
    SelfLoop,
    /// A member already connects the unordered pair.
    #[error("a member already connects these two points")]
    Duplicate,
    /// The span between the endpoints exceeds the maximum.
    #[error("span {span:.1} exceeds the maximum of {max_span:.1}")]
    SpanExceeded {
        /// Euclidean distance between the endpoints.
        span: f64,
        /// Maximum allowed span.
        max_span: f64,
    },
    /// Adding the member would push the design over the level budget.
    #[error("cost {cost} on top of {spent} would exceed the budget of {budget}")]
    OverBudget {
        /// Quoted cost of the rejected member.
        cost: u32,
        /// Total cost of the design before the attempt.
        spent: u32,
        /// Level budget.
        budget: u32,
    },
}

/// Error returned when a level definition cannot be loaded.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The level file could not be read.
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
    /// The level JSON was malformed.
    #[error("failed to parse level: {0}")]
    Parse(#[from] serde_json::Error),
}

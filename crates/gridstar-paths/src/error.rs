use std::fmt;

use gridstar_core::Point;

/// Why a search produced no path.
///
/// All variants are final: searching again with the same grid and
/// endpoints gives the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The start is out of bounds or blocked.
    InvalidStart(Point),
    /// The goal is out of bounds or blocked.
    InvalidGoal(Point),
    /// Every cell reachable from the start was explored without meeting
    /// the goal.
    NoPathFound { start: Point, goal: Point },
    /// The caller's stop check returned `true`.
    Cancelled { expanded: usize },
    /// [`SearchConfig::max_expansions`](crate::SearchConfig::max_expansions)
    /// was reached.
    ExpansionLimit { limit: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStart(p) => write!(f, "start point {p} is out of bounds or blocked"),
            Self::InvalidGoal(p) => write!(f, "goal point {p} is out of bounds or blocked"),
            Self::NoPathFound { start, goal } => write!(f, "no path from {start} to {goal}"),
            Self::Cancelled { expanded } => {
                write!(f, "search cancelled after expanding {expanded} nodes")
            }
            Self::ExpansionLimit { limit } => {
                write!(f, "search gave up after expanding {limit} nodes")
            }
        }
    }
}

impl std::error::Error for PathError {}

use std::fmt;

use gridstar_core::Point;

use crate::node::{NodeArena, NodeId};

/// One cell of a [`Path`] with the costs it was settled at.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    /// Cost from the start.
    pub g: f64,
    /// Heuristic estimate to the goal.
    pub h: f64,
}

impl PathNode {
    /// Priority the node had when it was settled, `g + h`.
    #[inline]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// A start-to-goal route, both endpoints included. Never empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<PathNode>", try_from = "Vec<PathNode>")
)]
pub struct Path {
    nodes: Vec<PathNode>,
}

impl Path {
    /// Follow parent links from `goal` back to the root and reverse them.
    pub(crate) fn reconstruct(arena: &NodeArena, goal: NodeId) -> Self {
        let mut nodes: Vec<PathNode> = arena
            .ancestors(goal)
            .map(|n| PathNode {
                pos: n.position(),
                g: n.g(),
                h: n.h(),
            })
            .collect();
        nodes.reverse();
        Self { nodes }
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; kept for API symmetry with [`Path::len`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of moves, i.e. `len() - 1`.
    #[inline]
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Total cost, the goal's `g`.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.nodes.last().map_or(0.0, |n| n.g)
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.nodes[0].pos
    }

    /// Last cell.
    #[inline]
    pub fn goal(&self) -> Point {
        self.nodes[self.nodes.len() - 1].pos
    }

    /// The cells of the path in order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.nodes.iter().map(|n| n.pos)
    }

    /// Whether the path passes through `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.nodes.iter().any(|n| n.pos == p)
    }

    #[inline]
    pub fn as_slice(&self) -> &[PathNode] {
        &self.nodes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, PathNode> {
        self.nodes.iter()
    }

    /// Consume the path, keeping only positions.
    pub fn into_points(self) -> Vec<Point> {
        self.nodes.into_iter().map(|n| n.pos).collect()
    }
}

impl TryFrom<Vec<PathNode>> for Path {
    type Error = EmptyPathError;

    /// Wrap an existing node list, refusing an empty one.
    fn try_from(nodes: Vec<PathNode>) -> Result<Self, EmptyPathError> {
        if nodes.is_empty() {
            return Err(EmptyPathError);
        }
        Ok(Self { nodes })
    }
}

impl From<Path> for Vec<PathNode> {
    fn from(path: Path) -> Self {
        path.nodes
    }
}

/// A [`Path`] was built from an empty node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPathError;

impl fmt::Display for EmptyPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a path needs at least one node")
    }
}

impl std::error::Error for EmptyPathError {}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathNode;
    type IntoIter = std::slice::Iter<'a, PathNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl IntoIterator for Path {
    type Item = PathNode;
    type IntoIter = std::vec::IntoIter<PathNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", n.pos)?;
        }
        Ok(())
    }
}

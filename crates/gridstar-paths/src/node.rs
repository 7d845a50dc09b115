use std::ops::{Index, IndexMut};

use gridstar_core::Point;

/// Heap slot value of a node that is not in the open set.
pub(crate) const NOT_QUEUED: usize = usize::MAX;

/// Handle to a [`Node`] inside a [`NodeArena`].
///
/// Ids are handed out in allocation order, so comparing two ids tells which
/// node was discovered first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Search state of one grid cell during a single search.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) pos: Point,
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) f: f64,
    pub(crate) parent: Option<NodeId>,
    // Owned by the open set.
    pub(crate) queue_index: usize,
}

impl Node {
    /// This node's handle.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Grid cell of this node.
    #[inline]
    pub fn position(&self) -> Point {
        self.pos
    }

    /// Cost from the start.
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Heuristic estimate to the goal.
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Priority, `g + h`.
    #[inline]
    pub fn f(&self) -> f64 {
        self.f
    }

    /// Node this one was reached from; `None` for the start node.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Current slot in the open set's heap, if queued.
    #[inline]
    pub fn queue_index(&self) -> Option<usize> {
        (self.queue_index != NOT_QUEUED).then_some(self.queue_index)
    }

    #[inline]
    pub(crate) fn set_costs(&mut self, g: f64, h: f64) {
        self.g = g;
        self.h = h;
        self.f = g + h;
    }
}

/// Growable store of the nodes created during one search.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node that is not yet queued.
    pub fn alloc(&mut self, pos: Point, g: f64, h: f64, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            pos,
            g,
            h,
            f: g + h,
            parent,
            queue_index: NOT_QUEUED,
        });
        id
    }

    /// Point `id` at a new parent.
    #[inline]
    pub fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.nodes[id.0].parent = Some(parent);
    }

    /// Look up a node.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes allocated so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent links from `id` up to the root, starting with `id`.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

/// Iterator over a node and its ancestors, see [`NodeArena::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let arena = self.arena;
        let node = &arena[self.next?];
        self.next = node.parent;
        Some(node)
    }
}

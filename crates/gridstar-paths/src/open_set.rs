use std::cmp::Ordering;
use std::collections::HashMap;

use gridstar_core::Point;

use crate::node::{NOT_QUEUED, Node, NodeArena, NodeId};

/// Priority order of the open set.
pub trait NodeOrder {
    /// Whether `a` must be popped before `b`.
    fn precedes(&self, a: &Node, b: &Node) -> bool;
}

/// Lowest `f` first, then the earliest discovered node (FIFO).
#[derive(Debug, Clone, Copy, Default)]
pub struct FCostOrder;

impl NodeOrder for FCostOrder {
    #[inline]
    fn precedes(&self, a: &Node, b: &Node) -> bool {
        a.f.total_cmp(&b.f).then(a.id.cmp(&b.id)) == Ordering::Less
    }
}

/// Lowest `f` first, then lowest `h` (closest to the goal), then FIFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerHOrder;

impl NodeOrder for LowerHOrder {
    #[inline]
    fn precedes(&self, a: &Node, b: &Node) -> bool {
        a.f.total_cmp(&b.f)
            .then(a.h.total_cmp(&b.h))
            .then(a.id.cmp(&b.id))
            == Ordering::Less
    }
}

/// The A* frontier: a binary min-heap of [`NodeId`]s.
///
/// Each queued node records its heap slot in [`Node::queue_index`], which
/// makes [`OpenSet::decrease_key`] O(log n). A position index gives O(1)
/// [`OpenSet::find_by_position`]. Node data lives in the [`NodeArena`]
/// passed to every mutating call; always pass the same arena.
#[derive(Debug, Clone)]
pub struct OpenSet<O = FCostOrder> {
    heap: Vec<NodeId>,
    by_pos: HashMap<Point, NodeId>,
    order: O,
}

impl Default for OpenSet<FCostOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenSet<FCostOrder> {
    /// Create an empty open set ordered by [`FCostOrder`].
    pub fn new() -> Self {
        Self::with_order(FCostOrder)
    }
}

impl<O: NodeOrder> OpenSet<O> {
    /// Create an empty open set with a custom order.
    pub fn with_order(order: O) -> Self {
        Self {
            heap: Vec::new(),
            by_pos: HashMap::new(),
            order,
        }
    }

    /// Number of queued nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Queue node `id`. It must not already be queued, and no other queued
    /// node may share its position.
    pub fn push(&mut self, nodes: &mut NodeArena, id: NodeId) {
        debug_assert_eq!(nodes[id].queue_index, NOT_QUEUED, "node already queued");
        let slot = self.heap.len();
        self.heap.push(id);
        nodes[id].queue_index = slot;
        let prev = self.by_pos.insert(nodes[id].pos, id);
        debug_assert!(prev.is_none(), "position already in open set");
        self.sift_up(nodes, slot);
    }

    /// Remove and return the node that comes first in the order.
    pub fn pop_min(&mut self, nodes: &mut NodeArena) -> Option<NodeId> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(nodes, 0, last);
        let id = self.heap.pop()?;
        nodes[id].queue_index = NOT_QUEUED;
        self.by_pos.remove(&nodes[id].pos);
        if !self.heap.is_empty() {
            self.sift_down(nodes, 0);
        }
        Some(id)
    }

    /// Rewrite the costs of queued node `id` and restore heap order from its
    /// slot. Returns `false`, changing nothing, if `id` is not queued.
    pub fn decrease_key(&mut self, nodes: &mut NodeArena, id: NodeId, g: f64, h: f64) -> bool {
        let slot = nodes[id].queue_index;
        if slot == NOT_QUEUED {
            return false;
        }
        nodes[id].set_costs(g, h);
        let slot = self.sift_up(nodes, slot);
        self.sift_down(nodes, slot);
        true
    }

    /// The queued node at `p`, if any.
    #[inline]
    pub fn find_by_position(&self, p: Point) -> Option<NodeId> {
        self.by_pos.get(&p).copied()
    }

    /// The node [`OpenSet::pop_min`] would return.
    #[inline]
    pub fn peek(&self) -> Option<NodeId> {
        self.heap.first().copied()
    }

    fn swap(&mut self, nodes: &mut NodeArena, a: usize, b: usize) {
        self.heap.swap(a, b);
        nodes[self.heap[a]].queue_index = a;
        nodes[self.heap[b]].queue_index = b;
    }

    fn before(&self, nodes: &NodeArena, a: usize, b: usize) -> bool {
        self.order.precedes(&nodes[self.heap[a]], &nodes[self.heap[b]])
    }

    /// Returns the slot the node ended up in.
    fn sift_up(&mut self, nodes: &mut NodeArena, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.before(nodes, slot, parent) {
                break;
            }
            self.swap(nodes, slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, nodes: &mut NodeArena, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut best = left;
            if right < len && self.before(nodes, right, left) {
                best = right;
            }
            if !self.before(nodes, best, slot) {
                break;
            }
            self.swap(nodes, slot, best);
            slot = best;
        }
    }

    /// Check slot bookkeeping, the position index and heap order.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self, nodes: &NodeArena) -> bool {
        let slots_ok = self.heap.iter().enumerate().all(|(i, &id)| {
            nodes[id].queue_index == i && self.by_pos.get(&nodes[id].pos) == Some(&id)
        });
        let order_ok = (1..self.heap.len()).all(|i| !self.before(nodes, i, (i - 1) / 2));
        slots_ok && order_ok && self.by_pos.len() == self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_with(costs: &[(i32, f64, f64)]) -> (NodeArena, Vec<NodeId>) {
        let mut nodes = NodeArena::new();
        let ids = costs
            .iter()
            .map(|&(x, g, h)| nodes.alloc(Point::new(x, 0), g, h, None))
            .collect();
        (nodes, ids)
    }

    fn drain<O: NodeOrder>(open: &mut OpenSet<O>, nodes: &mut NodeArena) -> Vec<NodeId> {
        let mut out = Vec::new();
        while let Some(id) = open.pop_min(nodes) {
            assert!(open.is_consistent(nodes));
            out.push(id);
        }
        out
    }

    #[test]
    fn pops_in_f_order() {
        let (mut nodes, ids) =
            arena_with(&[(0, 5.0, 0.0), (1, 1.0, 1.0), (2, 9.0, 0.0), (3, 0.0, 3.0)]);
        let mut open = OpenSet::new();
        for &id in &ids {
            open.push(&mut nodes, id);
            assert!(open.is_consistent(&nodes));
        }
        assert_eq!(open.len(), 4);
        assert_eq!(open.peek(), Some(ids[1]));
        assert_eq!(drain(&mut open, &mut nodes), vec![ids[1], ids[3], ids[0], ids[2]]);
        assert!(open.is_empty());
        assert!(ids.iter().all(|&id| nodes[id].queue_index().is_none()));
    }

    #[test]
    fn ties_pop_in_discovery_order() {
        let (mut nodes, ids) =
            arena_with(&[(0, 2.0, 2.0), (1, 3.0, 1.0), (2, 4.0, 0.0), (3, 1.0, 3.0)]);
        let mut open = OpenSet::new();
        // Push in reverse to make sure order comes from ids, not push order.
        for &id in ids.iter().rev() {
            open.push(&mut nodes, id);
        }
        assert_eq!(drain(&mut open, &mut nodes), ids);
    }

    #[test]
    fn lower_h_breaks_ties() {
        let (mut nodes, ids) = arena_with(&[(0, 2.0, 2.0), (1, 3.0, 1.0), (2, 4.0, 0.0)]);
        let mut open = OpenSet::with_order(LowerHOrder);
        for &id in &ids {
            open.push(&mut nodes, id);
        }
        assert_eq!(drain(&mut open, &mut nodes), vec![ids[2], ids[1], ids[0]]);
    }

    #[test]
    fn find_by_position_tracks_contents() {
        let (mut nodes, ids) = arena_with(&[(0, 1.0, 0.0), (1, 2.0, 0.0)]);
        let mut open = OpenSet::new();
        assert_eq!(open.find_by_position(Point::new(0, 0)), None);
        open.push(&mut nodes, ids[0]);
        open.push(&mut nodes, ids[1]);
        assert_eq!(open.find_by_position(Point::new(1, 0)), Some(ids[1]));
        assert_eq!(open.pop_min(&mut nodes), Some(ids[0]));
        assert_eq!(open.find_by_position(Point::new(0, 0)), None);
        assert_eq!(open.find_by_position(Point::new(1, 0)), Some(ids[1]));
    }

    #[test]
    fn decrease_key_moves_node_to_front() {
        let costs: Vec<_> = (0..16).map(|x| (x, f64::from(x) + 1.0, 1.0)).collect();
        let (mut nodes, ids) = arena_with(&costs);
        let mut open = OpenSet::new();
        for &id in &ids {
            open.push(&mut nodes, id);
        }
        let last = ids[15];
        assert!(open.decrease_key(&mut nodes, last, 0.0, 0.5));
        assert!(open.is_consistent(&nodes));
        assert_eq!(nodes[last].f(), 0.5);
        assert_eq!(open.peek(), Some(last));
        assert_eq!(open.pop_min(&mut nodes), Some(last));
        assert!(open.is_consistent(&nodes));
    }

    #[test]
    fn decrease_key_on_unqueued_node_is_refused() {
        let (mut nodes, ids) = arena_with(&[(0, 1.0, 1.0)]);
        let mut open = OpenSet::new();
        assert!(!open.decrease_key(&mut nodes, ids[0], 0.0, 0.0));
        assert_eq!(nodes[ids[0]].f(), 2.0);
    }

    #[test]
    fn interleaved_operations_keep_invariants() {
        let mut nodes = NodeArena::new();
        let mut open = OpenSet::new();
        let mut ids = Vec::new();
        let mut popped = Vec::new();
        for x in 0..40 {
            let g = f64::from((x * 7) % 13);
            let id = nodes.alloc(Point::new(x, 0), g, 1.0, None);
            ids.push(id);
            open.push(&mut nodes, id);
            if x % 3 == 0 {
                let target = ids[ids.len() / 2];
                if nodes[target].queue_index().is_some() {
                    let g = nodes[target].g() / 2.0;
                    open.decrease_key(&mut nodes, target, g, 1.0);
                }
            }
            if x % 5 == 4 {
                popped.extend(open.pop_min(&mut nodes));
            }
            assert!(open.is_consistent(&nodes));
        }
        let mut last = f64::NEG_INFINITY;
        for id in drain(&mut open, &mut nodes) {
            assert!(nodes[id].f() >= last);
            last = nodes[id].f();
        }
        assert_eq!(popped.len(), 8);
    }
}

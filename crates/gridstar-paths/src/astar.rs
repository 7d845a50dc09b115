use gridstar_core::Point;

use crate::closed_set::ClosedSet;
use crate::config::{SearchConfig, SearchStats};
use crate::distance::heuristic;
use crate::error::PathError;
use crate::node::NodeArena;
use crate::open_set::{FCostOrder, NodeOrder, OpenSet};
use crate::path::Path;
use crate::traits::Pather;

/// Cost of one axis-aligned move.
pub const STEP_COST: f64 = 1.0;

/// Find a shortest path from `start` to `goal` with a default [`AStar`].
pub fn search<P: Pather + ?Sized>(
    pather: &P,
    start: Point,
    goal: Point,
) -> Result<Path, PathError> {
    AStar::new(SearchConfig::default()).search(pather, start, goal)
}

/// A* search engine.
///
/// Every call builds its own node arena, open set and closed set; nothing
/// but the neighbor scratch buffer and the [`SearchStats`] of the last run
/// survives between calls. `O` decides which of several equal-cost frontier
/// nodes is expanded first.
#[derive(Debug, Clone)]
pub struct AStar<O = FCostOrder> {
    config: SearchConfig,
    stats: SearchStats,
    order: O,
    nbuf: Vec<Point>,
}

impl Default for AStar<FCostOrder> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl AStar<FCostOrder> {
    /// Create an engine with the given configuration, breaking ties FIFO.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_order(config, FCostOrder)
    }
}

impl<O: NodeOrder + Clone> AStar<O> {
    /// Create an engine with a custom open-set order.
    pub fn with_order(config: SearchConfig, order: O) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
            order,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The configuration this engine was built with.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the most recent search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Compute a shortest path from `start` to `goal`.
    ///
    /// Returns the full path (both endpoints included). If `start == goal`
    /// the path has a single node.
    pub fn search<P: Pather + ?Sized>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<Path, PathError> {
        self.search_until(pather, start, goal, || false)
    }

    /// Like [`AStar::search`], but calls `should_stop` once per iteration
    /// and returns [`PathError::Cancelled`] as soon as it yields `true`.
    pub fn search_until<P, F>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
        mut should_stop: F,
    ) -> Result<Path, PathError>
    where
        P: Pather + ?Sized,
        F: FnMut() -> bool,
    {
        self.stats = SearchStats::default();
        log::trace!("astar: searching {start} -> {goal}");

        if !pather.is_valid(start) {
            log::debug!("astar: invalid start {start}");
            return Err(PathError::InvalidStart(start));
        }
        if !pather.is_valid(goal) {
            log::debug!("astar: invalid goal {goal}");
            return Err(PathError::InvalidGoal(goal));
        }

        let mut nodes = NodeArena::new();
        let mut open = OpenSet::with_order(self.order.clone());
        let mut closed = ClosedSet::new();

        let root = nodes.alloc(start, 0.0, heuristic(start, goal), None);
        open.push(&mut nodes, root);
        self.stats.pushed = 1;
        self.stats.max_open = 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = 'search: loop {
            if should_stop() {
                break 'search Err(PathError::Cancelled {
                    expanded: self.stats.expanded,
                });
            }

            let Some(current) = open.pop_min(&mut nodes) else {
                break 'search Err(PathError::NoPathFound { start, goal });
            };
            let current_pos = nodes[current].position();
            let current_g = nodes[current].g();

            if current_pos == goal {
                break 'search Ok(Path::reconstruct(&nodes, current));
            }

            if let Some(limit) = self.config.max_expansions {
                if self.stats.expanded >= limit {
                    break 'search Err(PathError::ExpansionLimit { limit });
                }
            }

            closed.add(current_pos);
            self.stats.expanded += 1;

            nbuf.clear();
            pather.neighbors(current_pos, &mut nbuf);

            for &np in nbuf.iter() {
                if closed.contains(np) {
                    continue;
                }
                let tentative_g = current_g + STEP_COST;

                match open.find_by_position(np) {
                    None => {
                        let id = nodes.alloc(np, tentative_g, heuristic(np, goal), Some(current));
                        open.push(&mut nodes, id);
                        self.stats.pushed += 1;
                    }
                    Some(id) if tentative_g < nodes[id].g() => {
                        let h = nodes[id].h();
                        open.decrease_key(&mut nodes, id, tentative_g, h);
                        nodes.set_parent(id, current);
                        self.stats.relaxed += 1;
                    }
                    // The frontier already holds a path at least as cheap.
                    Some(_) => {}
                }
            }

            self.stats.max_open = self.stats.max_open.max(open.len());
        };

        self.nbuf = nbuf;

        match &outcome {
            Ok(path) => log::debug!(
                "astar: found {} -> {} in {} steps, {} nodes expanded",
                start,
                goal,
                path.steps(),
                self.stats.expanded
            ),
            Err(e) => log::debug!("astar: {e} ({} nodes expanded)", self.stats.expanded),
        }
        outcome
    }
}

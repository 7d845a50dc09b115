/// Tunables for [`AStar`](crate::AStar).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Give up with [`PathError::ExpansionLimit`](crate::PathError::ExpansionLimit)
    /// after expanding this many nodes. `None` means no limit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Limit the number of expanded nodes.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

/// Counters describing the last search run by an [`AStar`](crate::AStar).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded (closed).
    pub expanded: usize,
    /// Nodes pushed onto the open set, the start included.
    pub pushed: usize,
    /// Open nodes whose cost was lowered through a cheaper parent.
    pub relaxed: usize,
    /// Largest open set size seen.
    pub max_open: usize,
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::default().with_max_expansions(500);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
    }
}

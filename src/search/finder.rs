use super::enumerate::{SearchGuard, enumerate_with};
use super::{MaxDepth, Path};
use crate::error::SearchError;
use crate::graph::Graph;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// A shareable flag that asks an in-flight search to stop.
///
/// Clones observe the same flag, so one clone can be handed to the thread
/// running the search and another kept by whoever may cancel it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Path search with optional latency bounds on top of the hop limit.
///
/// ```rust
/// use roadmap::prelude::*;
///
/// let graph = roadmap::graph::build(
///     vec![
///         BlockRecord::new("a", "A", "Status", 1.0, 0.0),
///         BlockRecord::new("b", "B", "Status", 1.0, 0.0),
///     ],
///     vec![ConnectionRecord::new("a", "b")],
/// );
///
/// let paths = PathFinder::new(&graph)
///     .max_depth(MaxDepth::Hops(3))
///     .node_budget(10_000)
///     .find("a", "b")
///     .unwrap();
/// assert_eq!(paths, vec![Path::from(vec!["a", "b"])]);
/// ```
#[derive(Debug, Clone)]
pub struct PathFinder<'g> {
    graph: &'g Graph,
    max_depth: MaxDepth,
    node_budget: Option<usize>,
    cancel: Option<CancelToken>,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            max_depth: MaxDepth::Unbounded,
            node_budget: None,
            cancel: None,
        }
    }

    pub fn max_depth(mut self, max_depth: MaxDepth) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Caps the number of node expansions a single search may perform.
    pub fn node_budget(mut self, budget: usize) -> Self {
        self.node_budget = Some(budget);
        self
    }

    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Enumerates all simple paths from `start` to `end`.
    ///
    /// # Returns
    ///
    /// * `Ok(paths)`: every path within the hop limit. An empty vector means no route exists,
    ///   including when either endpoint is not in the graph.
    /// * `Err(SearchError)`: the node budget ran out or the token was cancelled first.
    pub fn find(&self, start: &str, end: &str) -> Result<Vec<Path>, SearchError> {
        let mut guard = Limits {
            budget: self.node_budget,
            cancel: self.cancel.as_ref(),
        };
        match enumerate_with(self.graph, start, end, self.max_depth, &mut guard) {
            Ok(enumeration) => {
                debug!(
                    start,
                    end,
                    expanded = enumeration.expanded,
                    budget = ?self.node_budget,
                    "guarded search finished"
                );
                Ok(enumeration.paths)
            }
            Err(e) => {
                debug!(start, end, error = %e, "path search aborted");
                Err(e)
            }
        }
    }
}

struct Limits<'a> {
    budget: Option<usize>,
    cancel: Option<&'a CancelToken>,
}

impl SearchGuard for Limits<'_> {
    type Error = SearchError;

    fn on_expand(&mut self, expanded: usize, found: usize) -> Result<(), SearchError> {
        if self.cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(SearchError::Cancelled { expanded, found });
        }
        if self.budget.is_some_and(|budget| expanded > budget) {
            return Err(SearchError::BudgetExhausted { expanded, found });
        }
        Ok(())
    }
}

//! Caller-facing entry points: validate a request, run the requested
//! variants, and report per-variant traces and paths.

use std::collections::{BTreeMap, BTreeSet};

use gridpath_core::{Cell, Grid, GridError};

use crate::error::SearchError;
use crate::explore::Exploration;
use crate::reconstruct::reconstruct;
use crate::variant::Variant;
use crate::{astar, dijkstra};

/// Build an open `size`×`size` grid. Fails if `size < 1`.
pub fn build_grid(size: i32) -> Result<Grid, GridError> {
    Grid::new(size)
}

/// What one variant produced: the settle order and the route found.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells in the order they were settled, for animation.
    pub trace: Vec<Cell>,
    /// Route from start to target inclusive, empty if unreachable.
    pub path: Vec<Cell>,
}

impl SearchResult {
    /// Whether a route was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of cells settled.
    #[inline]
    pub fn settled(&self) -> usize {
        self.trace.len()
    }

    /// Number of steps along the route, or `None` if there is none.
    pub fn path_cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// Overall classification of a multi-variant run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Every requested variant found a route.
    Success,
    /// Some variants found a route and some did not.
    Partial,
    /// No variant found a route.
    Failure,
}

impl Outcome {
    fn classify<'a>(results: impl IntoIterator<Item = &'a SearchResult>) -> Self {
        let (mut found, mut missed) = (0usize, 0usize);
        for r in results {
            if r.found() {
                found += 1;
            } else {
                missed += 1;
            }
        }
        match (found, missed) {
            (0, _) => Self::Failure,
            (_, 0) => Self::Success,
            _ => Self::Partial,
        }
    }
}

/// Per-variant results of [`run_all`] plus their overall outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    pub results: BTreeMap<Variant, SearchResult>,
    pub outcome: Outcome,
}

impl RunReport {
    /// The result for `variant`, if it was requested.
    pub fn get(&self, variant: Variant) -> Option<&SearchResult> {
        self.results.get(&variant)
    }
}

/// Run one variant from `start` to `target` on `grid`.
///
/// Fails without searching if either endpoint is out of bounds or
/// obstructed. An unreachable target is a normal result with an empty path.
pub fn run_search(
    grid: &Grid,
    start: Cell,
    target: Cell,
    variant: Variant,
) -> Result<SearchResult, SearchError> {
    validate(grid, start, target)?;
    Ok(search(grid, start, target, variant))
}

/// Run every variant in `variants` independently on the same inputs.
///
/// Duplicates are ignored. Each variant gets its own state, so the result for
/// a variant is identical to what [`run_search`] returns for it alone.
pub fn run_all(
    grid: &Grid,
    start: Cell,
    target: Cell,
    variants: impl IntoIterator<Item = Variant>,
) -> Result<RunReport, SearchError> {
    let variants: BTreeSet<Variant> = variants.into_iter().collect();
    if variants.is_empty() {
        log::debug!("run rejected: no algorithm selected");
        return Err(SearchError::NoAlgorithmSelected);
    }
    validate(grid, start, target)?;

    #[cfg(feature = "parallel")]
    let results: BTreeMap<Variant, SearchResult> = {
        use rayon::prelude::*;
        variants
            .par_iter()
            .map(|&v| (v, search(grid, start, target, v)))
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results: BTreeMap<Variant, SearchResult> = variants
        .iter()
        .map(|&v| (v, search(grid, start, target, v)))
        .collect();

    let outcome = Outcome::classify(results.values());
    log::debug!("run {start} -> {target}: {outcome:?} over {} variant(s)", results.len());
    Ok(RunReport { results, outcome })
}

/// Check run preconditions: both endpoints in bounds (start first), then
/// both endpoints open.
fn validate(grid: &Grid, start: Cell, target: Cell) -> Result<(), SearchError> {
    for cell in [start, target] {
        if !grid.contains(cell) {
            log::debug!("run rejected: {cell} out of bounds");
            return Err(SearchError::InvalidBounds {
                cell,
                size: grid.size(),
            });
        }
    }
    for cell in [start, target] {
        if grid.is_obstructed(cell) {
            log::debug!("run rejected: {cell} obstructed");
            return Err(SearchError::BlockedEndpoint { cell });
        }
    }
    Ok(())
}

fn search(grid: &Grid, start: Cell, target: Cell, variant: Variant) -> SearchResult {
    log::trace!("{variant}: searching {start} -> {target} on {0}x{0} grid", grid.size());
    let Exploration {
        trace,
        predecessors,
    } = match variant {
        Variant::Dijkstra => dijkstra(grid, start, target),
        Variant::AStar => astar(grid, start, target),
    };
    let path = reconstruct(&predecessors, start, target);
    log::debug!(
        "{variant}: settled {} cells, path {} cells",
        trace.len(),
        path.len()
    );
    SearchResult { trace, path }
}

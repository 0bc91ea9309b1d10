//! Shortest-path search on square grids with replayable visitation traces.
//!
//! Two search variants share one frontier-expansion routine:
//!
//! - **Dijkstra**: uninformed, priority is accumulated cost ([`dijkstra`])
//! - **A\***: priority adds the Manhattan distance to the target ([`astar`])
//!
//! Each run returns the order in which cells were settled (for animation) and
//! a predecessor map that [`reconstruct`] turns into a route. The orchestration
//! layer ([`run_search`], [`run_all`]) validates endpoints and bundles traces
//! with paths.
//!
//! # Determinism
//!
//! Neighbors are enumerated up, down, left, right. The frontier pops the
//! lowest priority first and breaks ties in insertion order. Identical inputs
//! therefore always produce identical traces.
//!
//! # Features
//!
//! | Feature | Effect |
//! |---|---|
//! | `serde` | `Serialize`/`Deserialize` for results and reports |
//! | `parallel` | [`run_all`] evaluates variants on the rayon pool |

mod astar;
mod dijkstra;
mod distance;
mod error;
mod explore;
mod frontier;
mod reconstruct;
mod run;
mod traits;
mod variant;

pub use astar::astar;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use error::SearchError;
pub use explore::{Exploration, Predecessors, UNREACHABLE};
pub use gridpath_core::{Cell, Grid, GridError};
pub use reconstruct::reconstruct;
pub use run::{Outcome, RunReport, SearchResult, build_grid, run_all, run_search};
pub use traits::Pather;
pub use variant::{UnknownVariant, Variant};

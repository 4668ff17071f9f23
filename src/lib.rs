//! # grid_stepsearch
//!
//! Incremental [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! shortest-path search on a uniform-cost 2D grid, built for visualizers.
//! The search advances by exactly one frontier extraction per
//! [SearchEngine::step] call and reports what it did through a
//! [StepEvent], so a driver can animate exploration at its own cadence
//! instead of receiving a finished path. Movement is four-directional and
//! every move costs one, so exploration proceeds in breadth-first order
//! and reached distances equal hop counts from the start.
//!
//! The engine performs no I/O and has no notion of time; rendering,
//! click handling (see [Selection]) and step scheduling belong to the
//! driving shell.

pub mod engine;
pub mod error;
pub mod frontier;
pub mod search_grid;
pub mod selection;

pub use engine::{SearchEngine, SearchState, StepEvent, DEFAULT_GRID_SIZE};
pub use error::SearchError;
pub use frontier::{Frontier, FrontierEntry};
pub use search_grid::{Cell, CellRole, SearchGrid, UNREACHABLE};
pub use selection::{Selection, SelectionChange};

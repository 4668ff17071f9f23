use grid_util::grid::Grid;
use grid_util::point::Point;
use log::{info, warn};

use crate::error::{Result, SearchError};
use crate::frontier::{Frontier, FrontierEntry};
use crate::search_grid::{CellRole, SearchGrid, UNREACHABLE};

/// Phase of the single active search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Idle,
    Running,
    Completed,
}

/// What one [SearchEngine::step] call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// A cell was extracted and its neighborhood relaxed. `relaxed` lists
    /// the cells whose tentative distance improved, in the fixed
    /// up/down/left/right order. The end cell never appears here even
    /// though its distance is updated like any other cell's: its rendering
    /// role is reserved and exploration must not recolor it.
    Expanded { cell: Point, relaxed: Vec<Point> },
    /// The extracted entry was stale: a shorter distance was committed for
    /// its cell after the entry was queued. Nothing was relaxed this call.
    StaleSkip,
    /// The end cell was extracted. The search is complete and a shortest
    /// path exists.
    PathFound,
    /// The frontier drained without reaching the end cell. The search is
    /// complete and no path exists.
    Exhausted,
}

/// Owns the grid, the frontier and the search state machine, advancing the
/// search by exactly one unit of work per [step](Self::step) call so a
/// driver can animate exploration at its own cadence.
///
/// All work happens synchronously inside `step`; the engine has no notion
/// of time and performs no I/O. Aborting is cooperative: call
/// [reset](Self::reset) between steps.
#[derive(Clone, Debug)]
pub struct SearchEngine {
    pub grid: SearchGrid,
    frontier: Frontier,
    state: SearchState,
    start: Option<usize>,
    end: Option<usize>,
}

/// Default side length of the visualizer grid.
pub const DEFAULT_GRID_SIZE: usize = 25;

impl Default for SearchEngine {
    fn default() -> SearchEngine {
        SearchEngine::new(DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE)
    }
}

impl SearchEngine {
    /// Creates an idle engine over a fresh `width` x `height` grid.
    pub fn new(width: usize, height: usize) -> SearchEngine {
        SearchEngine {
            grid: SearchGrid::new(width, height, CellRole::Empty),
            frontier: Frontier::new(),
            state: SearchState::Idle,
            start: None,
            end: None,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Tentative distance committed for the cell at `p`, or [UNREACHABLE]
    /// when the search has not reached it or `p` lies outside the grid.
    pub fn distance(&self, p: Point) -> i32 {
        match self.grid.index_of(p) {
            Some(index) => self.grid.cell(index).distance,
            None => UNREACHABLE,
        }
    }

    /// Begins a search from `start` to `end`: commits distance 0 to the
    /// start cell, seeds the frontier with it and transitions to
    /// [SearchState::Running].
    ///
    /// Fails with [SearchError::InvalidState] unless the engine is idle,
    /// and with [SearchError::InvalidSelection] when either point lies
    /// outside the grid or both name the same cell.
    pub fn start(&mut self, start: Point, end: Point) -> Result<()> {
        if self.state != SearchState::Idle {
            return Err(SearchError::InvalidState(self.state));
        }
        let (Some(start_ix), Some(end_ix)) =
            (self.grid.index_of(start), self.grid.index_of(end))
        else {
            return Err(SearchError::InvalidSelection);
        };
        if start_ix == end_ix {
            return Err(SearchError::InvalidSelection);
        }
        info!("starting search from {} to {}", start, end);
        self.grid.cell_mut(start_ix).distance = 0;
        self.frontier.push(0, start_ix);
        self.start = Some(start_ix);
        self.end = Some(end_ix);
        self.state = SearchState::Running;
        Ok(())
    }

    /// Advances the search by one unit of work: one frontier extraction
    /// and at most four relaxations, all fully applied before the call
    /// returns.
    ///
    /// Completion is reported through [StepEvent::PathFound] and
    /// [StepEvent::Exhausted]; once either has been returned, further
    /// calls fail with [SearchError::InvalidState] until
    /// [reset](Self::reset). A [StepEvent::StaleSkip] call does no
    /// relaxation work and leaves the engine running.
    pub fn step(&mut self) -> Result<StepEvent> {
        if self.state != SearchState::Running {
            return Err(SearchError::InvalidState(self.state));
        }
        let end_ix = self.end.expect("running search always has an end cell");
        let Some(FrontierEntry { distance, index }) = self.frontier.pop() else {
            info!("frontier exhausted before reaching the end cell");
            self.state = SearchState::Completed;
            return Ok(StepEvent::Exhausted);
        };
        if index == end_ix {
            info!("path found at distance {}", self.grid.cell(index).distance);
            self.state = SearchState::Completed;
            return Ok(StepEvent::PathFound);
        }
        // A cell is re-queued whenever its tentative distance improves, so
        // the heap can hold entries whose distance has since been beaten.
        // Those are skipped here instead of being deleted eagerly.
        if distance > self.grid.cell(index).distance {
            return Ok(StepEvent::StaleSkip);
        }
        let mut relaxed = Vec::new();
        let candidate = distance + 1;
        for neighbor_ix in self.grid.neighbors(index) {
            if candidate < self.grid.cell(neighbor_ix).distance {
                let neighbor = self.grid.cell_mut(neighbor_ix);
                neighbor.distance = candidate;
                neighbor.predecessor = Some(index);
                self.frontier.push(candidate, neighbor_ix);
                if neighbor_ix != end_ix {
                    relaxed.push(self.grid.point_of(neighbor_ix));
                }
            }
        }
        Ok(StepEvent::Expanded {
            cell: self.grid.point_of(index),
            relaxed,
        })
    }

    /// Reads the shortest path discovered by a completed search, ordered
    /// start to end. Pure read: distances and predecessors are untouched.
    ///
    /// Returns an empty path instead of failing when the end cell was
    /// never relaxed or its predecessor chain does not lead back to the
    /// start.
    pub fn reconstruct_path(&self) -> Vec<Point> {
        let (Some(start_ix), Some(end_ix)) = (self.start, self.end) else {
            return Vec::new();
        };
        if self.grid.cell(end_ix).distance == UNREACHABLE {
            return Vec::new();
        }
        let mut path: Vec<usize> = itertools::unfold(Some(end_ix), |cursor| {
            let index = (*cursor)?;
            *cursor = self.grid.cell(index).predecessor;
            Some(index)
        })
        .take(self.grid.len())
        .collect();
        path.reverse();
        if path.first() != Some(&start_ix) {
            warn!("predecessor chain from the end cell does not reach the start");
            return Vec::new();
        }
        path.into_iter().map(|ix| self.grid.point_of(ix)).collect()
    }

    /// Discards any search and restores the grid to its initial state:
    /// every cell unreached, unlinked and role-free, the frontier empty,
    /// the engine idle. Idempotent; this is also how a running search is
    /// aborted between steps.
    pub fn reset(&mut self) {
        self.grid.reset_cells();
        self.frontier.clear();
        self.start = None;
        self.end = None;
        self.state = SearchState::Idle;
    }
}

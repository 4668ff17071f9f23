use grid_util::grid::Grid;
use grid_util::point::Point;

use crate::search_grid::{CellRole, SearchGrid};

/// Outcome of a [Selection::toggle] call, for shells that redraw only what
/// changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    StartMarked,
    StartCleared,
    EndMarked,
    EndCleared,
    /// The click changed nothing: it landed outside the grid, or both
    /// roles are already assigned elsewhere.
    Ignored,
}

/// Tracks the start/end marking a user builds up by clicking cells,
/// keeping at most one start and at most one end on the grid.
///
/// Clicking the current start or end unmarks it. Clicking an empty cell
/// marks it as start when no start exists, otherwise as end when no end
/// exists and the cell is not the start itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct Selection {
    start: Option<Point>,
    end: Option<Point>,
}

impl Selection {
    pub fn new() -> Selection {
        Selection::default()
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Both endpoints, once the selection is complete.
    pub fn pair(&self) -> Option<(Point, Point)> {
        self.start.zip(self.end)
    }

    /// Applies one click at `p`, updating the grid's cell roles to match.
    pub fn toggle(&mut self, grid: &mut SearchGrid, p: Point) -> SelectionChange {
        if !grid.in_bounds(p) {
            return SelectionChange::Ignored;
        }
        match grid.get_point(p) {
            CellRole::Start => {
                grid.set_point(p, CellRole::Empty);
                self.start = None;
                SelectionChange::StartCleared
            }
            CellRole::End => {
                grid.set_point(p, CellRole::Empty);
                self.end = None;
                SelectionChange::EndCleared
            }
            CellRole::Empty => {
                if self.start.is_none() {
                    grid.set_point(p, CellRole::Start);
                    self.start = Some(p);
                    SelectionChange::StartMarked
                } else if self.end.is_none() && self.start != Some(p) {
                    grid.set_point(p, CellRole::End);
                    self.end = Some(p);
                    SelectionChange::EndMarked
                } else {
                    SelectionChange::Ignored
                }
            }
        }
    }

    /// Unmarks both endpoints on the grid and forgets them.
    pub fn clear(&mut self, grid: &mut SearchGrid) {
        if let Some(p) = self.start.take() {
            grid.set_point(p, CellRole::Empty);
        }
        if let Some(p) = self.end.take() {
            grid.set_point(p, CellRole::Empty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_start_then_end() {
        let mut grid = SearchGrid::new(3, 3, CellRole::Empty);
        let mut selection = Selection::new();
        let a = Point::new(0, 0);
        let b = Point::new(2, 1);
        assert_eq!(selection.toggle(&mut grid, a), SelectionChange::StartMarked);
        assert_eq!(selection.toggle(&mut grid, b), SelectionChange::EndMarked);
        assert_eq!(grid.get_point(a), CellRole::Start);
        assert_eq!(grid.get_point(b), CellRole::End);
        assert_eq!(selection.pair(), Some((a, b)));
    }

    #[test]
    fn third_cell_is_ignored_once_both_are_marked() {
        let mut grid = SearchGrid::new(3, 3, CellRole::Empty);
        let mut selection = Selection::new();
        selection.toggle(&mut grid, Point::new(0, 0));
        selection.toggle(&mut grid, Point::new(1, 1));
        let c = Point::new(2, 2);
        assert_eq!(selection.toggle(&mut grid, c), SelectionChange::Ignored);
        assert_eq!(grid.get_point(c), CellRole::Empty);
    }

    #[test]
    fn clicking_a_marked_cell_unmarks_it() {
        let mut grid = SearchGrid::new(3, 3, CellRole::Empty);
        let mut selection = Selection::new();
        let a = Point::new(1, 0);
        selection.toggle(&mut grid, a);
        assert_eq!(selection.toggle(&mut grid, a), SelectionChange::StartCleared);
        assert_eq!(grid.get_point(a), CellRole::Empty);
        assert_eq!(selection.start(), None);
        // The next click on an empty cell becomes the new start.
        let b = Point::new(2, 2);
        assert_eq!(selection.toggle(&mut grid, b), SelectionChange::StartMarked);
    }

    #[test]
    fn unmarking_the_end_allows_a_new_end() {
        let mut grid = SearchGrid::new(3, 3, CellRole::Empty);
        let mut selection = Selection::new();
        selection.toggle(&mut grid, Point::new(0, 0));
        let old_end = Point::new(1, 1);
        selection.toggle(&mut grid, old_end);
        assert_eq!(
            selection.toggle(&mut grid, old_end),
            SelectionChange::EndCleared
        );
        let new_end = Point::new(2, 0);
        assert_eq!(
            selection.toggle(&mut grid, new_end),
            SelectionChange::EndMarked
        );
        assert_eq!(selection.pair(), Some((Point::new(0, 0), new_end)));
    }

    #[test]
    fn clicks_outside_the_grid_are_ignored() {
        let mut grid = SearchGrid::new(3, 3, CellRole::Empty);
        let mut selection = Selection::new();
        assert_eq!(
            selection.toggle(&mut grid, Point::new(-1, 0)),
            SelectionChange::Ignored
        );
        assert_eq!(
            selection.toggle(&mut grid, Point::new(3, 3)),
            SelectionChange::Ignored
        );
        assert_eq!(selection.start(), None);
    }

    #[test]
    fn clear_unmarks_both_roles() {
        let mut grid = SearchGrid::new(3, 3, CellRole::Empty);
        let mut selection = Selection::new();
        let a = Point::new(0, 2);
        let b = Point::new(2, 0);
        selection.toggle(&mut grid, a);
        selection.toggle(&mut grid, b);
        selection.clear(&mut grid);
        assert_eq!(grid.get_point(a), CellRole::Empty);
        assert_eq!(grid.get_point(b), CellRole::Empty);
        assert_eq!(selection.pair(), None);
    }
}

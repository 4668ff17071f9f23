use core::fmt;
use grid_util::grid::Grid;
use grid_util::point::Point;

/// Sentinel distance for cells the search has not reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// How a cell takes part in the next search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellRole {
    #[default]
    Empty,
    Start,
    End,
}

/// Mutable per-cell search state plus the cell's fixed identity.
///
/// `distance` only ever decreases over the life of one search, and
/// `predecessor` is a plain index back-reference used solely for path
/// reconstruction.
#[derive(Clone, Debug)]
pub struct Cell {
    pub index: usize,
    pub role: CellRole,
    pub distance: i32,
    pub predecessor: Option<usize>,
}

impl Cell {
    fn new(index: usize, role: CellRole) -> Cell {
        Cell {
            index,
            role,
            distance: UNREACHABLE,
            predecessor: None,
        }
    }
}

/// [SearchGrid] owns the cells of a rectangular grid in row-major order and
/// answers four-directional neighbor queries. Implements [Grid] so cell
/// roles can be read and written with the usual coordinate accessors.
#[derive(Clone, Debug)]
pub struct SearchGrid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl SearchGrid {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Converts a point to the linear index of its cell, or [None] when the
    /// point lies outside the grid.
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some(self.get_ix_point(&p))
        } else {
            None
        }
    }

    pub fn point_of(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// The cells directly above, below, left and right of `index`, in that
    /// order, omitting any that would cross a row or column boundary. The
    /// left/right lookups check the row offset rather than plain index
    /// continuity, so rows never wrap into each other.
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        let w = self.width;
        let mut neighbors = Vec::with_capacity(4);
        if index >= w {
            neighbors.push(index - w);
        }
        if index + w < self.cells.len() {
            neighbors.push(index + w);
        }
        if index % w != 0 {
            neighbors.push(index - 1);
        }
        if (index + 1) % w != 0 {
            neighbors.push(index + 1);
        }
        neighbors
    }

    /// Restores every cell to its initial state: infinite distance, no
    /// predecessor, empty role.
    pub fn reset_cells(&mut self) {
        for cell in &mut self.cells {
            cell.role = CellRole::Empty;
            cell.distance = UNREACHABLE;
            cell.predecessor = None;
        }
    }
}

impl fmt::Display for SearchGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let glyph = match self.get(x, y) {
                    CellRole::Empty => '.',
                    CellRole::Start => 'S',
                    CellRole::End => 'E',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid<CellRole> for SearchGrid {
    fn new(width: usize, height: usize, default_value: CellRole) -> Self {
        let cells = (0..width * height)
            .map(|index| Cell::new(index, default_value))
            .collect();
        SearchGrid {
            width,
            height,
            cells,
        }
    }
    fn get(&self, x: usize, y: usize) -> CellRole {
        self.cells[y * self.width + x].role
    }
    fn set(&mut self, x: usize, y: usize, value: CellRole) {
        self.cells[y * self.width + x].role = value;
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
}

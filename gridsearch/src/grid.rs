use crate::error::Error;
use crate::find::{MapStorage, MapTrait, Movement, NodeReference};
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The terrain of a single cell. Start and end are tracked by the grid itself.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Tile::Empty => ".",
                Tile::Wall => "#",
            }
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move by the given row and column delta, `None` if that leaves the positive quadrant
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Point> {
        Some(Point {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    pub fn manhattan(self, other: Point) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn chebyshev(self, other: Point) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl NodeReference for Point {}

/// Row and column deltas in neighbor order: N, E, S, W, then NE, SE, SW, NW.
/// Orthogonal movement only uses the first four.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
];

/// A rectangular grid of tiles with exactly one start and one end cell.
///
/// Invariants kept by every method: `start != end`, both lie inside the grid
/// and neither is ever a wall. A bordered grid additionally has a ring of
/// walls around its edge that cannot be edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    tiles: Vec<Tile>,
    start: Point,
    end: Point,
    bordered: bool,
}

impl Grid {
    /// Create an empty grid with the given start and end cells
    pub fn new(rows: usize, columns: usize, start: Point, end: Point) -> Result<Self, Error> {
        let mut grid = Self::blank(rows, columns, false)?;

        for p in [start, end] {
            if !grid.contains(p) {
                return Err(Error::OutOfBounds(p));
            }
        }
        if start == end {
            return Err(Error::Occupied(end));
        }

        grid.start = start;
        grid.end = end;
        Ok(grid)
    }

    /// Create a grid surrounded by walls, with the start in the top left and the end in the
    /// bottom right corner of the interior.
    pub fn with_border(rows: usize, columns: usize) -> Result<Self, Error> {
        Self::blank(rows, columns, true)
    }

    fn blank(rows: usize, columns: usize, bordered: bool) -> Result<Self, Error> {
        let (inner_rows, inner_columns) = if bordered {
            (rows.saturating_sub(2), columns.saturating_sub(2))
        } else {
            (rows, columns)
        };
        if inner_rows == 0 || inner_columns == 0 || inner_rows * inner_columns < 2 {
            return Err(Error::InvalidDimensions { rows, columns });
        }

        Ok(Self::build(rows, columns, bordered))
    }

    /// Dimensions must already be validated by the caller
    fn build(rows: usize, columns: usize, bordered: bool) -> Self {
        let margin = usize::from(bordered);
        let mut grid = Self {
            rows,
            columns,
            tiles: vec![Tile::Empty; rows * columns],
            start: Point::new(margin, margin),
            end: Point::new(rows - 1 - margin, columns - 1 - margin),
            bordered,
        };
        grid.clear_walls();
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn is_bordered(&self) -> bool {
        self.bordered
    }

    pub fn contains(&self, p: Point) -> bool {
        p.row < self.rows && p.col < self.columns
    }

    fn index(&self, p: Point) -> usize {
        p.row * self.columns + p.col
    }

    pub fn tile(&self, p: Point) -> Option<Tile> {
        if self.contains(p) {
            Some(self.tiles[self.index(p)])
        } else {
            None
        }
    }

    pub fn is_wall(&self, p: Point) -> bool {
        self.tile(p) == Some(Tile::Wall)
    }

    pub fn is_border(&self, p: Point) -> bool {
        self.bordered
            && (p.row == 0 || p.col == 0 || p.row == self.rows - 1 || p.col == self.columns - 1)
    }

    /// Whether the cell can be changed by the user at all
    pub fn is_editable(&self, p: Point) -> bool {
        self.contains(p) && !self.is_border(p)
    }

    /// Iterate over every point of the grid in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let columns = self.columns;
        (0..self.rows * self.columns).map(move |i| Point::new(i / columns, i % columns))
    }

    fn check_editable(&self, p: Point) -> Result<(), Error> {
        if !self.contains(p) {
            Err(Error::OutOfBounds(p))
        } else if self.is_border(p) {
            Err(Error::Border(p))
        } else {
            Ok(())
        }
    }

    /// The in-bounds, non-wall cells next to `p`, in N, E, S, W (NE, SE, SW, NW) order
    pub fn neighbors(&self, p: Point, movement: Movement) -> Vec<Point> {
        let count = match movement {
            Movement::Orthogonal => 4,
            Movement::Diagonal => 8,
        };

        let mut points = Vec::with_capacity(count);
        for &(d_row, d_col) in &DIRECTIONS[..count] {
            if let Some(n) = p.offset(d_row, d_col) {
                if self.tile(n) == Some(Tile::Empty) {
                    points.push(n);
                }
            }
        }
        points
    }

    /// Turn the cell into a wall, returns whether anything changed
    pub fn set_wall(&mut self, p: Point) -> Result<bool, Error> {
        self.check_editable(p)?;
        if p == self.start || p == self.end {
            return Err(Error::Occupied(p));
        }

        let i = self.index(p);
        let changed = self.tiles[i] != Tile::Wall;
        self.tiles[i] = Tile::Wall;
        Ok(changed)
    }

    /// Turn the cell back into an empty tile, returns whether anything changed
    pub fn clear_wall(&mut self, p: Point) -> Result<bool, Error> {
        self.check_editable(p)?;

        let i = self.index(p);
        let changed = self.tiles[i] != Tile::Empty;
        self.tiles[i] = Tile::Empty;
        Ok(changed)
    }

    /// Flip a cell between wall and empty and return the new tile
    pub fn toggle_wall(&mut self, p: Point) -> Result<Tile, Error> {
        if self.is_wall(p) {
            self.clear_wall(p)?;
            Ok(Tile::Empty)
        } else {
            self.set_wall(p)?;
            Ok(Tile::Wall)
        }
    }

    /// Move the start cell, clearing a wall at the destination
    pub fn move_start(&mut self, p: Point) -> Result<(), Error> {
        self.check_editable(p)?;
        if p == self.end {
            return Err(Error::Occupied(p));
        }

        let i = self.index(p);
        self.tiles[i] = Tile::Empty;
        self.start = p;
        Ok(())
    }

    /// Move the end cell, clearing a wall at the destination
    pub fn move_end(&mut self, p: Point) -> Result<(), Error> {
        self.check_editable(p)?;
        if p == self.start {
            return Err(Error::Occupied(p));
        }

        let i = self.index(p);
        self.tiles[i] = Tile::Empty;
        self.end = p;
        Ok(())
    }

    /// Remove every user placed wall. The border of a bordered grid stays.
    pub fn clear_walls(&mut self) {
        for i in 0..self.tiles.len() {
            let p = Point::new(i / self.columns, i % self.columns);
            self.tiles[i] = if self.is_border(p) {
                Tile::Wall
            } else {
                Tile::Empty
            };
        }
    }

    /// Change the size of the grid.
    ///
    /// Walls in the overlapping area are kept, start and end are pulled into the new interior.
    /// Should they end up on the same cell, both go back to their default corners.
    pub fn resize(&mut self, rows: usize, columns: usize) -> Result<(), Error> {
        let mut resized = Self::blank(rows, columns, self.bordered)?;

        for row in 0..self.rows.min(rows) {
            for col in 0..self.columns.min(columns) {
                let p = Point::new(row, col);
                if resized.is_editable(p) && !self.is_border(p) {
                    let i = resized.index(p);
                    resized.tiles[i] = self.tiles[self.index(p)];
                }
            }
        }

        let start = resized.clamp(self.start);
        let end = resized.clamp(self.end);
        if start != end {
            resized.start = start;
            resized.end = end;
        }
        for p in [resized.start, resized.end] {
            let i = resized.index(p);
            resized.tiles[i] = Tile::Empty;
        }

        *self = resized;
        Ok(())
    }

    /// The closest editable cell to `p`
    fn clamp(&self, p: Point) -> Point {
        let margin = usize::from(self.bordered);
        Point::new(
            p.row.clamp(margin, self.rows - 1 - margin),
            p.col.clamp(margin, self.columns - 1 - margin),
        )
    }
}

impl Default for Grid {
    /// A 30x30 grid with a wall border
    fn default() -> Self {
        Self::build(30, 30, true)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.columns {
                let p = Point::new(row, col);
                if p == self.start {
                    write!(f, "S")?;
                } else if p == self.end {
                    write!(f, "E")?;
                } else {
                    write!(f, "{}", self.tiles[self.index(p)])?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// A MapStorage that keeps one value per grid cell in a flat row-major vec
#[derive(Debug)]
pub struct CellStorage<T> {
    columns: usize,
    cells: Vec<T>,
}

impl<T: Copy + 'static> MapStorage<T> for CellStorage<T> {
    type Reference = Point;

    fn is_valid(&self, node: Self::Reference) -> bool {
        node.col < self.columns && node.row * self.columns + node.col < self.cells.len()
    }

    fn get(&self, node: Self::Reference) -> T {
        self.cells[node.row * self.columns + node.col]
    }

    fn get_mut(&mut self, node: Self::Reference) -> &mut T {
        &mut self.cells[node.row * self.columns + node.col]
    }
}

impl MapTrait for Grid {
    type Reference = Point;
    type Storage<T: Default + Copy + Clone + 'static> = CellStorage<T>;

    fn is_valid(&self, node: Self::Reference) -> bool {
        self.contains(node)
    }

    fn neighbors_of(
        &self,
        node: Self::Reference,
        movement: Movement,
    ) -> impl Iterator<Item = (Self::Reference, usize)> {
        // every step costs the same, diagonal or not
        self.neighbors(node, movement).into_iter().map(|p| (p, 1))
    }

    fn estimate(&self, from: Self::Reference, to: Self::Reference, movement: Movement) -> usize {
        match movement {
            Movement::Orthogonal => from.manhattan(to),
            Movement::Diagonal => from.chebyshev(to),
        }
    }

    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T> {
        CellStorage {
            columns: self.columns,
            cells: vec![Default::default(); self.rows * self.columns],
        }
    }
}

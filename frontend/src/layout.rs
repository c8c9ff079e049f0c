use egui::{Pos2, Rect, Vec2};
use gridsearch::Point;

/// Maps between screen pixels and grid cells.
///
/// Cells are square and the grid is centered in the area it was fitted to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    origin: Pos2,
    cell_size: f32,
    rows: usize,
    columns: usize,
}

impl GridLayout {
    /// Fit a `rows` x `columns` grid into `area` with the largest possible cells
    pub fn fit(area: Rect, rows: usize, columns: usize) -> Self {
        let rows_f = rows.max(1) as f32;
        let columns_f = columns.max(1) as f32;
        let cell_size = (area.width() / columns_f)
            .min(area.height() / rows_f)
            .max(0.0);

        let size = Vec2::new(cell_size * columns_f, cell_size * rows_f);
        let origin = area.center() - size / 2.0;

        Self {
            origin,
            cell_size,
            rows,
            columns,
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// The area covered by the whole grid
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(
            self.origin,
            Vec2::new(
                self.cell_size * self.columns as f32,
                self.cell_size * self.rows as f32,
            ),
        )
    }

    pub fn cell_rect(&self, p: Point) -> Rect {
        Rect::from_min_size(
            self.origin + Vec2::new(p.col as f32, p.row as f32) * self.cell_size,
            Vec2::splat(self.cell_size),
        )
    }

    /// The cell under a screen position, `None` outside of the grid
    pub fn cell_at(&self, pos: Pos2) -> Option<Point> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let local = (pos - self.origin) / self.cell_size;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }

        let p = Point::new(local.y as usize, local.x as usize);
        (p.row < self.rows && p.col < self.columns).then_some(p)
    }
}

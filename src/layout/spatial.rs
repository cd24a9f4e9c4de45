//! Uniform bucket grid over the canvas for exact radius queries
//!
//! Every placed node is filed under the cell containing its target position.
//! A radius query visits exactly the cells overlapping the query square, so
//! results match a full scan of all nodes while touching only nearby ones.

use crate::io::configuration::MAX_GRID_CELLS_PER_AXIS;
use crate::math::{Extent, Point};
use ndarray::Array2;

/// Bucket grid of node indices keyed by target position
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    cells: Array2<Vec<usize>>,
    cell_size: f64,
    points: Vec<Point>,
}

impl SpatialIndex {
    /// Create an empty index covering `extent` with square cells of `cell_size`
    ///
    /// Points outside the extent are clamped into the border cells, so the
    /// index stays exact for any input. Cells grow past `cell_size` when the
    /// extent would otherwise need more than [`MAX_GRID_CELLS_PER_AXIS`] per axis.
    pub fn new(extent: Extent, cell_size: f64) -> Self {
        let longest = extent.width.max(extent.height).max(1.0);
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size.max(longest / MAX_GRID_CELLS_PER_AXIS as f64)
        } else {
            longest
        };
        let cols = ((extent.width / cell_size).ceil().max(1.0)) as usize;
        let rows = ((extent.height / cell_size).ceil().max(1.0)) as usize;

        Self {
            cells: Array2::from_elem((rows, cols), Vec::new()),
            cell_size,
            points: Vec::new(),
        }
    }

    /// Number of indexed points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the index holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// File `point` under the next sequential index, returning that index
    pub fn insert(&mut self, point: Point) -> usize {
        let index = self.points.len();
        let cell = self.cell_of(point);
        if let Some(bucket) = self.cells.get_mut(cell) {
            bucket.push(index);
        }
        self.points.push(point);
        index
    }

    /// Indices of all points strictly closer than `radius` to `point`
    pub fn within(&self, point: Point, radius: f64) -> impl Iterator<Item = usize> + '_ {
        let radius_sq = radius * radius;
        let [row_lo, col_lo] = self.cell_of(Point::new(point.x - radius, point.y - radius));
        let [row_hi, col_hi] = self.cell_of(Point::new(point.x + radius, point.y + radius));

        (row_lo..=row_hi)
            .flat_map(move |row| (col_lo..=col_hi).map(move |col| [row, col]))
            .filter_map(move |cell| self.cells.get(cell))
            .flat_map(|bucket| bucket.iter().copied())
            .filter(move |&index| {
                self.points
                    .get(index)
                    .is_some_and(|other| other.distance_squared(point) < radius_sq)
            })
    }

    /// Whether any indexed point lies strictly closer than `radius`
    pub fn any_within(&self, point: Point, radius: f64) -> bool {
        self.within(point, radius).next().is_some()
    }

    fn cell_of(&self, point: Point) -> [usize; 2] {
        let (rows, cols) = self.cells.dim();
        [
            Self::axis_cell(point.y, self.cell_size, rows),
            Self::axis_cell(point.x, self.cell_size, cols),
        ]
    }

    fn axis_cell(coordinate: f64, cell_size: f64, count: usize) -> usize {
        let max = count.saturating_sub(1);
        if coordinate.is_nan() || coordinate <= 0.0 {
            return 0;
        }
        let cell = (coordinate / cell_size).floor();
        if cell >= max as f64 {
            max
        } else {
            cell as usize
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/spatial.rs"]
mod tests;

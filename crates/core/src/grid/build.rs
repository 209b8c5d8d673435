use crate::{
    config::{GridConfig, GridShape},
    grid::{storage::CellStorage, unit::Hex, HexGrid},
    screen::Point2,
};
use log::debug;
use std::{cmp, f64::consts::PI};

/// A container for generating a new grid: enumerates the coordinates of the
/// requested shape, computes each cell's geometry, and inserts the cells into
/// a fresh storage. Consumed by [HexGrid::generate]; never exposed publicly.
pub(crate) struct GridBuilder<T> {
    config: GridConfig,
    cells: CellStorage<Hex<T>>,
}

impl<T> GridBuilder<T> {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            cells: CellStorage::new(),
        }
    }

    /// Populate every coordinate belonging to the given shape, then assemble
    /// the finished grid. Range bounds are inclusive at both ends; negative
    /// sizes make ranges empty rather than failing (callers self-validate).
    pub fn generate_grid(mut self, shape: GridShape) -> HexGrid<T> {
        debug!("Generating {:?} grid with config {:?}", shape, self.config);

        match shape {
            GridShape::Parallelogram { width, height } => {
                for x in 0..=width {
                    for y in 0..=height {
                        self.insert_cell(x, y);
                    }
                }
            }
            GridShape::Triangle { side } => {
                for x in 0..=side {
                    for y in 0..=(side - x) {
                        self.insert_cell(x, y);
                    }
                }
            }
            GridShape::Hexagon { radius } => {
                for x in -radius..=radius {
                    // If we just did [-radius, radius] for y as well, we'd
                    // get a parallelogram instead of a hexagon
                    // https://www.redblobgames.com/grids/hexagons/#range
                    let y_min = cmp::max(-radius, -x - radius);
                    let y_max = cmp::min(radius, -x + radius);
                    for y in y_min..=y_max {
                        self.insert_cell(x, y);
                    }
                }
            }
            GridShape::Rectangle { width, height } => {
                for x in 0..=height {
                    // Every other row shifts one cell, so the slanted axial
                    // rows stack into a screen-space rectangle
                    let offset = x / 2;
                    for y in -offset..=(width - offset) {
                        self.insert_cell(x, y);
                    }
                }
            }
        }

        debug!("Generated {} cells", self.cells.len());
        HexGrid::new(self.config, self.cells)
    }

    fn insert_cell(&mut self, x: i32, y: i32) {
        let center = cell_center(&self.config, x, y);
        let corners = cell_corners(&self.config, center);
        self.cells.insert(x, y, Hex::new(x, y, center, corners));
    }
}

/// Screen position of the center of the cell at `(x, y)`: the orientation's
/// forward matrix applied to the coordinate, scaled per axis, offset by the
/// grid origin. Pure geometry, no storage involved.
pub(crate) fn cell_center(config: &GridConfig, x: i32, y: i32) -> Point2 {
    let f = config.orientation.forward();
    let (x, y) = (f64::from(x), f64::from(y));
    Point2::new(
        config.origin.x + config.cell_width * (f[0] * x + f[1] * y),
        config.origin.y + config.cell_height * (f[2] * x + f[3] * y),
    )
}

/// The six polygon vertices around a cell center. Corner `i` sits at angle
/// `2π * (offset + i) / 6` from the center, at a radial offset of
/// `cell_width` horizontally and `cell_height` vertically. Increasing `i` is
/// counterclockwise with +y up (clockwise on a y-down screen).
pub(crate) fn cell_corners(
    config: &GridConfig,
    center: Point2,
) -> [Point2; 6] {
    let offset = config.orientation.corner_angle_offset();
    let mut corners = [Point2::default(); 6];
    for (i, corner) in corners.iter_mut().enumerate() {
        let angle = 2.0 * PI * (offset + i as f64) / 6.0;
        *corner = Point2::new(
            center.x + config.cell_width * angle.cos(),
            center.y + config.cell_height * angle.sin(),
        );
    }
    corners
}

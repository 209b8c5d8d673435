//! This module holds the grid itself and the basic types and data structures
//! behind it.
//!
//! ## Coordinate Systems
//!
//! Hexel uses two coordinate systems:
//!
//! ### Grid Coordinates
//!
//! Grid coordinates are axial hex coordinates: each cell is identified by an
//! integer pair `(x, y)`, with a derived third component `z = -x - y` that
//! makes the cube-coordinate identity `x + y + z = 0` hold for every cell.
//! The redundancy buys symmetric neighbor and distance arithmetic; see
//! [the canonical reference](https://www.redblobgames.com/grids/hexagons/#coordinates-axial)
//! for the full story.
//!
//! Grid coordinates are sparse and unbounded: a grid only contains the
//! coordinates its generation shape enumerated, and those can be anywhere in
//! the plane.
//!
//! ### Screen Coordinates
//!
//! Screen coordinates are plain 2D floating-point positions
//! ([Point2](crate::Point2)),
//! the kind a presentation layer draws with. An [Orientation]'s forward
//! matrix, scaled by the grid's per-axis cell size and offset by its origin,
//! maps a grid coordinate to the screen position of that cell's center; the
//! backward matrix inverts the mapping to recover (fractional) grid
//! coordinates from any screen position, which is what powers the hit test.
//!
//! This crate computes screen geometry but never draws anything; rendering
//! and input handling live in whatever application consumes the grid.

mod build;
mod storage;
mod unit;

pub use self::{
    storage::CellStorage,
    unit::{Cell, Hex, Orientation},
};

use crate::{
    config::{GridConfig, GridShape},
    grid::build::GridBuilder,
};

/// A fully generated hexagonal grid: an orientation, origin, and per-axis
/// cell scale, plus one cell for every coordinate enumerated by the shape it
/// was generated with.
///
/// A grid's geometric identity is immutable after generation: cells are never
/// added, removed, or moved. The one mutable thing is each cell's payload
/// (`T`), reachable through [Self::cell_at_mut] and [Self::cells_mut].
///
/// ```
/// use hexel::{GridConfig, GridShape, HexGrid};
///
/// let grid: HexGrid<u32> =
///     HexGrid::generate(GridConfig::default(), GridShape::Hexagon { radius: 3 });
/// assert_eq!(grid.cells().len(), 37);
/// ```
#[derive(Clone, Debug)]
pub struct HexGrid<T> {
    /// The config the grid was generated with. Generation is deterministic
    /// based on config and shape, and once the grid has been generated, the
    /// config can never change.
    config: GridConfig,

    /// The cells that make up this grid, keyed by their grid coordinate.
    cells: CellStorage<Hex<T>>,
}

impl<T> HexGrid<T> {
    pub(crate) fn new(config: GridConfig, cells: CellStorage<Hex<T>>) -> Self {
        Self { config, cells }
    }

    /// Generate a new grid covering the given shape. This is the only way to
    /// create a grid (or cells). Total: any combination of config and shape
    /// produces *some* grid, though nonsensical sizes produce an empty one.
    pub fn generate(config: GridConfig, shape: GridShape) -> Self {
        GridBuilder::new(config).generate_grid(shape)
    }

    /// Get a reference to the config that defines this grid's geometry.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Get a reference to the storage holding this grid's cells.
    pub fn cells(&self) -> &CellStorage<Hex<T>> {
        &self.cells
    }

    /// Mutable access to the cell storage, for bulk payload updates. Cell
    /// geometry and the set of populated coordinates stay fixed regardless.
    pub fn cells_mut(&mut self) -> &mut CellStorage<Hex<T>> {
        &mut self.cells
    }

    /// Move the cell storage out of this grid.
    pub fn into_cells(self) -> CellStorage<Hex<T>> {
        self.cells
    }

    /// Get the cell at the given grid coordinate, or `None` if that
    /// coordinate isn't part of this grid.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&Hex<T>> {
        self.cells.get(x, y)
    }

    /// Mutable variant of [Self::cell_at], for modifying the cell's payload.
    pub fn cell_at_mut(&mut self, x: i32, y: i32) -> Option<&mut Hex<T>> {
        self.cells.get_mut(x, y)
    }

    /// Find the cell under the given screen position: the inverse of cell
    /// geometry. Normalizes the position by the grid's origin and scale,
    /// applies the orientation's backward matrix, and rounds the resulting
    /// fractional coordinates to the nearest integers (half away from zero,
    /// standard [f64::round] behavior).
    ///
    /// Returns `None` when the recovered coordinate isn't populated, e.g. a
    /// position outside the generated shape. This is a direct coordinate
    /// recovery, not a distance search: there is no nearest-cell fallback.
    pub fn cell_at_screen_position(
        &self,
        x: f64,
        y: f64,
    ) -> Option<&Hex<T>> {
        let norm_x = (x - self.config.origin.x) / self.config.cell_width;
        let norm_y = (y - self.config.origin.y) / self.config.cell_height;

        let b = self.config.orientation.backward();
        let coord_x = (b[0] * norm_x + b[1] * norm_y).round();
        let coord_y = (b[2] * norm_x + b[3] * norm_y).round();

        self.cells.get(coord_x as i32, coord_y as i32)
    }
}

impl<'a, T> IntoIterator for &'a HexGrid<T> {
    type Item = &'a Hex<T>;
    type IntoIter = <&'a CellStorage<Hex<T>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

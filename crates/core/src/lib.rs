//! Hexel is a hexagonal grid toolkit. It maps integer grid coordinates to
//! screen-space geometry (cell centers and polygon corners) and back (screen
//! position to the cell underneath), and stores arbitrary per-cell payloads
//! in a sparse container. Rendering and input handling are implemented
//! elsewhere: games, map editors, and simulations consume the geometry this
//! crate computes.
//!
//! ```
//! use hexel::{GridConfig, GridShape, HexGrid, Orientation, Point2};
//!
//! let config = GridConfig {
//!     orientation: Orientation::Pointy,
//!     origin: Point2::new(0.0, 0.0),
//!     cell_width: 10.0,
//!     cell_height: 10.0,
//! };
//! let mut grid: HexGrid<String> =
//!     HexGrid::generate(config, GridShape::Hexagon { radius: 2 });
//!
//! // Tag the center cell, then find it again from a screen position
//! *grid.cell_at_mut(0, 0).unwrap().data_mut() = Some("home".to_owned());
//! let hit = grid.cell_at_screen_position(1.0, -2.0).unwrap();
//! assert_eq!(hit.data().map(String::as_str), Some("home"));
//! ```
//!
//! See [GridConfig] and [GridShape] for the generation parameters, and the
//! [grid] module docs for a description of the coordinate systems.

mod config;
pub mod grid;
mod screen;

pub use crate::{
    config::{GridConfig, GridShape},
    grid::{Cell, CellStorage, Hex, HexGrid, Orientation},
    screen::Point2,
};

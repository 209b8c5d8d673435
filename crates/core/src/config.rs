use crate::{grid::Orientation, screen::Point2};
use serde::{Deserialize, Serialize};

/// Geometric parameters shared by every cell in a grid. Two grids generated
/// with the same config and shape are always identical.
///
/// The config is fixed at generation time; a finished [HexGrid](crate::HexGrid)
/// never changes its geometry.
///
/// **Note:** sizes are not validated. This crate trusts its callers: a zero
/// or negative cell scale will produce degenerate (but well-defined) screen
/// positions rather than an error.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Whether cells are drawn pointy-top or flat-top. This selects the
    /// forward/backward transform and the corner angle offset.
    pub orientation: Orientation,

    /// Screen position of the center of the cell at grid coordinate `(0, 0)`.
    pub origin: Point2,

    /// Pixel scale factor along the x axis of the transform. Roughly "how
    /// wide is one cell", though the exact meaning depends on orientation.
    pub cell_width: f64,

    /// Pixel scale factor along the y axis of the transform.
    pub cell_height: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Pointy,
            origin: Point2::new(0.0, 0.0),
            cell_width: 1.0,
            cell_height: 1.0,
        }
    }
}

/// The outline of the populated region of a grid. Purely a generation-time
/// choice: the shape enumerates which grid coordinates exist, and is not
/// stored on the resulting grid.
///
/// All bounds below are **inclusive on both ends**. Size parameters are not
/// validated; a negative size simply makes the corresponding range empty, so
/// the grid comes out with zero cells (or partial rows) rather than an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridShape {
    /// Every `(x, y)` with `x` in `[0, width]` and `y` in `[0, height]`.
    Parallelogram { width: i32, height: i32 },
    /// Every `(x, y)` with `x` in `[0, side]` and `y` in `[0, side - x]`.
    Triangle { side: i32 },
    /// The standard cube-coordinate disk: every `(x, y)` with `x` in
    /// `[-radius, radius]` and `y` in
    /// `[max(-radius, -x - radius), min(radius, -x + radius)]`.
    /// <https://www.redblobgames.com/grids/hexagons/#range>
    Hexagon { radius: i32 },
    /// Staggered rows approximating a screen-space rectangle: for each row
    /// `x` in `[0, height]`, every `y` in `[-x/2, width - x/2]` (integer
    /// division).
    Rectangle { width: i32, height: i32 },
}

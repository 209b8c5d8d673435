//! This sub-module contains the basic units of the grid coordinate system:
//! the orientation constants, the cell capability trait, and the hex cell
//! itself. See the parent module documentation for more info on the
//! coordinate system.

use crate::screen::Point2;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// `sqrt(3)`, which shows up all over hex math (it's the ratio between a
/// hexagon's height and its side length). Precomputed because `f64::sqrt`
/// isn't available in const contexts.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Whether hexagons sit with a vertex at the top (pointy) or an edge at the
/// top (flat). Each variant is an immutable bundle of constants: a forward
/// matrix (grid -> unscaled pixel offset), its inverse (pixel offset ->
/// fractional grid coordinates), and an angle offset that picks which of the
/// six corner directions is "first".
///
/// The matrices implement the standard axial-hex linear transform:
/// <https://www.redblobgames.com/grids/hexagons/#hex-to-pixel-axial>
///
/// These are compile-time constants, not configurable per grid.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Vertex at the top. Cells in the same x column zigzag horizontally.
    Pointy,
    /// Edge at the top. Cells in the same y row zigzag vertically.
    Flat,
}

impl Orientation {
    /// The 2x2 forward matrix, row-major: maps integer grid coordinates to
    /// an unscaled pixel offset from the grid origin.
    pub const fn forward(self) -> [f64; 4] {
        match self {
            Self::Pointy => [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
            Self::Flat => [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
        }
    }

    /// The 2x2 backward matrix, row-major: the inverse of [Self::forward].
    /// Maps an unscaled pixel offset back to fractional grid coordinates.
    pub const fn backward(self) -> [f64; 4] {
        match self {
            Self::Pointy => [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
            Self::Flat => [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
        }
    }

    /// Angular offset (in sixths of a turn) of the first corner. `0.5` for
    /// pointy-top puts corner 0 halfway between the +x axis and the first
    /// flat-top corner; `0.0` for flat-top puts corner 0 on the +x axis.
    pub const fn corner_angle_offset(self) -> f64 {
        match self {
            Self::Pointy => 0.5,
            Self::Flat => 0.0,
        }
    }
}

/// A trait representing any cell in a grid: an integer coordinate pair, the
/// screen geometry derived from it, and an optional mutable payload. By
/// defining this as a trait we keep the storage and query layers independent
/// of the concrete cell type; [Hex] is the one implementation this crate
/// ships.
pub trait Cell {
    /// The payload type carried by this cell.
    type Data;

    /// The `x` component of the cell's grid coordinate.
    fn x(&self) -> i32;

    /// The `y` component of the cell's grid coordinate.
    fn y(&self) -> i32;

    /// The screen position of the cell's center.
    fn center(&self) -> Point2;

    /// The cell's polygon vertices. See [Hex::corners] for ordering.
    fn corners(&self) -> &[Point2; 6];

    /// The cell's payload, if one has been attached.
    fn data(&self) -> Option<&Self::Data>;

    /// Mutable access to the cell's payload slot. Setting it to `None`
    /// detaches the payload.
    fn data_mut(&mut self) -> &mut Option<Self::Data>;
}

/// A single hexagonal cell: grid coordinates, precomputed screen geometry,
/// and an optional payload.
///
/// Coordinates and geometry are fixed at generation time and can never
/// change; only the payload is mutable. Cells can't be constructed directly,
/// they only come out of [HexGrid::generate](crate::HexGrid::generate).
#[derive(Clone, Debug)]
pub struct Hex<T> {
    x: i32,
    y: i32,
    center: Point2,
    corners: [Point2; 6],
    data: Option<T>,
}

impl<T> Hex<T> {
    pub(crate) fn new(
        x: i32,
        y: i32,
        center: Point2,
        corners: [Point2; 6],
    ) -> Self {
        Self {
            x,
            y,
            center,
            corners,
            data: None,
        }
    }

    /// The `x` component of this cell's grid coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// The `y` component of this cell's grid coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// The derived third cube coordinate. `x + y + z == 0` for every cell,
    /// always; `z` is never stored or independently settable. Useful for
    /// neighbor and distance arithmetic:
    /// <https://www.redblobgames.com/grids/hexagons/#coordinates-cube>
    pub fn z(&self) -> i32 {
        -self.x - self.y
    }

    /// The screen position of this cell's center.
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// The six polygon vertices of this cell, in increasing-angle order
    /// starting from the orientation's first corner. With +y pointing up
    /// that's counterclockwise; on a y-down screen it reads as clockwise.
    pub fn corners(&self) -> &[Point2; 6] {
        &self.corners
    }

    /// This cell's payload, if one has been attached.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Mutable access to this cell's payload slot. Cells start with no
    /// payload; attach one with `*cell.data_mut() = Some(value)`.
    pub fn data_mut(&mut self) -> &mut Option<T> {
        &mut self.data
    }
}

impl<T> Cell for Hex<T> {
    type Data = T;

    fn x(&self) -> i32 {
        Hex::x(self)
    }

    fn y(&self) -> i32 {
        Hex::y(self)
    }

    fn center(&self) -> Point2 {
        Hex::center(self)
    }

    fn corners(&self) -> &[Point2; 6] {
        Hex::corners(self)
    }

    fn data(&self) -> Option<&T> {
        Hex::data(self)
    }

    fn data_mut(&mut self) -> &mut Option<T> {
        Hex::data_mut(self)
    }
}

//! Basic types for screen space. See module-level docs in [crate::grid] for
//! a description of the two coordinate systems and how they relate.

use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A 2D point in screen space. "Screen" is a convenient shorthand: these are
/// the coordinates a presentation layer would draw with, but nothing in this
/// crate ever touches a real screen. The grid's origin and per-axis cell
/// scale determine how grid coordinates map into this space.
///
/// Compared by value. Two points are equal iff both components are equal,
/// with the usual `f64` caveats.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub mod color;
pub mod font;
pub mod geometry;

pub use color::Color;
pub use font::{FontFamily, FontSpec, FontStyle};
pub use geometry::{Point, Rect};

/*!
 * Base types shared across the xybar crates: colors and 2D geometry.
 */

pub mod color;
pub mod geom;

pub use color::ColorU8;

use crate::color::{self, ColorU8};

pub const BAR_STROKE: ColorU8 = color::WHITE;
pub const BAR_STROKE_WIDTH: f32 = 1.0;

//! Software rendering module
//!
//! Everything is drawn on the CPU into a [`Canvas`]; the host decides how the
//! finished pixels reach a screen.

pub mod pixel_buffer;
pub mod raster;
pub mod scoreboard;

pub use pixel_buffer::{Canvas, Clip, Color, PixelBuffer};
pub use raster::{
    arc_control_points, bezier_point, draw_arc, draw_bezier_curve, draw_circle, draw_frame_bounds,
    draw_line, draw_line_f, draw_polygon, flood_fill,
};
pub use scoreboard::Scoreboard;

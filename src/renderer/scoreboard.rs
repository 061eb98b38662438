//! Score display drawn as thick polylines in a framed box

use glam::IVec2;

use super::pixel_buffer::{Canvas, Clip, Color};
use super::raster::draw_line;

/// Digit cell width
const W: i32 = 40;
/// Digit cell height
const H: i32 = 80;
const H_2: i32 = H / 2;
/// Gap between digits and around the box
const SKIP: i32 = W / 4;

/// Polyline for each decimal digit inside a `W x H` cell
const DIGITS: [&[(i32, i32)]; 10] = [
    &[(W, 0), (0, 0), (0, H), (W, H), (W, 0)],
    &[(W / 2, H_2 - 10), (W, 0), (W, H)],
    &[(0, 0), (W, 0), (W, H_2), (0, H_2), (0, H), (W, H)],
    &[(0, 0), (W, 0), (W, H_2), (0, H_2), (W, H_2), (W, H), (0, H)],
    &[(0, 0), (0, H_2), (W, H_2), (W, 0), (W, H)],
    &[(W, 0), (0, 0), (0, H_2), (W, H_2), (W, H), (0, H)],
    &[(W, 0), (0, 0), (0, H), (W, H), (W, H_2), (0, H_2)],
    &[(0, 0), (W, 0), (W / 2, H)],
    &[(W, 0), (0, 0), (0, H), (W, H), (W, 0), (W, H_2), (0, H_2)],
    &[(W, H), (W, 0), (0, 0), (0, H_2), (W, H_2)],
];

/// Framed score readout anchored at its top-left digit corner
#[derive(Debug, Clone, Copy)]
pub struct Scoreboard {
    left_up: IVec2,
    color: Color,
    background: Color,
}

impl Scoreboard {
    pub fn new(left_up: IVec2, color: Color, background: Color) -> Self {
        Self {
            left_up,
            color,
            background,
        }
    }

    /// Standard placement: right part of the screen, just below the frame
    pub fn for_screen(width: i32, bounds_size: i32, color: Color, background: Color) -> Self {
        let x = (f64::from(width) * 0.8) as i32;
        Self::new(IVec2::new(x, bounds_size + SKIP + 2), color, background)
    }

    /// Draw `score`, its frame, and paint the frame interior
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, score: u32) {
        let digits = score.to_string();
        for (i, ch) in digits.bytes().enumerate() {
            let shift = self.left_up + IVec2::new(i as i32 * (W + SKIP), 0);
            let polyline = DIGITS[usize::from(ch - b'0')];
            self.draw_thick_polyline(canvas, shift, polyline);
        }

        let n = digits.len() as i32;
        let top_left = self.left_up - IVec2::splat(SKIP);
        let bottom_right = IVec2::new(self.left_up.x + n * (W + SKIP), self.left_up.y + H + SKIP);
        let top_right = IVec2::new(bottom_right.x, top_left.y);
        let bottom_left = IVec2::new(top_left.x, bottom_right.y);
        for (a, b) in [
            (top_left, top_right),
            (top_right, bottom_right),
            (bottom_right, bottom_left),
            (bottom_left, top_left),
        ] {
            draw_line(canvas, a, b, self.color, Clip::SkipMiss);
        }

        for y in top_left.y + 1..bottom_right.y {
            for x in top_left.x + 1..bottom_right.x {
                if canvas.get_pixel(x, y).is_some_and(|c| c != self.color) {
                    canvas.set_pixel(x, y, self.background);
                }
            }
        }
    }

    /// Three offset passes give a stroke roughly two pixels wide
    fn draw_thick_polyline<C: Canvas + ?Sized>(&self, canvas: &mut C, shift: IVec2, polyline: &[(i32, i32)]) {
        for pair in polyline.windows(2) {
            let a = shift + IVec2::from(pair[0]);
            let b = shift + IVec2::from(pair[1]);
            for offset in [IVec2::ZERO, IVec2::X, IVec2::Y] {
                draw_line(canvas, a + offset, b + offset, self.color, Clip::SkipMiss);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::PixelBuffer;

    const INK: Color = Color::new(230, 116, 19);
    const PAPER: Color = Color::new(230, 230, 230);

    #[test]
    fn test_draws_digit_strokes_and_background() {
        let mut buf = PixelBuffer::new(200, 120);
        let board = Scoreboard::new(IVec2::new(20, 20), INK, PAPER);
        board.draw(&mut buf, 0);

        // Digit "0" top-left corner and its frame corner
        assert_eq!(buf.get_pixel(20, 20), Some(INK));
        assert_eq!(buf.get_pixel(10, 10), Some(INK));
        // Inside the zero glyph is painted background
        assert_eq!(buf.get_pixel(40, 60), Some(PAPER));
        // Outside the frame untouched
        assert_eq!(buf.get_pixel(5, 5), Some(Color::BLACK));
        assert_eq!(buf.get_pixel(71, 60), Some(Color::BLACK));
    }

    #[test]
    fn test_frame_grows_with_digit_count() {
        let mut one = PixelBuffer::new(300, 120);
        let mut three = PixelBuffer::new(300, 120);
        let board = Scoreboard::new(IVec2::new(20, 20), INK, PAPER);
        board.draw(&mut one, 7);
        board.draw(&mut three, 123);
        // Right frame edge at x = 20 + n * 50
        assert_eq!(one.get_pixel(70, 60), Some(INK));
        assert_eq!(three.get_pixel(170, 60), Some(INK));
        assert_eq!(one.get_pixel(170, 60), Some(Color::BLACK));
    }

    #[test]
    fn test_offscreen_digits_are_clipped() {
        let mut buf = PixelBuffer::new(100, 60);
        let board = Scoreboard::new(IVec2::new(60, 20), INK, PAPER);
        board.draw(&mut buf, 98765);
        assert!(buf.count(INK) > 0);
    }

    #[test]
    fn test_for_screen_anchor() {
        let board = Scoreboard::for_screen(1000, 50, INK, PAPER);
        assert_eq!(board.left_up, IVec2::new(800, 62));
    }
}

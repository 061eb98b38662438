//! Pixel buffer and the canvas capability the rasterizer draws through

use bytemuck::{Pod, Zeroable};
use glam::IVec2;

/// 24-bit RGB color
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as `0x00RRGGBB`
    #[inline]
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpack from `0x00RRGGBB` (the top byte is ignored)
    #[inline]
    pub const fn from_packed(p: u32) -> Self {
        Self {
            r: (p >> 16) as u8,
            g: (p >> 8) as u8,
            b: p as u8,
        }
    }
}

/// How out-of-bounds writes are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clip {
    /// Every write must land inside the buffer
    #[default]
    Strict,
    /// Writes outside the buffer are silently dropped
    SkipMiss,
}

/// A drawable pixel surface
///
/// The rasterizer only ever reaches pixels through this trait, so a host can
/// hand it any framebuffer it owns.
pub trait Canvas {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Read one pixel, `None` when outside the surface
    fn get_pixel(&self, x: i32, y: i32) -> Option<Color>;

    /// Write one pixel
    ///
    /// # Panics
    ///
    /// Implementations panic when `(x, y)` is outside the surface.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    #[inline]
    fn is_point_in_image(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width() && y < self.height()
    }

    /// Write one pixel, ignoring coordinates outside the surface
    #[inline]
    fn set_pixel_clipped(&mut self, x: i32, y: i32, color: Color) {
        if self.is_point_in_image(x, y) {
            self.set_pixel(x, y, color);
        }
    }

    #[inline]
    fn plot(&mut self, p: IVec2, color: Color, clip: Clip) {
        match clip {
            Clip::Strict => self.set_pixel(p.x, p.y, color),
            Clip::SkipMiss => self.set_pixel_clipped(p.x, p.y, color),
        }
    }

    /// Paint the half-open rectangle `[min, max)`, clipped to the surface
    fn fill_rect(&mut self, min: IVec2, max: IVec2, color: Color) {
        let (min, max) = clip_rect(min, max, self.width(), self.height());
        for y in min.y..max.y {
            for x in min.x..max.x {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Paint the whole surface
    fn clear(&mut self, color: Color) {
        self.fill_rect(IVec2::ZERO, IVec2::new(self.width(), self.height()), color);
    }
}

/// Intersect `[min, max)` with a `width x height` surface
#[inline]
fn clip_rect(min: IVec2, max: IVec2, width: i32, height: i32) -> (IVec2, IVec2) {
    (min.max(IVec2::ZERO), max.min(IVec2::new(width, height)))
}

/// Row-major buffer of packed `0x00RRGGBB` words
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a black buffer
    ///
    /// Non-positive dimensions produce an empty buffer.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    /// Packed pixel words, row-major
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Raw bytes for handing the frame to a presenter
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels holding exactly `color`
    pub fn count(&self, color: Color) -> usize {
        let packed = color.to_packed();
        self.pixels.iter().filter(|&&p| p == packed).count()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }
}

impl Canvas for PixelBuffer {
    #[inline]
    fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    fn height(&self) -> i32 {
        self.height
    }

    fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !self.is_point_in_image(x, y) {
            return None;
        }
        Some(Color::from_packed(self.pixels[self.index(x, y)]))
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        assert!(
            self.is_point_in_image(x, y),
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        let i = self.index(x, y);
        self.pixels[i] = color.to_packed();
    }

    fn fill_rect(&mut self, min: IVec2, max: IVec2, color: Color) {
        let (min, max) = clip_rect(min, max, self.width, self.height);
        if min.x >= max.x {
            return;
        }
        let packed = color.to_packed();
        for y in min.y..max.y {
            let row = self.index(min.x, y)..self.index(max.x, y);
            self.pixels[row].fill(packed);
        }
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_packed());
    }
}

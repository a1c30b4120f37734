/// Output rectangle in physical framebuffer pixels.
///
/// Derived from the current surface size every frame; never cached.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Full-surface viewport anchored at the origin.
    #[inline]
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}

/// Straight RGBA clear color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ClearColor {
    /// Dark teal used by the starter frame.
    pub const SLATE: Self = Self::new(0.2, 0.3, 0.3, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for ClearColor {
    fn default() -> Self {
        Self::SLATE
    }
}

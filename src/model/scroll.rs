use crate::foundation::core::{Point, Rect, Size, Vec2};

/// Transient scroll position supplied by the host with every query. Never cached.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollState {
    /// Content offset of the viewport's top-left corner.
    pub offset: Point,
    /// Scroll velocity in points per second.
    pub velocity: Vec2,
    /// Visible region in content coordinates.
    pub viewport: Rect,
}

impl ScrollState {
    /// At rest at `offset`, seeing `viewport_size` worth of content.
    pub fn new(offset: Point, viewport_size: Size) -> Self {
        Self {
            offset,
            velocity: Vec2::ZERO,
            viewport: Rect::from_origin_size(offset, viewport_size),
        }
    }

    /// Same position, moving with `velocity`.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }
}

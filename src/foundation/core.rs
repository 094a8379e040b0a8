use crate::foundation::error::{LayoutError, LayoutResult};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Axis-aligned scale applied to an item around its own centre.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scale {
    /// Horizontal factor.
    pub sx: f64,
    /// Vertical factor.
    pub sy: f64,
}

impl Scale {
    /// No scaling.
    pub const IDENTITY: Self = Self { sx: 1.0, sy: 1.0 };

    /// Same factor on both axes.
    pub fn uniform(s: f64) -> Self {
        Self { sx: s, sy: s }
    }

    /// Affine that scales about `center`, i.e. leaves `center` fixed.
    pub fn to_affine_about(self, center: Point) -> Affine {
        let c = center.to_vec2();
        Affine::translate(c) * Affine::scale_non_uniform(self.sx, self.sy) * Affine::translate(-c)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Insets around the scrollable content, in points.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Edges {
    /// Leading inset.
    pub left: f64,
    /// Trailing inset.
    pub right: f64,
    /// Top inset.
    pub top: f64,
    /// Bottom inset.
    pub bottom: f64,
}

impl Edges {
    /// All four edges set to `v`.
    pub fn uniform(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    /// Only the horizontal edges set.
    pub fn horizontal(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> LayoutResult<()> {
        for (name, v) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(LayoutError::invalid_descriptor(format!(
                    "inset {name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        Ok(())
    }
}

/// Strict overlap test; rects that only touch, or have zero area, do not intersect.
pub(crate) fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Shrinks `rect` by `amount` on every side, never below zero size.
pub(crate) fn shrink(rect: Rect, amount: f64) -> Rect {
    let x0 = rect.x0 + amount;
    let y0 = rect.y0 + amount;
    Rect::new(x0, y0, (rect.x1 - amount).max(x0), (rect.y1 - amount).max(y0))
}

pub(crate) fn require_finite_non_negative(name: &str, v: f64) -> LayoutResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(LayoutError::invalid_config(format!(
            "{name} must be finite and >= 0 (got {v})"
        )));
    }
    Ok(())
}

pub(crate) fn require_unit_interval(name: &str, v: f64) -> LayoutResult<()> {
    if !(0.0..=1.0).contains(&v) {
        return Err(LayoutError::invalid_config(format!(
            "{name} must be in [0, 1] (got {v})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

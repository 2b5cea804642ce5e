// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::types::vec2::Vec2;

/// Axis-aligned rectangle in world coordinates (Y-up).
///
/// Stored as its bottom-left (`min`) and top-right (`max`) corners; the
/// top-left/bottom-right view used by the collision code is exposed through
/// [`Rect::left`], [`Rect::top`], [`Rect::right`] and [`Rect::bottom`].
///
/// Invariants:
/// - `min` components are less than or equal to `max` components for
///   well-formed input. Constructors do not validate; NaN or inverted extents
///   produce rectangles that never overlap anything.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    min: Vec2,
    max: Vec2,
}

impl Rect {
    /// Constructs a rectangle from its minimum and maximum corners.
    #[must_use]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Builds a rectangle centered at `center` spanning `width × height`.
    ///
    /// The box covers `[x - w/2, x + w/2] × [y - h/2, y + h/2]`.
    #[must_use]
    pub fn from_center_size(center: Vec2, width: f64, height: f64) -> Self {
        let half = Vec2::new(width * 0.5, height * 0.5);
        Self::new(center - half, center + half)
    }

    /// Returns the minimum (bottom-left) corner.
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum (top-right) corner.
    #[must_use]
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Smallest X.
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.min.x()
    }

    /// Largest X.
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.max.x()
    }

    /// Largest Y.
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.max.y()
    }

    /// Smallest Y.
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.min.y()
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right() - self.left()
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top() - self.bottom()
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max).scale(0.5)
    }

    /// The four corners in the order top-left, top-right, bottom-left,
    /// bottom-right.
    #[must_use]
    pub const fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.right(), self.top()),
            Vec2::new(self.left(), self.bottom()),
            Vec2::new(self.right(), self.bottom()),
        ]
    }

    /// Returns `true` if `p` lies inside the closed rectangle.
    #[must_use]
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.left() <= p.x()
            && p.x() <= self.right()
            && self.bottom() <= p.y()
            && p.y() <= self.top()
    }

    /// Returns the rectangle moved by `delta`.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.min + delta, self.max + delta)
    }

    /// Returns `true` if this rectangle overlaps `other`.
    ///
    /// Two rectangles that are strictly separated on either axis never
    /// overlap. Otherwise they overlap only when a corner of one lies inside
    /// the other (edges inclusive). A "plus" arrangement, where a tall thin
    /// box crosses a wide flat one without either containing a corner of the
    /// other, is therefore not an overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.right() < other.left()
            || other.right() < self.left()
            || self.top() < other.bottom()
            || other.top() < self.bottom()
        {
            return false;
        }
        other.corners().into_iter().any(|c| self.contains_point(c))
            || self.corners().into_iter().any(|c| other.contains_point(c))
    }
}

/// Free-function form of [`Rect::overlaps`].
#[must_use]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn rect(cx: f64, cy: f64, w: f64, h: f64) -> Rect {
        Rect::from_center_size(Vec2::new(cx, cy), w, h)
    }

    #[test]
    fn edges_follow_y_up_convention() {
        let r = rect(0.0, 10.0, 10.0, 4.0);
        assert_eq!(r.left(), -5.0);
        assert_eq!(r.right(), 5.0);
        assert_eq!(r.top(), 12.0);
        assert_eq!(r.bottom(), 8.0);
        assert_eq!(r.center().to_array(), [0.0, 10.0]);
        assert_eq!(r.width(), 10.0);
        assert_eq!(r.height(), 4.0);
    }

    #[test]
    fn touching_edges_overlap() {
        assert!(rect(0.0, 0.0, 10.0, 10.0).overlaps(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(rect(0.0, 0.0, 10.0, 10.0).overlaps(&rect(10.0, 10.0, 10.0, 10.0)));
        assert!(!rect(0.0, 0.0, 10.0, 10.0).overlaps(&rect(10.01, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn containment_counts_as_overlap() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(5.0, -5.0, 2.0, 2.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn plus_shape_without_corner_containment_is_not_overlap() {
        let wide = rect(0.0, 0.0, 30.0, 4.0);
        let tall = rect(0.0, 0.0, 4.0, 30.0);
        assert!(!wide.overlaps(&tall));
        assert!(!tall.overlaps(&wide));
    }

    #[test]
    fn nan_extents_never_overlap() {
        let bad = rect(f64::NAN, 0.0, 10.0, 10.0);
        assert!(!bad.overlaps(&rect(0.0, 0.0, 10.0, 10.0)));
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Planar vector used for actor positions, hitbox extents and corrections.
///
/// * Components are world-space units with Y pointing up.
/// * May represent either a point or a displacement depending on context.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    data: [f64; 2],
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f64; 2] {
        self.data
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x() * scalar, self.y() * scalar)
    }

    /// Returns `true` if both components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x() == 0.0 && self.y() == 0.0
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Self { data: value }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y())
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Vec2::new(1.0, -2.0);
        let b = Vec2::new(-3.0, 4.5);
        assert_eq!((a + b).to_array(), [-2.0, 2.5]);
        assert_eq!((a - b).to_array(), [4.0, -6.5]);
        assert_eq!((-a).to_array(), [-1.0, 2.0]);
        assert_eq!(a.scale(2.0).to_array(), [2.0, -4.0]);

        let mut v = Vec2::ZERO;
        v += a;
        v -= Vec2::new(1.0, 0.0);
        assert_eq!(v.to_array(), [0.0, -2.0]);
        assert!(Vec2::ZERO.is_zero());
        assert!(!v.is_zero());
    }
}

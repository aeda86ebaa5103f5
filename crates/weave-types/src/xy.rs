use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point in the 2D plane of a yarn cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

impl Xy {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// z component of the cross product, used for signed areas.
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Xy {
    type Output = Xy;
    fn add(self, rhs: Self) -> Self::Output {
        Xy::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Xy {
    type Output = Xy;
    fn sub(self, rhs: Self) -> Self::Output {
        Xy::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Xy {
    type Output = Xy;
    fn mul(self, rhs: f64) -> Self::Output {
        Xy::new(self.x * rhs, self.y * rhs)
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Complex number / 2D point value type.
//!
//! The same value serves two roles: the center of a circle in the plane,
//! and a complex number in the complex Descartes theorem. Every operation
//! returns a new value; there is no in-place mutation.

use std::ops::{Add, Mul, Sub};

/// A complex number `a + bi`, doubling as the 2D point `(a, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    /// Real part / x coordinate.
    pub a: f64,
    /// Imaginary part / y coordinate.
    pub b: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { a: 0.0, b: 0.0 };

    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Componentwise sum.
    pub fn add(self, other: Complex) -> Complex {
        Complex::new(self.a + other.a, self.b + other.b)
    }

    /// Componentwise difference.
    pub fn sub(self, other: Complex) -> Complex {
        Complex::new(self.a - other.a, self.b - other.b)
    }

    /// Scalar multiple.
    pub fn scale(self, k: f64) -> Complex {
        Complex::new(self.a * k, self.b * k)
    }

    /// Complex multiplication.
    pub fn mul(self, other: Complex) -> Complex {
        Complex::new(
            self.a * other.a - self.b * other.b,
            self.a * other.b + other.a * self.b,
        )
    }

    /// Principal complex square root, via polar form.
    ///
    /// The modulus of the result is the fourth root of `a² + b²` and its
    /// argument is half of `atan2(b, a)`. For the zero input this yields
    /// zero, since `f64::atan2(0.0, 0.0)` is `0.0` in Rust; the degenerate
    /// circle candidates that arise from a zero radicand are discarded by
    /// candidate validation, not here.
    pub fn sqrt(self) -> Complex {
        let m = (self.a * self.a + self.b * self.b).sqrt().sqrt();
        let angle = self.b.atan2(self.a) / 2.0;
        Complex::new(m * angle.cos(), m * angle.sin())
    }

    /// Modulus (Euclidean length).
    pub fn norm(self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Euclidean distance to another point.
    pub fn dist(self, other: Complex) -> f64 {
        self.sub(other).norm()
    }

    /// Whether both components are finite.
    pub fn is_finite(self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        Complex::add(self, other)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex::sub(self, other)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, k: f64) -> Complex {
        self.scale(k)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::mul(self, other)
    }
}

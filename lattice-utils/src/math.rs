//! Numeric primitives shared by the noise generators.
//!
//! Everything here is generic over [`Scalar`] so the same code serves both
//! single- and double-precision callers.

use std::fmt::Debug;

use num_traits::Float;

/// A real number type the noise generators can be evaluated in.
///
/// Implemented for `f32` and `f64`.
pub trait Scalar: Float + Debug + Send + Sync + 'static {
    /// Converts an `f64` literal or sample into this precision.
    fn from_f64(value: f64) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// A fixed-size vector of `N` scalar components.
pub type Vector<T, const N: usize> = [T; N];

/// Floors `value` to the nearest integer below it.
///
/// Non-finite or out-of-range input maps to `0`.
#[inline]
#[must_use]
pub fn floor<T: Scalar>(value: T) -> i64 {
    value.floor().to_i64().unwrap_or(0)
}

/// Smoothstep ease curve `t² · (3 − 2t)`.
///
/// Has zero first derivative at `t = 0` and `t = 1`.
#[inline]
#[must_use]
pub fn curve<T: Scalar>(t: T) -> T {
    let two = T::from_f64(2.0);
    let three = T::from_f64(3.0);
    t * t * (three - two * t)
}

/// Linear interpolation `a + t · (b − a)`.
#[inline]
#[must_use]
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a + t * (b - a)
}

/// Dot product of two vectors.
#[inline]
#[must_use]
pub fn dot<T: Scalar, const N: usize>(a: &Vector<T, N>, b: &Vector<T, N>) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&l, &r)| acc + l * r)
}

/// Squared euclidean length.
#[inline]
#[must_use]
pub fn length_squared<T: Scalar, const N: usize>(v: &Vector<T, N>) -> T {
    dot(v, v)
}

/// Scales `v` to unit length.
///
/// A zero vector produces NaN components; callers must not pass one.
#[inline]
#[must_use]
pub fn normalize<T: Scalar, const N: usize>(v: &Vector<T, N>) -> Vector<T, N> {
    let inv = length_squared(v).sqrt().recip();
    v.map(|c| c * inv)
}

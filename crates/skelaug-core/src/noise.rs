//! Random coordinate draws over an injected RNG.
//!
//! Gaussian samples use the Box–Muller transform on uniform draws from the
//! caller's generator, so a seeded `StdRng` reproduces the same noise on
//! every platform supported by `rand`.

use rand::Rng;

use crate::{Real, Vec3};

/// Uniform real in `[lo, hi)`; returns `lo` exactly when `lo == hi`.
#[inline]
pub fn uniform_real<R>(rng: &mut R, lo: Real, hi: Real) -> Real
where
    R: Rng + ?Sized,
{
    if lo == hi {
        return lo;
    }
    lo + (hi - lo) * rng.random::<Real>()
}

/// Two independent standard-normal samples from one Box–Muller pair.
#[inline]
pub fn standard_normal_pair<R>(rng: &mut R) -> (Real, Real)
where
    R: Rng + ?Sized,
{
    // u1 in (0, 1] keeps ln(u1) finite.
    let u1 = 1.0 - rng.random::<Real>();
    let u2 = rng.random::<Real>();
    let radius = (-2.0 * u1.ln()).sqrt();
    let (sin, cos) = (std::f64::consts::TAU * u2).sin_cos();
    (radius * cos, radius * sin)
}

/// One standard-normal sample.
#[inline]
pub fn standard_normal<R>(rng: &mut R) -> Real
where
    R: Rng + ?Sized,
{
    standard_normal_pair(rng).0
}

/// Zero-mean Gaussian noise with standard deviation `sigma`, independent per
/// component.
///
/// Uses two Box–Muller pairs (four uniform draws). `sigma == 0` yields an
/// exact zero vector without consuming randomness.
#[inline]
pub fn gaussian_vec3<R>(rng: &mut R, sigma: Real) -> Vec3
where
    R: Rng + ?Sized,
{
    if sigma == 0.0 {
        return Vec3::zeros();
    }
    let (x, y) = standard_normal_pair(rng);
    let (z, _) = standard_normal_pair(rng);
    Vec3::new(sigma * x, sigma * y, sigma * z)
}

/// Coordinate with each component drawn uniformly from `[lo, hi)`.
#[inline]
pub fn uniform_vec3<R>(rng: &mut R, lo: Real, hi: Real) -> Vec3
where
    R: Rng + ?Sized,
{
    Vec3::new(
        uniform_real(rng, lo, hi),
        uniform_real(rng, lo, hi),
        uniform_real(rng, lo, hi),
    )
}

//! Fractal sums and seamlessly tiling variants of [`PerlinNoise`].
//!
//! Turbulence adds octaves `noise(f · p) / f`, starting at the given
//! frequency and halving it while it stays `>= 1`. The first octave is always
//! evaluated, even when the starting frequency is already below `1`.
//!
//! Tileable noise blends the sample with its images shifted by one period on
//! each axis, weighted by the distance to the opposite edge of the period box.
//! The result matches at `coord = 0` and `coord = period`. Periods must be
//! positive and frequencies finite and positive; neither is checked here.

use crate::math::Scalar;
use crate::noise::PerlinNoise;

/// Sum `octave(f) / f` over halving frequencies, evaluating at least once.
#[inline]
fn octaves<T: Scalar>(mut freq: T, mut octave: impl FnMut(T) -> T) -> T {
    let half = T::from_f64(0.5);
    let mut total = octave(freq) / freq;
    freq = freq * half;
    while freq >= T::one() {
        total = total + octave(freq) / freq;
        freq = freq * half;
    }
    total
}

impl<T: Scalar> PerlinNoise<T> {
    /// 1D turbulence starting at `freq`.
    #[must_use]
    pub fn turbulence_1d(&self, x: T, freq: T) -> T {
        octaves(freq, |f| self.noise_1d(f * x))
    }

    /// 2D turbulence starting at `freq`.
    #[must_use]
    pub fn turbulence_2d(&self, x: T, y: T, freq: T) -> T {
        octaves(freq, |f| self.noise_2d(f * x, f * y))
    }

    /// 3D turbulence starting at `freq`.
    #[must_use]
    pub fn turbulence_3d(&self, x: T, y: T, z: T, freq: T) -> T {
        octaves(freq, |f| self.noise_3d(f * x, f * y, f * z))
    }

    /// 1D noise repeating every `w`.
    #[must_use]
    pub fn tileable_noise_1d(&self, x: T, w: T) -> T {
        (self.noise_1d(x) * (w - x) + self.noise_1d(x - w) * x) / w
    }

    /// 2D noise repeating every `w` along x and `h` along y.
    #[must_use]
    pub fn tileable_noise_2d(&self, x: T, y: T, w: T, h: T) -> T {
        let (wx, ox) = (w - x, x);
        let (wy, oy) = (h - y, y);

        (self.noise_2d(x, y) * wx * wy
            + self.noise_2d(x - w, y) * ox * wy
            + self.noise_2d(x, y - h) * wx * oy
            + self.noise_2d(x - w, y - h) * ox * oy)
            / (w * h)
    }

    /// 3D noise repeating every `w`, `h` and `d` along x, y and z.
    #[must_use]
    pub fn tileable_noise_3d(&self, x: T, y: T, z: T, w: T, h: T, d: T) -> T {
        let (wx, ox) = (w - x, x);
        let (wy, oy) = (h - y, y);
        let (wz, oz) = (d - z, z);

        let near = self.noise_3d(x, y, z) * wx * wy
            + self.noise_3d(x - w, y, z) * ox * wy
            + self.noise_3d(x, y - h, z) * wx * oy
            + self.noise_3d(x - w, y - h, z) * ox * oy;
        let far = self.noise_3d(x, y, z - d) * wx * wy
            + self.noise_3d(x - w, y, z - d) * ox * wy
            + self.noise_3d(x, y - h, z - d) * wx * oy
            + self.noise_3d(x - w, y - h, z - d) * ox * oy;

        (near * wz + far * oz) / (w * h * d)
    }

    /// Turbulence of [`Self::tileable_noise_1d`]; the period scales with each octave.
    #[must_use]
    pub fn tileable_turbulence_1d(&self, x: T, w: T, freq: T) -> T {
        octaves(freq, |f| self.tileable_noise_1d(f * x, f * w))
    }

    /// Turbulence of [`Self::tileable_noise_2d`]; the periods scale with each octave.
    #[must_use]
    pub fn tileable_turbulence_2d(&self, x: T, y: T, w: T, h: T, freq: T) -> T {
        octaves(freq, |f| self.tileable_noise_2d(f * x, f * y, f * w, f * h))
    }

    /// Turbulence of [`Self::tileable_noise_3d`]; the periods scale with each octave.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn tileable_turbulence_3d(&self, x: T, y: T, z: T, w: T, h: T, d: T, freq: T) -> T {
        octaves(freq, |f| {
            self.tileable_noise_3d(f * x, f * y, f * z, f * w, f * h, f * d)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise() -> PerlinNoise<f64> {
        PerlinNoise::from_seed(2005)
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn turbulence_below_one_runs_one_octave() {
        let noise = noise();
        let (x, y, z) = (3.3, 1.7, 0.9);

        let t2 = noise.turbulence_2d(x, y, 0.5);
        assert_eq!(t2, noise.noise_2d(0.5 * x, 0.5 * y) / 0.5);
        assert_ne!(t2, 0.0, "one octave must still contribute");

        let t3 = noise.turbulence_3d(x, y, z, 0.5);
        assert_eq!(t3, noise.noise_3d(0.5 * x, 0.5 * y, 0.5 * z) / 0.5);

        assert_eq!(noise.turbulence_1d(x, 0.25), noise.noise_1d(0.25 * x) / 0.25);
    }

    #[test]
    fn turbulence_sums_halving_octaves() {
        let noise = noise();
        let (x, y) = (0.37, 1.12);
        let expected = noise.noise_2d(4.0 * x, 4.0 * y) / 4.0
            + noise.noise_2d(2.0 * x, 2.0 * y) / 2.0
            + noise.noise_2d(x, y);
        assert!((noise.turbulence_2d(x, y, 4.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn turbulence_stops_below_one() {
        let noise = noise();
        let (x, y, z) = (0.37, 1.12, 2.5);
        // 3.0 -> 1.5 -> 0.75 stops after two octaves.
        let expected = noise.noise_3d(3.0 * x, 3.0 * y, 3.0 * z) / 3.0
            + noise.noise_3d(1.5 * x, 1.5 * y, 1.5 * z) / 1.5;
        assert!((noise.turbulence_3d(x, y, z, 3.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn tileable_1d_seam() {
        let noise = noise();
        let w = 4.0;
        assert!((noise.tileable_noise_1d(0.0, w) - noise.tileable_noise_1d(w, w)).abs() < 1e-5);
        let w = 5.5;
        assert!((noise.tileable_noise_1d(0.0, w) - noise.tileable_noise_1d(w, w)).abs() < 1e-5);
    }

    #[test]
    fn tileable_2d_seams() {
        let noise = noise();
        let (w, h) = (4.0, 6.5);
        for i in 0..=20 {
            let t = f64::from(i) * 0.3;
            let left = noise.tileable_noise_2d(0.0, t, w, h);
            let right = noise.tileable_noise_2d(w, t, w, h);
            assert!((left - right).abs() < 1e-5, "x seam at y={t}: {left} != {right}");

            let top = noise.tileable_noise_2d(t, 0.0, w, h);
            let bottom = noise.tileable_noise_2d(t, h, w, h);
            assert!((top - bottom).abs() < 1e-5, "y seam at x={t}: {top} != {bottom}");
        }
    }

    #[test]
    fn tileable_3d_seams() {
        let noise = noise();
        let (w, h, d) = (4.0, 3.0, 5.0);
        for (a, b) in [(0.3, 1.7), (2.2, 0.9), (1.1, 2.6)] {
            let x0 = noise.tileable_noise_3d(0.0, a, b, w, h, d);
            let x1 = noise.tileable_noise_3d(w, a, b, w, h, d);
            let y0 = noise.tileable_noise_3d(a, 0.0, b, w, h, d);
            let y1 = noise.tileable_noise_3d(a, h, b, w, h, d);
            let z0 = noise.tileable_noise_3d(a, b, 0.0, w, h, d);
            let z1 = noise.tileable_noise_3d(a, b, d, w, h, d);
            assert!((x0 - x1).abs() < 1e-5);
            assert!((y0 - y1).abs() < 1e-5);
            assert!((z0 - z1).abs() < 1e-5);
        }
    }

    #[test]
    fn tileable_is_continuous_inside_box() {
        let noise = noise();
        let (w, h) = (4.0, 4.0);
        let a = noise.tileable_noise_2d(1.3, 2.1, w, h);
        let b = noise.tileable_noise_2d(1.3 + 1e-6, 2.1, w, h);
        assert!((a - b).abs() < 1e-4);
    }

    #[test]
    fn tileable_turbulence_seams() {
        let noise = noise();
        let (w, h, d) = (8.0, 8.0, 8.0);
        for t in [0.25, 1.5, 3.75, 6.1] {
            let left = noise.tileable_turbulence_2d(0.0, t, w, h, 4.0);
            let right = noise.tileable_turbulence_2d(w, t, w, h, 4.0);
            assert!((left - right).abs() < 1e-5, "{left} != {right}");

            let near = noise.tileable_turbulence_3d(t, 0.5, 0.0, w, h, d, 2.0);
            let far = noise.tileable_turbulence_3d(t, 0.5, d, w, h, d, 2.0);
            assert!((near - far).abs() < 1e-5, "{near} != {far}");

            let start = noise.tileable_turbulence_1d(0.0, w, 2.0);
            let end = noise.tileable_turbulence_1d(w, w, 2.0);
            assert!((start - end).abs() < 1e-5);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn tileable_turbulence_below_one_runs_one_octave() {
        let noise = noise();
        let value = noise.tileable_turbulence_2d(1.25, 2.5, 4.0, 4.0, 0.5);
        assert_eq!(value, noise.tileable_noise_2d(0.625, 1.25, 2.0, 2.0) / 0.5);
    }

    #[test]
    fn tileable_zero_period_is_not_finite() {
        let noise = noise();
        assert!(!noise.tileable_noise_1d(0.5, 0.0).is_finite());
    }
}

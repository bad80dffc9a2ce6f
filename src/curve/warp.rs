//! Interpolation shapes between two control points.
//!
//! A warp maps the normalized position between two neighbouring control points
//! to a normalized blend factor. The blend factor then mixes the two points'
//! attenuations.

/// Interpolation shape used between bracketing control points.
///
/// All warps map a normalized input [0, 1] to a normalized output [0, 1] with
/// `apply(0) == 0` and `apply(1) == 1`, so the curve passes through every
/// control point regardless of the warp chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Warp {
    /// Concave logarithmic warp, `log10(1 + 9t)`.
    ///
    /// Rises quickly near the lower control point and flattens towards the
    /// upper one, which spreads the quiet end of each segment over more steps.
    #[default]
    Logarithmic,

    /// Straight-line interpolation (constant dB per index step)
    Linear,
}

impl Warp {
    /// Apply the warp to a normalized position.
    ///
    /// # Arguments
    ///
    /// * `t` - Position between the lower and upper control point, clamped to [0, 1]
    ///
    /// # Examples
    ///
    /// ```
    /// use volcurve::Warp;
    ///
    /// assert_eq!(Warp::Linear.apply(0.25), 0.25);
    /// assert!((Warp::Logarithmic.apply(0.5) - 0.7404).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Warp::Logarithmic => (1.0 + 9.0 * t).log10() / 10.0_f32.log10(),
            Warp::Linear => t,
        }
    }

    /// Blend between two decibel values with this warp.
    ///
    /// `lo_db` is returned for `t = 0` and `hi_db` for `t = 1`.
    #[inline]
    pub fn blend(&self, t: f32, lo_db: f32, hi_db: f32) -> f32 {
        lo_db + self.apply(t) * (hi_db - lo_db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_endpoints() {
        for warp in [Warp::Logarithmic, Warp::Linear] {
            assert!(approx_eq(warp.apply(0.0), 0.0));
            assert!(approx_eq(warp.apply(1.0), 1.0));
        }
    }

    #[test]
    fn test_logarithmic_values() {
        let warp = Warp::Logarithmic;
        assert!(approx_eq(warp.apply(0.5), 5.5_f32.log10()));
        assert!(approx_eq(warp.apply(0.1), 1.9_f32.log10()));
    }

    #[test]
    fn test_logarithmic_is_concave() {
        let warp = Warp::Logarithmic;
        for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
            assert!(warp.apply(t) > t);
        }
    }

    #[test]
    fn test_logarithmic_is_increasing() {
        let warp = Warp::Logarithmic;
        let mut previous = warp.apply(0.0);
        for step in 1..=100 {
            let value = warp.apply(step as f32 / 100.0);
            assert!(value > previous);
            previous = value;
        }
    }

    #[test]
    fn test_clamping() {
        assert_eq!(Warp::Linear.apply(-0.5), 0.0);
        assert_eq!(Warp::Linear.apply(1.5), 1.0);
        assert!(approx_eq(Warp::Logarithmic.apply(2.0), 1.0));
    }

    #[test]
    fn test_blend() {
        assert!(approx_eq(Warp::Linear.blend(0.5, -20.0, 0.0), -10.0));
        assert!(approx_eq(Warp::Logarithmic.blend(0.0, -20.0, 0.0), -20.0));
        assert!(approx_eq(Warp::Logarithmic.blend(1.0, -20.0, 0.0), 0.0));
    }

    #[test]
    fn test_default() {
        assert_eq!(Warp::default(), Warp::Logarithmic);
    }
}

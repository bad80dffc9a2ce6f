//! Volume curves: UI volume steps to attenuation in decibels.
//!
//! A [`VolumeCurve`] is a sorted, duplicate-free list of [`CurvePoint`]s on the
//! curve's own index axis. Evaluation rescales a caller's UI index from its
//! `[min, max]` bounds onto that axis, finds the bracketing pair of points and
//! blends their attenuations with the curve's [`Warp`].

mod point;
pub mod presets;
mod warp;

pub use point::CurvePoint;
pub use warp::Warp;

use crate::error::CurveError;
use crate::gain;
use log::{trace, warn};

/// Attenuation reported for forced silence, in decibels.
///
/// Lower than any attenuation a real curve table defines, so it is never
/// confused with the quietest control point.
pub const VOLUME_MIN_DB: f32 = -758.0;

/// Outcome of evaluating a volume curve.
///
/// # Examples
///
/// ```
/// use volcurve::{Attenuation, VOLUME_MIN_DB};
///
/// assert_eq!(Attenuation::Db(-6.0).to_db(), -6.0);
/// assert_eq!(Attenuation::Mute.to_db(), VOLUME_MIN_DB);
/// assert!(Attenuation::Invalid.to_db().is_nan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attenuation {
    /// Attenuation in decibels taken from the curve
    Db(f32),
    /// Forced silence: index 0 below the valid range, or below the first control point
    Mute,
    /// The index bounds were unusable; no gain should be applied
    Invalid,
}

impl Attenuation {
    /// Lowers the outcome to a raw decibel value.
    ///
    /// `Mute` becomes [`VOLUME_MIN_DB`] and `Invalid` becomes NaN.
    #[inline]
    pub fn to_db(self) -> f32 {
        match self {
            Attenuation::Db(db) => db,
            Attenuation::Mute => VOLUME_MIN_DB,
            Attenuation::Invalid => f32::NAN,
        }
    }

    /// Returns the decibel value from the curve, if there is one.
    pub fn db(self) -> Option<f32> {
        match self {
            Attenuation::Db(db) => Some(db),
            _ => None,
        }
    }

    /// Converts the outcome to a linear amplitude factor.
    ///
    /// Returns `None` for [`Attenuation::Invalid`]; a mute yields `0.0`.
    pub fn to_amplitude(self) -> Option<f32> {
        match self {
            Attenuation::Db(db) => Some(gain::db_to_amplitude(db)),
            Attenuation::Mute => Some(0.0),
            Attenuation::Invalid => None,
        }
    }

    /// True for forced silence.
    pub fn is_mute(&self) -> bool {
        matches!(self, Attenuation::Mute)
    }

    /// True when the bounds were unusable.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Attenuation::Invalid)
    }
}

impl From<Attenuation> for f32 {
    fn from(attenuation: Attenuation) -> Self {
        attenuation.to_db()
    }
}

/// A piecewise volume curve.
///
/// The point list is fixed at construction, which makes evaluation a pure
/// function of its arguments; a curve can be shared across threads freely.
///
/// # Examples
///
/// ```
/// use volcurve::VolumeCurve;
///
/// let curve = VolumeCurve::from_table(&[(0, -8000), (50, -2000), (100, 0)]).unwrap();
///
/// assert_eq!(curve.vol_index_to_db(0, 0, 100), -80.0);
/// assert_eq!(curve.vol_index_to_db(100, 0, 100), 0.0);
/// assert!((curve.vol_index_to_db(75, 0, 100) - -5.19).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeCurve {
    points: Vec<CurvePoint>,
    warp: Warp,
}

impl VolumeCurve {
    /// Creates a curve from a set of control points.
    ///
    /// Points may be given in any order; they are sorted by index.
    ///
    /// # Errors
    ///
    /// * [`CurveError::Empty`] if no points are given
    /// * [`CurveError::DuplicateIndex`] if two points share an index
    pub fn new(points: impl IntoIterator<Item = CurvePoint>) -> Result<Self, CurveError> {
        let mut points: Vec<CurvePoint> = points.into_iter().collect();
        if points.is_empty() {
            return Err(CurveError::Empty);
        }
        points.sort_unstable();
        if let Some(pair) = points.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(CurveError::DuplicateIndex(pair[0].index));
        }
        Ok(Self {
            points,
            warp: Warp::default(),
        })
    }

    /// Creates a curve from `(index, attenuation in millibel)` pairs.
    pub fn from_table(table: &[(u32, i32)]) -> Result<Self, CurveError> {
        Self::new(table.iter().copied().map(CurvePoint::from))
    }

    /// Sets the interpolation shape used between control points.
    pub fn with_warp(mut self, warp: Warp) -> Self {
        self.warp = warp;
        self
    }

    pub fn warp(&self) -> Warp {
        self.warp
    }

    /// Control points, sorted ascending by index.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a curve has at least one point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lowest attenuation defined by a control point, in decibels.
    pub fn min_attenuation_db(&self) -> f32 {
        let mb = self
            .points
            .iter()
            .map(|point| point.attenuation_mb)
            .fold(i32::MAX, i32::min);
        mb as f32 / 100.0
    }

    /// Highest attenuation defined by a control point, in decibels.
    pub fn max_attenuation_db(&self) -> f32 {
        let mb = self
            .points
            .iter()
            .map(|point| point.attenuation_mb)
            .fold(i32::MIN, i32::max);
        mb as f32 / 100.0
    }

    /// Converts a UI volume index to decibels.
    ///
    /// Equivalent to `self.attenuation(..).to_db()`: a mute is returned as
    /// [`VOLUME_MIN_DB`] and unusable bounds as NaN.
    #[inline]
    pub fn vol_index_to_db(&self, index_in_ui: i32, vol_index_min: i32, vol_index_max: i32) -> f32 {
        self.attenuation(index_in_ui, vol_index_min, vol_index_max).to_db()
    }

    /// Evaluates the curve for a UI volume index.
    ///
    /// # Arguments
    ///
    /// * `index_in_ui` - Volume step as seen by the caller
    /// * `vol_index_min` - Lowest valid step in the caller's context
    /// * `vol_index_max` - Highest valid step in the caller's context
    ///
    /// # Behaviour
    ///
    /// 1. Negative bounds give [`Attenuation::Invalid`].
    /// 2. Index 0 below `vol_index_min` gives [`Attenuation::Mute`]; any other
    ///    out-of-range index is clamped into the bounds.
    /// 3. The index is scaled onto the curve's axis with truncating integer
    ///    division: `(last - first + 1) * (index - min) / (max - min)`.
    ///    Equal bounds skip the scaling and use the index as is.
    /// 4. Past the last point the last attenuation applies; below the first
    ///    point the result is a mute. Between two points the attenuations are
    ///    blended with the curve's [`Warp`].
    ///
    /// # Panics
    ///
    /// Panics if the curve has no control points, which construction rules out.
    pub fn attenuation(
        &self,
        index_in_ui: i32,
        vol_index_min: i32,
        vol_index_max: i32,
    ) -> Attenuation {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            panic!("invalid volume curve: no control points");
        };
        if vol_index_min < 0 || vol_index_max < 0 {
            return Attenuation::Invalid;
        }

        let mut index = index_in_ui;
        if index < vol_index_min {
            if index == 0 {
                trace!("forcing mute for index 0 with min index {vol_index_min}");
                return Attenuation::Mute;
            }
            trace!("remapping index from {index} to min index {vol_index_min}");
            index = vol_index_min;
        } else if index > vol_index_max {
            trace!("remapping index from {index} to max index {vol_index_max}");
            index = vol_index_max;
        }

        let curve_index = if vol_index_min == vol_index_max {
            if index != vol_index_min {
                // Clamping above makes this unreachable; kept as a guard.
                warn!(
                    "invalid volume index range & value: [{vol_index_min} {vol_index_max}] {index}"
                );
                return Attenuation::Invalid;
            }
            i64::from(index)
        } else {
            let steps = 1 + i64::from(last.index) - i64::from(first.index);
            steps * (i64::from(index) - i64::from(vol_index_min))
                / (i64::from(vol_index_max) - i64::from(vol_index_min))
        };

        let rank = self
            .points
            .partition_point(|point| i64::from(point.index) < curve_index);
        if rank == self.points.len() {
            return Attenuation::Db(last.attenuation_db());
        }
        if rank == 0 {
            if curve_index != i64::from(first.index) {
                return Attenuation::Mute;
            }
            return Attenuation::Db(first.attenuation_db());
        }

        let lo = &self.points[rank - 1];
        let hi = &self.points[rank];
        let lo_db = lo.attenuation_db();
        let hi_db = hi.attenuation_db();
        let lo_index = lo.index as f32;
        let hi_index = hi.index as f32;

        let t = (curve_index as f32 - lo_index) / (hi_index - lo_index);
        let db = self.warp.blend(t, lo_db, hi_db);

        trace!(
            "vol index=[{} {} {}], dB=[{:.1} {:.1} {:.1}]",
            lo.index, curve_index, hi.index, lo_db, db, hi_db
        );
        Attenuation::Db(db)
    }
}

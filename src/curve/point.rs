use std::cmp::Ordering;
use std::fmt;

/// A single control point of a volume curve.
///
/// The attenuation is stored in millibel (hundredths of a decibel) so curve
/// tables stay exact integers. Points order and compare by `index` alone, which
/// is what keeps a curve duplicate-free.
///
/// # Examples
///
/// ```
/// use volcurve::CurvePoint;
///
/// let point = CurvePoint::new(20, -4000);
/// assert_eq!(point.attenuation_db(), -40.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CurvePoint {
    /// Position on the curve's native index axis
    pub index: u32,
    /// Attenuation at this index, in millibel
    pub attenuation_mb: i32,
}

impl CurvePoint {
    pub const fn new(index: u32, attenuation_mb: i32) -> Self {
        Self {
            index,
            attenuation_mb,
        }
    }

    /// Returns the attenuation converted to decibels.
    #[inline]
    pub fn attenuation_db(&self) -> f32 {
        self.attenuation_mb as f32 / 100.0
    }
}

impl From<(u32, i32)> for CurvePoint {
    fn from((index, attenuation_mb): (u32, i32)) -> Self {
        Self::new(index, attenuation_mb)
    }
}

impl PartialEq for CurvePoint {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for CurvePoint {}

impl PartialOrd for CurvePoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CurvePoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:3}, {:5})", self.index, self.attenuation_mb)
    }
}

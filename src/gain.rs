//! Conversions between decibels and linear amplitude factors.

use crate::curve::VOLUME_MIN_DB;

/// Converts an attenuation in dB to the corresponding amplitude factor.
///
/// Anything at or below [`VOLUME_MIN_DB`] is silence.
///
/// ```
/// use volcurve::gain::db_to_amplitude;
///
/// assert_eq!(db_to_amplitude(0.0), 1.0);
/// assert!((db_to_amplitude(-20.0) - 0.1).abs() < 1e-6);
/// assert_eq!(db_to_amplitude(-758.0), 0.0);
/// ```
pub fn db_to_amplitude(db: f32) -> f32 {
    if db <= VOLUME_MIN_DB {
        return 0.0;
    }
    10.0_f32.powf(db / 20.0)
}

/// Converts an amplitude factor to dB. Zero or negative amplitudes map to
/// [`VOLUME_MIN_DB`]; NaN passes through.
pub fn amplitude_to_db(amplitude: f32) -> f32 {
    if amplitude <= 0.0 {
        return VOLUME_MIN_DB;
    }
    let db = 20.0 * amplitude.log10();
    if db < VOLUME_MIN_DB { VOLUME_MIN_DB } else { db }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_db_to_amplitude() {
        assert_eq!(db_to_amplitude(0.0), 1.0);
        assert!((db_to_amplitude(20.0) - 10.0).abs() < EPSILON);
        assert!((db_to_amplitude(-20.0) - 0.1).abs() < EPSILON);
        assert!((db_to_amplitude(-40.0) - 0.01).abs() < EPSILON);
    }

    #[test]
    fn test_min_db_is_silent() {
        assert_eq!(db_to_amplitude(VOLUME_MIN_DB), 0.0);
        assert_eq!(db_to_amplitude(-1000.0), 0.0);
    }

    #[test]
    fn test_amplitude_to_db() {
        assert_eq!(amplitude_to_db(1.0), 0.0);
        assert!((amplitude_to_db(0.1) - -20.0).abs() < 1e-4);
        assert_eq!(amplitude_to_db(0.0), VOLUME_MIN_DB);
        assert_eq!(amplitude_to_db(-0.5), VOLUME_MIN_DB);
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(db_to_amplitude(f32::NAN).is_nan());
        assert!(amplitude_to_db(f32::NAN).is_nan());
    }
}

//! Built-in control-point tables.
//!
//! Each table is a list of `(index, attenuation in millibel)` pairs on a
//! 0-100 index axis, ready for [`VolumeCurve::from_table`](crate::VolumeCurve::from_table).
//!
//! ```
//! use volcurve::{VolumeCurve, presets};
//!
//! let curve = VolumeCurve::from_table(presets::DEFAULT_MEDIA_VOLUME_CURVE).unwrap();
//! assert!(curve.vol_index_to_db(15, 0, 15).abs() < 1e-4);
//! ```

/// General purpose curve
pub const DEFAULT_VOLUME_CURVE: &[(u32, i32)] = &[(1, -4950), (33, -3350), (66, -1700), (100, 0)];

/// Media playback on headsets and line outputs
pub const DEFAULT_MEDIA_VOLUME_CURVE: &[(u32, i32)] =
    &[(1, -5800), (20, -4000), (60, -1700), (100, 0)];

/// Media playback on the built-in speaker
pub const SPEAKER_MEDIA_VOLUME_CURVE: &[(u32, i32)] =
    &[(1, -5800), (20, -4000), (60, -1770), (100, 0)];

/// System sounds routed to external media devices; tops out 10 dB below full scale
pub const EXT_MEDIA_SYSTEM_VOLUME_CURVE: &[(u32, i32)] =
    &[(1, -5800), (20, -4000), (60, -2100), (100, -1000)];

/// System sounds
pub const DEFAULT_SYSTEM_VOLUME_CURVE: &[(u32, i32)] =
    &[(1, -2400), (33, -1800), (66, -1200), (100, -600)];

/// Unity gain at every index
pub const FULL_SCALE_VOLUME_CURVE: &[(u32, i32)] = &[(0, 0), (33, 0), (66, 0), (100, 0)];

/// -96 dB at every index
pub const SILENT_VOLUME_CURVE: &[(u32, i32)] =
    &[(0, -9600), (33, -9600), (66, -9600), (100, -9600)];

//! Volcurve - volume curves for audio policy code
//!
//! Converts UI volume steps into attenuation in decibels using piecewise
//! curves of `(index, attenuation)` control points, and groups those curves by
//! output device category.

pub mod curve;
#[cfg(feature = "dump")]
pub mod dump;
pub mod error;
pub mod gain;
pub mod registry;

// Re-export commonly used types at the crate root
pub use curve::{Attenuation, CurvePoint, VOLUME_MIN_DB, VolumeCurve, Warp, presets};
#[cfg(feature = "dump")]
pub use dump::{CurveDump, RegistryDump};
pub use error::{CurveError, RegistryError};
pub use registry::{
    AudioAttributes, ContentType, CurveRegistry, DeviceCategory, Scope, StreamType, Usage,
};

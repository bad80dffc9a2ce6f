//! Error types for curve construction and registry access.
//!
//! Evaluation itself never fails: abnormal outcomes of
//! [`VolumeCurve::attenuation`](crate::VolumeCurve::attenuation) are encoded in
//! [`Attenuation`](crate::Attenuation). These errors cover building curves and
//! registries, and looking up categories that were never registered.

use crate::registry::DeviceCategory;
use thiserror::Error;

/// Error returned when a set of control points cannot form a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// No control points were supplied
    #[error("volume curve needs at least one control point")]
    Empty,
    /// Two control points share the same index
    #[error("duplicate control point at index {0}")]
    DuplicateIndex(u32),
}

/// Error returned by [`CurveRegistry`](crate::CurveRegistry) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The lower index bound is above the upper one
    #[error("invalid volume index range: min {min} > max {max}")]
    InvalidIndexRange { min: i32, max: i32 },
    /// No curve is registered for the category
    #[error("no volume curve for {0}")]
    UnknownCategory(DeviceCategory),
}

//! Text dumps of curves and registries for diagnostics.
//!
//! The dumps are [`Display`](fmt::Display) adapters borrowing already built
//! state, so they can go straight into a log record or a `String`:
//!
//! ```
//! use volcurve::{CurveRegistry, DeviceCategory, Scope, StreamType, VolumeCurve};
//!
//! let registry = CurveRegistry::new(Scope::streams([StreamType::Music]), 0, 15)?
//!     .with_curve(DeviceCategory::Speaker, VolumeCurve::from_table(&[(0, -4200), (100, 0)])?);
//! registry.set_current_index(DeviceCategory::Speaker, 11);
//!
//! let summary = registry.dump(0, false).to_string();
//! assert!(summary.contains("DEVICE_CATEGORY_SPEAKER : 11, "));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::curve::VolumeCurve;
use crate::registry::CurveRegistry;
use std::fmt;

/// Renders a curve's points as `{ (idx, att), ... }`.
#[derive(Debug, Clone, Copy)]
pub struct CurveDump<'a> {
    curve: &'a VolumeCurve,
    spaces: usize,
}

impl fmt::Display for CurveDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" {")?;
        let points = self.curve.points();
        for (i, point) in points.iter().enumerate() {
            write!(f, "{:width$}{point}", "", width = self.spaces)?;
            f.write_str(if i + 1 == points.len() { " }\n" } else { ", " })?;
        }
        Ok(())
    }
}

/// Renders a registry either as a one-line summary or with every curve table.
#[derive(Debug, Clone, Copy)]
pub struct RegistryDump<'a> {
    registry: &'a CurveRegistry,
    spaces: usize,
    curve_points: bool,
}

impl RegistryDump<'_> {
    fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = self.spaces + 1;
        let (index_min, index_max) = self.registry.index_bounds();
        writeln!(
            f,
            "{:pad$} Can be muted  Index Min  Index Max  Index Cur [device : index]...",
            ""
        )?;
        write!(
            f,
            "{:pad$} {}         {:02}         {:02}         ",
            "",
            if self.registry.can_be_muted() { "true " } else { "false" },
            index_min,
            index_max
        )?;
        for (category, index) in self.registry.current_indices() {
            write!(f, "{category} : {index:02}, ")?;
        }
        writeln!(f)
    }

    fn fmt_curves(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spaces = self.spaces;
        let scope = self.registry.scope();
        writeln!(
            f,
            "{:spaces$}Volume Curves Streams/Attributes, Curve points Streams for device \
             category (index, attenuation in millibel)",
            ""
        )?;
        write!(f, "{:spaces$} Streams: ", "")?;
        for stream in scope.stream_types() {
            write!(f, "{stream}({}) ", stream.id())?;
        }
        writeln!(f, " ")?;

        let attributes = scope.attribute_sets();
        if !attributes.is_empty() {
            write!(f, "{:spaces$} Attributes:", "")?;
            for (i, attr) in attributes.iter().enumerate() {
                let indent = if i == 0 { 0 } else { spaces + 13 };
                writeln!(f, "{:indent$} {attr}", "")?;
            }
        }

        for (category, curve) in self.registry.curves() {
            write!(f, "{:spaces$} {category} :", "")?;
            write!(f, "{}", curve.dump(1))?;
        }
        Ok(())
    }
}

impl fmt::Display for RegistryDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.curve_points {
            self.fmt_curves(f)
        } else {
            self.fmt_summary(f)
        }
    }
}

impl VolumeCurve {
    /// Dump of the control points, each prefixed with `spaces` blanks.
    pub fn dump(&self, spaces: usize) -> CurveDump<'_> {
        CurveDump {
            curve: self,
            spaces,
        }
    }
}

impl CurveRegistry {
    /// Dump of the registry, indented by `spaces`.
    ///
    /// With `curve_points` the dump lists the scope and every curve table;
    /// without it, the mute flag, bounds and current indices.
    pub fn dump(&self, spaces: usize, curve_points: bool) -> RegistryDump<'_> {
        RegistryDump {
            registry: self,
            spaces,
            curve_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_dump() {
        let curve = VolumeCurve::from_table(&[(1, -5800), (20, -4000), (100, 0)]).unwrap();
        assert_eq!(
            curve.dump(1).to_string(),
            " { (  1, -5800),  ( 20, -4000),  (100,     0) }\n"
        );
        assert_eq!(curve.dump(0).to_string(), " {(  1, -5800), ( 20, -4000), (100,     0) }\n");
    }

    #[test]
    fn test_single_point_dump() {
        let curve = VolumeCurve::from_table(&[(0, 0)]).unwrap();
        assert_eq!(curve.dump(0).to_string(), " {(  0,     0) }\n");
    }
}

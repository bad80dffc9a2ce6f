//! Curves grouped by device category.
//!
//! A [`CurveRegistry`] holds one [`VolumeCurve`] per [`DeviceCategory`] for a
//! group of streams (or attribute sets), together with the index bounds the
//! group is controlled with and the last index applied on each category.

mod category;
mod scope;

pub use category::DeviceCategory;
pub use scope::{AudioAttributes, ContentType, Scope, StreamType, Usage};

use crate::curve::{Attenuation, VolumeCurve};
use crate::error::RegistryError;
use log::debug;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::sync::atomic::{AtomicI64, Ordering};

/// Marks a category slot that has never been written. Outside the `i32` range,
/// so every index stays storable.
const UNSET_INDEX: i64 = i64::MIN;

/// Last applied volume index for every device category.
///
/// Each slot is a single atomic, so a reader never sees a partially written
/// value while the volume path updates it.
#[derive(Debug)]
struct CurrentIndices {
    slots: [AtomicI64; DeviceCategory::COUNT],
}

impl CurrentIndices {
    fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| AtomicI64::new(UNSET_INDEX)),
        }
    }

    fn get(&self, category: DeviceCategory) -> Option<i32> {
        let index = self.slots[category.slot()].load(Ordering::Acquire);
        i32::try_from(index).ok()
    }

    fn set(&self, category: DeviceCategory, index: i32) {
        self.slots[category.slot()].store(i64::from(index), Ordering::Release);
    }

    fn clear(&self, category: DeviceCategory) {
        self.slots[category.slot()].store(UNSET_INDEX, Ordering::Release);
    }
}

/// Volume curves for one stream group, keyed by device category.
///
/// # Examples
///
/// ```
/// use volcurve::{CurveRegistry, DeviceCategory, Scope, StreamType, VolumeCurve, presets};
///
/// let registry = CurveRegistry::new(Scope::streams([StreamType::Music]), 0, 15)?
///     .with_curve(
///         DeviceCategory::Speaker,
///         VolumeCurve::from_table(presets::SPEAKER_MEDIA_VOLUME_CURVE)?,
///     );
///
/// registry.set_current_index(DeviceCategory::Speaker, 7);
/// assert_eq!(registry.current_index(DeviceCategory::Speaker), Some(7));
///
/// let db = registry.vol_index_to_db(DeviceCategory::Speaker, 7)?.to_db();
/// assert!(db < 0.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct CurveRegistry {
    curves: BTreeMap<DeviceCategory, VolumeCurve>,
    scope: Scope,
    index_min: i32,
    index_max: i32,
    can_be_muted: bool,
    index_cur: CurrentIndices,
}

impl CurveRegistry {
    /// Creates an empty registry for `scope`, controlled with indices in
    /// `[index_min, index_max]`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidIndexRange`] if `index_min > index_max`.
    pub fn new(scope: Scope, index_min: i32, index_max: i32) -> Result<Self, RegistryError> {
        check_range(index_min, index_max)?;
        Ok(Self {
            curves: BTreeMap::new(),
            scope,
            index_min,
            index_max,
            can_be_muted: true,
            index_cur: CurrentIndices::new(),
        })
    }

    /// Adds (or replaces) the curve for `category`.
    pub fn with_curve(mut self, category: DeviceCategory, curve: VolumeCurve) -> Self {
        self.curves.insert(category, curve);
        self
    }

    pub fn with_can_be_muted(mut self, can_be_muted: bool) -> Self {
        self.can_be_muted = can_be_muted;
        self
    }

    /// Adds the curve for `category`, returning the curve it replaced.
    pub fn insert_curve(
        &mut self,
        category: DeviceCategory,
        curve: VolumeCurve,
    ) -> Option<VolumeCurve> {
        self.curves.insert(category, curve)
    }

    /// Curve for `category`, if one is registered.
    pub fn get(&self, category: DeviceCategory) -> Option<&VolumeCurve> {
        self.curves.get(&category)
    }

    /// Registered categories in key order.
    pub fn categories(&self) -> impl Iterator<Item = DeviceCategory> + '_ {
        self.curves.keys().copied()
    }

    /// Registered curves in key order.
    pub fn curves(&self) -> btree_map::Iter<'_, DeviceCategory, VolumeCurve> {
        self.curves.iter()
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Last index applied on `category`, if any.
    pub fn current_index(&self, category: DeviceCategory) -> Option<i32> {
        self.index_cur.get(category)
    }

    /// Records the index applied on `category`.
    ///
    /// Expects one writer per category; readers may run concurrently.
    pub fn set_current_index(&self, category: DeviceCategory, index: i32) {
        self.index_cur.set(category, index);
    }

    /// Forgets the index applied on `category`.
    pub fn clear_current_index(&self, category: DeviceCategory) {
        self.index_cur.clear(category);
    }

    /// Categories with a recorded current index, in key order.
    pub fn current_indices(&self) -> impl Iterator<Item = (DeviceCategory, i32)> + '_ {
        DeviceCategory::ALL
            .into_iter()
            .filter_map(|category| Some((category, self.index_cur.get(category)?)))
    }

    pub fn can_be_muted(&self) -> bool {
        self.can_be_muted
    }

    /// `(index_min, index_max)` for the whole registry.
    pub fn index_bounds(&self) -> (i32, i32) {
        (self.index_min, self.index_max)
    }

    /// Replaces the index bounds.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidIndexRange`] if `index_min > index_max`; the
    /// bounds are left unchanged.
    pub fn set_index_bounds(
        &mut self,
        index_min: i32,
        index_max: i32,
    ) -> Result<(), RegistryError> {
        check_range(index_min, index_max)?;
        debug!(
            "volume index range [{} {}] -> [{index_min} {index_max}]",
            self.index_min, self.index_max
        );
        self.index_min = index_min;
        self.index_max = index_max;
        Ok(())
    }

    /// Streams or attributes this registry applies to.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Evaluates the curve for `category` against the registry's bounds.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownCategory`] if no curve is registered for
    /// `category`.
    pub fn vol_index_to_db(
        &self,
        category: DeviceCategory,
        index_in_ui: i32,
    ) -> Result<Attenuation, RegistryError> {
        let curve = self
            .get(category)
            .ok_or(RegistryError::UnknownCategory(category))?;
        Ok(curve.attenuation(index_in_ui, self.index_min, self.index_max))
    }
}

fn check_range(index_min: i32, index_max: i32) -> Result<(), RegistryError> {
    if index_min > index_max {
        return Err(RegistryError::InvalidIndexRange {
            min: index_min,
            max: index_max,
        });
    }
    Ok(())
}

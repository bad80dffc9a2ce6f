use std::fmt;

/// Classification of output routing, used to pick a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeviceCategory {
    /// Wired and wireless headsets and headphones
    Headset,
    /// Built-in loudspeaker
    Speaker,
    /// Handset earpiece
    Earpiece,
    /// Line outputs, HDMI, docks and other external media sinks
    ExtMedia,
    /// Hearing aids
    HearingAid,
}

impl DeviceCategory {
    /// Every category, in key order.
    pub const ALL: [DeviceCategory; 5] = [
        DeviceCategory::Headset,
        DeviceCategory::Speaker,
        DeviceCategory::Earpiece,
        DeviceCategory::ExtMedia,
        DeviceCategory::HearingAid,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position of the category in [`DeviceCategory::ALL`].
    #[inline]
    pub fn slot(self) -> usize {
        match self {
            DeviceCategory::Headset => 0,
            DeviceCategory::Speaker => 1,
            DeviceCategory::Earpiece => 2,
            DeviceCategory::ExtMedia => 3,
            DeviceCategory::HearingAid => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DeviceCategory::Headset => "DEVICE_CATEGORY_HEADSET",
            DeviceCategory::Speaker => "DEVICE_CATEGORY_SPEAKER",
            DeviceCategory::Earpiece => "DEVICE_CATEGORY_EARPIECE",
            DeviceCategory::ExtMedia => "DEVICE_CATEGORY_EXT_MEDIA",
            DeviceCategory::HearingAid => "DEVICE_CATEGORY_HEARING_AID",
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_follow_key_order() {
        for (i, category) in DeviceCategory::ALL.iter().enumerate() {
            assert_eq!(category.slot(), i);
        }
        assert!(DeviceCategory::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(DeviceCategory::Speaker.to_string(), "DEVICE_CATEGORY_SPEAKER");
    }
}

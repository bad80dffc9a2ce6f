//! What a registry applies to: a set of logical streams, or a list of audio
//! attribute sets.

use std::collections::BTreeSet;
use std::fmt;

/// Logical audio stream types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StreamType {
    VoiceCall,
    System,
    Ring,
    Music,
    Alarm,
    Notification,
    BluetoothSco,
    EnforcedAudible,
    Dtmf,
    Tts,
    Accessibility,
    Assistant,
}

impl StreamType {
    /// Numeric stream identifier.
    pub fn id(self) -> u32 {
        match self {
            StreamType::VoiceCall => 0,
            StreamType::System => 1,
            StreamType::Ring => 2,
            StreamType::Music => 3,
            StreamType::Alarm => 4,
            StreamType::Notification => 5,
            StreamType::BluetoothSco => 6,
            StreamType::EnforcedAudible => 7,
            StreamType::Dtmf => 8,
            StreamType::Tts => 9,
            StreamType::Accessibility => 10,
            StreamType::Assistant => 11,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StreamType::VoiceCall => "AUDIO_STREAM_VOICE_CALL",
            StreamType::System => "AUDIO_STREAM_SYSTEM",
            StreamType::Ring => "AUDIO_STREAM_RING",
            StreamType::Music => "AUDIO_STREAM_MUSIC",
            StreamType::Alarm => "AUDIO_STREAM_ALARM",
            StreamType::Notification => "AUDIO_STREAM_NOTIFICATION",
            StreamType::BluetoothSco => "AUDIO_STREAM_BLUETOOTH_SCO",
            StreamType::EnforcedAudible => "AUDIO_STREAM_ENFORCED_AUDIBLE",
            StreamType::Dtmf => "AUDIO_STREAM_DTMF",
            StreamType::Tts => "AUDIO_STREAM_TTS",
            StreamType::Accessibility => "AUDIO_STREAM_ACCESSIBILITY",
            StreamType::Assistant => "AUDIO_STREAM_ASSISTANT",
        }
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the audio is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Usage {
    #[default]
    Unknown,
    Media,
    VoiceCommunication,
    Alarm,
    Notification,
    NotificationRingtone,
    AssistanceAccessibility,
    AssistanceNavigationGuidance,
    AssistanceSonification,
    Game,
    Assistant,
}

impl Usage {
    pub fn name(self) -> &'static str {
        match self {
            Usage::Unknown => "AUDIO_USAGE_UNKNOWN",
            Usage::Media => "AUDIO_USAGE_MEDIA",
            Usage::VoiceCommunication => "AUDIO_USAGE_VOICE_COMMUNICATION",
            Usage::Alarm => "AUDIO_USAGE_ALARM",
            Usage::Notification => "AUDIO_USAGE_NOTIFICATION",
            Usage::NotificationRingtone => "AUDIO_USAGE_NOTIFICATION_TELEPHONY_RINGTONE",
            Usage::AssistanceAccessibility => "AUDIO_USAGE_ASSISTANCE_ACCESSIBILITY",
            Usage::AssistanceNavigationGuidance => "AUDIO_USAGE_ASSISTANCE_NAVIGATION_GUIDANCE",
            Usage::AssistanceSonification => "AUDIO_USAGE_ASSISTANCE_SONIFICATION",
            Usage::Game => "AUDIO_USAGE_GAME",
            Usage::Assistant => "AUDIO_USAGE_ASSISTANT",
        }
    }
}

/// What kind of content the audio carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ContentType {
    #[default]
    Unknown,
    Speech,
    Music,
    Movie,
    Sonification,
}

impl ContentType {
    pub fn name(self) -> &'static str {
        match self {
            ContentType::Unknown => "AUDIO_CONTENT_TYPE_UNKNOWN",
            ContentType::Speech => "AUDIO_CONTENT_TYPE_SPEECH",
            ContentType::Music => "AUDIO_CONTENT_TYPE_MUSIC",
            ContentType::Movie => "AUDIO_CONTENT_TYPE_MOVIE",
            ContentType::Sonification => "AUDIO_CONTENT_TYPE_SONIFICATION",
        }
    }
}

/// A set of audio attributes a registry can be associated with.
///
/// The default value (unknown usage and content, no flags, no tags) matches
/// any attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AudioAttributes {
    pub usage: Usage,
    pub content_type: ContentType,
    pub flags: u32,
    pub tags: String,
}

impl AudioAttributes {
    pub fn new(usage: Usage, content_type: ContentType) -> Self {
        Self {
            usage,
            content_type,
            ..Self::default()
        }
    }

    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// True for the catch-all default attributes.
    pub fn is_any(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for AudioAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            return f.write_str("{ Any }");
        }
        write!(
            f,
            "{{ Content type: {} Usage: {} Flags: {:#x} Tags: {} }}",
            self.content_type.name(),
            self.usage.name(),
            self.flags,
            self.tags
        )
    }
}

/// The streams or attributes a registry applies to. Never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Streams(BTreeSet<StreamType>),
    Attributes(Vec<AudioAttributes>),
}

impl Scope {
    pub fn streams(streams: impl IntoIterator<Item = StreamType>) -> Self {
        Scope::Streams(streams.into_iter().collect())
    }

    pub fn attributes(attributes: impl IntoIterator<Item = AudioAttributes>) -> Self {
        Scope::Attributes(attributes.into_iter().collect())
    }

    /// Streams in the scope; empty for an attribute scope.
    pub fn stream_types(&self) -> impl Iterator<Item = StreamType> + '_ {
        let streams = match self {
            Scope::Streams(streams) => Some(streams.iter().copied()),
            Scope::Attributes(_) => None,
        };
        streams.into_iter().flatten()
    }

    /// Attribute sets in the scope; empty for a stream scope.
    pub fn attribute_sets(&self) -> &[AudioAttributes] {
        match self {
            Scope::Streams(_) => &[],
            Scope::Attributes(attributes) => attributes,
        }
    }

    pub fn contains_stream(&self, stream: StreamType) -> bool {
        matches!(self, Scope::Streams(streams) if streams.contains(&stream))
    }

    pub fn contains_attributes(&self, attributes: &AudioAttributes) -> bool {
        self.attribute_sets().contains(attributes)
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::Streams(BTreeSet::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_scope() {
        let scope = Scope::streams([StreamType::Music, StreamType::Alarm, StreamType::Music]);
        let streams: Vec<StreamType> = scope.stream_types().collect();
        assert_eq!(streams, vec![StreamType::Music, StreamType::Alarm]);
        assert!(scope.contains_stream(StreamType::Alarm));
        assert!(!scope.contains_stream(StreamType::Ring));
        assert!(scope.attribute_sets().is_empty());
    }

    #[test]
    fn test_attribute_scope() {
        let media = AudioAttributes::new(Usage::Media, ContentType::Music);
        let scope = Scope::attributes([media.clone()]);
        assert!(scope.contains_attributes(&media));
        assert!(!scope.contains_attributes(&AudioAttributes::default()));
        assert_eq!(scope.stream_types().count(), 0);
    }

    #[test]
    fn test_attributes_display() {
        assert_eq!(AudioAttributes::default().to_string(), "{ Any }");
        let attributes = AudioAttributes::new(Usage::Alarm, ContentType::Sonification)
            .with_flags(0x1)
            .with_tags("oem=1");
        assert_eq!(
            attributes.to_string(),
            concat!(
                "{ Content type: AUDIO_CONTENT_TYPE_SONIFICATION Usage: AUDIO_USAGE_ALARM ",
                "Flags: 0x1 Tags: oem=1 }"
            )
        );
    }

    #[test]
    fn test_stream_ids_are_distinct() {
        let all = [
            StreamType::VoiceCall,
            StreamType::System,
            StreamType::Ring,
            StreamType::Music,
            StreamType::Alarm,
            StreamType::Notification,
            StreamType::BluetoothSco,
            StreamType::EnforcedAudible,
            StreamType::Dtmf,
            StreamType::Tts,
            StreamType::Accessibility,
            StreamType::Assistant,
        ];
        for (i, stream) in all.iter().enumerate() {
            assert_eq!(stream.id() as usize, i);
        }
    }
}

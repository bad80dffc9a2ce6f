use anyhow::Result;
use volcurve::{
    AudioAttributes, ContentType, CurveRegistry, DeviceCategory, Scope, StreamType, Usage,
    VolumeCurve,
};

fn stream_registry() -> Result<CurveRegistry> {
    Ok(
        CurveRegistry::new(Scope::streams([StreamType::Music, StreamType::Alarm]), 1, 15)?
            .with_curve(
                DeviceCategory::Speaker,
                VolumeCurve::from_table(&[(1, -5800), (100, 0)])?,
            )
            .with_curve(
                DeviceCategory::Headset,
                VolumeCurve::from_table(&[(0, -4200), (50, -2100), (100, 0)])?,
            ),
    )
}

#[test]
fn test_summary_dump() -> Result<()> {
    let registry = stream_registry()?;
    registry.set_current_index(DeviceCategory::Speaker, 4);
    registry.set_current_index(DeviceCategory::Headset, 12);

    let expected = concat!(
        "    Can be muted  Index Min  Index Max  Index Cur [device : index]...\n",
        "    true          01         15         ",
        "DEVICE_CATEGORY_HEADSET : 12, DEVICE_CATEGORY_SPEAKER : 04, \n",
    );
    assert_eq!(registry.dump(2, false).to_string(), expected);
    Ok(())
}

#[test]
fn test_summary_dump_without_indices() -> Result<()> {
    let registry = stream_registry()?.with_can_be_muted(false);
    let dump = registry.dump(0, false).to_string();
    assert!(dump.ends_with("  false         01         15         \n"));
    Ok(())
}

#[test]
fn test_curve_dump_for_streams() -> Result<()> {
    let registry = stream_registry()?;
    let expected = concat!(
        "Volume Curves Streams/Attributes, Curve points Streams for device category ",
        "(index, attenuation in millibel)\n",
        " Streams: AUDIO_STREAM_MUSIC(3) AUDIO_STREAM_ALARM(4)  \n",
        " DEVICE_CATEGORY_HEADSET : { (  0, -4200),  ( 50, -2100),  (100,     0) }\n",
        " DEVICE_CATEGORY_SPEAKER : { (  1, -5800),  (100,     0) }\n",
    );
    assert_eq!(registry.dump(0, true).to_string(), expected);
    Ok(())
}

#[test]
fn test_curve_dump_for_attributes() -> Result<()> {
    let registry = CurveRegistry::new(
        Scope::attributes([
            AudioAttributes::default(),
            AudioAttributes::new(Usage::Media, ContentType::Music),
        ]),
        0,
        100,
    )?;
    let dump = registry.dump(0, true).to_string();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines[1], " Streams:  ");
    assert_eq!(lines[2], " Attributes: { Any }");
    assert!(lines[3].starts_with("              { Content type: AUDIO_CONTENT_TYPE_MUSIC"));
    assert_eq!(lines.len(), 4);
    Ok(())
}

#[test]
fn test_empty_registry_dumps() -> Result<()> {
    let registry = CurveRegistry::new(Scope::default(), 0, 0)?;
    assert_eq!(registry.dump(0, true).to_string().lines().count(), 2);
    assert_eq!(registry.dump(0, false).to_string().lines().count(), 2);
    Ok(())
}

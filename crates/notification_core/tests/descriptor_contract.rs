use chrono::{Duration, FixedOffset, Local, TimeZone, Utc};

use notification_core::{
    bridge,
    notifications::{MemorySink, NotificationSink},
    time::{from_epoch_millis, to_epoch_millis},
    Argb, GroupAlertBehaviour, NotificationDescriptor, NotificationStyle,
};

#[test]
fn instants_and_colors_survive_their_stored_encoding() {
    let offset = FixedOffset::west_opt(7 * 3600).expect("offset");
    let samples = [
        offset.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap(),
        offset.with_ymd_and_hms(1969, 7, 20, 20, 17, 40).unwrap() + Duration::milliseconds(7),
        offset.with_ymd_and_hms(2038, 1, 19, 3, 14, 8).unwrap(),
    ];
    for instant in samples {
        assert_eq!(from_epoch_millis(to_epoch_millis(&instant)), instant);
    }

    for packed in [0x00ff_ffff, 0x0000_0001, 0x7fff_ffff, -0x0100_0000, -2] {
        assert_eq!(Argb::unpack(packed).pack(), packed);
    }
}

#[test]
fn descriptor_lifecycle_from_construction_to_handoff() {
    let fire_time = Local::now() + Duration::hours(2);
    let mut descriptor = NotificationDescriptor::repeating_with_icon(
        "Water",
        "Drink a glass of water",
        fire_time,
        Duration::hours(1),
        "ic_stat_water",
    );
    descriptor.set_style(NotificationStyle::BigTextStyle);
    descriptor.set_color(Some("#FF2196F3".parse().expect("color")));
    descriptor.set_group("hydration");
    descriptor.set_group_alert_behaviour(Some(GroupAlertBehaviour::Children));
    descriptor.set_show_timestamp(true);
    descriptor.set_custom_timestamp(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());

    assert_eq!(
        descriptor.fire_time_millis(),
        fire_time.timestamp_millis(),
        "fire time is stored as epoch milliseconds"
    );
    assert_eq!(descriptor.repeat_interval_millis(), 3_600_000);
    assert_eq!(descriptor.color_code() as u32, 0xff21_96f3);
    assert_eq!(descriptor.group_alert_code(), 2);
    assert!(descriptor.shows_custom_timestamp());

    let sink = MemorySink::new();
    sink.schedule(&descriptor).expect("schedule");
    let handed_off = sink.drain();
    assert_eq!(handed_off, vec![descriptor.clone()]);

    let payload = bridge::to_platform_json(&descriptor).expect("encode");
    let decoded = bridge::from_platform_json(&payload).expect("decode");
    assert_eq!(decoded, descriptor);
    assert_eq!(decoded.small_icon(), "ic_stat_water");
    assert_eq!(decoded.repeat_interval(), Some(Duration::hours(1)));

    descriptor.set_repeat_interval(None);
    assert_eq!(descriptor.repeat_interval(), None);
}

//! Marshaling to and from the raw field layout the platform scheduler reads.

use anyhow::{Context, Result};
use tracing::debug;

use crate::descriptor::NotificationDescriptor;

pub fn to_platform_value(descriptor: &NotificationDescriptor) -> Result<serde_json::Value> {
    let value = serde_json::to_value(descriptor).with_context(|| {
        format!(
            "failed to marshal notification `{}` for the platform layer",
            descriptor.title()
        )
    })?;
    debug!(
        title = descriptor.title(),
        fire_time = descriptor.fire_time_millis(),
        "marshaled notification"
    );
    Ok(value)
}

pub fn to_platform_json(descriptor: &NotificationDescriptor) -> Result<String> {
    let value = to_platform_value(descriptor)?;
    serde_json::to_string(&value).context("failed to encode notification payload")
}

/// Missing optional fields take their defaults; `title`, `text` and `fireTime`
/// must be present.
pub fn from_platform_json(payload: &str) -> Result<NotificationDescriptor> {
    let descriptor: NotificationDescriptor =
        serde_json::from_str(payload).context("failed to decode notification payload")?;
    debug!(title = descriptor.title(), "decoded notification payload");
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::Argb, style::NotificationStyle};
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn emits_raw_encoding_in_camel_case() {
        let fire_time = Utc.timestamp_millis_opt(1_762_506_000_000).unwrap();
        let descriptor = NotificationDescriptor::builder("Hi", "There", fire_time)
            .repeat_every(Duration::minutes(5))
            .color(Argb::rgb(0xff, 0, 0))
            .style(NotificationStyle::BigTextStyle)
            .build();

        let value = to_platform_value(&descriptor).expect("marshal");
        assert_eq!(
            value,
            json!({
                "title": "Hi",
                "text": "There",
                "smallIcon": "",
                "fireTime": 1_762_506_000_000_i64,
                "shouldAutoCancel": false,
                "largeIcon": "",
                "style": 2,
                "color": 0xffff_0000_u32 as i32,
                "number": -1,
                "usesStopwatch": false,
                "repeatInterval": 300_000,
                "intentData": "",
                "group": "",
                "groupSummary": false,
                "sortKey": "",
                "groupAlertBehaviour": -1,
                "showTimestamp": false,
                "customTimestamp": -1,
                "showCustomTimestamp": false,
            })
        );
    }

    #[test]
    fn decodes_minimal_payload_with_defaults() {
        let descriptor =
            from_platform_json(r#"{"title":"Hi","text":"There","fireTime":0}"#).expect("decode");
        assert_eq!(descriptor.fire_time_millis(), 0);
        assert_eq!(descriptor.repeat_interval(), None);
        assert_eq!(descriptor.number(), None);
        assert_eq!(descriptor.group_alert_behaviour(), None);
        assert_eq!(descriptor.custom_timestamp(), None);
        assert_eq!(descriptor.style(), Some(NotificationStyle::None));
    }

    #[test]
    fn unknown_codes_pass_through() {
        let descriptor = from_platform_json(
            r#"{"title":"Hi","text":"There","fireTime":0,"style":1,"groupAlertBehaviour":9}"#,
        )
        .expect("decode");
        assert_eq!(descriptor.style(), None);
        assert_eq!(descriptor.style_code(), 1);
        assert_eq!(descriptor.group_alert_code(), 9);

        let encoded = to_platform_json(&descriptor).expect("encode");
        assert_eq!(from_platform_json(&encoded).expect("decode again"), descriptor);
    }

    #[test]
    fn rejects_payload_without_fire_time() {
        let err = from_platform_json(r#"{"title":"Hi","text":"There"}"#).unwrap_err();
        assert!(err.to_string().contains("failed to decode"));
    }
}

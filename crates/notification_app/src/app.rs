use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use notification_core::{notifications::NotificationSink, Argb, NotificationDescriptor};
use tracing::{debug, info, warn};

use crate::cli::Args;

/// Defaults applied to every descriptor unless the command line overrides them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub(crate) small_icon: Option<String>,
    pub(crate) large_icon: Option<String>,
    pub(crate) group: Option<String>,
    pub(crate) color: Option<Argb>,
    pub(crate) auto_cancel: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok()))
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let color = non_empty("NOTIFY_COLOR").and_then(|raw| match raw.parse::<Argb>() {
            Ok(color) => Some(color),
            Err(err) => {
                warn!(%err, "ignoring NOTIFY_COLOR");
                None
            }
        });
        let auto_cancel = non_empty("NOTIFY_AUTO_CANCEL")
            .map(|flag| matches!(flag.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let config = Self {
            small_icon: non_empty("NOTIFY_SMALL_ICON"),
            large_icon: non_empty("NOTIFY_LARGE_ICON"),
            group: non_empty("NOTIFY_GROUP"),
            color,
            auto_cancel,
        };
        debug!(?config, "loaded notification defaults");
        config
    }
}

pub fn build_descriptor(
    config: &AppConfig,
    args: &Args,
    now: DateTime<Local>,
) -> NotificationDescriptor {
    let fire_time = match (args.fire_at, args.fire_in) {
        (Some(at), _) => at.with_timezone(&Local),
        (None, Some(delay)) => now + delay,
        (None, None) => now,
    };

    let mut descriptor =
        NotificationDescriptor::new(args.title.as_str(), args.text.as_str(), fire_time);
    descriptor.set_repeat_interval(args.repeat);

    if let Some(icon) = args.small_icon.as_ref().or(config.small_icon.as_ref()) {
        descriptor.set_small_icon(icon.as_str());
    }
    if let Some(icon) = args.large_icon.as_ref().or(config.large_icon.as_ref()) {
        descriptor.set_large_icon(icon.as_str());
    }
    if let Some(style) = args.style {
        descriptor.set_style(style);
    }
    descriptor.set_color(args.color.or(config.color));
    descriptor.set_number(args.number);
    descriptor.set_should_auto_cancel(args.auto_cancel || config.auto_cancel);
    descriptor.set_uses_stopwatch(args.stopwatch);
    if let Some(group) = args.group.as_ref().or(config.group.as_ref()) {
        descriptor.set_group(group.as_str());
    }
    descriptor.set_group_summary(args.group_summary);
    descriptor.set_group_alert_behaviour(args.group_alert);
    if let Some(key) = &args.sort_key {
        descriptor.set_sort_key(key.as_str());
    }
    if let Some(data) = &args.intent_data {
        descriptor.set_intent_data(data.as_str());
    }
    descriptor.set_show_timestamp(args.show_timestamp);
    if let Some(stamp) = args.custom_timestamp {
        descriptor.set_custom_timestamp(stamp);
    }
    descriptor
}

pub fn run(
    config: AppConfig,
    args: Args,
    sink: &dyn NotificationSink,
) -> Result<NotificationDescriptor> {
    let descriptor = build_descriptor(&config, &args, Local::now());

    if descriptor.repeats_below_minimum() {
        warn!(
            repeat_ms = descriptor.repeat_interval_millis(),
            "repeat interval is below the one minute platform minimum"
        );
    }
    if descriptor.group_summary() && descriptor.group().is_empty() {
        warn!("group summary requested without a group key");
    }

    sink.schedule(&descriptor).with_context(|| {
        format!("failed to hand off notification `{}`", descriptor.title())
    })?;
    info!(
        title = descriptor.title(),
        fire_time = %descriptor.fire_time(),
        "notification handed off"
    );
    Ok(descriptor)
}

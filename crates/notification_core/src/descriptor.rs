//! The value handed to a platform scheduler to post one local notification.
//!
//! Fields are kept in the encoding the platform layer reads directly (epoch
//! milliseconds, packed ARGB, integer codes with `-1`/`0` sentinels). The typed
//! accessors translate at the boundary and perform no validation: whatever is set
//! is passed through and left for the platform to accept or reject.

use chrono::{DateTime, Duration, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::{
    color::Argb,
    style::{GroupAlertBehaviour, NotificationStyle, GROUP_ALERT_UNSET},
    time::{from_epoch_millis, to_epoch_millis, UNSET_MILLIS},
};

/// Repeating notifications fire at most once per minute on the platform side.
pub const MIN_REPEAT_INTERVAL_MILLIS: i64 = 60_000;

const NO_COLOR: i32 = 0;
const NO_NUMBER: i32 = -1;

fn unset_millis() -> i64 {
    UNSET_MILLIS
}

fn unset_code() -> i32 {
    -1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDescriptor {
    title: String,
    text: String,
    #[serde(default)]
    small_icon: String,
    fire_time: i64,
    #[serde(default)]
    should_auto_cancel: bool,
    #[serde(default)]
    large_icon: String,
    #[serde(default)]
    style: i32,
    #[serde(default)]
    color: i32,
    #[serde(default = "unset_code")]
    number: i32,
    #[serde(default)]
    uses_stopwatch: bool,
    #[serde(default = "unset_millis")]
    repeat_interval: i64,
    #[serde(default)]
    intent_data: String,
    #[serde(default)]
    group: String,
    #[serde(default)]
    group_summary: bool,
    #[serde(default)]
    sort_key: String,
    #[serde(default = "unset_code")]
    group_alert_behaviour: i32,
    #[serde(default)]
    show_timestamp: bool,
    #[serde(default = "unset_millis")]
    custom_timestamp: i64,
    #[serde(default)]
    show_custom_timestamp: bool,
}

impl NotificationDescriptor {
    /// One-shot notification with every optional field at its default.
    pub fn new<Tz: TimeZone>(
        title: impl Into<String>,
        text: impl Into<String>,
        fire_time: DateTime<Tz>,
    ) -> Self {
        let mut descriptor = Self {
            title: title.into(),
            text: text.into(),
            small_icon: String::new(),
            fire_time: UNSET_MILLIS,
            should_auto_cancel: false,
            large_icon: String::new(),
            style: NotificationStyle::None.code(),
            color: NO_COLOR,
            number: NO_NUMBER,
            uses_stopwatch: false,
            repeat_interval: UNSET_MILLIS,
            intent_data: String::new(),
            group: String::new(),
            group_summary: false,
            sort_key: String::new(),
            group_alert_behaviour: GROUP_ALERT_UNSET,
            show_timestamp: false,
            custom_timestamp: UNSET_MILLIS,
            show_custom_timestamp: false,
        };
        descriptor.set_fire_time(fire_time);
        descriptor
    }

    /// Notification that repeats every `repeat_interval` after `fire_time`.
    ///
    /// Intervals below one minute are accepted here and clamped or rejected by the
    /// platform.
    pub fn repeating<Tz: TimeZone>(
        title: impl Into<String>,
        text: impl Into<String>,
        fire_time: DateTime<Tz>,
        repeat_interval: Duration,
    ) -> Self {
        let mut descriptor = Self::new(title, text, fire_time);
        descriptor.set_repeat_interval(Some(repeat_interval));
        descriptor
    }

    pub fn repeating_with_icon<Tz: TimeZone>(
        title: impl Into<String>,
        text: impl Into<String>,
        fire_time: DateTime<Tz>,
        repeat_interval: Duration,
        small_icon: impl Into<String>,
    ) -> Self {
        let mut descriptor = Self::repeating(title, text, fire_time, repeat_interval);
        descriptor.set_small_icon(small_icon);
        descriptor
    }

    pub fn builder<Tz: TimeZone>(
        title: impl Into<String>,
        text: impl Into<String>,
        fire_time: DateTime<Tz>,
    ) -> NotificationBuilder {
        NotificationBuilder::new(title, text, fire_time)
    }

    /// First line of the notification.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Second line of the notification.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Drawable resource name shown in the status bar, without extension.
    /// Empty means the platform's default icon.
    pub fn small_icon(&self) -> &str {
        &self.small_icon
    }

    pub fn set_small_icon(&mut self, small_icon: impl Into<String>) {
        self.small_icon = small_icon.into();
    }

    /// Drawable resource name shown in the content view in place of the small icon.
    pub fn large_icon(&self) -> &str {
        &self.large_icon
    }

    pub fn set_large_icon(&mut self, large_icon: impl Into<String>) {
        self.large_icon = large_icon.into();
    }

    pub fn fire_time(&self) -> DateTime<Local> {
        from_epoch_millis(self.fire_time)
    }

    pub fn set_fire_time<Tz: TimeZone>(&mut self, fire_time: DateTime<Tz>) {
        self.fire_time = to_epoch_millis(&fire_time);
    }

    pub fn fire_time_millis(&self) -> i64 {
        self.fire_time
    }

    /// `None` for one-time notifications.
    pub fn repeat_interval(&self) -> Option<Duration> {
        match self.repeat_interval {
            UNSET_MILLIS => None,
            millis => Some(Duration::try_milliseconds(millis).unwrap_or(Duration::MIN)),
        }
    }

    /// A one-millisecond-negative interval is stored as `-1` and so reads back as
    /// `None`, like transparent black in [`color`](Self::color).
    pub fn set_repeat_interval(&mut self, repeat_interval: Option<Duration>) {
        self.repeat_interval = repeat_interval
            .map(|interval| interval.num_milliseconds())
            .unwrap_or(UNSET_MILLIS);
    }

    pub fn repeat_interval_millis(&self) -> i64 {
        self.repeat_interval
    }

    /// True when a repeat interval is set but shorter than the platform minimum.
    pub fn repeats_below_minimum(&self) -> bool {
        self.repeat_interval()
            .is_some_and(|interval| interval.num_milliseconds() < MIN_REPEAT_INTERVAL_MILLIS)
    }

    /// `None` only when the stored code is not one this crate knows.
    pub fn style(&self) -> Option<NotificationStyle> {
        NotificationStyle::from_code(self.style)
    }

    pub fn set_style(&mut self, style: NotificationStyle) {
        self.style = style.code();
    }

    pub fn style_code(&self) -> i32 {
        self.style
    }

    /// Accent colour behind the small icon in the standard templates. Alpha is
    /// ignored by the platform.
    ///
    /// A packed value of zero means "no colour", so fully transparent black reads
    /// back as `None`.
    pub fn color(&self) -> Option<Argb> {
        match self.color {
            NO_COLOR => None,
            packed => Some(Argb::unpack(packed)),
        }
    }

    pub fn set_color(&mut self, color: Option<Argb>) {
        self.color = color.map(Argb::pack).unwrap_or(NO_COLOR);
    }

    pub fn color_code(&self) -> i32 {
        self.color
    }

    /// Badge count shown by launchers that support it.
    pub fn number(&self) -> Option<i32> {
        match self.number {
            NO_NUMBER => None,
            number => Some(number),
        }
    }

    pub fn set_number(&mut self, number: Option<i32>) {
        self.number = number.unwrap_or(NO_NUMBER);
    }

    pub fn should_auto_cancel(&self) -> bool {
        self.should_auto_cancel
    }

    pub fn set_should_auto_cancel(&mut self, should_auto_cancel: bool) {
        self.should_auto_cancel = should_auto_cancel;
    }

    /// Show the time field as a stopwatch rather than a timestamp.
    pub fn uses_stopwatch(&self) -> bool {
        self.uses_stopwatch
    }

    pub fn set_uses_stopwatch(&mut self, uses_stopwatch: bool) {
        self.uses_stopwatch = uses_stopwatch;
    }

    /// Notifications sharing a group key may be stacked together.
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn set_group(&mut self, group: impl Into<String>) {
        self.group = group.into();
    }

    /// Requires [`group`](Self::group) to be set as well.
    pub fn group_summary(&self) -> bool {
        self.group_summary
    }

    pub fn set_group_summary(&mut self, group_summary: bool) {
        self.group_summary = group_summary;
    }

    /// `None` leaves the choice to the platform default.
    pub fn group_alert_behaviour(&self) -> Option<GroupAlertBehaviour> {
        GroupAlertBehaviour::from_code(self.group_alert_behaviour)
    }

    pub fn set_group_alert_behaviour(&mut self, behaviour: Option<GroupAlertBehaviour>) {
        self.group_alert_behaviour = behaviour
            .map(GroupAlertBehaviour::code)
            .unwrap_or(GROUP_ALERT_UNSET);
    }

    pub fn group_alert_code(&self) -> i32 {
        self.group_alert_behaviour
    }

    /// Orders notifications from the same package lexicographically.
    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    pub fn set_sort_key(&mut self, sort_key: impl Into<String>) {
        self.sort_key = sort_key.into();
    }

    /// Opaque payload returned to the app when the notification is opened.
    pub fn intent_data(&self) -> &str {
        &self.intent_data
    }

    pub fn set_intent_data(&mut self, intent_data: impl Into<String>) {
        self.intent_data = intent_data.into();
    }

    /// Show a timestamp on delivery: the custom one if set, otherwise the fire time.
    pub fn show_timestamp(&self) -> bool {
        self.show_timestamp
    }

    pub fn set_show_timestamp(&mut self, show_timestamp: bool) {
        self.show_timestamp = show_timestamp;
    }

    pub fn custom_timestamp(&self) -> Option<DateTime<Local>> {
        self.show_custom_timestamp
            .then(|| from_epoch_millis(self.custom_timestamp))
    }

    pub fn set_custom_timestamp<Tz: TimeZone>(&mut self, timestamp: DateTime<Tz>) {
        self.show_custom_timestamp = true;
        self.custom_timestamp = to_epoch_millis(&timestamp);
    }

    /// Go back to showing the fire time.
    pub fn clear_custom_timestamp(&mut self) {
        self.show_custom_timestamp = false;
        self.custom_timestamp = UNSET_MILLIS;
    }

    pub fn custom_timestamp_millis(&self) -> i64 {
        self.custom_timestamp
    }

    pub fn shows_custom_timestamp(&self) -> bool {
        self.show_custom_timestamp
    }
}

/// Fluent construction of a [`NotificationDescriptor`].
#[derive(Debug, Clone)]
pub struct NotificationBuilder {
    descriptor: NotificationDescriptor,
}

impl NotificationBuilder {
    pub fn new<Tz: TimeZone>(
        title: impl Into<String>,
        text: impl Into<String>,
        fire_time: DateTime<Tz>,
    ) -> Self {
        Self {
            descriptor: NotificationDescriptor::new(title, text, fire_time),
        }
    }

    pub fn repeat_every(mut self, interval: Duration) -> Self {
        self.descriptor.set_repeat_interval(Some(interval));
        self
    }

    pub fn small_icon(mut self, icon: impl Into<String>) -> Self {
        self.descriptor.set_small_icon(icon);
        self
    }

    pub fn large_icon(mut self, icon: impl Into<String>) -> Self {
        self.descriptor.set_large_icon(icon);
        self
    }

    pub fn style(mut self, style: NotificationStyle) -> Self {
        self.descriptor.set_style(style);
        self
    }

    pub fn color(mut self, color: Argb) -> Self {
        self.descriptor.set_color(Some(color));
        self
    }

    pub fn number(mut self, number: i32) -> Self {
        self.descriptor.set_number(Some(number));
        self
    }

    pub fn auto_cancel(mut self, enabled: bool) -> Self {
        self.descriptor.set_should_auto_cancel(enabled);
        self
    }

    pub fn stopwatch(mut self, enabled: bool) -> Self {
        self.descriptor.set_uses_stopwatch(enabled);
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.descriptor.set_group(group);
        self
    }

    pub fn group_summary(mut self, summary: bool) -> Self {
        self.descriptor.set_group_summary(summary);
        self
    }

    pub fn group_alert(mut self, behaviour: GroupAlertBehaviour) -> Self {
        self.descriptor.set_group_alert_behaviour(Some(behaviour));
        self
    }

    pub fn sort_key(mut self, key: impl Into<String>) -> Self {
        self.descriptor.set_sort_key(key);
        self
    }

    pub fn intent_data(mut self, data: impl Into<String>) -> Self {
        self.descriptor.set_intent_data(data);
        self
    }

    pub fn show_timestamp(mut self, show: bool) -> Self {
        self.descriptor.set_show_timestamp(show);
        self
    }

    pub fn custom_timestamp<Tz: TimeZone>(mut self, timestamp: DateTime<Tz>) -> Self {
        self.descriptor.set_custom_timestamp(timestamp);
        self
    }

    pub fn build(self) -> NotificationDescriptor {
        self.descriptor
    }
}

use chrono::{DateTime, Duration, FixedOffset};
use clap::Parser;
use notification_core::{time::parse_interval, Argb, GroupAlertBehaviour, NotificationStyle};

/// Assemble a local notification descriptor and emit its platform payload.
#[derive(Debug, Clone, Parser)]
#[command(name = "notify-descriptor", version)]
pub struct Args {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub text: String,

    /// Deliver after this long, e.g. `5m` or `1h 30m`.
    #[arg(long, value_parser = parse_interval, conflicts_with = "fire_at")]
    pub fire_in: Option<Duration>,

    /// Deliver at an RFC 3339 timestamp.
    #[arg(long, value_parser = parse_timestamp)]
    pub fire_at: Option<DateTime<FixedOffset>>,

    /// Repeat period; the platform minimum is one minute.
    #[arg(long, value_parser = parse_interval)]
    pub repeat: Option<Duration>,

    #[arg(long)]
    pub small_icon: Option<String>,

    #[arg(long)]
    pub large_icon: Option<String>,

    /// `none` or `big-text`.
    #[arg(long)]
    pub style: Option<NotificationStyle>,

    /// `#RRGGBB` or `#AARRGGBB`.
    #[arg(long)]
    pub color: Option<Argb>,

    /// Badge count.
    #[arg(long, allow_negative_numbers = true)]
    pub number: Option<i32>,

    #[arg(long)]
    pub auto_cancel: bool,

    #[arg(long)]
    pub stopwatch: bool,

    #[arg(long)]
    pub group: Option<String>,

    #[arg(long)]
    pub group_summary: bool,

    /// `all`, `summary` or `children`.
    #[arg(long)]
    pub group_alert: Option<GroupAlertBehaviour>,

    #[arg(long)]
    pub sort_key: Option<String>,

    #[arg(long)]
    pub intent_data: Option<String>,

    #[arg(long)]
    pub show_timestamp: bool,

    #[arg(long, value_parser = parse_timestamp)]
    pub custom_timestamp: Option<DateTime<FixedOffset>>,
}

fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value.trim())
}

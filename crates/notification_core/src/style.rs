use std::str::FromStr;

use crate::error::ParseError;

/// Stored when no group alert behaviour was chosen; the platform default applies.
pub const GROUP_ALERT_UNSET: i32 = -1;

/// Rich layout applied to a notification.
///
/// Code `1` belongs to the big-picture style, which is reserved and never produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotificationStyle {
    #[default]
    None,
    BigTextStyle,
}

impl NotificationStyle {
    pub const RESERVED_BIG_PICTURE_CODE: i32 = 1;

    pub fn code(self) -> i32 {
        match self {
            NotificationStyle::None => 0,
            NotificationStyle::BigTextStyle => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(NotificationStyle::None),
            2 => Some(NotificationStyle::BigTextStyle),
            _ => None,
        }
    }
}

impl TryFrom<i32> for NotificationStyle {
    type Error = ParseError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(ParseError::UnknownStyle(code))
    }
}

impl FromStr for NotificationStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(NotificationStyle::None),
            "big-text" | "bigtext" | "big_text" => Ok(NotificationStyle::BigTextStyle),
            _ => Err(ParseError::UnknownStyleName(s.to_string())),
        }
    }
}

/// Which members of a notification group still make sound or vibrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupAlertBehaviour {
    /// Every notification in the group alerts.
    All,
    /// The group summary is silenced.
    Summary,
    /// Group children are silenced. Has to be set on each child.
    Children,
}

impl GroupAlertBehaviour {
    pub fn code(self) -> i32 {
        match self {
            GroupAlertBehaviour::All => 0,
            GroupAlertBehaviour::Summary => 1,
            GroupAlertBehaviour::Children => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(GroupAlertBehaviour::All),
            1 => Some(GroupAlertBehaviour::Summary),
            2 => Some(GroupAlertBehaviour::Children),
            _ => None,
        }
    }
}

impl TryFrom<i32> for GroupAlertBehaviour {
    type Error = ParseError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(ParseError::UnknownGroupAlert(code))
    }
}

impl FromStr for GroupAlertBehaviour {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(GroupAlertBehaviour::All),
            "summary" => Ok(GroupAlertBehaviour::Summary),
            "children" => Ok(GroupAlertBehaviour::Children),
            _ => Err(ParseError::UnknownGroupAlertName(s.to_string())),
        }
    }
}

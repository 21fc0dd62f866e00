pub mod bridge;
pub mod color;
pub mod descriptor;
pub mod error;
pub mod notifications;
pub mod style;
pub mod time;

pub use crate::color::Argb;
pub use crate::descriptor::{NotificationBuilder, NotificationDescriptor};
pub use crate::error::ParseError;
pub use crate::style::{GroupAlertBehaviour, NotificationStyle};

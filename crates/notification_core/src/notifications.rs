use std::io::Write;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use tracing::debug;

use crate::{bridge, descriptor::NotificationDescriptor};

/// Hands descriptors to whatever actually posts notifications on the platform.
pub trait NotificationSink: Send + Sync {
    fn schedule(&self, notification: &NotificationDescriptor) -> Result<()>;
}

/// Keeps scheduled descriptors in memory until a host drains them.
#[derive(Debug, Default)]
pub struct MemorySink {
    pending: Mutex<Vec<NotificationDescriptor>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }

    pub fn drain(&self) -> Vec<NotificationDescriptor> {
        std::mem::take(&mut *self.pending.lock())
    }
}

impl NotificationSink for MemorySink {
    fn schedule(&self, notification: &NotificationDescriptor) -> Result<()> {
        debug!(title = notification.title(), "queued notification in memory");
        self.pending.lock().push(notification.clone());
        Ok(())
    }
}

/// Writes each descriptor's raw payload as one JSON object per line.
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> NotificationSink for JsonLinesSink<W> {
    fn schedule(&self, notification: &NotificationDescriptor) -> Result<()> {
        let line = bridge::to_platform_json(notification)?;
        let mut writer = self.writer.lock();
        writeln!(writer, "{line}").context("failed to write notification payload")?;
        writer.flush().context("failed to flush notification payload")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn memory_sink_drains_in_order() {
        let sink = MemorySink::new();
        let now = Utc::now();
        sink.schedule(&NotificationDescriptor::new("first", "a", now))
            .unwrap();
        sink.schedule(&NotificationDescriptor::new("second", "b", now + Duration::minutes(1)))
            .unwrap();
        assert_eq!(sink.len(), 2);

        let drained = sink.drain();
        let titles: Vec<&str> = drained.iter().map(|n| n.title()).collect();
        assert_eq!(titles, ["first", "second"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn json_lines_sink_writes_one_object_per_line() {
        let sink = JsonLinesSink::new(Vec::new());
        let now = Utc::now();
        sink.schedule(&NotificationDescriptor::new("Hi", "There", now))
            .unwrap();
        sink.schedule(&NotificationDescriptor::new("Bye", "Now", now))
            .unwrap();

        let output = String::from_utf8(sink.into_inner()).expect("utf8 output");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let decoded = bridge::from_platform_json(lines[1]).expect("decode line");
        assert_eq!(decoded.title(), "Bye");
        assert_eq!(decoded.fire_time_millis(), now.timestamp_millis());
    }
}

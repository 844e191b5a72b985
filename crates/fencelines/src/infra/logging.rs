//! Warning sink implementations.

use std::sync::Mutex;

use crate::app::validate::WarningSink;

/// Emits fence warnings through the active tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingWarnings;

impl WarningSink for TracingWarnings {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Collects warnings in memory so a host can surface them itself.
#[derive(Debug, Default)]
pub struct BufferedWarnings {
    messages: Mutex<Vec<String>>,
}

impl BufferedWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all collected warnings, leaving the buffer empty.
    pub fn drain(&self) -> Vec<String> {
        let mut messages = self
            .messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *messages)
    }
}

impl WarningSink for BufferedWarnings {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_sink_collects_in_order_and_drains() {
        let sink = BufferedWarnings::new();
        sink.warn("first");
        sink.warn("second");
        assert_eq!(sink.drain(), ["first", "second"]);
        assert!(sink.drain().is_empty());
    }
}

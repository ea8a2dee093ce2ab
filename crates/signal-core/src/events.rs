//! Deferred actions and radio traffic.

use serde::{Deserialize, Serialize};

use crate::enums::Callsign;
use crate::types::GridPos;

/// A queued action that fires when the clock reaches `fire_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// Absolute minute at which the action fires.
    pub fire_time: u32,
    /// Insertion order. Breaks ties FIFO among events due the same minute.
    pub seq: u64,
    pub action: EventAction,
}

/// What a scheduled event does when it fires. Explicit payload data
/// rather than closures, so the queue can be inspected and replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventAction {
    FireSupportResolve { target: GridPos },
    AirStrikeResolve { target: GridPos },
    ResupplyComplete { callsign: Callsign },
    DustoffArrive,
    DustoffReturn,
    ScriptedMessage { sender: String, text: String },
}

/// One line of the append-only radio log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioMessage {
    /// Minute the message was logged.
    pub time: u32,
    /// Sender tag shown in the log, e.g. "PAPA BEAR".
    pub sender: String,
    pub text: String,
    /// Urgent traffic is highlighted (and narrated first) by the UI.
    pub urgent: bool,
}

impl RadioMessage {
    pub fn new(time: u32, sender: &str, text: impl Into<String>) -> Self {
        Self {
            time,
            sender: sender.to_string(),
            text: text.into(),
            urgent: false,
        }
    }

    pub fn urgent(time: u32, sender: &str, text: impl Into<String>) -> Self {
        Self {
            urgent: true,
            ..Self::new(time, sender, text)
        }
    }
}

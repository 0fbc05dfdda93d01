//! Brush notifications - typed start/change/end events and their listeners.
//!
//! Listeners run synchronously in registration order. A listener that
//! returns an error or panics is logged and skipped; the rest still receive
//! the event.

use crate::error::BrushError;
use crate::types::Region;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;
use tracing::warn;

/// What a change did to the active region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeMode {
    /// The region was translated.
    Move,
    /// The region was created or resized.
    Resize,
}

/// Event kind, carried with every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BrushEventKind {
    Start,
    Change { mode: ChangeMode },
    End,
}

impl BrushEventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            BrushEventKind::Start => EventType::Start,
            BrushEventKind::Change { .. } => EventType::Change,
            BrushEventKind::End => EventType::End,
        }
    }
}

/// Subscription key: the event kind without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Start,
    Change,
    End,
}

impl FromStr for EventType {
    type Err = BrushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(EventType::Start),
            "change" => Ok(EventType::Change),
            "end" => Ok(EventType::End),
            other => Err(BrushError::UnknownEvent(other.to_string())),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Start => write!(f, "start"),
            EventType::Change => write!(f, "change"),
            EventType::End => write!(f, "end"),
        }
    }
}

/// Copy of the region collection at the moment an event fires.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrushSnapshot {
    pub regions: Vec<Region>,
    /// Region being created, dragged or resized, if any.
    pub active: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrushEvent {
    #[serde(flatten)]
    pub kind: BrushEventKind,
    pub snapshot: BrushSnapshot,
}

/// Handle returned by [`Listeners::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&BrushEvent) -> anyhow::Result<()> + Send>;

struct Listener {
    id: ListenerId,
    event_type: EventType,
    callback: Callback,
}

/// Registry of event listeners.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, event_type: EventType, callback: F) -> ListenerId
    where
        F: FnMut(&BrushEvent) -> anyhow::Result<()> + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Listener {
            id,
            event_type,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| l.id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver an event to every listener of its type. Returns how many
    /// listeners failed.
    pub fn emit(&mut self, event: &BrushEvent) -> usize {
        let event_type = event.kind.event_type();
        let mut failures = 0;
        for listener in self.entries.iter_mut().filter(|l| l.event_type == event_type) {
            match panic::catch_unwind(AssertUnwindSafe(|| (listener.callback)(event))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    failures += 1;
                    warn!(event = %event_type, listener = listener.id.0, "Brush listener failed: {:#}", e);
                }
                Err(payload) => {
                    failures += 1;
                    warn!(
                        event = %event_type,
                        listener = listener.id.0,
                        "Brush listener panicked: {}",
                        panic_message(payload.as_ref())
                    );
                }
            }
        }
        failures
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

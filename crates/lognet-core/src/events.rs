//! Event types emitted by the simulator.
//!
//! The simulator buffers one batch of events per user action; the
//! presentation layer drains them to animate or log what happened.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{Color, NodeId, RecolorCause};

/// Unique identifier for an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

/// An event emitted by the simulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimEvent {
    pub id: EventId,
    pub timestamp: DateTime<Utc>,
    /// Position of the originating user change in the history log.
    pub change_seq: u64,
    pub payload: EventPayload,
}

impl SimEvent {
    pub fn new(change_seq: u64, payload: EventPayload) -> Self {
        Self {
            id: EventId::new(),
            timestamp: Utc::now(),
            change_seq,
            payload,
        }
    }
}

/// The event payload, tagged by type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event_type")]
pub enum EventPayload {
    /// The user picked a new color for a node.
    ColorChanged {
        node_id: NodeId,
        from: Color,
        to: Color,
    },
    /// A neighbor of the changed node was recolored by propagation.
    NeighborRecolored {
        node_id: NodeId,
        from: Color,
        to: Color,
        cause: RecolorCause,
    },
    /// A change addressed a node that does not exist and was ignored.
    UnknownNodeIgnored { node_id: NodeId, color: Color },
    /// The conflict set was recomputed.
    ConflictsUpdated {
        introduced: Vec<String>,
        resolved: Vec<String>,
        total: usize,
    },
}

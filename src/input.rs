//! Pointer and keyboard input: hover tracking and shot requests.
//!
//! Slot numbers here are in the viewer's numbering (slot 1 is the leftmost of
//! the viewer's own bottom row); the server maps them onto its board.

use serde::Serialize;

use crate::perspective::N_SLOTS;

/// Outbound action: fire from a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ShotRequest {
    pub slot: u8,
}

impl ShotRequest {
    pub fn to_json(&self) -> String {
        // a struct of one u8 always serializes
        serde_json::to_string(self)
            .unwrap_or_else(|_| format!("{{\"slot\":{}}}", self.slot))
    }
}

/// Game status as reported by the server. Input only counts while playing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum GameStatus {
    Playing,
    #[default]
    Waiting,
    Other(String),
}

impl GameStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "playing" => GameStatus::Playing,
            "" | "waiting" => GameStatus::Waiting,
            other => GameStatus::Other(other.to_string()),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GameStatus::Playing)
    }
}

/// Home-row and number keys, both mapping to slots 1-8.
const KEY_SLOTS: [(&str, u8); 2 * N_SLOTS as usize] = [
    ("a", 1),
    ("1", 1),
    ("s", 2),
    ("2", 2),
    ("d", 3),
    ("3", 3),
    ("f", 4),
    ("4", 4),
    ("j", 5),
    ("5", 5),
    ("k", 6),
    ("6", 6),
    ("l", 7),
    ("7", 7),
    (";", 8),
    ("8", 8),
];

pub fn key_to_slot(key: &str) -> Option<u8> {
    KEY_SLOTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, slot)| *slot)
}

/// Which slots need repainting after the pointer moved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverChange {
    /// Previously highlighted slot, to paint back to normal.
    pub cleared: Option<u8>,
    /// Newly highlighted slot.
    pub highlighted: Option<u8>,
}

impl HoverChange {
    pub fn is_empty(&self) -> bool {
        self.cleared.is_none() && self.highlighted.is_none()
    }
}

/// At most one bottom slot is highlighted at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverTracker {
    current: Option<u8>,
}

impl HoverTracker {
    pub fn current(&self) -> Option<u8> {
        self.current
    }

    pub fn update(&mut self, slot: Option<u8>) -> HoverChange {
        if slot == self.current {
            return HoverChange::default();
        }
        let cleared = self.current.take();
        self.current = slot;
        HoverChange {
            cleared,
            highlighted: slot,
        }
    }

    pub fn clear(&mut self) -> HoverChange {
        self.update(None)
    }
}

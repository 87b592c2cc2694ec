//! Defensive decoding of the game-state blobs pushed by the server.
//!
//! The state arrives as JSON text: an object with `active_blocks` (and
//! optionally `holding_shots`), plus a separate `[[player, slot], ...]` list of
//! holding shots. Numbers sometimes arrive as strings. A blob that does not
//! parse yields the empty state; entries that name an unknown player or an
//! out-of-range slot are dropped.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::SnapshotError;
use crate::perspective::{GridPos, N_SLOTS};
use crate::player::Player;

/// A block owned by `owner`, at a canonical position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveBlock {
    pub pos: GridPos,
    pub owner: Player,
}

/// A staged shot in `player`'s slot, canonical numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HoldingShot {
    pub player: Player,
    pub slot: u8,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameSnapshot {
    pub active_blocks: Vec<ActiveBlock>,
    pub holding_shots: Vec<HoldingShot>,
}

// --- Wire shapes -------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum Num {
    Int(i64),
    Text(String),
}

impl Num {
    fn value(&self) -> Option<i64> {
        match self {
            Num::Int(n) => Some(*n),
            Num::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Deserialize)]
struct RawBlock {
    pos: Num,
    player: Num,
}

/// Both lists may be missing or `null`; entries are kept as raw values so one
/// bad entry does not take the rest down with it.
#[derive(Deserialize)]
struct RawState {
    #[serde(default)]
    active_blocks: Option<Vec<Value>>,
    #[serde(default)]
    holding_shots: Option<Vec<Value>>,
}

fn block_from_value(value: &Value) -> Option<ActiveBlock> {
    let raw = RawBlock::deserialize(value).ok()?;
    let encoded = raw.pos.value()?;
    let pos = GridPos::decode(u32::try_from(encoded).ok()?)?;
    let owner = Player::from_num(raw.player.value()?)?;
    Some(ActiveBlock { pos, owner })
}

fn shot_from_value(value: &Value) -> Option<HoldingShot> {
    let (player, slot) = <(Num, Num)>::deserialize(value).ok()?;
    let player = Player::from_num(player.value()?)?;
    let slot = slot.value()?;
    if !(1..=N_SLOTS as i64).contains(&slot) {
        return None;
    }
    Some(HoldingShot {
        player,
        slot: slot as u8,
    })
}

fn blocks_from_values(raw: &[Value]) -> Vec<ActiveBlock> {
    let blocks: Vec<ActiveBlock> = raw.iter().filter_map(block_from_value).collect();
    if blocks.len() != raw.len() {
        warn!(dropped = raw.len() - blocks.len(), "ignoring invalid blocks");
    }
    blocks
}

fn shots_from_values(raw: &[Value]) -> Vec<HoldingShot> {
    let shots: Vec<HoldingShot> = raw.iter().filter_map(shot_from_value).collect();
    if shots.len() != raw.len() {
        warn!(dropped = raw.len() - shots.len(), "ignoring invalid holding shots");
    }
    shots
}

// --- Decoding ----------------------------------------------------------------

impl GameSnapshot {
    /// Strict decode of the state object. Blank text is the empty state.
    pub fn try_decode(text: &str) -> Result<Self, SnapshotError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawState = serde_json::from_str(text)?;
        Ok(Self {
            active_blocks: blocks_from_values(&raw.active_blocks.unwrap_or_default()),
            holding_shots: shots_from_values(&raw.holding_shots.unwrap_or_default()),
        })
    }

    /// Decode, falling back to the empty state on malformed input.
    pub fn decode(text: &str) -> Self {
        Self::try_decode(text).unwrap_or_else(|err| {
            warn!(%err, "failed to parse game state, drawing empty board");
            Self::default()
        })
    }

    /// Decode the state object and the separate holding-shot list together.
    pub fn decode_with_holding(state: &str, holding: &str) -> Self {
        let mut snapshot = Self::decode(state);
        for shot in decode_holding_shots(holding) {
            if !snapshot.holding_shots.contains(&shot) {
                snapshot.holding_shots.push(shot);
            }
        }
        snapshot
    }

    /// Whether `player` holds a shot in canonical slot `slot`.
    pub fn is_holding(&self, player: Player, slot: u8) -> bool {
        self.holding_shots
            .iter()
            .any(|s| s.player == player && s.slot == slot)
    }

    /// Blocks already on the grid; staged blocks are left out.
    pub fn placed_blocks(&self) -> impl Iterator<Item = &ActiveBlock> {
        self.active_blocks.iter().filter(|b| b.pos.is_on_board())
    }
}

/// Decode a `[[player, slot], ...]` list, empty on malformed input.
pub fn decode_holding_shots(text: &str) -> Vec<HoldingShot> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Option<Vec<Value>>>(text) {
        Ok(raw) => shots_from_values(&raw.unwrap_or_default()),
        Err(err) => {
            let err = SnapshotError::from(err);
            warn!(%err, "failed to parse holding shots");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_blocks_numbers_and_strings() {
        let s = GameSnapshot::decode(
            r#"{"active_blocks":[{"pos":305,"player":1},{"pos":"808","player":"4"}]}"#,
        );
        assert_eq!(
            s.active_blocks,
            vec![
                ActiveBlock {
                    pos: GridPos::new(3, 5),
                    owner: Player::One,
                },
                ActiveBlock {
                    pos: GridPos::new(8, 8),
                    owner: Player::Four,
                },
            ]
        );
        assert!(s.holding_shots.is_empty());
    }

    #[test]
    fn test_truncated_blob_is_empty_state() {
        let s = GameSnapshot::decode(r#"{"active_blocks":[{"pos":305,"pla"#);
        assert_eq!(s, GameSnapshot::default());
        assert!(GameSnapshot::try_decode(r#"{"active_blocks":[{"#).is_err());
    }

    #[test]
    fn test_null_and_blank_are_empty_state() {
        assert_eq!(GameSnapshot::decode("null"), GameSnapshot::default());
        assert_eq!(GameSnapshot::decode("  "), GameSnapshot::default());
        assert_eq!(GameSnapshot::decode("{}"), GameSnapshot::default());
    }

    #[test]
    fn test_invalid_entries_are_dropped() {
        let s = GameSnapshot::decode(
            r#"{"active_blocks":[
                    {"pos":305,"player":7},
                    {"pos":1234,"player":1},
                    {"pos":202,"player":2}
                ],
                "holding_shots":[[1,9],[5,2],[3,"4"]]}"#,
        );
        assert_eq!(s.active_blocks.len(), 1);
        assert_eq!(s.active_blocks[0].owner, Player::Two);
        assert_eq!(
            s.holding_shots,
            vec![HoldingShot {
                player: Player::Three,
                slot: 4,
            }]
        );
    }

    #[test]
    fn test_null_lists_keep_the_other_list() {
        let s = GameSnapshot::decode(
            r#"{"active_blocks":[{"pos":305,"player":1}],"holding_shots":null}"#,
        );
        assert_eq!(s.active_blocks.len(), 1);
        assert!(s.holding_shots.is_empty());

        let s = GameSnapshot::decode(r#"{"active_blocks":null,"holding_shots":[[2,5]]}"#);
        assert!(s.active_blocks.is_empty());
        assert!(s.is_holding(Player::Two, 5));
    }

    #[test]
    fn test_malformed_entry_does_not_drop_its_neighbours() {
        let s = GameSnapshot::decode(
            r#"{"active_blocks":[{"pos":305,"player":1},{"pos":404,"player":null}]}"#,
        );
        assert_eq!(
            s.active_blocks,
            vec![ActiveBlock {
                pos: GridPos::new(3, 5),
                owner: Player::One,
            }]
        );

        let s = GameSnapshot::decode(
            r#"{"active_blocks":[{"pos":true},17,{"pos":101,"player":3}],
                "holding_shots":[[1],"x",[4,{"slot":2}],[1,2]]}"#,
        );
        assert_eq!(s.active_blocks.len(), 1);
        assert_eq!(s.active_blocks[0].pos, GridPos::new(1, 1));
        assert_eq!(
            s.holding_shots,
            vec![HoldingShot {
                player: Player::One,
                slot: 2,
            }]
        );
    }

    #[test]
    fn test_staged_blocks_are_not_placed() {
        let s = GameSnapshot::decode(
            r#"{"active_blocks":[
                {"pos":3,"player":1},
                {"pos":905,"player":2},
                {"pos":404,"player":3}
            ]}"#,
        );
        assert_eq!(s.active_blocks.len(), 3);
        let placed: Vec<_> = s.placed_blocks().collect();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].pos, GridPos::new(4, 4));
    }

    #[test]
    fn test_holding_list_merges_without_duplicates() {
        let s = GameSnapshot::decode_with_holding(
            r#"{"holding_shots":[[2,3]]}"#,
            r#"[[2,3],[4,"1"]]"#,
        );
        assert_eq!(s.holding_shots.len(), 2);
        assert!(s.is_holding(Player::Two, 3));
        assert!(s.is_holding(Player::Four, 1));
        assert!(!s.is_holding(Player::Four, 3));
    }

    #[test]
    fn test_malformed_holding_list_is_empty() {
        assert!(decode_holding_shots("[[1,").is_empty());
        assert!(decode_holding_shots("").is_empty());
        assert!(decode_holding_shots("null").is_empty());
        assert_eq!(decode_holding_shots(r#"[[3,null],[3,"7"]]"#).len(), 1);
    }
}

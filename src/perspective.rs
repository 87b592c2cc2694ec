//! Perspective translation between the board's canonical frame and a viewer's frame.
//!
//! Every viewer sees the shared board rotated so their own seat is at the
//! bottom. Player 2 sits at the bottom of the canonical frame, so their view is
//! the identity; player 1 sees it turned 180°, player 4 turned 90° clockwise and
//! player 3 turned 270° clockwise.
//!
//! Cell positions depend only on the rotation. Slot numbering also depends on
//! the owner, because a quarter turn reverses the slot order of the seats on
//! one axis but not the other. All of this is kept as explicit 4×4 tables and
//! checked against the rotation in the tests below.

use crate::player::Player::{Four, One, Three, Two};
use crate::player::{N_PLAYERS, Player, Side};

/// Rows and columns of the main grid.
pub const GRID_SIZE: u8 = 8;
/// Shot slots per side; one per grid row/column.
pub const N_SLOTS: u8 = GRID_SIZE;

// --- Grid positions ----------------------------------------------------------

/// A cell on the board, 1-based. Row/col 0 or `GRID_SIZE + 1` is the ring just
/// outside the grid where freshly fired blocks wait before entering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

impl GridPos {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Decode the wire form `row * 100 + col`.
    pub fn decode(encoded: u32) -> Option<Self> {
        let row = encoded / 100;
        let col = encoded % 100;
        let limit = GRID_SIZE as u32 + 1;
        if row > limit || col > limit {
            return None;
        }
        Some(Self::new(row as u8, col as u8))
    }

    pub fn encode(self) -> u32 {
        self.row as u32 * 100 + self.col as u32
    }

    /// One step outside the grid: staged, not yet on the board.
    pub fn is_staged(self) -> bool {
        let edge = GRID_SIZE + 1;
        self.row == 0 || self.row == edge || self.col == 0 || self.col == edge
    }

    pub fn is_on_board(self) -> bool {
        (1..=GRID_SIZE).contains(&self.row) && (1..=GRID_SIZE).contains(&self.col)
    }
}

// --- Rotation group ----------------------------------------------------------

/// Clockwise rotation of the rendered board relative to the canonical frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    None,
    Quarter,
    Half,
    ThreeQuarter,
}

const VIEWER_ROTATION: [Rotation; N_PLAYERS] = [
    Rotation::Half,         // player 1 sits on top
    Rotation::None,         // player 2 is the canonical bottom
    Rotation::ThreeQuarter, // player 3 sits on the left
    Rotation::Quarter,      // player 4 sits on the right
];

impl Rotation {
    pub fn for_viewer(viewer: Player) -> Rotation {
        VIEWER_ROTATION[viewer.index()]
    }

    fn quarters(self) -> u8 {
        match self {
            Rotation::None => 0,
            Rotation::Quarter => 1,
            Rotation::Half => 2,
            Rotation::ThreeQuarter => 3,
        }
    }

    fn from_quarters(q: u8) -> Rotation {
        match q % 4 {
            0 => Rotation::None,
            1 => Rotation::Quarter,
            2 => Rotation::Half,
            _ => Rotation::ThreeQuarter,
        }
    }

    /// `self` followed by `next`.
    pub fn then(self, next: Rotation) -> Rotation {
        Rotation::from_quarters(self.quarters() + next.quarters())
    }

    pub fn inverse(self) -> Rotation {
        Rotation::from_quarters(4 - self.quarters())
    }

    /// Rotate an on-board cell. Panics on staged or out-of-range positions.
    pub fn apply(self, pos: GridPos) -> GridPos {
        assert!(pos.is_on_board(), "cannot rotate off-board position {pos:?}");
        let n = GRID_SIZE + 1;
        let (r, c) = (pos.row, pos.col);
        match self {
            Rotation::None => GridPos::new(r, c),
            Rotation::Quarter => GridPos::new(c, n - r),
            Rotation::Half => GridPos::new(n - r, n - c),
            Rotation::ThreeQuarter => GridPos::new(n - c, r),
        }
    }
}

// --- Lookup tables -----------------------------------------------------------

/// `[viewer][side]` in `Side::index` order (top, bottom, left, right).
const PLAYER_ON_SIDE: [[Player; 4]; N_PLAYERS] = [
    [Two, One, Four, Three],
    [One, Two, Three, Four],
    [Four, Three, One, Two],
    [Three, Four, Two, One],
];

/// `[viewer][owner]`.
const SIDE_OF_PLAYER: [[Side; N_PLAYERS]; N_PLAYERS] = [
    [Side::Bottom, Side::Top, Side::Right, Side::Left],
    [Side::Top, Side::Bottom, Side::Left, Side::Right],
    [Side::Left, Side::Right, Side::Bottom, Side::Top],
    [Side::Right, Side::Left, Side::Top, Side::Bottom],
];

/// `[viewer][owner]`: whether the owner's slot order is reversed in the viewer's frame.
const SLOT_FLIP: [[bool; N_PLAYERS]; N_PLAYERS] = [
    [true, true, true, true],
    [false, false, false, false],
    [true, true, false, false],
    [false, false, true, true],
];

/// `[viewer][owner]`: the direction the owner shoots, as seen by the viewer.
const FACING_GLYPH: [[&str; N_PLAYERS]; N_PLAYERS] = [
    ["↑", "↓", "←", "→"],
    ["↓", "↑", "→", "←"],
    ["→", "←", "↑", "↓"],
    ["←", "→", "↓", "↑"],
];

/// Which canonical player occupies `side` of the viewer's screen.
pub fn player_on_side(viewer: Player, side: Side) -> Player {
    PLAYER_ON_SIDE[viewer.index()][side.index()]
}

/// Which side of the viewer's screen `player` occupies.
pub fn side_of_player(viewer: Player, player: Player) -> Side {
    SIDE_OF_PLAYER[viewer.index()][player.index()]
}

pub fn facing_glyph(viewer: Player, owner: Player) -> &'static str {
    FACING_GLYPH[viewer.index()][owner.index()]
}

/// Translate a slot number of `owner` between canonical and viewer numbering.
/// The mapping is an involution, so the same call converts in both directions.
pub fn translate_slot(owner: Player, slot: u8, viewer: Player) -> u8 {
    assert!((1..=N_SLOTS).contains(&slot), "slot {slot} out of range");
    if SLOT_FLIP[viewer.index()][owner.index()] {
        N_SLOTS - slot + 1
    } else {
        slot
    }
}

/// Canonical cell to the viewer's frame.
pub fn translate_position(pos: GridPos, viewer: Player) -> GridPos {
    Rotation::for_viewer(viewer).apply(pos)
}

/// Viewer's frame back to the canonical cell.
pub fn untranslate_position(pos: GridPos, viewer: Player) -> GridPos {
    Rotation::for_viewer(viewer).inverse().apply(pos)
}

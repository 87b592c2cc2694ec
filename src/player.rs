//! Seat identities and board sides.
//!
//! In the board's canonical frame player 1 sits at the top, 2 at the bottom,
//! 3 on the left and 4 on the right. Which side a player appears on for a
//! given viewer is answered by [`crate::perspective`].

use std::fmt;

/// Number of seats around the board.
pub const N_PLAYERS: usize = 4;

/// One of the four fixed seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Player {
    pub const ALL: [Player; N_PLAYERS] = [Player::One, Player::Two, Player::Three, Player::Four];

    /// Seat from its wire number (1..=4).
    pub fn from_num(num: i64) -> Option<Player> {
        match num {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            3 => Some(Player::Three),
            4 => Some(Player::Four),
            _ => None,
        }
    }

    pub fn num(self) -> u8 {
        self as u8
    }

    /// Zero-based index for table lookups.
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.num())
    }
}

/// A side of the board as rendered on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Paint order used by the renderer.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Slots on top/bottom run left to right; on left/right they run top to bottom.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Bottom => 1,
            Side::Left => 2,
            Side::Right => 3,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Player {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Player::ALL).unwrap()
    }
}

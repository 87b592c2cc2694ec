//! Seat colors. Each player owns one hue in three shades.

use crate::player::{N_PLAYERS, Player};

/// Shade of a player's hue; slots pick one by state (holding > hover > normal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Normal,
    Light,
    Dark,
}

struct Hue {
    normal: &'static str,
    light: &'static str,
    dark: &'static str,
}

const HUES: [Hue; N_PLAYERS] = [
    // red
    Hue {
        normal: "rgb(248, 113, 113)",
        light: "rgb(255, 136, 136)",
        dark: "rgb(198, 90, 90)",
    },
    // blue
    Hue {
        normal: "rgb(96, 165, 250)",
        light: "rgb(115, 198, 255)",
        dark: "rgb(77, 132, 200)",
    },
    // green
    Hue {
        normal: "rgb(74, 222, 128)",
        light: "rgb(89, 255, 154)",
        dark: "rgb(59, 178, 102)",
    },
    // yellow
    Hue {
        normal: "rgb(250, 204, 21)",
        light: "rgb(255, 245, 25)",
        dark: "rgb(200, 163, 17)",
    },
];

pub fn player_color(player: Player, shade: Shade) -> &'static str {
    let hue = &HUES[player.index()];
    match shade {
        Shade::Normal => hue.normal,
        Shade::Light => hue.light,
        Shade::Dark => hue.dark,
    }
}

/// Slot shade by priority: a held shot wins over hover.
pub fn slot_shade(holding: bool, hover: bool) -> Shade {
    if holding {
        Shade::Dark
    } else if hover {
        Shade::Light
    } else {
        Shade::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_shade_priority() {
        assert_eq!(slot_shade(true, true), Shade::Dark);
        assert_eq!(slot_shade(true, false), Shade::Dark);
        assert_eq!(slot_shade(false, true), Shade::Light);
        assert_eq!(slot_shade(false, false), Shade::Normal);
    }

    #[test]
    fn test_hues_are_distinct() {
        for a in Player::ALL {
            for b in Player::ALL {
                if a != b {
                    assert_ne!(
                        player_color(a, Shade::Normal),
                        player_color(b, Shade::Normal)
                    );
                }
            }
        }
    }
}

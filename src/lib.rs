//! Quadboard: the canvas view of a four-player shot board.
//!
//! Every player sees the shared 8×8 board turned so their own seat is at the
//! bottom. This crate owns that presentation layer: translating canonical
//! positions and slot numbers into each viewer's frame, laying the board out
//! on a canvas, painting it, and turning clicks and key presses into shot
//! requests. Game rules live on the server.
//!
//! The browser entry point is [`BoardHook`]; everything else is plain Rust and
//! runs natively (see [`DrawLog`] for a headless surface).

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod input;
pub mod layout;
mod logging;
pub mod palette;
pub mod perspective;
pub mod player;
pub mod render;
pub mod snapshot;
pub mod surface;
pub mod view;
pub mod web;

pub use config::BoardConfig;
pub use error::{BoardError, SnapshotError};
pub use input::{GameStatus, HoverChange, HoverTracker, ShotRequest, key_to_slot};
pub use layout::{Layout, SlotBoundaries, SlotRect};
pub use perspective::{
    GRID_SIZE, GridPos, N_SLOTS, Rotation, facing_glyph, player_on_side, side_of_player,
    translate_position, translate_slot, untranslate_position,
};
pub use player::{Player, Side};
pub use render::Scene;
pub use snapshot::{ActiveBlock, GameSnapshot, HoldingShot, decode_holding_shots};
pub use surface::{DrawLog, DrawOp, Surface};
pub use view::BoardView;
pub use web::BoardHook;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::INFO);
}

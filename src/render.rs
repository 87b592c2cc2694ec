//! Full-board painting in the viewer's frame.
//!
//! Layering, bottom to top: slot fills and slot grid lines, main grid lines,
//! placed blocks, holding shots, the hover highlight, glyphs.

use crate::config::BoardConfig;
use crate::layout::Layout;
use crate::palette::{Shade, player_color, slot_shade};
use crate::perspective::{
    GRID_SIZE, N_SLOTS, facing_glyph, player_on_side, side_of_player, translate_position,
    translate_slot,
};
use crate::player::{Player, Side};
use crate::snapshot::GameSnapshot;
use crate::surface::Surface;

/// Everything needed to paint one frame for one viewer.
pub struct Scene<'a> {
    pub layout: &'a Layout,
    pub config: &'a BoardConfig,
    pub viewer: Player,
    pub snapshot: &'a GameSnapshot,
}

impl Scene<'_> {
    /// Repaint the whole canvas. `hover` is the viewer's highlighted bottom slot.
    pub fn draw_game<S: Surface + ?Sized>(&self, surface: &mut S, hover: Option<u8>) {
        surface.clear(self.layout.canvas_w, self.layout.canvas_h);

        for side in Side::ALL {
            self.draw_player_slots(surface, side);
        }

        self.draw_grid(
            surface,
            self.layout.x_grid,
            self.layout.y_grid,
            GRID_SIZE as u32,
            GRID_SIZE as u32,
        );

        self.draw_active_blocks(surface);
        self.draw_holding_shots(surface);

        if let Some(slot) = hover {
            self.draw_shot_slot(surface, Side::Bottom, slot, true);
        }
    }

    /// The slots of whoever sits on `side`, plus the lines around them.
    pub fn draw_player_slots<S: Surface + ?Sized>(&self, surface: &mut S, side: Side) {
        for slot in 1..=N_SLOTS {
            self.draw_shot_slot(surface, side, slot, false);
        }
        let (x, y) = self.layout.side_origin(side);
        let (rows, cols) = if side.is_horizontal() {
            (1, N_SLOTS as u32)
        } else {
            (N_SLOTS as u32, 1)
        };
        self.draw_grid(surface, x, y, rows, cols);
    }

    /// Paint one slot on `side`; `slot` is in viewer numbering.
    pub fn draw_shot_slot<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        side: Side,
        slot: u8,
        hover: bool,
    ) {
        let owner = player_on_side(self.viewer, side);
        let canonical = translate_slot(owner, slot, self.viewer);
        let holding = self.snapshot.is_holding(owner, canonical);
        let color = player_color(owner, slot_shade(holding, hover));

        let (x, y) = self.layout.slot_origin(side, slot);
        let (w, h) = (self.layout.w_section, self.layout.h_section);
        surface.fill_rect(x + 1.0, y + 1.0, w - 2.0, h - 2.0, color);

        if holding {
            self.draw_centered_text(surface, x, y, x + w, y + h, &self.config.holding_glyph);
        }
    }

    pub fn draw_grid<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x_min: f64,
        y_min: f64,
        rows: u32,
        cols: u32,
    ) {
        let (w, h) = (self.layout.w_section, self.layout.h_section);
        let x_max = x_min + cols as f64 * w;
        let y_max = y_min + rows as f64 * h;
        let color = self.config.line_color.as_str();
        let width = self.config.line_width;

        for row in 0..=rows {
            let y = y_min + row as f64 * h;
            surface.stroke_line(x_min, y, x_max, y, color, width);
        }
        for col in 0..=cols {
            let x = x_min + col as f64 * w;
            surface.stroke_line(x, y_min, x, y_max, color, width);
        }
    }

    /// Blocks on the grid, rotated into the viewer's frame. Staged blocks
    /// (one step outside the grid) are not drawn.
    pub fn draw_active_blocks<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (w, h) = (self.layout.w_section, self.layout.h_section);
        for block in self.snapshot.placed_blocks() {
            let seen = translate_position(block.pos, self.viewer);
            let (x, y) = self.layout.cell_origin(seen);
            self.draw_block(surface, x + 1.0, y + 1.0, w - 2.0, h - 2.0, block.owner);
        }
    }

    fn draw_block<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        owner: Player,
    ) {
        surface.fill_rect(x, y, w, h, player_color(owner, Shade::Normal));
        let arrow = facing_glyph(self.viewer, owner);
        self.draw_centered_text(surface, x, y, x + w, y + h, arrow);
    }

    pub fn draw_holding_shots<S: Surface + ?Sized>(&self, surface: &mut S) {
        for shot in &self.snapshot.holding_shots {
            let side = side_of_player(self.viewer, shot.player);
            let slot = translate_slot(shot.player, shot.slot, self.viewer);
            self.draw_shot_slot(surface, side, slot, false);
        }
    }

    fn draw_centered_text<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        text: &str,
    ) {
        let cx = ((x0 + x1) / 2.0).round();
        let cy = ((y0 + y1) / 2.0).round();
        surface.fill_centered_text(text, cx, cy, &self.config.font, &self.config.text_color);
    }
}

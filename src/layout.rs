//! Pixel geometry of the board: main grid, the four slot rows around it and
//! the clickable rectangles of the viewer's own (bottom) slots.

use crate::config::BoardConfig;
use crate::perspective::{GRID_SIZE, GridPos, N_SLOTS};
use crate::player::Side;

/// Derived from canvas size; recomputed at mount and on resize.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub canvas_w: f64,
    pub canvas_h: f64,
    pub w_section: f64,
    pub h_section: f64,
    pub h_margin: f64, // gap between grid and left/right slot columns
    pub v_margin: f64, // gap between grid and top/bottom slot rows
    pub x_grid: f64,
    pub y_grid: f64,
    pub x_grid_max: f64,
    pub y_grid_max: f64,
    origins: [(f64, f64); 4], // per Side::index
    boundaries: SlotBoundaries,
}

/// Interior of one slot; containment is strict so the grid lines belong to no slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotRect {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl SlotRect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x > self.x_min && x < self.x_max && y > self.y_min && y < self.y_max
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x_min + self.x_max) / 2.0, (self.y_min + self.y_max) / 2.0)
    }
}

/// Slot number (1-based) to rectangle, bottom side only.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotBoundaries {
    rects: [SlotRect; N_SLOTS as usize],
}

impl SlotBoundaries {
    pub fn get(&self, slot: u8) -> Option<&SlotRect> {
        (slot as usize).checked_sub(1).and_then(|i| self.rects.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &SlotRect)> {
        self.rects.iter().enumerate().map(|(i, r)| (i as u8 + 1, r))
    }
}

impl Layout {
    pub fn compute(canvas_w: f64, canvas_h: f64, config: &BoardConfig) -> Self {
        let sections = config.sections as f64;
        let half_grid = (GRID_SIZE / 2) as f64;
        let grid = GRID_SIZE as f64;

        let w_section = ((canvas_w - 2.0 * config.h_pad) / sections).floor();
        let h_section = ((canvas_h - 2.0 * config.v_pad) / sections).floor();

        let v_margin = (h_section * 2.0 / 3.0).floor();
        let h_margin = (w_section * 2.0 / 3.0).floor();

        let x_grid = (canvas_w / 2.0).floor() - half_grid * w_section;
        let y_grid = (canvas_h / 2.0).floor() - half_grid * h_section;
        let x_grid_max = x_grid + grid * w_section;
        let y_grid_max = y_grid + grid * h_section;

        let mut origins = [(0.0, 0.0); 4];
        origins[Side::Top.index()] = (x_grid, y_grid - v_margin - h_section);
        origins[Side::Bottom.index()] = (x_grid, y_grid_max + v_margin);
        origins[Side::Left.index()] = (x_grid - h_margin - w_section, y_grid);
        origins[Side::Right.index()] = (x_grid_max + h_margin, y_grid);

        let (x_bottom, y_bottom) = origins[Side::Bottom.index()];
        let rects = std::array::from_fn(|i| {
            let x_min = x_bottom + i as f64 * w_section + 1.0;
            SlotRect {
                x_min,
                x_max: x_min + w_section - 1.0,
                y_min: y_bottom + 1.0,
                y_max: y_bottom + h_section - 1.0,
            }
        });

        Self {
            canvas_w,
            canvas_h,
            w_section,
            h_section,
            h_margin,
            v_margin,
            x_grid,
            y_grid,
            x_grid_max,
            y_grid_max,
            origins,
            boundaries: SlotBoundaries { rects },
        }
    }

    /// Top-left corner of the slot row/column on `side`.
    pub fn side_origin(&self, side: Side) -> (f64, f64) {
        self.origins[side.index()]
    }

    /// Top-left corner of slot `slot` (1-based, viewer numbering) on `side`.
    pub fn slot_origin(&self, side: Side, slot: u8) -> (f64, f64) {
        let (x, y) = self.side_origin(side);
        let step = (slot as f64) - 1.0;
        if side.is_horizontal() {
            (x + step * self.w_section, y)
        } else {
            (x, y + step * self.h_section)
        }
    }

    /// Top-left corner of a viewer-frame grid cell.
    pub fn cell_origin(&self, pos: GridPos) -> (f64, f64) {
        (
            self.x_grid + (pos.col as f64 - 1.0) * self.w_section,
            self.y_grid + (pos.row as f64 - 1.0) * self.h_section,
        )
    }

    pub fn slot_boundaries(&self) -> &SlotBoundaries {
        &self.boundaries
    }

    /// Bottom slot under the pointer, if any.
    pub fn hovered_slot(&self, x: f64, y: f64) -> Option<u8> {
        let (x_bottom, y_bottom) = self.side_origin(Side::Bottom);
        if x < x_bottom
            || x > x_bottom + N_SLOTS as f64 * self.w_section
            || y < y_bottom
            || y > y_bottom + self.h_section
        {
            return None;
        }
        self.boundaries
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(slot, _)| slot)
    }

    /// Bottom slot a click lands in. Unlike hovering, the lines between slots
    /// count toward the slot on their right.
    pub fn clicked_slot(&self, x: f64, y: f64) -> Option<u8> {
        let (x_bottom, y_bottom) = self.side_origin(Side::Bottom);
        if y <= y_bottom || y >= y_bottom + self.h_section {
            return None;
        }
        if x <= x_bottom || x >= x_bottom + N_SLOTS as f64 * self.w_section {
            return None;
        }
        let idx = ((x - x_bottom) / self.w_section).floor() as u8;
        Some((idx + 1).min(N_SLOTS))
    }
}

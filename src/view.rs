//! The per-canvas board component: owns layout, hover and the latest snapshot,
//! and turns input events into repaints and shot requests.

use tracing::{debug, info};

use crate::config::BoardConfig;
use crate::input::{GameStatus, HoverTracker, ShotRequest, key_to_slot};
use crate::layout::Layout;
use crate::player::{Player, Side};
use crate::render::Scene;
use crate::snapshot::GameSnapshot;
use crate::surface::Surface;

pub struct BoardView<S: Surface> {
    surface: S,
    config: BoardConfig,
    layout: Layout,
    viewer: Player,
    status: GameStatus,
    snapshot: GameSnapshot,
    hover: HoverTracker,
}

impl<S: Surface> BoardView<S> {
    /// Compute the layout for a `width`×`height` canvas. Nothing is drawn yet.
    pub fn new(surface: S, config: BoardConfig, viewer: Player, width: f64, height: f64) -> Self {
        let layout = Layout::compute(width, height, &config);
        info!(%viewer, width, height, "board mounted");
        Self {
            surface,
            config,
            layout,
            viewer,
            status: GameStatus::default(),
            snapshot: GameSnapshot::default(),
            hover: HoverTracker::default(),
        }
    }

    pub fn viewer(&self) -> Player {
        self.viewer
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn hovered(&self) -> Option<u8> {
        self.hover.current()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.layout = Layout::compute(width, height, &self.config);
        debug!(width, height, "layout recomputed");
        self.redraw();
    }

    pub fn set_status(&mut self, raw: &str) {
        self.status = GameStatus::parse(raw);
        if !self.status.is_playing() {
            self.repaint_hover(None);
        }
    }

    /// Decode fresh state blobs and repaint.
    pub fn apply_snapshot(&mut self, state: &str, holding: &str) {
        self.snapshot = GameSnapshot::decode_with_holding(state, holding);
        self.redraw();
    }

    pub fn redraw(&mut self) {
        let scene = Scene {
            layout: &self.layout,
            config: &self.config,
            viewer: self.viewer,
            snapshot: &self.snapshot,
        };
        scene.draw_game(&mut self.surface, self.hover.current());
    }

    /// Track the hovered bottom slot, repainting only the slots that changed.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if !self.status.is_playing() {
            return;
        }
        let slot = self.layout.hovered_slot(x, y);
        self.repaint_hover(slot);
    }

    pub fn pointer_left(&mut self) {
        self.repaint_hover(None);
    }

    fn repaint_hover(&mut self, slot: Option<u8>) {
        let change = self.hover.update(slot);
        if change.is_empty() {
            return;
        }
        let scene = Scene {
            layout: &self.layout,
            config: &self.config,
            viewer: self.viewer,
            snapshot: &self.snapshot,
        };
        if let Some(old) = change.cleared {
            scene.draw_shot_slot(&mut self.surface, Side::Bottom, old, false);
        }
        if let Some(new) = change.highlighted {
            scene.draw_shot_slot(&mut self.surface, Side::Bottom, new, true);
        }
    }

    pub fn clicked(&mut self, x: f64, y: f64) -> Option<ShotRequest> {
        if !self.status.is_playing() {
            return None;
        }
        let slot = self.layout.clicked_slot(x, y)?;
        debug!(slot, "shot by click");
        Some(ShotRequest { slot })
    }

    pub fn key_pressed(&mut self, key: &str) -> Option<ShotRequest> {
        if !self.status.is_playing() {
            return None;
        }
        let slot = key_to_slot(key)?;
        debug!(slot, key, "shot by key");
        Some(ShotRequest { slot })
    }
}

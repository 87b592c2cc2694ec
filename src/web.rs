//! Browser binding: mounts a [`BoardView`] on a canvas and wires DOM events.
//!
//! The host element carries the runtime inputs as data attributes:
//! `data-player-num`, `data-game-status`, `data-game-state` and
//! `data-holding-shots`. Shot requests leave as a `CustomEvent` dispatched on
//! the host element whose `detail` is the JSON text `{"slot":N}`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, CustomEvent, CustomEventInit, Element, Event, HtmlCanvasElement,
    KeyboardEvent, MouseEvent, window,
};

use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::input::ShotRequest;
use crate::player::Player;
use crate::view::BoardView;

const ATTR_PLAYER: &str = "data-player-num";
const ATTR_STATUS: &str = "data-game-status";
const ATTR_STATE: &str = "data-game-state";
const ATTR_HOLDING: &str = "data-holding-shots";

type SharedView = Rc<RefCell<BoardView<CanvasRenderingContext2d>>>;

/// Mounted board. Create with `new BoardHook(el, canvasId)` when the host element
/// mounts, call `updated()` when its attributes change and `destroy()` on teardown.
#[wasm_bindgen]
pub struct BoardHook {
    root: Element,
    canvas: HtmlCanvasElement,
    view: SharedView,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl BoardHook {
    #[wasm_bindgen(constructor)]
    pub fn new(root: Element, canvas_id: &str) -> Result<BoardHook, JsValue> {
        Ok(Self::mount(root, canvas_id, BoardConfig::default())?)
    }

    /// Re-read status and state attributes, then repaint.
    pub fn updated(&self) {
        let mut view = self.view.borrow_mut();
        view.set_status(&attr(&self.root, ATTR_STATUS));
        view.apply_snapshot(
            &attr(&self.root, ATTR_STATE),
            &attr(&self.root, ATTR_HOLDING),
        );
    }

    /// Recompute the layout after the canvas size changed.
    pub fn resized(&self) {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        info!(width = w, height = h, "canvas resized");
        self.view.borrow_mut().resize(w, h);
    }

    /// Remove every listener (each one unregisters itself on drop). The hook is
    /// unusable afterwards.
    pub fn destroy(self) {
        info!(listeners = self.listeners.len(), "board unmounted");
    }
}

impl BoardHook {
    pub fn mount(root: Element, canvas_id: &str, config: BoardConfig) -> Result<Self, BoardError> {
        let win = window().ok_or(BoardError::NoWindow)?;
        let doc = win.document().ok_or(BoardError::NoDocument)?;

        let raw_player = attr(&root, ATTR_PLAYER);
        let viewer = raw_player
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(Player::from_num)
            .ok_or_else(|| BoardError::InvalidPlayer(raw_player.clone()))?;

        let canvas: HtmlCanvasElement = doc
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into().ok())
            .ok_or_else(|| BoardError::MissingCanvas(canvas_id.to_string()))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .and_then(|c| c.dyn_into().ok())
            .ok_or(BoardError::NoContext)?;
        ctx.set_image_smoothing_enabled(false);

        let shot_event = config.shot_event.clone();
        let (w, h) = (canvas.width() as f64, canvas.height() as f64);
        let view: SharedView = Rc::new(RefCell::new(BoardView::new(ctx, config, viewer, w, h)));

        let mut listeners = Vec::with_capacity(4);

        {
            let view = view.clone();
            let target = canvas.clone();
            listeners.push(EventListener::new(&canvas, "mousemove", move |evt: &Event| {
                if let Some(evt) = evt.dyn_ref::<MouseEvent>() {
                    let (x, y) = pointer_position(&target, evt);
                    view.borrow_mut().pointer_moved(x, y);
                }
            }));
        }
        {
            let view = view.clone();
            listeners.push(EventListener::new(&canvas, "mouseleave", move |_evt| {
                view.borrow_mut().pointer_left();
            }));
        }
        {
            let view = view.clone();
            let target = canvas.clone();
            let root = root.clone();
            let shot_event = shot_event.clone();
            listeners.push(EventListener::new(&canvas, "click", move |evt: &Event| {
                if let Some(evt) = evt.dyn_ref::<MouseEvent>() {
                    let (x, y) = pointer_position(&target, evt);
                    let shot = view.borrow_mut().clicked(x, y);
                    if let Some(shot) = shot {
                        dispatch_shot(&root, &shot_event, shot);
                    }
                }
            }));
        }
        {
            let view = view.clone();
            let root = root.clone();
            listeners.push(EventListener::new(&win, "keydown", move |evt: &Event| {
                if let Some(evt) = evt.dyn_ref::<KeyboardEvent>() {
                    let shot = view.borrow_mut().key_pressed(&evt.key());
                    if let Some(shot) = shot {
                        dispatch_shot(&root, &shot_event, shot);
                    }
                }
            }));
        }

        let hook = Self {
            root,
            canvas,
            view,
            listeners,
        };
        hook.updated();
        Ok(hook)
    }
}

fn attr(el: &Element, name: &str) -> String {
    el.get_attribute(name).unwrap_or_default()
}

fn pointer_position(canvas: &HtmlCanvasElement, evt: &MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (
        evt.client_x() as f64 - rect.left(),
        evt.client_y() as f64 - rect.top(),
    )
}

fn dispatch_shot(root: &Element, event_name: &str, shot: ShotRequest) {
    let init = CustomEventInit::new();
    init.set_detail(&JsValue::from_str(&shot.to_json()));
    let sent = CustomEvent::new_with_event_init_dict(event_name, &init)
        .and_then(|evt| root.dispatch_event(&evt));
    if let Err(err) = sent {
        warn!(slot = shot.slot, ?err, "failed to dispatch shot");
    }
}

// Browser smoke test; run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use quadboard::BoardHook;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn host(player: &str) -> web_sys::Element {
    let doc = web_sys::window().unwrap().document().unwrap();
    let root = doc.create_element("div").unwrap();
    root.set_attribute("data-player-num", player).unwrap();
    root.set_attribute("data-game-status", "playing").unwrap();
    let state = r#"{"active_blocks":[{"pos":404,"player":2}]}"#;
    root.set_attribute("data-game-state", state).unwrap();
    root.set_attribute("data-holding-shots", "[[2,1]]").unwrap();
    let canvas: HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_id("qb-test-board");
    canvas.set_width(400);
    canvas.set_height(400);
    root.append_child(&canvas).unwrap();
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

#[wasm_bindgen_test]
fn mounts_updates_and_tears_down() {
    let root = host("3");
    let hook = BoardHook::new(root.clone(), "qb-test-board").unwrap();
    root.set_attribute("data-game-state", "not json").unwrap();
    hook.updated();
    hook.resized();
    hook.destroy();
    root.remove();
}

#[wasm_bindgen_test]
fn rejects_bad_player_attribute() {
    let root = host("9");
    assert!(BoardHook::new(root.clone(), "qb-test-board").is_err());
    root.remove();
}

fn press(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    let evt = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init);
    let evt = evt.unwrap();
    web_sys::window().unwrap().dispatch_event(&evt).unwrap();
}

#[wasm_bindgen_test]
fn destroy_unregisters_listeners() {
    let root = host("3");
    let shots = Rc::new(Cell::new(0));
    let _counter = {
        let shots = shots.clone();
        EventListener::new(&root, "quadboard:shoot", move |_evt| {
            shots.set(shots.get() + 1)
        })
    };

    let hook = BoardHook::new(root.clone(), "qb-test-board").unwrap();
    press("f");
    assert_eq!(shots.get(), 1);

    hook.destroy();
    press("f");
    assert_eq!(shots.get(), 1);
    root.remove();
}

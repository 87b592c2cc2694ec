// Integration tests (native) for the `quadboard` crate.
// These drive a BoardView through the headless DrawLog surface so they run
// under `cargo test` on the host without a browser.

use quadboard::{
    BoardConfig, BoardView, DrawLog, DrawOp, GridPos, Player, ShotRequest, Side, translate_position,
};

fn mounted(viewer: Player, status: &str) -> BoardView<DrawLog> {
    let mut view = BoardView::new(
        DrawLog::default(),
        BoardConfig::default(),
        viewer,
        400.0,
        400.0,
    );
    view.set_status(status);
    view
}

fn block_fills(log: &DrawLog, view: &BoardView<DrawLog>) -> Vec<(f64, f64)> {
    let l = view.layout();
    log.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillRect { x, y, .. }
                if *x > l.x_grid && *x < l.x_grid_max && *y > l.y_grid && *y < l.y_grid_max =>
            {
                Some((*x, *y))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn hover_on_slot_center_and_above_row() {
    let mut view = mounted(Player::Two, "playing");
    let (cx, cy) = view.layout().slot_boundaries().get(3).unwrap().center();
    view.pointer_moved(cx, cy);
    assert_eq!(view.hovered(), Some(3));

    let (_, y_bottom) = view.layout().side_origin(Side::Bottom);
    view.pointer_moved(cx, y_bottom - 1.0);
    assert_eq!(view.hovered(), None);
}

#[test]
fn click_between_slot_edges_fires_that_slot() {
    let mut view = mounted(Player::Four, "playing");
    let l = view.layout().clone();
    let (x_bottom, y_bottom) = l.side_origin(Side::Bottom);
    let shot = view.clicked(x_bottom + 2.5 * l.w_section, y_bottom + l.h_section / 2.0);
    assert_eq!(shot, Some(ShotRequest { slot: 3 }));
    assert_eq!(shot.unwrap().to_json(), r#"{"slot":3}"#);

    // clicks on the grid are not shots
    assert_eq!(view.clicked(l.x_grid + 10.0, l.y_grid + 10.0), None);
}

#[test]
fn keyboard_shots() {
    let mut view = mounted(Player::One, "playing");
    assert_eq!(view.key_pressed("f"), Some(ShotRequest { slot: 4 }));
    assert_eq!(view.key_pressed("4"), Some(ShotRequest { slot: 4 }));
    assert_eq!(view.key_pressed("q"), None);

    let mut idle = mounted(Player::One, "waiting");
    assert_eq!(idle.key_pressed("f"), None);
}

#[test]
fn malformed_state_renders_empty_board() {
    let mut view = mounted(Player::Three, "playing");
    view.apply_snapshot(r#"{"active_blocks":[{"pos":3"#, "[[1,");
    assert!(view.snapshot().active_blocks.is_empty());
    assert!(view.snapshot().holding_shots.is_empty());
    let log = view.surface();
    assert!(matches!(log.ops.first(), Some(DrawOp::Clear { .. })));
    assert_eq!(log.texts().count(), 0);
}

#[test]
fn staged_blocks_stay_off_the_grid() {
    let mut view = mounted(Player::Two, "playing");
    view.apply_snapshot(
        r#"{"active_blocks":[{"pos":5,"player":1},{"pos":"207","player":3}]}"#,
        "",
    );
    assert_eq!(view.snapshot().active_blocks.len(), 2);
    let fills = block_fills(view.surface(), &view);
    assert_eq!(fills.len(), 1);
    let (x, y) = view.layout().cell_origin(GridPos::new(2, 7));
    assert_eq!(fills[0], (x + 1.0, y + 1.0));
}

#[test]
fn blocks_rotate_with_the_viewer() {
    let state = r#"{"active_blocks":[{"pos":102,"player":1}]}"#;
    for viewer in Player::ALL {
        let mut view = mounted(viewer, "playing");
        view.apply_snapshot(state, "");
        let seen = translate_position(GridPos::new(1, 2), viewer);
        let (x, y) = view.layout().cell_origin(seen);
        assert_eq!(block_fills(view.surface(), &view), vec![(x + 1.0, y + 1.0)]);
    }
}

#[test]
fn full_redraw_keeps_hover_highlight() {
    let mut view = mounted(Player::Two, "playing");
    let (cx, cy) = view.layout().slot_boundaries().get(8).unwrap().center();
    view.pointer_moved(cx, cy);
    view.surface_mut().take();
    view.apply_snapshot("{}", "[]");
    let (x, y) = view.layout().slot_origin(Side::Bottom, 8);
    let last_fill = view.surface().ops.iter().rev().find_map(|op| match op {
        DrawOp::FillRect { x: fx, y: fy, color, .. } if *fx == x + 1.0 && *fy == y + 1.0 => {
            Some(color.clone())
        }
        _ => None,
    });
    assert_eq!(
        last_fill.as_deref(),
        Some(quadboard::palette::player_color(
            Player::Two,
            quadboard::palette::Shade::Light
        ))
    );
}

#[test]
fn resize_recomputes_layout() {
    let mut view = mounted(Player::Two, "playing");
    view.resize(800.0, 600.0);
    assert_eq!(view.layout().w_section, 66.0);
    assert_eq!(view.layout().h_section, 49.0);
    assert!(matches!(
        view.surface().ops.first(),
        Some(DrawOp::Clear { w, h }) if *w == 800.0 && *h == 600.0
    ));
}

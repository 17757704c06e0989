//! Preview scrolling and the pinned navigation bar.

use storestyle::controls::ControlInput;
use storestyle::preview::{EditorTool, ScrollViewport};
use storestyle::{ControlId, EditorController, EditorSettings};

#[test]
fn test_last_product_reachable_above_nav() {
    let mut editor = EditorController::new(EditorSettings::default());
    editor.scroll_to_end();

    let viewport = editor.viewport();
    let last = editor.settings().product_count - 1;
    assert!(viewport.is_item_fully_visible(last, editor.settings().product_height));

    // The last card ends exactly where the nav begins
    let card_bottom = (last as u32 + 1) * editor.settings().product_height;
    assert_eq!(card_bottom - viewport.scroll_offset(), viewport.nav_position());
}

#[test]
fn test_eight_items_at_exact_end_offset() {
    // (item height, viewport height, nav height)
    for (h, v, hn) in [(240, 844, 72), (100, 500, 50), (180, 700, 64), (300, 1000, 120)] {
        let mut viewport = ScrollViewport::for_items(v, hn, 8, h);
        let pinned = viewport.nav_position();
        let offset = 8 * h - (v - hn);

        assert_eq!(viewport.scroll_to(i64::from(offset)), offset);
        assert!(viewport.is_item_fully_visible(7, h), "h={h} v={v} hn={hn}");
        assert!(!viewport.is_item_visible(0, h), "h={h} v={v} hn={hn}");
        assert_eq!(viewport.nav_position(), pinned);
        assert_eq!(pinned, v - hn);
    }
}

#[test]
fn test_nav_position_independent_of_scroll() {
    let mut editor = EditorController::new(EditorSettings::default());
    let pinned = editor.viewport().nav_position();

    for offset in [0, 250, 600, 10_000, -5] {
        editor.scroll_to(offset);
        assert_eq!(editor.viewport().nav_position(), pinned);
        assert!(editor.viewport().scroll_offset() <= editor.viewport().max_offset());
    }
}

#[test]
fn test_scrolling_and_tools_leave_style_alone() {
    let mut editor = EditorController::new(EditorSettings::default());
    editor
        .handle_input(ControlId::CardShadow, ControlInput::Activate)
        .unwrap();
    let model = editor.snapshot().clone();
    let renders = editor.render_count();

    editor.scroll_by(480);
    editor.select_tool(EditorTool::Typography);
    editor.resize_preview(600);

    assert_eq!(editor.snapshot(), &model);
    assert_eq!(editor.render_count(), renders);
    assert_eq!(editor.nav().active(), EditorTool::Typography);
}

#[test]
fn test_style_changes_keep_scroll_offset() {
    let mut editor = EditorController::new(EditorSettings::default());
    editor.scroll_to(300);
    editor
        .handle_input(ControlId::CardRadius, ControlInput::Select("rounded".into()))
        .unwrap();
    assert_eq!(editor.viewport().scroll_offset(), 300);
}

#[test]
fn test_short_content_does_not_scroll() {
    let mut viewport = ScrollViewport::for_items(844, 72, 2, 240);
    assert_eq!(viewport.max_offset(), 0);
    assert_eq!(viewport.scroll_to(500), 0);
    assert_eq!(viewport.visible_items(240, 2), 0..2);
}

#[test]
fn test_resize_clamps_offset() {
    let mut editor = EditorController::new(EditorSettings::default());
    editor.scroll_to_end();
    editor.resize_preview(2400);
    assert_eq!(editor.viewport().scroll_offset(), 0);
    assert_eq!(editor.visible_products(), 0..8);
}

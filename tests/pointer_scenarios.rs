use std::cell::Cell;
use std::rc::Rc;

use egui::pos2;
use sticker_sketchpad::{
    PointerEvent, RecordingSurface, Renderer, SketchEvent, Sketchpad, SurfaceOp, Tool,
    ToolPreview,
};

#[test]
fn test_press_drag_release_records_one_stroke() {
    let mut pad = Sketchpad::default();
    pad.handle(PointerEvent::Press(pos2(10.0, 10.0)));
    pad.handle(PointerEvent::Move(pos2(20.0, 10.0)));
    pad.handle(PointerEvent::Move(pos2(20.0, 20.0)));
    pad.handle(PointerEvent::Release);

    let history = pad.history();
    assert_eq!(history.len(), 1);
    assert!(history.redo_stack().is_empty());
    let stroke = history.committed()[0].as_stroke().unwrap();
    assert_eq!(
        stroke.points(),
        &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(20.0, 20.0)]
    );
}

#[test]
fn test_sticker_preview_then_click_places_sticker() {
    let mut pad = Sketchpad::default();
    pad.select_tool(Tool::sticker("⭐"));
    pad.handle(PointerEvent::Move(pos2(50.0, 50.0)));

    match pad.preview() {
        Some(ToolPreview::Sticker(mark)) => {
            assert_eq!(mark.position(), pos2(50.0, 50.0));
            assert_eq!(mark.glyph(), "⭐");
        }
        other => panic!("expected sticker preview, got {other:?}"),
    }

    // the preview paints as a glyph
    let mut surface = RecordingSurface::new(egui::vec2(100.0, 100.0));
    Renderer::default().repaint(&mut surface, pad.history(), pad.preview());
    assert!(matches!(surface.paint_ops().last(), Some(SurfaceOp::Text { .. })));

    pad.handle(PointerEvent::Press(pos2(50.0, 50.0)));
    pad.handle(PointerEvent::Release);

    assert_eq!(pad.history().len(), 1);
    let mark = pad.history().committed()[0].as_sticker().unwrap();
    assert_eq!(mark.position(), pos2(50.0, 50.0));
    assert!(pad.preview().is_none());
}

#[test]
fn test_sticker_follows_pointer_while_held() {
    let mut pad = Sketchpad::new(Tool::sticker("🌸"));
    pad.handle(PointerEvent::Press(pos2(1.0, 1.0)));
    pad.handle(PointerEvent::Move(pos2(30.0, 40.0)));
    pad.handle(PointerEvent::Move(pos2(35.0, 45.0)));
    pad.handle(PointerEvent::Release);

    let mark = pad.history().committed()[0].as_sticker().unwrap();
    assert_eq!(mark.position(), pos2(35.0, 45.0));
}

#[test]
fn test_click_without_drag_leaves_no_stroke() {
    let mut pad = Sketchpad::default();
    pad.handle(PointerEvent::Press(pos2(10.0, 10.0)));
    pad.handle(PointerEvent::Release);

    assert!(pad.history().is_empty());
    assert!(!pad.history().is_active());
}

#[test]
fn test_leave_commits_like_release() {
    let mut pad = Sketchpad::default();
    pad.handle(PointerEvent::Press(pos2(10.0, 10.0)));
    pad.handle(PointerEvent::Move(pos2(11.0, 10.0)));
    pad.handle(PointerEvent::Leave);
    pad.handle(PointerEvent::Release);

    assert_eq!(pad.history().len(), 1);
    assert!(pad.preview().is_none());
}

#[test]
fn test_tool_change_refreshes_preview_with_single_event() {
    let mut pad = Sketchpad::default();
    pad.handle(PointerEvent::Move(pos2(5.0, 5.0)));

    let count = Rc::new(Cell::new(0));
    let counter = count.clone();
    pad.subscribe(move |_: &SketchEvent| counter.set(counter.get() + 1));

    pad.select_tool(Tool::sticker("🐱"));

    assert_eq!(count.get(), 1);
    assert!(matches!(pad.preview(), Some(ToolPreview::Sticker(_))));
}

#[test]
fn test_empty_custom_glyph_keeps_previous_tool() {
    let mut pad = Sketchpad::default();
    pad.select_tool(Tool::pen(8.0));

    assert!(pad.select_custom_sticker("").is_err());
    assert_eq!(pad.tools().tool(), &Tool::pen(8.0));
}

#[test]
fn test_undo_redo_through_sketchpad() {
    let mut pad = Sketchpad::default();
    for y in [10.0, 20.0] {
        pad.handle(PointerEvent::Press(pos2(0.0, y)));
        pad.handle(PointerEvent::Move(pos2(5.0, y)));
        pad.handle(PointerEvent::Release);
    }

    assert!(pad.undo());
    assert!(pad.undo());
    assert!(!pad.undo());
    assert!(pad.redo());
    assert_eq!(pad.history().len(), 1);

    pad.clear_all();
    assert!(!pad.redo());
}

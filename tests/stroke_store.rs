use egui::{Color32, Pos2};
use photo_markup::{PaintStyle, StrokeStore, EditorError};

fn paint() -> PaintStyle {
    PaintStyle::new(3.0, Color32::WHITE)
}

fn create_test_store() -> StrokeStore {
    StrokeStore::new(paint(), 20.0)
}

// Draw one complete stroke through `points`
fn draw(store: &mut StrokeStore, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().unwrap();
    store.begin_stroke(Pos2::new(first.0, first.1));
    for (x, y) in rest {
        store.extend_stroke(Pos2::new(*x, *y));
    }
    store.finish_stroke(paint());
}

#[test]
fn test_new_store_has_only_placeholder() {
    let store = create_test_store();
    assert_eq!(store.strokes().len(), 1);
    assert_eq!(store.completed_len(), 0);
    assert!(store.current().path().is_empty());
    assert!(!store.can_undo());
    assert!(!store.is_touch_active());
}

#[test]
fn test_segment_count_matches_extend_calls() {
    let mut store = create_test_store();
    store.begin_stroke(Pos2::new(0.0, 0.0));
    assert!(store.is_touch_active());
    for i in 1..=5 {
        store.extend_stroke(Pos2::new(i as f32, i as f32));
    }
    assert_eq!(store.current().path().segment_count(), 5);

    store.finish_stroke(paint());
    assert!(!store.is_touch_active());
    assert_eq!(store.strokes().len(), 2);
    assert_eq!(store.strokes()[0].path().segment_count(), 5);
    assert!(store.current().path().is_empty());
}

#[test]
fn test_new_stroke_does_not_touch_finished_ones() {
    let mut store = create_test_store();
    draw(&mut store, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let before = store.strokes()[0].path().polylines();

    draw(&mut store, &[(50.0, 50.0), (60.0, 60.0)]);

    assert_eq!(store.strokes()[0].path().polylines(), before);
    assert_eq!(store.strokes()[1].path().segment_count(), 1);
    assert_eq!(store.completed_len(), 2);
}

#[test]
fn test_move_without_touch_is_ignored() {
    let mut store = create_test_store();
    store.extend_stroke(Pos2::new(5.0, 5.0));
    assert!(store.current().path().is_empty());

    draw(&mut store, &[(0.0, 0.0), (1.0, 1.0)]);
    // A late move after release must not leak into the next stroke
    store.extend_stroke(Pos2::new(9.0, 9.0));
    assert!(store.current().path().is_empty());
}

#[test]
fn test_undo_removes_last_finished_stroke() {
    let mut store = create_test_store();
    draw(&mut store, &[(0.0, 0.0), (1.0, 1.0)]);
    draw(&mut store, &[(5.0, 5.0), (6.0, 6.0), (7.0, 7.0)]);
    assert_eq!(store.strokes().len(), 3);

    let removed = store.undo_last().unwrap();
    assert!(removed.path().is_empty());
    assert_eq!(store.strokes().len(), 2);
    // The first stroke survives, the placeholder stays last
    assert_eq!(store.strokes()[0].path().segment_count(), 1);
    assert!(store.current().path().is_empty());
}

#[test]
fn test_undo_with_only_placeholder_fails_without_changes() {
    let mut store = create_test_store();
    assert_eq!(store.undo_last().unwrap_err(), EditorError::NothingToUndo);
    assert_eq!(store.strokes().len(), 1);

    // Still usable afterwards
    draw(&mut store, &[(0.0, 0.0), (1.0, 0.0)]);
    assert_eq!(store.completed_len(), 1);
}

#[test]
fn test_tap_leaves_degenerate_stroke_that_can_be_undone() {
    let mut store = create_test_store();
    store.begin_stroke(Pos2::new(3.0, 3.0));
    store.finish_stroke(paint());

    assert_eq!(store.completed_len(), 1);
    assert_eq!(store.strokes()[0].path().segment_count(), 0);
    assert!(store.strokes()[0].path().polylines().iter().all(|l| l.len() < 2));

    let removed = store.undo_last().unwrap();
    assert!(removed.path().is_empty());
    assert_eq!(store.strokes().len(), 1);
}

#[test]
fn test_finished_stroke_keeps_its_paint() {
    let mut store = create_test_store();
    let red = PaintStyle::new(8.0, Color32::RED);
    store.begin_stroke(Pos2::new(0.0, 0.0));
    store.extend_stroke(Pos2::new(1.0, 1.0));
    store.finish_stroke(red);

    assert_eq!(store.strokes()[0].paint(), paint());
    assert_eq!(store.current().paint(), red);
}

#[test]
fn test_eraser_path_grows_across_gestures() {
    let mut store = create_test_store();
    store.begin_erase(Pos2::new(0.0, 0.0));
    store.extend_erase(Pos2::new(10.0, 0.0));
    store.end_erase();

    store.begin_erase(Pos2::new(0.0, 10.0));
    store.extend_erase(Pos2::new(10.0, 10.0));
    store.extend_erase(Pos2::new(20.0, 10.0));
    store.end_erase();

    let eraser = store.eraser();
    assert_eq!(eraser.width(), 20.0);
    assert_eq!(eraser.path().segment_count(), 3);
    assert_eq!(eraser.path().polylines().len(), 2);
    // Erasing never adds strokes
    assert_eq!(store.strokes().len(), 1);
}

#[test]
fn test_eraser_ignores_moves_after_release() {
    let mut store = create_test_store();
    store.begin_erase(Pos2::new(0.0, 0.0));
    store.end_erase();
    store.extend_erase(Pos2::new(4.0, 4.0));
    assert_eq!(store.eraser().path().segment_count(), 0);
}

use egui::{Color32, Pos2};
use kurbo::Affine;
use photo_markup::{EditorError, TextStore, transform};

fn start() -> Affine {
    Affine::translate((70.0, 240.0))
}

#[test]
fn test_repeated_add_without_text_yields_one_box() {
    let mut store = TextStore::new();
    let first = store.add_text_box(Color32::WHITE, start());
    let second = store.add_text_box(Color32::WHITE, start());

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(store.len(), 1);
    assert_eq!(store.boxes()[0].text(), "");
}

#[test]
fn test_add_after_text_yields_second_box() {
    let mut store = TextStore::new();
    let first = store.add_text_box(Color32::WHITE, start()).unwrap();
    store.update_text(first, "hello").unwrap();

    let second = store.add_text_box(Color32::WHITE, start()).unwrap();
    assert_ne!(first, second);
    assert_eq!(store.len(), 2);
    assert_eq!(store.boxes()[1].text(), "");
}

#[test]
fn test_update_text_only_touches_target() {
    let mut store = TextStore::new();
    let a = store.add_text_box(Color32::WHITE, start()).unwrap();
    store.update_text(a, "first").unwrap();
    let b = store.add_text_box(Color32::RED, start()).unwrap();
    store.update_text(b, "second").unwrap();
    store.update_text(a, "first, edited").unwrap();

    assert_eq!(store.get(a).unwrap().text(), "first, edited");
    assert_eq!(store.get(b).unwrap().text(), "second");
    assert_eq!(store.get(b).unwrap().color(), Color32::RED);
    assert_eq!(store.boxes()[0].id(), a);
}

#[test]
fn test_update_transform_moves_one_box() {
    let mut store = TextStore::new();
    let a = store.add_text_box(Color32::WHITE, start()).unwrap();
    store.update_text(a, "a").unwrap();
    let b = store.add_text_box(Color32::WHITE, start()).unwrap();

    store.update_transform(a, 5.0, -10.0).unwrap();
    store.update_transform(a, 1.0, 2.0).unwrap();

    assert_eq!(transform::origin(store.get(a).unwrap().matrix()), Pos2::new(76.0, 232.0));
    assert_eq!(transform::origin(store.get(b).unwrap().matrix()), Pos2::new(70.0, 240.0));
}

#[test]
fn test_shared_transform_is_seen_by_every_reader() {
    let mut store = TextStore::new();
    let id = store.add_text_box(Color32::WHITE, start()).unwrap();
    let reader = store.get(id).unwrap().transform().clone();

    store.update_transform(id, 10.0, 0.0).unwrap();
    assert_eq!(transform::origin(reader.get()), Pos2::new(80.0, 240.0));
}

#[test]
fn test_undo_pops_last_box() {
    let mut store = TextStore::new();
    let a = store.add_text_box(Color32::WHITE, start()).unwrap();
    store.update_text(a, "keep").unwrap();
    let b = store.add_text_box(Color32::WHITE, start()).unwrap();

    let removed = store.undo_last().unwrap();
    assert_eq!(removed.id(), b);
    assert_eq!(store.len(), 1);
    assert_eq!(store.boxes()[0].text(), "keep");
}

#[test]
fn test_undo_on_empty_store_fails() {
    let mut store = TextStore::new();
    assert_eq!(store.undo_last().unwrap_err(), EditorError::NothingToUndo);
    assert!(store.is_empty());
}

#[test]
fn test_stale_box_is_rejected() {
    let mut store = TextStore::new();
    let id = store.add_text_box(Color32::WHITE, start()).unwrap();
    store.undo_last().unwrap();

    assert_eq!(store.update_text(id, "late").unwrap_err(), EditorError::StaleTextBox(id));
    assert_eq!(
        store.update_transform(id, 1.0, 1.0).unwrap_err(),
        EditorError::StaleTextBox(id)
    );
    assert!(store.is_empty());
}

#[test]
fn test_cloned_store_moves_independently() {
    let mut store = TextStore::new();
    let id = store.add_text_box(Color32::WHITE, start()).unwrap();
    let snapshot = store.clone();

    store.update_transform(id, 10.0, 0.0).unwrap();
    assert_eq!(transform::origin(store.get(id).unwrap().matrix()), Pos2::new(80.0, 240.0));
    assert_eq!(transform::origin(snapshot.get(id).unwrap().matrix()), Pos2::new(70.0, 240.0));
}

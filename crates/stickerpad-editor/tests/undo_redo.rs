//! Integration tests: gestures → history → notifications (stickerpad-editor).
//!
//! Drives a `Sketchpad` the way a host does, through pointer events and the
//! history buttons, and checks both the resulting marks and what listeners
//! were told.

use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;
use stickerpad_core::{FreehandStroke, Mark, Point, StampMark, ToolCatalogue, ToolEntry, ToolState};
use stickerpad_editor::{SceneChange, SceneListener, SceneView, Sketchpad};

/// What a listener saw: the change, plus the committed length at that
/// moment, which proves the change was applied before the call.
#[derive(Default)]
struct Witness {
    seen: Vec<(SceneChange, usize)>,
}

impl SceneListener for Witness {
    fn scene_changed(&mut self, change: SceneChange, scene: &SceneView<'_>) {
        self.seen.push((change, scene.history.committed_len()));
    }
}

fn watched_pad() -> (Sketchpad, Rc<RefCell<Witness>>) {
    let witness = Rc::new(RefCell::new(Witness::default()));
    let mut pad = Sketchpad::default();
    pad.subscribe(Rc::clone(&witness));
    (pad, witness)
}

fn committed(pad: &Sketchpad) -> Vec<Mark> {
    pad.history().committed().cloned().collect()
}

fn redoable(pad: &Sketchpad) -> Vec<Mark> {
    pad.history().redoable().cloned().collect()
}

fn stroke(points: &[(f32, f32)], width: f32) -> Mark {
    let points = points.iter().map(|&p| Point::from(p)).collect();
    FreehandStroke::from_points(points, width).unwrap().into()
}

fn stamp(x: f32, y: f32, symbol: &str) -> Mark {
    StampMark::new(Point::new(x, y), symbol).into()
}

/// Scenario A: pen width 2, down (10,10), move (20,20), up.
fn draw_scenario_a(pad: &mut Sketchpad) {
    pad.select_pen(2.0);
    pad.pointer_down(10.0, 10.0);
    pad.pointer_move(20.0, 20.0);
    pad.pointer_up();
}

// ─── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn pen_drag_commits_one_stroke() {
    let mut pad = Sketchpad::default();
    draw_scenario_a(&mut pad);

    assert_eq!(committed(&pad), vec![stroke(&[(10.0, 10.0), (20.0, 20.0)], 2.0)]);
    assert_eq!(redoable(&pad), vec![]);
}

#[test]
fn undo_moves_stroke_to_redo() {
    let mut pad = Sketchpad::default();
    draw_scenario_a(&mut pad);

    assert!(pad.undo());
    assert_eq!(committed(&pad), vec![]);
    assert_eq!(redoable(&pad), vec![stroke(&[(10.0, 10.0), (20.0, 20.0)], 2.0)]);
}

#[test]
fn stamp_after_undo_drops_redo() {
    let mut pad = Sketchpad::default();
    draw_scenario_a(&mut pad);
    pad.undo();

    pad.select_stamp("★");
    pad.pointer_down(5.0, 5.0);

    assert_eq!(committed(&pad), vec![stamp(5.0, 5.0, "★")]);
    assert_eq!(redoable(&pad), vec![]);
}

#[test]
fn clear_empties_both_stacks() {
    let mut pad = Sketchpad::default();
    draw_scenario_a(&mut pad);
    pad.select_stamp("🍪");
    pad.pointer_down(1.0, 1.0);
    pad.pointer_up();
    pad.undo();

    pad.clear();
    assert_eq!(committed(&pad), vec![]);
    assert_eq!(redoable(&pad), vec![]);
}

#[test]
fn hover_previews_stamp_without_committing() {
    let (mut pad, witness) = watched_pad();
    pad.select_stamp("🍪");

    pad.pointer_move(30.0, 40.0);

    let stamp_tool = ToolState::Stamp {
        symbol: "🍪".to_string(),
    };
    assert_eq!(
        pad.preview().visible(),
        Some((Point::new(30.0, 40.0), &stamp_tool))
    );
    assert_eq!(committed(&pad), vec![]);
    assert_eq!(
        witness.borrow().seen,
        vec![(SceneChange::ToolSelected, 0), (SceneChange::HoverMoved, 0)]
    );
}

// ─── Properties ─────────────────────────────────────────────────────────

#[test]
fn undo_then_redo_restores_both_stacks() {
    let mut pad = Sketchpad::default();
    draw_scenario_a(&mut pad);
    pad.select_stamp("🌸");
    pad.pointer_down(3.0, 3.0);
    pad.pointer_up();
    pad.select_pen(1.0);
    pad.pointer_down(0.0, 0.0);
    pad.pointer_move(1.0, 0.0);
    pad.pointer_up();
    // Something already on the redo stack, too.
    pad.undo();

    let before = (committed(&pad), redoable(&pad));
    assert!(pad.undo());
    assert!(pad.redo());
    assert_eq!((committed(&pad), redoable(&pad)), before);
}

#[test]
fn new_mark_invalidates_redo() {
    let mut pad = Sketchpad::default();
    for x in [0.0, 10.0, 20.0] {
        pad.pointer_down(x, 0.0);
        pad.pointer_up();
    }
    pad.undo();
    pad.undo();
    assert_eq!(pad.history().redoable_len(), 2);

    pad.pointer_down(50.0, 50.0);
    assert!(!pad.history().can_redo());
    assert!(!pad.redo());
}

#[test]
fn empty_undo_redo_change_nothing_and_stay_silent() {
    let (mut pad, witness) = watched_pad();
    assert!(!pad.undo());
    assert!(!pad.redo());
    assert_eq!(committed(&pad), vec![]);
    assert_eq!(redoable(&pad), vec![]);

    // Redo on an exhausted buffer after real work.
    pad.pointer_down(1.0, 1.0);
    pad.pointer_up();
    let before = committed(&pad);
    let seen = witness.borrow().seen.len();
    assert!(!pad.redo());
    assert_eq!(committed(&pad), before);
    assert_eq!(witness.borrow().seen.len(), seen);
}

#[test]
fn stroke_undoes_whole_regardless_of_length() {
    for n in [1usize, 2, 100] {
        let mut pad = Sketchpad::default();
        pad.pointer_down(0.0, 0.0);
        for i in 1..n {
            pad.pointer_move(i as f32, i as f32);
        }
        pad.pointer_up();

        let points = pad.history().committed().next().unwrap().as_freehand().unwrap().points().len();
        assert_eq!(points, n);

        assert!(pad.undo());
        assert_eq!(pad.history().committed_len(), 0, "n = {n}");
        assert_eq!(pad.history().redoable_len(), 1, "n = {n}");
    }
}

// ─── Notifications ──────────────────────────────────────────────────────

#[test]
fn one_notification_per_change_after_it_lands() {
    let (mut pad, witness) = watched_pad();
    pad.pointer_move(1.0, 1.0);
    pad.pointer_down(1.0, 1.0);
    pad.pointer_move(2.0, 2.0);
    pad.pointer_up();
    pad.undo();
    pad.redo();
    pad.clear();

    assert_eq!(
        witness.borrow().seen,
        vec![
            (SceneChange::HoverMoved, 0),
            (SceneChange::MarkBegun, 1),
            (SceneChange::MarkExtended, 1),
            (SceneChange::MarkEnded, 1),
            (SceneChange::Undone, 0),
            (SceneChange::Redone, 1),
            (SceneChange::Cleared, 0),
        ]
    );
}

#[test]
fn listeners_hear_in_subscription_order() {
    let order = Rc::new(RefCell::new(Vec::new()));

    struct Tagged(&'static str, Rc<RefCell<Vec<&'static str>>>);
    impl SceneListener for Tagged {
        fn scene_changed(&mut self, _change: SceneChange, _scene: &SceneView<'_>) {
            self.1.borrow_mut().push(self.0);
        }
    }

    let mut pad = Sketchpad::default();
    pad.subscribe(Tagged("first", Rc::clone(&order)));
    pad.subscribe(Tagged("second", Rc::clone(&order)));
    pad.refresh();

    assert_eq!(pad.listener_count(), 2);
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

// ─── Gesture edges ──────────────────────────────────────────────────────

#[test]
fn leaving_mid_drag_commits_partial_stroke() {
    let mut pad = Sketchpad::default();
    pad.select_pen(3.0);
    pad.pointer_down(0.0, 0.0);
    pad.pointer_move(4.0, 0.0);
    pad.pointer_leave();
    pad.pointer_move(8.0, 0.0);

    assert_eq!(committed(&pad), vec![stroke(&[(0.0, 0.0), (4.0, 0.0)], 3.0)]);
    assert!(!pad.history().is_action_open());
}

#[test]
fn tool_change_mid_drag_does_not_touch_open_stroke() {
    let mut pad = Sketchpad::default();
    pad.select_pen(2.0);
    pad.pointer_down(0.0, 0.0);
    pad.select_pen(9.0);
    pad.pointer_move(1.0, 1.0);
    pad.pointer_up();

    assert_eq!(committed(&pad), vec![stroke(&[(0.0, 0.0), (1.0, 1.0)], 2.0)]);
}

#[test]
fn undo_mid_drag_stops_the_gesture_growing() {
    let mut pad = Sketchpad::default();
    pad.pointer_down(0.0, 0.0);
    pad.undo();
    pad.redo();

    assert!(!pad.pointer_move(5.0, 5.0));
    pad.pointer_up();
    assert_eq!(committed(&pad), vec![stroke(&[(0.0, 0.0)], 1.0)]);
}

// ─── Tool selection ─────────────────────────────────────────────────────

#[test]
fn blank_stamp_never_reaches_history() {
    let (mut pad, witness) = watched_pad();
    pad.select_pen(2.0);
    assert!(!pad.select_stamp(""));
    assert!(!pad.select_stamp("   "));
    pad.pointer_down(5.0, 5.0);
    pad.pointer_up();

    assert_eq!(committed(&pad), vec![stroke(&[(5.0, 5.0)], 2.0)]);
    assert_eq!(
        witness.borrow().seen,
        vec![
            (SceneChange::ToolSelected, 0),
            (SceneChange::MarkBegun, 1),
            (SceneChange::MarkEnded, 1),
        ]
    );
}

#[test]
fn thin_pen_width_matches_catalogue_selection() {
    let catalogue = ToolCatalogue::new(vec![ToolEntry::pen("hairline", 0.3)]).unwrap();
    let mut from_catalogue = Sketchpad::new(catalogue);
    assert!(from_catalogue.select_tool("hairline"));

    let mut direct = Sketchpad::default();
    direct.select_pen(0.3);

    assert_eq!(direct.tool(), &ToolState::Pen { width: 0.3 });
    assert_eq!(direct.tool(), from_catalogue.tool());

    direct.pointer_down(1.0, 1.0);
    assert_eq!(committed(&direct), vec![stroke(&[(1.0, 1.0)], 0.3)]);
}

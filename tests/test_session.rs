use school_killer::state::data::FileEntry;
use school_killer::state::handoff::Viewer;
use school_killer::state::session::Session;
use school_killer::ui::outside::{collapse_if_outside, ZoomRegion};
use school_killer::SessionError;

use iced::Point;

fn page(name: &str) -> FileEntry {
    FileEntry::new(name, "image/png", vec![0x89u8, b'P', b'N', b'G'])
}

fn session_with(count: usize) -> Session {
    let mut session = Session::new();
    session.append((0..count).map(|i| page(&format!("page_{i}.png"))));
    session
}

fn names(session: &Session) -> Vec<String> {
    session.files().iter().map(|entry| entry.name().to_string()).collect()
}

struct AlwaysOutside;

impl ZoomRegion for AlwaysOutside {
    fn is_inside(&self, _target: Point) -> bool {
        false
    }
}

/// What a cursor should become after removing `removed`
fn expected_repair(cursor: Option<usize>, removed: usize) -> Option<usize> {
    match cursor {
        Some(c) if c == removed => None,
        Some(c) if c > removed => Some(c - 1),
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_scenario_remove_before_selection_shifts_it() {
    let mut session = session_with(3);
    session.select_toggle(1);
    assert_eq!(session.selected(), Some(1));

    session.remove_at(0).unwrap();

    assert_eq!(session.selected(), Some(0));
    assert_eq!(names(&session), ["page_1.png", "page_2.png"]);
}

#[test]
fn test_scenario_remove_selected_and_zoomed_clears_both() {
    let mut session = session_with(3);
    session.select_toggle(1);
    session.remove_at(0).unwrap();

    session.zoom_toggle(0);
    assert_eq!(session.zoomed(), Some(0));

    session.remove_at(0).unwrap();
    assert_eq!(session.selected(), None);
    assert_eq!(session.zoomed(), None);
}

#[test]
fn test_scenario_view_solution_on_empty_collection() {
    let mut session = Session::new();

    assert_eq!(session.view_solution().unwrap_err(), SessionError::NoSelection);
    assert_eq!(session.references().live_count(), 0);
}

#[test]
fn test_scenario_select_twice_clears() {
    let mut session = session_with(1);
    session.select_toggle(0);
    session.select_toggle(0);
    assert_eq!(session.selected(), None);
}

#[test]
fn test_scenario_outside_interaction_collapses_zoom() {
    let mut session = session_with(2);
    session.zoom_toggle(1);

    assert!(collapse_if_outside(Point::new(5.0, 5.0), &AlwaysOutside, &mut session));
    assert_eq!(session.zoomed(), None);
    assert_eq!(session.selected(), None);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn test_indices_stay_dense() {
    let mut session = session_with(4);
    let ops: [(bool, usize); 7] = [(false, 2), (true, 3), (false, 0), (false, 9), (true, 1), (false, 4), (false, 1)];

    for (append, n) in ops {
        if append {
            session.append((0..n).map(|i| page(&format!("extra_{i}.png"))));
        } else {
            let _ = session.remove_at(n);
        }

        let len = session.files().len();
        for index in 0..len {
            assert!(session.files().get(index).is_some());
            assert!(session.preview(index).is_some());
        }
        assert!(session.files().get(len).is_none());
    }
}

#[test]
fn test_selection_repair_is_total() {
    let len = 4;
    for removed in 0..len {
        for selected in (0..len).map(Some).chain([None]) {
            for zoomed in (0..len).map(Some).chain([None]) {
                let mut session = session_with(len);
                if let Some(i) = selected {
                    session.select_toggle(i);
                }
                if let Some(i) = zoomed {
                    session.zoom_toggle(i);
                }

                session.remove_at(removed).unwrap();

                assert_eq!(session.selected(), expected_repair(selected, removed));
                assert_eq!(session.zoomed(), expected_repair(zoomed, removed));
            }
        }
    }
}

#[test]
fn test_out_of_range_removal_changes_nothing() {
    let mut session = session_with(2);
    session.select_toggle(1);
    session.zoom_toggle(0);
    let before = session.selection();

    let err = session.remove_at(2).unwrap_err();

    assert_eq!(err, SessionError::IndexOutOfRange { index: 2, len: 2 });
    assert_eq!(session.selection(), before);
    assert_eq!(session.files().len(), 2);
}

#[test]
fn test_zoom_and_select_are_independent() {
    let mut session = session_with(3);
    session.select_toggle(2);

    session.zoom_toggle(0);
    session.zoom_toggle(1);
    session.collapse_zoom();
    assert_eq!(session.selected(), Some(2));

    session.zoom_toggle(1);
    session.select_toggle(0);
    session.select_toggle(0);
    assert_eq!(session.zoomed(), Some(1));
}

#[test]
fn test_append_keeps_cursors() {
    let mut session = session_with(2);
    session.select_toggle(1);
    session.zoom_toggle(0);

    let added = session.append([page("late.png")]);

    assert_eq!(added, 2..3);
    assert_eq!(session.selected(), Some(1));
    assert_eq!(session.zoomed(), Some(0));
}

// ---------------------------------------------------------------------------
// Navigation handoff
// ---------------------------------------------------------------------------

#[test]
fn test_handoff_carries_selected_entry() {
    let mut session = session_with(3);
    session.select_toggle(2);
    let selected_id = session.files().get(2).unwrap().id();

    let handoff = session.check_solution().unwrap();

    assert_eq!(handoff.viewer(), Viewer::CheckSolution);
    assert_eq!(handoff.reference().entry(), selected_id);
    assert!(session.references().is_live(handoff.reference()));
}

#[test]
fn test_each_handoff_mints_a_new_reference() {
    let mut session = session_with(1);
    session.select_toggle(0);

    let first = session.view_solution().unwrap();
    let second = session.view_solution().unwrap();
    assert_ne!(first.reference().token(), second.reference().token());

    session.release(first);
    session.release(second);
    assert_eq!(session.references().live_count(), 1);
}

#[test]
fn test_no_selection_allocates_nothing() {
    let mut session = session_with(2);
    let before = session.references().live_count();

    assert!(session.view_solution().is_err());
    assert!(session.check_solution().is_err());
    assert_eq!(session.references().live_count(), before);
}

#[test]
fn test_removing_entry_bounds_live_references() {
    let mut session = session_with(3);
    for _ in 0..5 {
        session.append([page("churn.png")]);
        session.remove_at(session.files().len() - 1).unwrap();
    }

    assert_eq!(session.references().live_count(), session.files().len());
}

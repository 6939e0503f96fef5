//! End-to-end editing scenarios.
//!
//! Inputs are driven through the controller exactly as the terminal front end
//! does, and every save effect is applied to an in-memory store so the tests
//! can check what would have reached disk.

use belgianlake::model::Record;
use belgianlake::session::{handle, Effect, Input, Session};
use belgianlake::store::{MemoryStore, RecordStore};
use rstest::rstest;

/// A session plus the store its saves land in.
struct Harness {
    session: Session,
    store: MemoryStore,
}

impl Harness {
    fn new(records: Vec<Record>) -> Self {
        Self {
            session: Session::new(records.clone()),
            store: MemoryStore::new(records),
        }
    }

    fn press(&mut self, inputs: &[Input]) {
        for &input in inputs {
            let session = std::mem::take(&mut self.session);
            let (session, effect) = handle(session, input);
            self.session = session;
            if let Effect::Save(records) = effect {
                self.store.save(&records).unwrap();
            }
        }
    }

    fn flags(&self) -> Vec<bool> {
        self.session.records().iter().map(|r| r.enabled).collect()
    }
}

fn abc() -> Vec<Record> {
    vec![
        Record::new(false, "a"),
        Record::new(false, "b"),
        Record::new(true, "c"),
    ]
}

mod batch_toggle {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_toggle_selected_then_undo() {
        let mut h = Harness::new(abc());

        // Select rows 0 and 2: space on 0 advances to 1, down to 2, space.
        h.press(&[Input::Space, Input::Down, Input::Space]);
        assert_eq!(h.store.save_count(), 0);

        h.press(&[Input::Enter]);
        assert_eq!(
            h.session.records(),
            &[
                Record::new(true, "a"),
                Record::new(false, "b"),
                Record::new(false, "c"),
            ]
        );
        assert!(h.session.selection().is_empty());
        assert_eq!(h.store.save_count(), 1);
        assert_eq!(h.store.current(), h.session.records().to_vec());

        h.press(&[Input::Char('u')]);
        assert_eq!(h.session.records(), abc().as_slice());
        assert!(h.session.selection().is_empty());
        assert_eq!(h.store.save_count(), 2);
        assert_eq!(h.store.current(), abc());
    }

    #[test]
    fn test_range_selection_then_commit() {
        let mut h = Harness::new((0..6).map(|i| Record::new(false, format!("f{i}"))).collect());

        // Anchor at 1, extend to 4.
        h.press(&[
            Input::Down,
            Input::Space,
            Input::Down,
            Input::Down,
            Input::RangeModifier,
            Input::Space,
            Input::Enter,
        ]);

        assert_eq!(h.flags(), vec![false, true, true, true, true, false]);
        assert_eq!(h.store.save_count(), 1);
    }

    #[test]
    fn test_enter_without_selection_does_not_save() {
        let mut h = Harness::new(abc());
        h.press(&[Input::Enter]);
        assert_eq!(h.store.save_count(), 0);
        assert_eq!(h.session.undo_depth(), 0);
    }
}

mod whole_list {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::empty(vec![], vec![])]
    #[case::single_off(vec![false], vec![true])]
    #[case::single_on(vec![true], vec![false])]
    #[case::all_on(vec![true, true, true], vec![false, false, false])]
    #[case::mixed(vec![true, false, true], vec![true, true, true])]
    #[case::all_off(vec![false, false], vec![true, true])]
    fn test_enable_or_disable_all(#[case] before: Vec<bool>, #[case] after: Vec<bool>) {
        let records: Vec<Record> = before
            .iter()
            .enumerate()
            .map(|(i, &on)| Record::new(on, format!("f{i}")))
            .collect();
        let mut h = Harness::new(records);

        h.press(&[Input::Char('e')]);

        assert_eq!(h.flags(), after);
        let expected_saves = usize::from(!before.is_empty());
        assert_eq!(h.store.save_count(), expected_saves);
    }

    #[test]
    fn test_toggle_all_flips_each_record() {
        let mut h = Harness::new(abc());
        h.press(&[Input::Char('t')]);
        assert_eq!(h.flags(), vec![true, true, false]);
        assert_eq!(h.session.cursor(), 0);
    }

    #[test]
    fn test_empty_store_is_inert() {
        let mut h = Harness::new(Vec::new());
        h.press(&[
            Input::Char('t'),
            Input::Char('a'),
            Input::Char('x'),
            Input::Char('e'),
            Input::Space,
            Input::Enter,
            Input::Char('u'),
        ]);

        assert_eq!(h.store.save_count(), 0);
        assert!(h.session.selection().is_empty());
        assert_eq!(h.session.undo_depth(), 0);
    }
}

mod current_row {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::single_row(1, 0, 0)]
    #[case::middle(3, 1, 2)]
    #[case::last_wraps(3, 2, 0)]
    fn test_toggle_current_advances(
        #[case] len: usize,
        #[case] start: usize,
        #[case] expected_cursor: usize,
    ) {
        let mut h = Harness::new((0..len).map(|i| Record::new(false, format!("f{i}"))).collect());
        for _ in 0..start {
            h.press(&[Input::Down]);
        }

        h.press(&[Input::Char('x')]);

        assert!(h.session.records()[start].enabled);
        assert_eq!(h.session.cursor(), expected_cursor);
        assert_eq!(h.store.save_count(), 1);
    }

    #[test]
    fn test_repeated_undo_walks_back_to_start() {
        let mut h = Harness::new(abc());
        h.press(&[Input::Char('x'), Input::Char('x'), Input::Char('t')]);
        assert_eq!(h.session.undo_depth(), 3);

        h.press(&[Input::Char('u'), Input::Char('u'), Input::Char('u'), Input::Char('u')]);

        assert_eq!(h.session.records(), abc().as_slice());
        assert_eq!(h.session.undo_depth(), 0);
        // Three edits and three effective undos; the fourth undo is a no-op.
        assert_eq!(h.store.save_count(), 6);
    }
}

mod quitting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::letter(Input::Char('q'))]
    #[case::interrupt(Input::Quit)]
    fn test_quit_freezes_session(#[case] quit: Input) {
        let mut h = Harness::new(abc());
        h.press(&[quit, Input::Char('t'), Input::Space, Input::Char('u')]);

        assert!(h.session.is_quitting());
        assert_eq!(h.session.records(), abc().as_slice());
        assert!(h.session.selection().is_empty());
        assert_eq!(h.store.save_count(), 0);
    }
}

mod display {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rows_reflect_state() {
        let mut h = Harness::new(abc());
        h.press(&[Input::Space]);

        let rows = h.session.rows();
        let statuses: Vec<&str> = rows.iter().map(|r| r.status.as_str()).collect();
        assert_eq!(statuses, vec![">[ ]", "[ ]", "[x]"]);
        assert!(rows[1].focused);
        assert_eq!(rows[2].path, "c");
    }
}

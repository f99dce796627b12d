//! End-to-end editing scenarios for the undo/redo history.
//!
//! Each module drives an `EditHistory` the way a content editor host would:
//! raw edits from typing, toolbar transforms at a selection, undo and redo.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use markdraft::{EditHistory, HeadingLevel, Selection, TransformKind};
use tracing::{debug, info};

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn entries(edit: &EditHistory) -> Vec<String> {
    edit.history().entries().map(ToString::to_string).collect()
}

// ============================================================================
// Commit / Undo / Redo
// ============================================================================

mod commit_undo_redo {
    use super::*;

    #[test]
    fn undo_after_commit_restores_prior_text() {
        setup_test_logging();
        let mut edit = EditHistory::new("draft");
        let commits: [(&str, Option<(Selection, TransformKind)>); 4] = [
            ("draft v2", None),
            ("", Some((Selection::new(0, 5), TransformKind::WrapBold))),
            ("", Some((Selection::caret(3), TransformKind::BulletList))),
            ("fresh start", None),
        ];

        for (raw, transform) in commits {
            let before = edit.text();
            match transform {
                Some((selection, kind)) => {
                    assert!(edit.apply_transform(selection, &kind).is_some());
                }
                None => edit.apply_raw_edit(raw),
            }
            debug!(before = %before, after = %edit.text(), "committed");
            assert!(edit.undo());
            assert_eq!(edit.text(), before, "undo must restore the exact prior text");
            assert!(edit.redo());
        }
    }

    #[test]
    fn redo_after_undo_round_trips() {
        let mut edit = EditHistory::new("one");
        edit.apply_raw_edit("one two");
        edit.apply_transform(Selection::new(4, 7), &TransformKind::WrapInlineCode);
        let latest = edit.text();
        assert_eq!(latest, "one `two`");

        edit.undo();
        edit.redo();
        assert_eq!(edit.text(), latest);

        edit.undo();
        edit.undo();
        edit.redo();
        edit.redo();
        assert_eq!(edit.text(), latest);
    }

    #[test]
    fn commit_after_undo_discards_redo() {
        let mut edit = EditHistory::new("A");
        edit.apply_raw_edit("B");
        edit.apply_raw_edit("C");
        edit.undo();
        assert_eq!(edit.text(), "B");

        edit.apply_raw_edit("D");
        assert_eq!(entries(&edit), ["A", "B", "D"]);
        assert!(!edit.redo());
        assert_eq!(edit.history().len(), 3);
        assert_eq!(edit.text(), "D");
    }

    #[test]
    fn undo_on_fresh_log_is_noop() {
        let mut edit = EditHistory::new("hello");
        assert!(!edit.can_undo());
        assert!(!edit.undo());
        assert_eq!(edit.text(), "hello");
        assert_eq!(edit.history().len(), 1);
    }

    #[test]
    fn full_scenario() {
        setup_test_logging();
        info!("running the A/AB/ABC scenario");
        let mut edit = EditHistory::new("A");
        edit.apply_raw_edit("AB");
        edit.apply_raw_edit("ABC");

        assert!(edit.undo());
        assert_eq!(edit.text(), "AB");
        assert!(edit.undo());
        assert_eq!(edit.text(), "A");
        assert!(!edit.undo());
        assert_eq!(edit.text(), "A");

        assert!(edit.redo());
        assert_eq!(edit.text(), "AB");

        edit.apply_raw_edit("ABX");
        assert_eq!(entries(&edit), ["A", "AB", "ABX"]);
        assert!(!edit.redo());
        assert_eq!(edit.text(), "ABX");
    }
}

// ============================================================================
// Transforms Through the History
// ============================================================================

mod transforms {
    use super::*;

    #[test]
    fn wrap_with_empty_selection_changes_nothing() {
        let mut edit = EditHistory::new("hello");
        let len = edit.history().len();
        assert_eq!(
            edit.apply_transform(Selection::new(2, 2), &TransformKind::WrapBold),
            None
        );
        assert_eq!(edit.text(), "hello");
        assert_eq!(edit.history().len(), len);
    }

    #[test]
    fn wrap_bold_commits_new_entry() {
        let mut edit = EditHistory::new("hello world");
        edit.apply_transform(Selection::new(6, 11), &TransformKind::WrapBold);
        assert_eq!(edit.text(), "hello **world**");
        assert_eq!(entries(&edit), ["hello world", "hello **world**"]);
    }

    #[test]
    fn heading_prefix_on_second_line() {
        let mut edit = EditHistory::new("first\nsecond");
        edit.apply_transform(
            Selection::caret(9),
            &TransformKind::Heading(HeadingLevel::H1),
        );
        assert_eq!(edit.text(), "first\n# second");
    }

    #[test]
    fn link_with_empty_url_is_noop() {
        let mut edit = EditHistory::new("hello");
        assert_eq!(
            edit.apply_transform(Selection::new(0, 5), &TransformKind::link("", "")),
            None
        );
        assert_eq!(edit.text(), "hello");
        assert_eq!(edit.history().len(), 1);
    }

    #[test]
    fn toolbar_session() {
        let mut edit = EditHistory::new("Summer sale\nAll shoes discounted");
        let h2: TransformKind = "h2".parse().unwrap();
        edit.apply_transform(Selection::caret(0), &h2);
        edit.apply_transform(Selection::new(15, 18), &"bold".parse().unwrap());
        edit.apply_transform(
            Selection::new(23, 28),
            &TransformKind::link("https://shop.example/shoes", ""),
        );
        assert_eq!(
            edit.text(),
            "## Summer sale\n**All** [https://shop.example/shoes](https://shop.example/shoes) discounted"
        );

        // Undo walks back through each toolbar action in order
        edit.undo();
        assert_eq!(edit.text(), "## Summer sale\n**All** shoes discounted");
        edit.undo();
        assert_eq!(edit.text(), "## Summer sale\nAll shoes discounted");
        edit.undo();
        assert_eq!(edit.text(), "Summer sale\nAll shoes discounted");
    }

    #[test]
    fn out_of_range_selection_is_clamped() {
        let mut edit = EditHistory::new("abc");
        edit.apply_transform(Selection::new(1, 50), &TransformKind::WrapItalic);
        assert_eq!(edit.text(), "a*bc*");
    }
}

// ============================================================================
// Host Contract
// ============================================================================

mod host_contract {
    use super::*;

    #[test]
    fn on_change_sees_current_entry_after_every_commit() {
        let mut edit = EditHistory::new("x");
        let last = Rc::new(RefCell::new(String::from("x")));
        let sink = Rc::clone(&last);
        edit.set_on_change(move |value| *sink.borrow_mut() = value.to_string());

        edit.apply_raw_edit("xy");
        assert_eq!(*last.borrow(), edit.text());
        edit.apply_transform(Selection::new(0, 2), &TransformKind::WrapUnderline);
        assert_eq!(*last.borrow(), edit.text());
        edit.undo();
        assert_eq!(*last.borrow(), edit.text());
        edit.redo();
        assert_eq!(*last.borrow(), "<u>xy</u>");
    }

    #[test]
    fn external_reset_reseeds() {
        let mut edit = EditHistory::new("saved post");
        edit.apply_raw_edit("saved post, edited");

        // Host loads a different post into the same editor
        assert!(edit.sync("another post"));
        assert_eq!(entries(&edit), ["another post"]);
        assert!(!edit.can_undo());
        assert!(!edit.can_redo());

        // Same value is not a divergence
        assert!(!edit.sync("another post"));
    }
}

//! Fuzz target for history operation sequences.
//!
//! Drives an EditHistory with arbitrary edits, transforms, undo and redo, and
//! checks the cursor invariant and the undo-after-commit property after each
//! step. Selections are arbitrary, so out-of-range and mid-grapheme offsets
//! are covered too.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use markdraft::{EditHistory, HeadingLevel, Selection, TransformKind};

#[derive(Arbitrary, Debug)]
enum Command {
    Bold,
    Italic,
    Underline,
    Code,
    Heading(u8),
    Bullet,
    Numbered,
    Quote,
    Link(String, String),
    Image(String, String),
}

impl Command {
    fn kind(self) -> TransformKind {
        match self {
            Self::Bold => TransformKind::WrapBold,
            Self::Italic => TransformKind::WrapItalic,
            Self::Underline => TransformKind::WrapUnderline,
            Self::Code => TransformKind::WrapInlineCode,
            Self::Heading(level) => {
                TransformKind::Heading(HeadingLevel::try_from(level % 3 + 1).unwrap_or(HeadingLevel::H1))
            }
            Self::Bullet => TransformKind::BulletList,
            Self::Numbered => TransformKind::NumberedList,
            Self::Quote => TransformKind::Blockquote,
            Self::Link(url, label) => TransformKind::link(url, label),
            Self::Image(url, alt) => TransformKind::image(url, alt),
        }
    }
}

#[derive(Arbitrary, Debug)]
enum Op {
    Raw(String),
    Transform(u16, u16, Command),
    Undo,
    Redo,
    Sync(String),
}

#[derive(Arbitrary, Debug)]
struct Input {
    initial: String,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut edit = EditHistory::new(&input.initial);

    for op in input.ops.into_iter().take(256) {
        let before = edit.text();
        let committed = match op {
            Op::Raw(text) => {
                edit.apply_raw_edit(&text);
                true
            }
            Op::Transform(a, b, command) => edit
                .apply_transform(Selection::new(a.into(), b.into()), &command.kind())
                .is_some(),
            Op::Undo => {
                edit.undo();
                false
            }
            Op::Redo => {
                edit.redo();
                false
            }
            Op::Sync(value) => {
                edit.sync(&value);
                false
            }
        };

        let history = edit.history();
        assert!(history.cursor() < history.len());

        if committed {
            assert!(!edit.can_redo());
            assert!(edit.undo());
            assert_eq!(edit.text(), before);
            assert!(edit.redo());
        }
    }
});

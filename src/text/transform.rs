//! Markdown formatting transforms.
//!
//! A [`TransformKind`] is one toolbar command of the content editor. Applying
//! it to a [`Snapshot`] at a [`Selection`] yields a new snapshot, or `None`
//! when the command has nothing to do:
//!
//! - **Wrap** kinds surround the selected text with markers and need a
//!   non-empty selection.
//! - **Line-prefix** kinds insert a marker at the start of the line holding
//!   the selection start. Applying one twice inserts it twice.
//! - **Insertion** kinds replace the selection with link or image markup and
//!   need a non-empty URL.
//!
//! # Examples
//!
//! ```
//! use markdraft::{Selection, Snapshot, TransformKind};
//!
//! let doc = Snapshot::from_str("hello world");
//! let out = TransformKind::WrapBold
//!     .apply(&doc, Selection::new(6, 11))
//!     .unwrap();
//! assert_eq!(out.snapshot.to_string(), "hello **world**");
//! // The wrapped word stays selected
//! assert_eq!(out.selection, Selection::new(8, 13));
//! ```

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::text::{Selection, Snapshot};

const BOLD: (&str, &str) = ("**", "**");
const ITALIC: (&str, &str) = ("*", "*");
const UNDERLINE: (&str, &str) = ("<u>", "</u>");
const INLINE_CODE: (&str, &str) = ("`", "`");

const BULLET_PREFIX: &str = "- ";
const NUMBERED_PREFIX: &str = "1. ";
const QUOTE_PREFIX: &str = "> ";

/// Heading depth for the heading line-prefix commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Numeric level, 1 to 3.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }

    /// Line prefix written for this level.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::H1 => "# ",
            Self::H2 => "## ",
            Self::H3 => "### ",
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            other => Err(Error::InvalidHeadingLevel(other)),
        }
    }
}

/// Broad behavior class of a transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformCategory {
    Wrap,
    LinePrefix,
    Insertion,
}

/// A formatting command of the content editor toolbar.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransformKind {
    WrapBold,
    WrapItalic,
    WrapUnderline,
    WrapInlineCode,
    Heading(HeadingLevel),
    BulletList,
    NumberedList,
    Blockquote,
    /// `[label](url)`; an empty label falls back to the URL.
    InsertLink { url: String, label: String },
    /// `![alt](url)`; an empty alt text falls back to the URL.
    InsertImage { url: String, alt: String },
}

/// Result of applying a transform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transformed {
    /// The new document text.
    pub snapshot: Snapshot,
    /// Selection the host should restore after the edit.
    pub selection: Selection,
}

impl TransformKind {
    /// Build a link insertion.
    #[must_use]
    pub fn link(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self::InsertLink {
            url: url.into(),
            label: label.into(),
        }
    }

    /// Build an image insertion.
    #[must_use]
    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::InsertImage {
            url: url.into(),
            alt: alt.into(),
        }
    }

    #[must_use]
    pub const fn category(&self) -> TransformCategory {
        match self {
            Self::WrapBold | Self::WrapItalic | Self::WrapUnderline | Self::WrapInlineCode => {
                TransformCategory::Wrap
            }
            Self::Heading(_) | Self::BulletList | Self::NumberedList | Self::Blockquote => {
                TransformCategory::LinePrefix
            }
            Self::InsertLink { .. } | Self::InsertImage { .. } => TransformCategory::Insertion,
        }
    }

    /// Opening and closing markers of a wrap transform.
    #[must_use]
    pub const fn wrap_markers(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::WrapBold => Some(BOLD),
            Self::WrapItalic => Some(ITALIC),
            Self::WrapUnderline => Some(UNDERLINE),
            Self::WrapInlineCode => Some(INLINE_CODE),
            _ => None,
        }
    }

    /// Prefix inserted by a line-prefix transform.
    #[must_use]
    pub const fn line_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Heading(level) => Some(level.prefix()),
            Self::BulletList => Some(BULLET_PREFIX),
            Self::NumberedList => Some(NUMBERED_PREFIX),
            Self::Blockquote => Some(QUOTE_PREFIX),
            _ => None,
        }
    }

    /// Markup written by an insertion transform, `None` when the URL is empty.
    #[must_use]
    pub fn markup(&self) -> Option<String> {
        let (bang, url, text) = match self {
            Self::InsertLink { url, label } => ("", url, label),
            Self::InsertImage { url, alt } => ("!", url, alt),
            _ => return None,
        };
        if url.is_empty() {
            return None;
        }
        let text = if text.is_empty() { url } else { text };
        Some(format!("{bang}[{text}]({url})"))
    }

    /// Apply the transform to `snapshot` at `selection`.
    ///
    /// The selection is clamped to the document first. Returns `None` for a
    /// no-op: a wrap on an empty selection or an insertion without a URL.
    #[must_use]
    pub fn apply(&self, snapshot: &Snapshot, selection: Selection) -> Option<Transformed> {
        let selection = selection.clamp(snapshot.len_chars());
        match self {
            Self::WrapBold | Self::WrapItalic | Self::WrapUnderline | Self::WrapInlineCode => {
                let (open, close) = self.wrap_markers()?;
                wrap(snapshot, selection, open, close)
            }
            Self::Heading(_) | Self::BulletList | Self::NumberedList | Self::Blockquote => {
                let prefix = self.line_prefix()?;
                Some(prefix_line(snapshot, selection, prefix))
            }
            Self::InsertLink { .. } | Self::InsertImage { .. } => {
                let markup = self.markup()?;
                Some(insert(snapshot, selection, &markup))
            }
        }
    }
}

fn wrap(snapshot: &Snapshot, selection: Selection, open: &str, close: &str) -> Option<Transformed> {
    if selection.is_empty() {
        return None;
    }
    let range = snapshot.snap_to_graphemes(selection.range());
    let inner = snapshot.slice_to_string(range.clone());
    let wrapped = format!("{open}{inner}{close}");
    let open_len = open.chars().count();
    Some(Transformed {
        snapshot: snapshot.with_replaced(range.clone(), &wrapped),
        selection: Selection::new(range.start + open_len, range.end + open_len),
    })
}

fn prefix_line(snapshot: &Snapshot, selection: Selection, prefix: &str) -> Transformed {
    let line_start = snapshot.line_start(selection.start());
    Transformed {
        snapshot: snapshot.with_inserted(line_start, prefix),
        selection: selection.shifted(prefix.chars().count()),
    }
}

fn insert(snapshot: &Snapshot, selection: Selection, markup: &str) -> Transformed {
    let range = snapshot.snap_to_graphemes(selection.range());
    let caret = range.start + markup.chars().count();
    Transformed {
        snapshot: snapshot.with_replaced(range, markup),
        selection: Selection::caret(caret),
    }
}

impl FromStr for TransformKind {
    type Err = Error;

    /// Parse a toolbar command id. Link and image commands carry a payload
    /// and are built with [`TransformKind::link`] and [`TransformKind::image`].
    fn from_str(id: &str) -> Result<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "bold" => Ok(Self::WrapBold),
            "italic" => Ok(Self::WrapItalic),
            "underline" => Ok(Self::WrapUnderline),
            "code" | "inline-code" => Ok(Self::WrapInlineCode),
            "h1" => Ok(Self::Heading(HeadingLevel::H1)),
            "h2" => Ok(Self::Heading(HeadingLevel::H2)),
            "h3" => Ok(Self::Heading(HeadingLevel::H3)),
            "list" | "bullet-list" => Ok(Self::BulletList),
            "ordered-list" | "numbered-list" => Ok(Self::NumberedList),
            "quote" | "blockquote" => Ok(Self::Blockquote),
            _ => Err(Error::UnknownCommand(id.to_string())),
        }
    }
}

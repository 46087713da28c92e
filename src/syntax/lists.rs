//! List node payloads and the ordered-list type tag.

use std::fmt;

/// Semantic type of an ordered list.
///
/// The tag drives the HTML `type` attribute, the `fl-*` CSS class and the
/// type-change test that splits adjacent lists, so each of those is derived
/// from here instead of being spelled out at the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListTypeTag {
    #[default]
    Num,
    LcAlpha,
    UcAlpha,
    LcRoman,
    UcRoman,
}

impl ListTypeTag {
    /// Value of the HTML `type` attribute.
    pub fn symbol(self) -> &'static str {
        match self {
            ListTypeTag::Num => "1",
            ListTypeTag::LcAlpha => "a",
            ListTypeTag::UcAlpha => "A",
            ListTypeTag::LcRoman => "i",
            ListTypeTag::UcRoman => "I",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ListTypeTag::Num => "fl-num",
            ListTypeTag::LcAlpha => "fl-lcalpha",
            ListTypeTag::UcAlpha => "fl-ucalpha",
            ListTypeTag::LcRoman => "fl-lcroman",
            ListTypeTag::UcRoman => "fl-ucroman",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "1" => Some(ListTypeTag::Num),
            "a" => Some(ListTypeTag::LcAlpha),
            "A" => Some(ListTypeTag::UcAlpha),
            "i" => Some(ListTypeTag::LcRoman),
            "I" => Some(ListTypeTag::UcRoman),
            _ => None,
        }
    }
}

impl fmt::Display for ListTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Payload of a `LIST` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListContainer {
    /// Bullet character for bullet lists, `.` or `)` for ordered lists.
    pub marker: u8,
    pub start: i64,
    pub is_tight: bool,
}

impl ListContainer {
    pub fn new(marker: u8) -> Self {
        Self {
            marker,
            start: 0,
            is_tight: true,
        }
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self.marker, b'.' | b')')
    }
}

/// Payload of a `LIST_ITEM` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Column where continuation content of this item starts.
    pub offset: usize,
}

impl ListItem {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }
}

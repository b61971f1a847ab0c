use serde::{Deserialize, Serialize};

use crate::letters::{is_arabic_block, is_hebrew_block};

/// Base direction for rendering a string.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn of(text: &str) -> TextDirection {
        if is_rtl(text) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

/// True if any character falls in the Hebrew or Arabic block.
pub fn is_rtl(text: &str) -> bool {
    text.chars().any(|c| is_hebrew_block(c) || is_arabic_block(c))
}

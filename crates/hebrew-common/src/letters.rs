//! Code point classification for the Hebrew Unicode block.

/// Sof pasuq, the verse-ending mark.
pub const SOF_PASUQ: char = '\u{05C3}';

/// Paseq, the vertical phrase separator.
pub const PASEQ: char = '\u{05C0}';

/// Maqaf, the Hebrew hyphen. Joins words; never a split point.
pub const MAQAF: char = '\u{05BE}';

/// Numeric value of a consonantal letter. Final forms share the value of their base letter.
pub fn letter_value(c: char) -> Option<u32> {
    let value = match c {
        'א' => 1,
        'ב' => 2,
        'ג' => 3,
        'ד' => 4,
        'ה' => 5,
        'ו' => 6,
        'ז' => 7,
        'ח' => 8,
        'ט' => 9,
        'י' => 10,
        'כ' | 'ך' => 20,
        'ל' => 30,
        'מ' | 'ם' => 40,
        'נ' | 'ן' => 50,
        'ס' => 60,
        'ע' => 70,
        'פ' | 'ף' => 80,
        'צ' | 'ץ' => 90,
        'ק' => 100,
        'ר' => 200,
        'ש' => 300,
        'ת' => 400,
        _ => return None,
    };
    Some(value)
}

/// Vowel points and cantillation marks. These attach to a preceding letter
/// but are separate code points.
pub fn is_point(c: char) -> bool {
    matches!(c as u32,
        0x0591..=0x05BD |
        0x05BF..=0x05C2 |
        0x05C4..=0x05C5 |
        0x05C7
    )
}

/// One of the 27 consonantal code points (22 letters plus 5 final forms).
pub fn is_consonant(c: char) -> bool {
    ('\u{05D0}'..='\u{05EA}').contains(&c)
}

/// Byte order mark. Pasted lesson texts carry it between words as well as at the start.
pub const BOM: char = '\u{FEFF}';

/// Boundary between words: Unicode whitespace or a stray BOM.
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || c == BOM
}

/// Sof pasuq or paseq.
pub fn is_major_punctuation(c: char) -> bool {
    c == SOF_PASUQ || c == PASEQ
}

/// Hebrew block, U+0590..U+05FF.
pub fn is_hebrew_block(c: char) -> bool {
    ('\u{0590}'..='\u{05FF}').contains(&c)
}

/// Arabic block, U+0600..U+06FF.
pub fn is_arabic_block(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

//! Swedish collation for activity titles.
//!
//! Three levels: letters (with `å ä ö` after `z`), then accents, then case
//! with lowercase first.

use std::cmp::Ordering;

const LETTER_BASE: u32 = 0x1000;
const OTHER_LETTER_BASE: u32 = 0x2000;
const DIGIT_BASE: u32 = 0x800;

/// Compare two strings in Swedish alphabetical order.
pub fn compare_sv(a: &str, b: &str) -> Ordering {
    let ka = SortKey::new(a);
    let kb = SortKey::new(b);
    ka.primary
        .cmp(&kb.primary)
        .then_with(|| ka.secondary.cmp(&kb.secondary))
        .then_with(|| ka.tertiary.cmp(&kb.tertiary))
}

struct SortKey {
    primary: Vec<u32>,
    secondary: Vec<u8>,
    tertiary: Vec<u8>,
}

impl SortKey {
    fn new(s: &str) -> Self {
        let mut key = SortKey {
            primary: Vec::with_capacity(s.len()),
            secondary: Vec::with_capacity(s.len()),
            tertiary: Vec::with_capacity(s.len()),
        };
        for c in s.chars() {
            let lower = c.to_lowercase().next().unwrap_or(c);
            let (base, accent) = fold(lower);
            key.primary.push(primary_weight(base));
            key.secondary.push(accent);
            key.tertiary.push(u8::from(c != lower));
        }
        key
    }
}

/// Map a lowercase character to its base letter and an accent rank.
fn fold(c: char) -> (char, u8) {
    match c {
        'à' | 'á' | 'â' | 'ã' => ('a', 1),
        'ç' => ('c', 1),
        'è' | 'é' | 'ê' | 'ë' => ('e', 1),
        'ì' | 'í' | 'î' | 'ï' => ('i', 1),
        'ñ' => ('n', 1),
        'ò' | 'ó' | 'ô' | 'õ' => ('o', 1),
        'ù' | 'ú' | 'û' => ('u', 1),
        // Swedish files ü under y
        'ü' | 'ý' | 'ÿ' => ('y', 1),
        'æ' => ('ä', 1),
        'ø' => ('ö', 1),
        _ => (c, 0),
    }
}

fn primary_weight(c: char) -> u32 {
    match c {
        'a'..='z' => LETTER_BASE + (c as u32 - 'a' as u32),
        'å' => LETTER_BASE + 26,
        'ä' => LETTER_BASE + 27,
        'ö' => LETTER_BASE + 28,
        '0'..='9' => DIGIT_BASE + (c as u32 - '0' as u32),
        c if c.is_alphabetic() => OTHER_LETTER_BASE + c as u32,
        // whitespace and punctuation sort before digits and letters
        c => (c as u32).min(DIGIT_BASE - 1),
    }
}

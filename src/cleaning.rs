//! Field-cleaning helpers applied to raw catalog cells.
//!
//! The source CSV is hand-maintained and noisy: cells carry inline citation
//! markers like `[cite: 12]` and prices are sometimes written with
//! Arabic-Indic digits or a `,` decimal separator.

use once_cell::sync::Lazy;
use regex::Regex;

static CITATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\[cite:\s*[^\]]+\]\s*").unwrap());

static PRICE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-+]?\d+(?:[.,]\d+)?").unwrap());

const ARABIC_INDIC_ZERO: char = '٠';
const ARABIC_INDIC_NINE: char = '٩';

/// Removes every inline `[cite: ...]` marker together with the whitespace
/// around it. Idempotent; leaves all other text untouched.
pub fn strip_citations(text: &str) -> String {
    CITATION_RE.replace_all(text, "").into_owned()
}

/// Translates Arabic-Indic digit glyphs (U+0660..U+0669) to ASCII digits.
/// All other characters, ASCII digits included, pass through unchanged.
pub fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ARABIC_INDIC_ZERO..=ARABIC_INDIC_NINE => {
                char::from(b'0' + (c as u32 - ARABIC_INDIC_ZERO as u32) as u8)
            }
            _ => c,
        })
        .collect()
}

/// Extracts a price from a noisy cell, falling back to `0.0` when no number
/// can be found. Unparseable cells are a data-entry fact of life here, not an
/// error condition.
///
/// Known limitation carried over from the data's conventions: `,` is always
/// read as a decimal separator, so `"1,234"` parses as `1.234`, not `1234`.
pub fn clean_price(raw: &str) -> f64 {
    let cleaned = normalize_digits(&strip_citations(raw));
    let cleaned = cleaned.trim();

    match PRICE_RE.find(cleaned) {
        Some(m) => m.as_str().replace(',', ".").parse().unwrap_or(0.0),
        None => 0.0,
    }
}
